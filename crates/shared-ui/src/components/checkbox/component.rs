use dioxus::prelude::*;

/// A themed native checkbox.
///
/// Controlled: the parent owns `checked` and receives the new value through
/// `on_change`. Wraps the native input the same way `FormSelect` wraps a
/// native `<select>` — a primitive-backed checkbox is overkill for row
/// selection, and the native element keeps select-all updates in sync.
#[component]
pub fn Checkbox(
    #[props(default = false)] checked: bool,
    #[props(default)] on_change: EventHandler<bool>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "checkbox", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "checkbox",
            checked: checked,
            disabled: disabled,
            onchange: move |evt: FormEvent| on_change.call(evt.checked()),
            ..merged,
        }
    }
}
