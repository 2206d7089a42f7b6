use dioxus::prelude::*;

/// Thin rule between content sections.
#[component]
pub fn Separator(#[props(default = true)] horizontal: bool) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: if horizontal { "separator horizontal" } else { "separator vertical" },
        }
    }
}
