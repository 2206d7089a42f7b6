use api_client::{PropertyServiceClient, QueryCache};
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBuilding2, LdCheck, LdPencil, LdPlus, LdSearch, LdTrash2, LdX,
};
use dioxus_free_icons::Icon;
use shared_types::{ListingStatus, Property, PropertyFilter, PropertyType, ALL_PROPERTY_TYPES};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, CardHeader, CardTitle, Checkbox, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, FormSelect, Input, SearchBar,
    Skeleton, ToastOptions,
};

use crate::format_helpers::{format_price, format_relative_time};
use crate::routes::Route;
use crate::selection::RowSelection;

/// Admin table of all listed properties: submit-gated text search, two
/// immediate-commit filter selects, row selection with bulk notify, and
/// per-row view/edit/delete actions with a confirm gate on delete.
#[component]
pub fn PropertiesManagePage() -> Element {
    let client = use_context::<PropertyServiceClient>();
    let cache = use_context::<QueryCache>();
    let toast = use_toast();

    // The text query only commits on Search; selects commit on change.
    let mut search_input = use_signal(String::new);
    let mut search_query = use_signal(String::new);
    let mut type_filter: Signal<Option<PropertyType>> = use_signal(|| None);
    let mut status_filter: Signal<Option<ListingStatus>> = use_signal(|| None);

    let mut selection = use_signal(RowSelection::new);
    let mut pending_delete: Signal<Option<Property>> = use_signal(|| None);
    let mut deleting = use_signal(|| false);
    let mut notifying = use_signal(|| false);

    let list_client = client.clone();
    let list_cache = cache.clone();
    let mut properties = use_resource(move || {
        let client = list_client.clone();
        let cache = list_cache.clone();
        let q = search_query.read().clone();
        let filter = PropertyFilter {
            query: if q.is_empty() { None } else { Some(q) },
            property_type: *type_filter.read(),
            status: *status_filter.read(),
        };
        async move { client.list_properties_cached(&cache, &filter).await }
    });

    // After every successful refetch, drop selected ids that are no longer
    // visible (deleted remotely or filtered out).
    use_effect(move || {
        if let Some(Ok(list)) = properties.read().as_ref() {
            let visible: Vec<String> = list.iter().map(|p| p.id.clone()).collect();
            let stale = selection.peek().ids().iter().any(|id| !visible.contains(id));
            if stale {
                selection.write().retain_visible(&visible);
            }
        }
    });

    let handle_search = move |_: MouseEvent| {
        search_query.set(search_input.read().clone());
    };

    let handle_clear_filters = move |_: MouseEvent| {
        search_input.set(String::new());
        search_query.set(String::new());
        type_filter.set(None);
        status_filter.set(None);
    };

    let notify_client = client.clone();
    let handle_notify = move |_: MouseEvent| {
        // Guard against double submission while a notify is in flight; the
        // empty-selection case is unreachable through the UI (button hidden)
        // but cheap to keep watertight here too.
        if *notifying.peek() || selection.peek().is_empty() {
            return;
        }
        let client = notify_client.clone();
        let ids = selection.peek().ids();
        spawn(async move {
            notifying.set(true);
            match client.notify_users(&ids).await {
                Ok(resp) => {
                    toast.success(
                        format!("Notified {} users about new properties", resp.count()),
                        ToastOptions::new(),
                    );
                    selection.write().clear();
                }
                Err(err) => {
                    tracing::warn!(%err, "bulk notify failed");
                    toast.error(
                        "Failed to send notifications".to_string(),
                        ToastOptions::new(),
                    );
                }
            }
            notifying.set(false);
        });
    };

    let delete_client = client.clone();
    let delete_cache = cache.clone();
    let confirm_delete = move |_: MouseEvent| {
        if *deleting.peek() {
            return;
        }
        let Some(property) = pending_delete.peek().clone() else {
            return;
        };
        let client = delete_client.clone();
        let cache = delete_cache.clone();
        spawn(async move {
            deleting.set(true);
            match client.delete_property(&property.id).await {
                Ok(()) => {
                    toast.success(
                        "Property deleted successfully".to_string(),
                        ToastOptions::new(),
                    );
                    selection.write().remove(&property.id);
                    // The displayed list is never mutated locally; invalidate
                    // and refetch instead.
                    cache.invalidate_prefix("properties");
                    properties.restart();
                }
                Err(err) => {
                    tracing::warn!(%err, "property delete failed");
                    toast.error("Failed to delete property".to_string(), ToastOptions::new());
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let selection_count = selection.read().len();
    let is_notifying = *notifying.read();
    let has_filters = !search_query.read().is_empty()
        || type_filter.read().is_some()
        || status_filter.read().is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./manage.css") }

        Card {
            CardHeader {
                CardTitle { "Properties Management" }
                // Listing creation happens on the public site; affordance only.
                Button { variant: ButtonVariant::Primary, disabled: true,
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "Add Property"
                }
            }
            CardContent {
                SearchBar {
                    Input {
                        value: search_input.read().clone(),
                        placeholder: "Search by location or title",
                        label: "",
                        on_input: move |evt: FormEvent| search_input.set(evt.value().to_string()),
                    }
                    Button { variant: ButtonVariant::Outline, onclick: handle_search,
                        Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                        "Search"
                    }
                    FormSelect {
                        value: type_filter.read().map(|t| t.as_str()).unwrap_or("all").to_string(),
                        onchange: move |evt: Event<FormData>| {
                            type_filter.set(PropertyType::parse(&evt.value()));
                        },
                        option { value: "all", "All Types" }
                        for t in ALL_PROPERTY_TYPES {
                            option { value: t.as_str(), {t.label()} }
                        }
                    }
                    FormSelect {
                        value: status_filter.read().map(|s| s.as_str()).unwrap_or("all").to_string(),
                        onchange: move |evt: Event<FormData>| {
                            status_filter.set(ListingStatus::parse(&evt.value()));
                        },
                        option { value: "all", "All Status" }
                        option { value: "sale", "For Sale" }
                        option { value: "rent", "For Rent" }
                    }
                    if has_filters {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: handle_clear_filters,
                            "Clear"
                        }
                    }
                }

                if selection_count > 0 {
                    div { class: "bulk-bar",
                        div { class: "bulk-bar-summary",
                            Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 }
                            span { "{selection_count} properties selected" }
                        }
                        div { class: "bulk-bar-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: is_notifying,
                                onclick: handle_notify,
                                Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
                                if is_notifying { "Sending..." } else { "Notify Users" }
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| selection.write().clear(),
                                Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                                "Clear"
                            }
                        }
                    }
                }

                match properties.read().as_ref() {
                    None => rsx! {
                        div { class: "loading",
                            Skeleton {}
                            Skeleton {}
                            Skeleton {}
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "list-error",
                            p { class: "list-error-title", "Error loading properties" }
                            p { class: "list-error-detail", "{err}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| properties.restart(),
                                "Retry"
                            }
                        }
                    },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        div { class: "empty-state",
                            Icon::<LdBuilding2> { icon: LdBuilding2, width: 40, height: 40 }
                            h3 { "No properties found" }
                            p { "Try adjusting your search filters or add a new property." }
                        }
                    },
                    Some(Ok(list)) => rsx! {
                        PropertyTable {
                            properties: list.clone(),
                            selection: selection,
                            on_request_delete: move |property: Property| pending_delete.set(Some(property)),
                        }
                    },
                }
            }
        }

        AlertDialogRoot {
            open: pending_delete.read().is_some(),
            on_open_change: move |open: bool| {
                if !open && !*deleting.peek() {
                    pending_delete.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Are you sure?" }
                AlertDialogDescription {
                    "This action cannot be undone. This will permanently delete the property."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: confirm_delete,
                        if *deleting.read() { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}

#[component]
fn PropertyTable(
    properties: Vec<Property>,
    selection: Signal<RowSelection>,
    on_request_delete: EventHandler<Property>,
) -> Element {
    let mut selection = selection;
    let visible_ids: Vec<String> = properties.iter().map(|p| p.id.clone()).collect();
    let all_checked = selection.read().all_selected(visible_ids.len());

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn {
                    Checkbox {
                        checked: all_checked,
                        on_change: move |_| selection.write().select_all(&visible_ids),
                    }
                }
                DataTableColumn { "Property" }
                DataTableColumn { "Type" }
                DataTableColumn { "Status" }
                DataTableColumn { "Price" }
                DataTableColumn { "Location" }
                DataTableColumn { "Added" }
                DataTableColumn { "Views" }
                DataTableColumn { class: "actions-col", "Actions" }
            }
            DataTableBody {
                for property in properties {
                    PropertyRow {
                        key: "{property.id}",
                        property: property.clone(),
                        selection: selection,
                        on_request_delete: on_request_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn PropertyRow(
    property: Property,
    selection: Signal<RowSelection>,
    on_request_delete: EventHandler<Property>,
) -> Element {
    let mut selection = selection;
    let checked = selection.read().contains(&property.id);
    let type_label = property.property_type.label();
    let status_label = property.status.label();
    let status_variant = match property.status {
        ListingStatus::Sale => BadgeVariant::Primary,
        ListingStatus::Rent => BadgeVariant::Success,
    };
    let price = format_price(property.price);
    let added = format_relative_time(property.created_at, Utc::now());
    let thumbnail = property.images.first().cloned();
    let toggle_id = property.id.clone();
    let detail_id = property.id.clone();
    let property_for_delete = property.clone();

    rsx! {
        DataTableRow {
            DataTableCell {
                Checkbox {
                    checked: checked,
                    on_change: move |_| selection.write().toggle(&toggle_id),
                }
            }
            DataTableCell {
                div { class: "property-cell",
                    if let Some(src) = thumbnail {
                        img { class: "property-thumb", src: "{src}", alt: "{property.title}" }
                    } else {
                        div { class: "property-thumb placeholder",
                            Icon::<LdBuilding2> { icon: LdBuilding2, width: 20, height: 20 }
                        }
                    }
                    span { class: "property-title", title: "{property.title}", "{property.title}" }
                }
            }
            DataTableCell {
                Badge { variant: BadgeVariant::Outline, "{type_label}" }
            }
            DataTableCell {
                Badge { variant: status_variant, "{status_label}" }
            }
            DataTableCell { "{price}" }
            DataTableCell { "{property.location.city}" }
            DataTableCell { "{added}" }
            DataTableCell { "{property.views}" }
            DataTableCell {
                div { class: "row-actions",
                    Link { to: Route::PropertyDetail { id: detail_id.clone() },
                        Button { variant: ButtonVariant::Outline,
                            Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                        }
                    }
                    // Edit is a placeholder affordance; the flow is not built.
                    Button { variant: ButtonVariant::Outline, disabled: true,
                        Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "row-delete",
                        onclick: move |_| on_request_delete.call(property_for_delete.clone()),
                        Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
