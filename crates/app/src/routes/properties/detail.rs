use api_client::PropertyServiceClient;
use chrono::Utc;
use dioxus::prelude::*;
use shared_types::ListingStatus;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    Separator, Skeleton,
};

use crate::format_helpers::{format_price, format_relative_time};
use crate::routes::Route;

/// Read-only view of a single listing, linked from the table's view action.
#[component]
pub fn PropertyDetailPage(id: String) -> Element {
    let client = use_context::<PropertyServiceClient>();

    let property_id = id.clone();
    let mut data = use_resource(move || {
        let client = client.clone();
        let id = property_id.clone();
        async move { client.get_property(&id).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./detail.css") }

        div { class: "container detail-page",
            match data.read().as_ref() {
                None => rsx! {
                    Skeleton { style: "height: 14rem;" }
                    Skeleton { style: "height: 2rem; width: 50%; margin-top: 1rem;" }
                },
                Some(Err(err)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "detail-error", "Could not load this property." }
                            p { class: "detail-error-detail", "{err}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| data.restart(),
                                "Retry"
                            }
                        }
                    }
                },
                Some(Ok(property)) => {
                    let price = format_price(property.price);
                    let added = format_relative_time(property.created_at, Utc::now());
                    let type_label = property.property_type.label();
                    let status_label = property.status.label();
                    let status_variant = match property.status {
                        ListingStatus::Sale => BadgeVariant::Primary,
                        ListingStatus::Rent => BadgeVariant::Success,
                    };
                    let cover = property.images.first().cloned();

                    rsx! {
                        Card {
                            if let Some(src) = cover {
                                img { class: "detail-cover", src: "{src}", alt: "{property.title}" }
                            }
                            CardHeader {
                                CardTitle { "{property.title}" }
                                div { class: "detail-badges",
                                    Badge { variant: BadgeVariant::Outline, "{type_label}" }
                                    Badge { variant: status_variant, "{status_label}" }
                                }
                            }
                            CardContent {
                                p { class: "detail-price", "{price}" }
                                Separator {}
                                div { class: "detail-meta",
                                    span { "{property.location.city}" }
                                    span { "Added {added}" }
                                    span { "{property.views} views" }
                                }
                                Separator {}
                                Link { to: Route::UserOverview {},
                                    Button { variant: ButtonVariant::Secondary, "Back to Dashboard" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
