use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, Separator};

use crate::auth::use_auth;

/// Landing view inside the user dashboard shell. The shell guarantees an
/// authenticated identity is in `AuthState` before this renders.
#[component]
pub fn UserOverviewPage() -> Element {
    let auth = use_auth();
    let binding = auth.current_user.read();
    let Some(user) = binding.as_ref() else {
        return rsx! {
            div { class: "redirect-placeholder",
                p { "Loading your profile..." }
            }
        };
    };

    let role_variant = if user.is_admin() {
        BadgeVariant::Destructive
    } else {
        BadgeVariant::Secondary
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "My Dashboard" }
            }
            CardContent {
                div { class: "profile-row",
                    span { class: "profile-label", "Name" }
                    span { "{user.name}" }
                }
                Separator {}
                div { class: "profile-row",
                    span { class: "profile-label", "Email" }
                    span { "{user.email}" }
                }
                Separator {}
                div { class: "profile-row",
                    span { class: "profile-label", "Role" }
                    Badge { variant: role_variant, "{user.role}" }
                }
            }
        }
    }
}
