pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod properties;

use dioxus::prelude::*;

use dashboard::{AdminDashboard, UserDashboard};
use login::Login;
use not_found::NotFound;

/// Application routes. The dashboard shells are layout components: they run
/// the identity fetch and role gates before their nested content renders.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/properties/:id")]
    PropertyDetail { id: String },
    #[layout(UserDashboard)]
    #[route("/dashboard")]
    UserOverview {},
    #[end_layout]
    #[layout(AdminDashboard)]
    #[route("/admin")]
    AdminProperties {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// The bare root only ever forwards to the user dashboard.
#[component]
fn Home() -> Element {
    navigator().replace(Route::UserOverview {});
    rsx! {
        div { class: "redirect-placeholder",
            p { "Redirecting..." }
        }
    }
}

#[component]
fn UserOverview() -> Element {
    dashboard::overview::UserOverviewPage()
}

#[component]
fn AdminProperties() -> Element {
    properties::manage::PropertiesManagePage()
}

#[component]
fn PropertyDetail(id: String) -> Element {
    rsx! { properties::detail::PropertyDetailPage { id: id } }
}
