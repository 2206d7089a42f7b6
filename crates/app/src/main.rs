use api_client::{PropertyServiceClient, QueryCache};
use dioxus::prelude::*;

mod auth;
mod components;
mod format_helpers;
mod routes;
mod selection;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Base URL of the remote property service. Same-origin `/api` unless
/// overridden at build time.
fn api_base_url() -> String {
    option_env!("CLICKPROP_API_BASE").unwrap_or("/api").to_string()
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Injected service client and query cache — components reach both through
    // context, so tests can stand in their own instances.
    use_context_provider(|| PropertyServiceClient::new(api_base_url()));
    use_context_provider(QueryCache::new);
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
