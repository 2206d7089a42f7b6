use api_client::PropertyServiceClient;
use dioxus::prelude::*;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
};

use crate::auth::use_auth;
use crate::routes::Route;

/// Thin sign-in page. Credential handling is owned by the external identity
/// service; this page only exchanges a form for a session and routes onward.
/// Accepts an optional `redirect` query param so a dashboard shell that
/// bounced an unauthenticated visitor can send them back where they started.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let client = use_context::<PropertyServiceClient>();
    let mut auth = use_auth();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let redirect_target = use_signal(move || redirect);

    let handle_login = move |_: MouseEvent| {
        if *loading.peek() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            match client.login(&email.peek().clone(), &password.peek().clone()).await {
                Ok(user) => {
                    let is_admin = user.is_admin();
                    auth.set_user(user);
                    if let Some(path) = redirect_target.peek().clone() {
                        navigator().push(NavigationTarget::<Route>::External(path));
                    } else if is_admin {
                        navigator().push(Route::AdminProperties {});
                    } else {
                        navigator().push(Route::UserOverview {});
                    }
                }
                Err(err) => {
                    error_msg.set(Some(err.message));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your dashboard" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    div { class: "auth-form",
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email.read().clone(),
                            placeholder: "you@example.com",
                            on_input: move |evt: FormEvent| email.set(evt.value().to_string()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password.read().clone(),
                            on_input: move |evt: FormEvent| password.set(evt.value().to_string()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: *loading.read(),
                            onclick: handle_login,
                            if *loading.read() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
