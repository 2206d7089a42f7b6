pub mod overview;

use api_client::PropertyServiceClient;
use dioxus::prelude::*;
use shared_ui::{use_toast, Skeleton, ToastOptions};

use crate::auth::use_auth;
use crate::components::sidebar::{AdminSidebar, UserSidebar};
use crate::routes::Route;

/// Admin dashboard shell: one-shot identity fetch, auth + role gate, then a
/// fixed sidebar beside the nested content region.
///
/// While the fetch is pending a skeleton with the final 1:4 column split
/// renders, so a successful resolution causes no layout shift. A missing or
/// failed identity redirects to login with the originating location preserved;
/// a non-admin identity is bounced to the user dashboard with a denial toast.
/// The sidebar and content never render in either redirect case.
#[component]
pub fn AdminDashboard() -> Element {
    let client = use_context::<PropertyServiceClient>();
    let mut auth = use_auth();
    let toast = use_toast();

    let identity = use_resource(move || {
        let client = client.clone();
        async move { client.get_current_user().await }
    });

    // Redirects and toasts are side effects; keep them out of the render pass.
    use_effect(move || {
        match identity.read().as_ref() {
            Some(Err(_)) => {
                toast.error(
                    "Please log in to access the admin dashboard.".to_string(),
                    ToastOptions::new(),
                );
                navigator().replace(Route::Login {
                    redirect: Some("/admin".to_string()),
                });
            }
            Some(Ok(user)) if !user.is_admin() => {
                toast.error(
                    "You do not have permission to access the admin dashboard.".to_string(),
                    ToastOptions::new(),
                );
                navigator().replace(Route::UserOverview {});
            }
            Some(Ok(user)) => {
                if !auth.is_authenticated() {
                    auth.set_user(user.clone());
                }
            }
            None => {}
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            match identity.read().as_ref() {
                Some(Ok(user)) if user.is_admin() => rsx! {
                    div { class: "dashboard-grid admin",
                        aside { class: "dashboard-sidebar", AdminSidebar {} }
                        main { class: "dashboard-content", Outlet::<Route> {} }
                    }
                },
                None => rsx! { ShellSkeleton { admin: true } },
                Some(_) => rsx! {
                    div { class: "redirect-placeholder",
                        p { "Redirecting..." }
                    }
                },
            }
        }
    }
}

/// User dashboard shell: same identity fetch and login gate as the admin
/// shell, but no role requirement and a 1:3 column split.
#[component]
pub fn UserDashboard() -> Element {
    let client = use_context::<PropertyServiceClient>();
    let mut auth = use_auth();
    let toast = use_toast();

    let identity = use_resource(move || {
        let client = client.clone();
        async move { client.get_current_user().await }
    });

    use_effect(move || {
        match identity.read().as_ref() {
            Some(Err(_)) => {
                toast.error(
                    "Please log in to access the dashboard.".to_string(),
                    ToastOptions::new(),
                );
                navigator().replace(Route::Login {
                    redirect: Some("/dashboard".to_string()),
                });
            }
            Some(Ok(user)) => {
                if !auth.is_authenticated() {
                    auth.set_user(user.clone());
                }
            }
            None => {}
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            match identity.read().as_ref() {
                Some(Ok(_)) => rsx! {
                    div { class: "dashboard-grid user",
                        aside { class: "dashboard-sidebar", UserSidebar {} }
                        main { class: "dashboard-content", Outlet::<Route> {} }
                    }
                },
                None => rsx! { ShellSkeleton { admin: false } },
                Some(Err(_)) => rsx! {
                    div { class: "redirect-placeholder",
                        p { "Redirecting..." }
                    }
                },
            }
        }
    }
}

/// Placeholder layout shown while the identity fetch is pending. Mirrors the
/// grid proportions of the resolved shell.
#[component]
fn ShellSkeleton(admin: bool) -> Element {
    rsx! {
        div { class: if admin { "dashboard-grid admin" } else { "dashboard-grid user" },
            aside { class: "dashboard-sidebar",
                Skeleton { style: "height: 600px;" }
            }
            main { class: "dashboard-content",
                Skeleton { style: "height: 3rem; width: 12rem; margin-bottom: 1rem;" }
                Skeleton { style: "height: 600px;" }
            }
        }
    }
}
