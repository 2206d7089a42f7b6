use api_client::PropertyServiceClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBuilding2, LdLayoutDashboard, LdLogOut};
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, Separator};

use crate::auth::{use_auth, use_is_admin};
use crate::routes::Route;

/// Fixed navigation column for the admin dashboard shell.
#[component]
pub fn AdminSidebar() -> Element {
    rsx! {
        Card {
            CardContent {
                nav { class: "sidebar-nav",
                    SidebarLink {
                        to: Route::AdminProperties {},
                        active: true,
                        icon: rsx! { Icon::<LdBuilding2> { icon: LdBuilding2, width: 16, height: 16 } },
                        label: "Properties",
                    }
                    SidebarLink {
                        to: Route::UserOverview {},
                        active: false,
                        icon: rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 } },
                        label: "User Dashboard",
                    }
                }
                Separator {}
                SignOutButton {}
            }
        }
    }
}

/// Fixed navigation column for the user dashboard shell.
#[component]
pub fn UserSidebar() -> Element {
    let is_admin = use_is_admin();

    rsx! {
        Card {
            CardContent {
                nav { class: "sidebar-nav",
                    SidebarLink {
                        to: Route::UserOverview {},
                        active: true,
                        icon: rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 } },
                        label: "Overview",
                    }
                    if is_admin {
                        SidebarLink {
                            to: Route::AdminProperties {},
                            active: false,
                            icon: rsx! { Icon::<LdBuilding2> { icon: LdBuilding2, width: 16, height: 16 } },
                            label: "Admin Panel",
                        }
                    }
                }
                Separator {}
                SignOutButton {}
            }
        }
    }
}

#[component]
fn SidebarLink(to: Route, active: bool, icon: Element, label: String) -> Element {
    rsx! {
        Link { to: to,
            span {
                class: if active { "sidebar-link active" } else { "sidebar-link" },
                {icon}
                "{label}"
            }
        }
    }
}

/// Ends the session remotely, clears local auth state, returns to login.
#[component]
fn SignOutButton() -> Element {
    let client = use_context::<PropertyServiceClient>();
    let mut auth = use_auth();

    rsx! {
        button {
            class: "sidebar-link sidebar-signout",
            onclick: move |_| {
                let client = client.clone();
                spawn(async move {
                    let _ = client.logout().await;
                });
                auth.clear_auth();
                navigator().push(Route::Login { redirect: None });
            },
            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
            "Sign Out"
        }
    }
}
