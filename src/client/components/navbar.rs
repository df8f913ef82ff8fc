use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{components::PawsTitleButton, router::Route, store::use_api};

#[component]
pub fn Navbar() -> Element {
    let api = use_api();
    let mut session = api.session();
    let navigator = use_navigator();

    let (is_admin, user_name) = {
        let session = session.read();
        (session.is_admin(), session.user().map(|user| user.display_name()))
    };

    let logout = move |_: MouseEvent| {
        if let Err(e) = session.write().logout() {
            tracing::warn!("Logged out, but the stored session could not be cleared: {}", e);
        }
        navigator.push(Route::Home {});
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start gap-4",
                PawsTitleButton {}
                ul { class: "menu menu-horizontal px-1",
                    li { Link { to: Route::Pets {}, "Pets" } }
                    if is_admin {
                        li { Link { to: Route::AdminPets {}, "Manage Pets" } }
                        li { Link { to: Route::AdminApplications {}, "Applications" } }
                    }
                }
            }
            div {
                class: "navbar-end gap-2",
                if let Some(name) = user_name {
                    p { class: "text-sm", "{name}" }
                    button {
                        class: "btn btn-outline",
                        onclick: logout,
                        "Logout"
                    }
                } else {
                    Link { to: Route::Login {}, class: "btn btn-ghost", "Login" }
                    Link { to: Route::Signup {}, class: "btn btn-primary", "Sign up" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
