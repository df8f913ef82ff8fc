use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::use_api};

/// Dashboard frame. Only administrators get the nested routes.
#[component]
pub fn AdminLayout() -> Element {
    let api = use_api();
    let flags = api.session().read().flags();

    if !flags.is_admin {
        let hint = if flags.is_logged_in {
            "Your account does not have access to the dashboard."
        } else {
            "Log in with an administrator account to manage pets and applications."
        };

        return rsx!(
            Title { "Dashboard | Paws & Tails" }
            Page { class: "flex items-center justify-center",
                div { class: "card shadow-sm w-full max-w-96",
                    div { class: "card-body items-center text-center",
                        h2 { class: "card-title", "Administrators only" }
                        p { "{hint}" }
                        if !flags.is_logged_in {
                            div { class: "card-actions",
                                Link { to: Route::Login {}, class: "btn btn-primary", "Login" }
                            }
                        }
                    }
                }
            }
        );
    }

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                div { role: "tablist", class: "tabs tabs-box",
                    Link {
                        to: Route::AdminPets {},
                        class: "tab",
                        active_class: "tab-active",
                        "Pets"
                    }
                    Link {
                        to: Route::AdminApplications {},
                        class: "tab",
                        active_class: "tab-active",
                        "Applications"
                    }
                }
                Outlet::<Route> {}
            }
        }
    )
}
