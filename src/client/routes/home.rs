use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGithub;
use dioxus_free_icons::icons::fa_solid_icons::FaPaw;
use dioxus_free_icons::Icon;

use crate::client::{
    components::{title::APP_NAME, Page},
    router::Route,
    store::use_api,
};

#[component]
pub fn HomeActions() -> Element {
    let api = use_api();
    let is_logged_in = api.session().read().is_logged_in();

    rsx!(
        ul { class: "flex gap-2",
            li {
                Link {
                    to: Route::Pets {},
                    class: "btn btn-primary w-36",
                    "Browse pets"
                }
            }
            if !is_logged_in {
                li {
                    Link {
                        to: Route::Signup {},
                        class: "btn btn-secondary w-36",
                        "Create account"
                    }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    let repository = env!("CARGO_PKG_REPOSITORY");

    rsx!(
        Title { "{APP_NAME}" }
        Meta {
            name: "description",
            content: "Find a dog or cat to adopt and apply online."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    Icon {
                        width: 32,
                        height: 32,
                        icon: FaPaw
                    }
                    p { class: "text-2xl",
                        "{APP_NAME}"
                    }
                }
                div {
                    HomeActions { }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256",
                    p { class: "font-bold text-center",
                        "Every pet here is waiting for a home."
                    }
                    p {
                        "Browse the dogs and cats in our care, narrow the list down by species, breed, gender, or age, and open a pet's page to learn more about them."
                    }
                    p {
                        "When you find a match, send an adoption application straight from the pet's page. Our team reviews every application and will reach out by email."
                    }
                }
                a { href: "{repository}",
                    button {
                        class: "btn btn-outline w-48 flex gap-2",
                        Icon {
                            width: 24,
                            height: 24,
                            icon: FaGithub
                        }
                        p {
                            "Source"
                        }
                    }
                }
            }
        }
    )
}
