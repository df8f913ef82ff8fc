use dioxus::prelude::*;

use crate::{client::router::Route, model::pet::PetDto};

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300?text=No+photo";

#[component]
pub fn PetCard(pet: PetDto) -> Element {
    let image = pet
        .image_url
        .clone()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let name = pet.name.clone();
    let breed = pet.breed.clone().unwrap_or_else(|| "Unknown breed".to_string());
    let age = pet.age.clone().map(|age| format!("{} years", age));
    let status = pet.status_label();
    let badge_class = if pet.is_adoptable() {
        "badge badge-success"
    } else {
        "badge badge-ghost"
    };

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            figure { class: "h-48",
                img { class: "object-cover w-full h-full", src: "{image}", alt: "{name}" }
            }
            div { class: "card-body",
                h2 { class: "card-title",
                    "{name}"
                    div { class: badge_class, "{status}" }
                }
                p { "{breed}" }
                if let Some(age) = age {
                    p { class: "text-sm opacity-70", "{age}" }
                }
                div { class: "card-actions justify-end",
                    Link {
                        to: Route::PetDetails { id: pet.id },
                        class: "btn btn-primary btn-sm",
                        "View"
                    }
                }
            }
        }
    )
}
