use dioxus::prelude::*;

use crate::{
    listing::{FilterField, ListingState},
    model::pet::{PetStatus, Species, GENDERS},
};

/// Filter controls for the pet listing. Every change resets to page 1.
#[component]
pub fn PetFilters(listing: Signal<ListingState>) -> Element {
    let mut listing = listing;
    let (name, species, breed, gender, age, status) = {
        let state = listing.read();
        let criteria = state.criteria();
        (
            criteria.get(FilterField::Name).to_string(),
            criteria.get(FilterField::Species).to_string(),
            criteria.get(FilterField::Breed).to_string(),
            criteria.get(FilterField::Gender).to_string(),
            criteria.get(FilterField::Age).to_string(),
            criteria.get(FilterField::Status).to_string(),
        )
    };

    rsx!(
        div { class: "flex flex-wrap items-end gap-2",
            input {
                class: "input input-sm w-40",
                placeholder: "Name",
                value: "{name}",
                oninput: move |evt| listing.write().set_criterion(FilterField::Name, evt.value()),
            }
            select {
                class: "select select-sm w-36",
                onchange: move |evt| listing.write().set_criterion(FilterField::Species, evt.value()),
                option { value: "", selected: species.is_empty(), "Any species" }
                for candidate in Species::ALL {
                    option {
                        key: "{candidate.name()}",
                        value: candidate.name(),
                        selected: candidate.name() == species,
                        {candidate.name()}
                    }
                }
            }
            input {
                class: "input input-sm w-40",
                placeholder: "Breed",
                value: "{breed}",
                oninput: move |evt| listing.write().set_criterion(FilterField::Breed, evt.value()),
            }
            select {
                class: "select select-sm w-36",
                onchange: move |evt| listing.write().set_criterion(FilterField::Gender, evt.value()),
                option { value: "", selected: gender.is_empty(), "Any gender" }
                for candidate in GENDERS {
                    option {
                        key: "{candidate}",
                        value: candidate,
                        selected: candidate == gender,
                        {candidate}
                    }
                }
            }
            input {
                class: "input input-sm w-24",
                r#type: "number",
                min: "0",
                placeholder: "Age",
                value: "{age}",
                oninput: move |evt| listing.write().set_criterion(FilterField::Age, evt.value()),
            }
            select {
                class: "select select-sm w-44",
                onchange: move |evt| listing.write().set_criterion(FilterField::Status, evt.value()),
                option { value: "", selected: status.is_empty(), "Any status" }
                for candidate in PetStatus::ALL {
                    option {
                        key: "{candidate.code()}",
                        value: "{candidate.code()}",
                        selected: candidate.code().to_string() == status,
                        {candidate.label()}
                    }
                }
            }
            button {
                class: "btn btn-sm btn-ghost",
                onclick: move |_| listing.write().clear_criteria(),
                "Clear"
            }
        }
    )
}
