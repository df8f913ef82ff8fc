use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{OutcomeModal, SelectField, TextAreaField, TextField},
        store::use_api,
    },
    error::{validation::ValidationError, Error},
    gateway::RequestGeneration,
    model::{
        outcome::Outcome,
        pet::{BreedDto, PetDto, PetForm, PetStatus, Species, GENDERS},
    },
    validation::FieldErrors,
};

/// Add or edit a pet.
///
/// `on_close` receives `true` once a save went through so the caller can
/// reload its list.
#[component]
pub fn PetFormModal(pet: Option<PetDto>, on_close: EventHandler<bool>) -> Element {
    let api = use_api();
    let pet_id = pet.as_ref().map(|pet| pet.id);
    let initial = pet.as_ref().map(PetForm::from_pet).unwrap_or_else(|| PetForm {
        status: PetStatus::Active.code().to_string(),
        ..PetForm::default()
    });

    let name = use_signal(|| initial.name.clone());
    let species = use_signal(|| initial.species.clone());
    let mut breed = use_signal(|| initial.breed.clone());
    let gender = use_signal(|| initial.gender.clone());
    let age = use_signal(|| initial.age.clone());
    let description = use_signal(|| initial.description.clone());
    let image_url = use_signal(|| initial.image_url.clone());
    let status = use_signal(|| initial.status.clone());

    let mut errors = use_signal(FieldErrors::new);
    let mut outcome = use_signal(|| None::<Outcome>);
    let mut saving = use_signal(|| false);

    let mut breeds = use_signal(Vec::<BreedDto>::new);
    let mut breeds_loading = use_signal(|| false);
    let mut breed_generation = use_signal(RequestGeneration::default);

    // Only the latest species selection may fill the breed list.
    let mut load_breeds = move |selected: Option<Species>| {
        let ticket = breed_generation.write().issue();
        breeds.set(Vec::new());

        let Some(selected) = selected else {
            breeds_loading.set(false);
            return;
        };

        breeds_loading.set(true);
        let gateway = api.gateway();

        spawn(async move {
            let result = gateway.list_breeds(selected).await;

            if !breed_generation.read().is_current(ticket) {
                tracing::debug!("Discarding breeds for {} from a superseded request", selected.name());
                return;
            }

            breeds_loading.set(false);
            match result {
                Ok(list) => breeds.set(list),
                Err(e) => {
                    api.handle_error(&e);
                    tracing::warn!("Failed to load {} breeds: {}", selected.name(), e);
                }
            }
        });
    };

    use_hook(move || load_breeds(Species::parse(&species.peek())));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = PetForm {
            name: name(),
            species: species(),
            breed: breed(),
            gender: gender(),
            age: age(),
            description: description(),
            image_url: image_url(),
            status: status(),
        };

        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(ValidationError::Fields(fields)) => {
                errors.set(fields);
                return;
            }
            Err(e) => {
                outcome.set(Some(Outcome::failure(Error::from(e).user_message())));
                return;
            }
        };
        errors.set(FieldErrors::new());
        saving.set(true);

        let gateway = api.gateway();
        spawn(async move {
            let result = match pet_id {
                Some(id) => gateway.update_pet(id, &payload).await,
                None => gateway.create_pet(&payload).await,
            };
            saving.set(false);

            if let Err(e) = &result {
                api.handle_error(e);
            }

            let message = if pet_id.is_some() {
                "Pet updated."
            } else {
                "Pet added."
            };
            outcome.set(Some(Outcome::from_result(&result, message)));
        });
    };

    let field_error = move |field: &str| errors.read().get(field).map(str::to_string);

    let species_options = Species::ALL
        .iter()
        .map(|species| (species.name().to_string(), species.name().to_string()))
        .collect::<Vec<_>>();
    let gender_options = GENDERS
        .iter()
        .map(|gender| (gender.to_string(), gender.to_string()))
        .collect::<Vec<_>>();
    let status_options = PetStatus::ALL
        .iter()
        .map(|status| (status.code().to_string(), status.label().to_string()))
        .collect::<Vec<_>>();

    // Keep an edited pet's breed selectable even if the API no longer lists it.
    let breed_options = {
        let current = breed();
        let mut options = breeds
            .read()
            .iter()
            .map(|breed| (breed.breed.clone(), breed.breed.clone()))
            .collect::<Vec<_>>();
        if !current.is_empty() && !options.iter().any(|(value, _)| *value == current) {
            options.insert(0, (current.clone(), current));
        }
        options
    };

    let heading = if pet_id.is_some() { "Edit pet" } else { "Add pet" };
    let breed_placeholder = if breeds_loading() {
        "Loading breeds..."
    } else {
        "Select a breed"
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-2xl",
                h3 { class: "text-lg font-bold", "{heading}" }
                form {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                    onsubmit: onsubmit,
                    TextField { label: "Name", value: name, error: field_error("name") }
                    SelectField {
                        label: "Species",
                        value: species,
                        options: species_options,
                        placeholder: "Select a species",
                        error: field_error("species"),
                        on_change: move |selected: String| {
                            breed.set(String::new());
                            load_breeds(Species::parse(&selected));
                        },
                    }
                    SelectField {
                        label: "Breed",
                        value: breed,
                        options: breed_options,
                        placeholder: breed_placeholder,
                        error: field_error("breed"),
                    }
                    SelectField {
                        label: "Gender",
                        value: gender,
                        options: gender_options,
                        placeholder: "Select a gender",
                        error: field_error("gender"),
                    }
                    TextField { label: "Age (years)", value: age, kind: "number", error: field_error("age") }
                    SelectField {
                        label: "Status",
                        value: status,
                        options: status_options,
                        error: field_error("status"),
                    }
                    div { class: "md:col-span-2",
                        TextField {
                            label: "Image URL",
                            value: image_url,
                            placeholder: "https://",
                            error: field_error("image_url"),
                        }
                        TextAreaField {
                            label: "Description",
                            value: description,
                            error: field_error("description"),
                        }
                    }
                    div { class: "modal-action md:col-span-2",
                        button {
                            class: "btn",
                            r#type: "button",
                            disabled: saving(),
                            onclick: move |_| on_close.call(false),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Save"
                        }
                    }
                }
            }
        }
        OutcomeModal {
            outcome: outcome,
            on_close: move |closed: Outcome| {
                if closed.is_success() {
                    on_close.call(true);
                }
            },
        }
    )
}
