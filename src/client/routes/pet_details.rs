use dioxus::prelude::*;

use crate::{
    client::{
        components::{pet_card::PLACEHOLDER_IMAGE, Loading, OutcomeModal, Page, TextAreaField, TextField},
        router::Route,
        store::use_api,
    },
    error::{validation::ValidationError, Error},
    model::{
        application::ApplicationForm,
        outcome::Outcome,
        pet::PetDto,
    },
    validation::FieldErrors,
};

#[component]
pub fn PetDetails(id: i64) -> Element {
    let api = use_api();
    let mut applying = use_signal(|| false);

    let pet = use_resource(use_reactive!(|(id,)| {
        let gateway = api.gateway();
        async move {
            let result = gateway.get_pet(id).await;
            if let Err(e) = &result {
                api.handle_error(e);
            }
            result
        }
    }));

    let content = match &*pet.read() {
        None => rsx!(Loading { label: "Loading pet..." }),
        Some(Err(e)) => {
            let message = e.user_message();
            rsx!(
                div { role: "alert", class: "alert alert-error", "{message}" }
                Link { to: Route::Pets {}, class: "btn btn-ghost", "Back to pets" }
            )
        }
        Some(Ok(pet)) => {
            let pet = pet.clone();
            rsx!(
                PetProfile { pet: pet.clone(), on_apply: move |_| applying.set(true) }
                if applying() {
                    ApplicationModal { pet: pet, on_close: move |_| applying.set(false) }
                }
            )
        }
    };

    rsx!(
        Title { "Pet | Paws & Tails" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] flex flex-col gap-4",
                {content}
            }
        }
    )
}

#[component]
fn PetProfile(pet: PetDto, on_apply: EventHandler<()>) -> Element {
    let image = pet
        .image_url
        .clone()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let unknown = || "Unknown".to_string();
    let species = pet.species.clone().unwrap_or_else(unknown);
    let breed = pet.breed.clone().unwrap_or_else(unknown);
    let gender = pet.gender.clone().unwrap_or_else(unknown);
    let age = pet
        .age
        .clone()
        .map(|age| format!("{} years", age))
        .unwrap_or_else(unknown);
    let description = pet.description.clone().unwrap_or_default();
    let status = pet.status_label();
    let adoptable = pet.is_adoptable();

    rsx!(
        div { class: "card lg:card-side bg-base-100 shadow-sm",
            figure { class: "lg:w-1/2",
                img { class: "object-cover w-full", src: "{image}", alt: "{pet.name}" }
            }
            div { class: "card-body",
                h1 { class: "card-title text-2xl", "{pet.name}" }
                div { class: "badge badge-outline", "{status}" }
                table { class: "table table-sm",
                    tbody {
                        tr { th { "Species" } td { "{species}" } }
                        tr { th { "Breed" } td { "{breed}" } }
                        tr { th { "Gender" } td { "{gender}" } }
                        tr { th { "Age" } td { "{age}" } }
                    }
                }
                p { "{description}" }
                div { class: "card-actions justify-end",
                    Link { to: Route::Pets {}, class: "btn btn-ghost", "Back" }
                    if adoptable {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_apply.call(()),
                            "Apply to adopt"
                        }
                    } else {
                        button { class: "btn", disabled: true, "Not available" }
                    }
                }
            }
        }
    )
}

#[component]
fn ApplicationModal(pet: PetDto, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let pet_id = pet.id;

    // Prefill from the logged in user when there is one.
    let (default_name, default_email) = api
        .session()
        .peek()
        .user()
        .map(|user| (user.display_name(), user.email.clone()))
        .unwrap_or_default();

    let name = use_signal(|| default_name);
    let email = use_signal(|| default_email);
    let mut has_experience = use_signal(|| None::<bool>);
    let home_environment = use_signal(String::new);

    let mut errors = use_signal(FieldErrors::new);
    let mut outcome = use_signal(|| None::<Outcome>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = ApplicationForm {
            name: name(),
            email: email(),
            has_experience: has_experience(),
            home_environment: home_environment(),
        };

        let payload = match form.validate(pet_id) {
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
        submitting.set(true);

        let gateway = api.gateway();
        spawn(async move {
            let result = gateway.submit_application(&payload).await;
            submitting.set(false);

            if let Err(e) = &result {
                api.handle_error(e);
            }
            outcome.set(Some(Outcome::from_result(
                &result,
                "Your application was sent. We will be in touch by email.",
            )));
        });
    };

    let field_error = move |field: &str| errors.read().get(field).map(str::to_string);
    let experience_error = field_error("has_experience");

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "Adopt {pet.name}" }
                form { onsubmit: onsubmit,
                    TextField { label: "Your name", value: name, error: field_error("name") }
                    TextField { label: "Email", value: email, kind: "email", error: field_error("email") }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Have you cared for a pet before?" }
                        div { class: "flex gap-4",
                            label { class: "label",
                                input {
                                    class: "radio",
                                    r#type: "radio",
                                    name: "has_experience",
                                    checked: has_experience() == Some(true),
                                    onchange: move |_| has_experience.set(Some(true)),
                                }
                                "Yes"
                            }
                            label { class: "label",
                                input {
                                    class: "radio",
                                    r#type: "radio",
                                    name: "has_experience",
                                    checked: has_experience() == Some(false),
                                    onchange: move |_| has_experience.set(Some(false)),
                                }
                                "No"
                            }
                        }
                        if let Some(error) = experience_error {
                            p { class: "label text-error", "{error}" }
                        }
                    }
                    TextAreaField {
                        label: "Tell us about your home",
                        value: home_environment,
                        error: field_error("home_environment"),
                    }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            r#type: "button",
                            disabled: submitting(),
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Submit"
                        }
                    }
                }
            }
        }
        OutcomeModal {
            outcome: outcome,
            on_close: move |closed: Outcome| {
                if closed.is_success() {
                    on_close.call(());
                }
            },
        }
    )
}
