use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{admin::PetFormModal, ConfirmModal, Loading, OutcomeModal, Pagination},
        store::use_api,
    },
    listing::{apply_filters, FilterField, ListingState},
    model::{
        outcome::Outcome,
        pet::{PetDto, PetStatus},
    },
};

#[derive(Clone, PartialEq)]
enum PetEditor {
    Create,
    Edit(PetDto),
}

#[component]
pub fn AdminPets() -> Element {
    let api = use_api();
    let mut listing = use_signal(|| ListingState::new(api.page_size()));
    let mut editor = use_signal(|| None::<PetEditor>);
    let mut deleting = use_signal(|| None::<PetDto>);
    let mut delete_busy = use_signal(|| false);
    let mut outcome = use_signal(|| None::<Outcome>);

    let mut pets = use_resource(move || {
        let gateway = api.gateway();
        async move {
            let result = gateway.list_pets().await;
            if let Err(e) = &result {
                api.handle_error(e);
            }
            result
        }
    });

    let confirm_delete = move |_: ()| {
        let Some(pet) = deleting() else {
            return;
        };
        delete_busy.set(true);

        let gateway = api.gateway();
        spawn(async move {
            let result = gateway.delete_pet(pet.id).await;
            delete_busy.set(false);
            deleting.set(None);

            match &result {
                Ok(()) => pets.restart(),
                Err(e) => api.handle_error(e),
            }
            outcome.set(Some(Outcome::from_result(
                &result,
                &format!("{} was removed.", pet.name),
            )));
        });
    };

    let (name_filter, status_filter) = {
        let state = listing.read();
        (
            state.criteria().get(FilterField::Name).to_string(),
            state.criteria().get(FilterField::Status).to_string(),
        )
    };

    let content = match &*pets.read() {
        None => rsx!(Loading { label: "Loading pets..." }),
        Some(Err(e)) => {
            let message = e.user_message();
            rsx!(
                div { role: "alert", class: "alert alert-error", "{message}" }
            )
        }
        Some(Ok(all)) => {
            let state = listing.read();
            let filtered = apply_filters(all, state.criteria());
            let view = state.view(&filtered);
            let records = view.records.to_vec();
            let (page, page_count) = (view.page, view.page_count);

            rsx!(
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Species" }
                                th { "Breed" }
                                th { "Gender" }
                                th { "Age" }
                                th { "Status" }
                                th { class: "w-24" }
                            }
                        }
                        tbody {
                            for pet in records {
                                PetRow {
                                    key: "{pet.id}",
                                    pet: pet.clone(),
                                    on_edit: move |pet: PetDto| editor.set(Some(PetEditor::Edit(pet))),
                                    on_delete: move |pet: PetDto| deleting.set(Some(pet)),
                                }
                            }
                        }
                    }
                }
                Pagination {
                    page: page,
                    page_count: page_count,
                    on_select: move |selected: usize| listing.write().select_page(selected),
                }
            )
        }
    };

    let delete_message = deleting
        .read()
        .as_ref()
        .map(|pet| format!("Remove {} from the listings? This cannot be undone.", pet.name));

    rsx!(
        Title { "Manage Pets | Paws & Tails" }
        div { class: "flex flex-wrap items-end justify-between gap-2",
            div { class: "flex flex-wrap gap-2",
                input {
                    class: "input input-sm w-48",
                    placeholder: "Search by name",
                    value: "{name_filter}",
                    oninput: move |evt| listing.write().set_criterion(FilterField::Name, evt.value()),
                }
                select {
                    class: "select select-sm w-44",
                    onchange: move |evt| listing.write().set_criterion(FilterField::Status, evt.value()),
                    option { value: "", selected: status_filter.is_empty(), "Any status" }
                    for status in PetStatus::ALL {
                        option {
                            key: "{status.code()}",
                            value: "{status.code()}",
                            selected: status.code().to_string() == status_filter,
                            {status.label()}
                        }
                    }
                }
            }
            button {
                class: "btn btn-primary btn-sm flex gap-2",
                onclick: move |_| editor.set(Some(PetEditor::Create)),
                Icon { width: 14, height: 14, icon: FaPlus }
                "Add pet"
            }
        }
        {content}
        if let Some(current) = editor() {
            PetFormModal {
                pet: match current {
                    PetEditor::Create => None,
                    PetEditor::Edit(pet) => Some(pet),
                },
                on_close: move |saved: bool| {
                    editor.set(None);
                    if saved {
                        pets.restart();
                    }
                },
            }
        }
        if let Some(message) = delete_message {
            ConfirmModal {
                title: "Delete pet",
                message: message,
                busy: delete_busy(),
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
        OutcomeModal { outcome: outcome }
    )
}

#[component]
fn PetRow(pet: PetDto, on_edit: EventHandler<PetDto>, on_delete: EventHandler<PetDto>) -> Element {
    let dash = || "-".to_string();
    let species = pet.species.clone().unwrap_or_else(dash);
    let breed = pet.breed.clone().unwrap_or_else(dash);
    let gender = pet.gender.clone().unwrap_or_else(dash);
    let age = pet.age.clone().unwrap_or_else(dash);
    let status = pet.status.map_or("-", PetStatus::label);
    let edit_pet = pet.clone();
    let delete_pet = pet.clone();

    rsx!(
        tr {
            td { "{pet.name}" }
            td { "{species}" }
            td { "{breed}" }
            td { "{gender}" }
            td { "{age}" }
            td { "{status}" }
            td {
                div { class: "flex gap-1",
                    button {
                        class: "btn btn-ghost btn-xs",
                        title: "Edit",
                        onclick: move |_| on_edit.call(edit_pet.clone()),
                        Icon { width: 14, height: 14, icon: FaPen }
                    }
                    button {
                        class: "btn btn-ghost btn-xs text-error",
                        title: "Delete",
                        onclick: move |_| on_delete.call(delete_pet.clone()),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
        }
    )
}
