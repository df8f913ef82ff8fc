use dioxus::prelude::*;

use crate::{
    client::{
        components::{Loading, Page, Pagination, PetCard, PetFilters},
        store::use_api,
    },
    listing::{apply_filters, ListingState},
};

#[component]
pub fn Pets() -> Element {
    let api = use_api();
    let mut listing = use_signal(|| ListingState::new(api.page_size()));

    let pets = use_resource(move || {
        let gateway = api.gateway();
        async move {
            let result = gateway.list_pets().await;
            if let Err(e) = &result {
                api.handle_error(e);
            }
            result
        }
    });

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
            let (page, page_count, total) = (view.page, view.page_count, view.total);

            rsx!(
                p { class: "text-sm opacity-70", "{total} pets found" }
                if records.is_empty() {
                    p { class: "p-8 text-center", "No pets match these filters." }
                }
                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                    for pet in records {
                        PetCard { key: "{pet.id}", pet: pet.clone() }
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

    rsx!(
        Title { "Pets | Paws & Tails" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                h1 { class: "text-2xl", "Pets looking for a home" }
                PetFilters { listing: listing }
                {content}
            }
        }
    )
}
