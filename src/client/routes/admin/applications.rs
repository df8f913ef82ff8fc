use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaTrash, FaXmark};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{ConfirmModal, Loading, OutcomeModal, Pagination},
        router::Route,
        store::use_api,
        util::format_relative_time,
    },
    listing::{apply_filters, FilterField, ListingState},
    model::{
        application::{ApplicationDto, ApplicationStatus},
        outcome::Outcome,
    },
};

#[component]
pub fn AdminApplications() -> Element {
    let api = use_api();
    let mut listing = use_signal(|| ListingState::new(api.page_size()));
    let mut deleting = use_signal(|| None::<ApplicationDto>);
    let mut busy = use_signal(|| false);
    let mut outcome = use_signal(|| None::<Outcome>);

    let mut applications = use_resource(move || {
        let gateway = api.gateway();
        async move {
            let result = gateway.list_applications().await;
            if let Err(e) = &result {
                api.handle_error(e);
            }
            result
        }
    });

    let set_status = move |(id, status): (i64, ApplicationStatus)| {
        busy.set(true);

        let gateway = api.gateway();
        spawn(async move {
            let result = gateway.update_application_status(id, status).await;
            busy.set(false);

            match &result {
                Ok(_) => applications.restart(),
                Err(e) => api.handle_error(e),
            }
            outcome.set(Some(Outcome::from_result(
                &result,
                &format!("Application marked as {}.", status.label().to_lowercase()),
            )));
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(application) = deleting() else {
            return;
        };
        busy.set(true);

        let gateway = api.gateway();
        spawn(async move {
            let result = gateway.delete_application(application.id).await;
            busy.set(false);
            deleting.set(None);

            match &result {
                Ok(()) => applications.restart(),
                Err(e) => api.handle_error(e),
            }
            outcome.set(Some(Outcome::from_result(&result, "Application deleted.")));
        });
    };

    let (name_filter, status_filter) = {
        let state = listing.read();
        (
            state.criteria().get(FilterField::Name).to_string(),
            state.criteria().get(FilterField::Status).to_string(),
        )
    };

    let content = match &*applications.read() {
        None => rsx!(Loading { label: "Loading applications..." }),
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
                p { class: "text-sm opacity-70", "{total} applications" }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Applicant" }
                                th { "Pet" }
                                th { "Experience" }
                                th { "Home" }
                                th { "Status" }
                                th { "Submitted" }
                                th { class: "w-28" }
                            }
                        }
                        tbody {
                            for application in records {
                                ApplicationRow {
                                    key: "{application.id}",
                                    application: application.clone(),
                                    busy: busy(),
                                    on_status: set_status,
                                    on_delete: move |application: ApplicationDto| deleting.set(Some(application)),
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

    let delete_message = deleting.read().as_ref().map(|application| {
        format!(
            "Delete the application from {}? This cannot be undone.",
            application.applicant_name
        )
    });

    rsx!(
        Title { "Applications | Paws & Tails" }
        div { class: "flex flex-wrap gap-2",
            input {
                class: "input input-sm w-48",
                placeholder: "Search by applicant",
                value: "{name_filter}",
                oninput: move |evt| listing.write().set_criterion(FilterField::Name, evt.value()),
            }
            select {
                class: "select select-sm w-40",
                onchange: move |evt| listing.write().set_criterion(FilterField::Status, evt.value()),
                option { value: "", selected: status_filter.is_empty(), "Any status" }
                for status in ApplicationStatus::ALL {
                    option {
                        key: "{status.code()}",
                        value: "{status.code()}",
                        selected: status.code().to_string() == status_filter,
                        {status.label()}
                    }
                }
            }
        }
        {content}
        if let Some(message) = delete_message {
            ConfirmModal {
                title: "Delete application",
                message: message,
                busy: busy(),
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
        OutcomeModal { outcome: outcome }
    )
}

#[component]
fn ApplicationRow(
    application: ApplicationDto,
    busy: bool,
    on_status: EventHandler<(i64, ApplicationStatus)>,
    on_delete: EventHandler<ApplicationDto>,
) -> Element {
    let id = application.id;
    let experience = if application.has_experience { "Yes" } else { "No" };
    let status = application.status;
    let status_label = status.map_or("Unknown", ApplicationStatus::label);
    let badge_class = match status {
        Some(ApplicationStatus::Approved) => "badge badge-success",
        Some(ApplicationStatus::Rejected) => "badge badge-error",
        Some(ApplicationStatus::Pending) => "badge badge-warning",
        None => "badge badge-ghost",
    };
    let submitted = application
        .created_at
        .map(|created_at| format_relative_time(&created_at, Utc::now().naive_utc()))
        .unwrap_or_else(|| "-".to_string());
    let delete_application = application.clone();

    rsx!(
        tr {
            td {
                p { "{application.applicant_name}" }
                p { class: "text-xs opacity-70", "{application.email}" }
            }
            td {
                if let Some(pet_id) = application.pet_id {
                    Link { to: Route::PetDetails { id: pet_id }, class: "link", "#{pet_id}" }
                } else {
                    "-"
                }
            }
            td { "{experience}" }
            td { class: "max-w-64 truncate", "{application.home_environment}" }
            td { div { class: badge_class, "{status_label}" } }
            td { "{submitted}" }
            td {
                div { class: "flex gap-1",
                    button {
                        class: "btn btn-ghost btn-xs text-success",
                        title: "Approve",
                        disabled: busy || status == Some(ApplicationStatus::Approved),
                        onclick: move |_| on_status.call((id, ApplicationStatus::Approved)),
                        Icon { width: 14, height: 14, icon: FaCheck }
                    }
                    button {
                        class: "btn btn-ghost btn-xs text-warning",
                        title: "Reject",
                        disabled: busy || status == Some(ApplicationStatus::Rejected),
                        onclick: move |_| on_status.call((id, ApplicationStatus::Rejected)),
                        Icon { width: 14, height: 14, icon: FaXmark }
                    }
                    button {
                        class: "btn btn-ghost btn-xs text-error",
                        title: "Delete",
                        disabled: busy,
                        onclick: move |_| on_delete.call(delete_application.clone()),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
        }
    )
}
