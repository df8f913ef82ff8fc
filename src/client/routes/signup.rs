use dioxus::prelude::*;

use crate::{
    client::{
        components::{OutcomeModal, Page, SelectField, TextField},
        router::Route,
        store::use_api,
    },
    error::{validation::ValidationError, Error},
    model::{
        outcome::Outcome,
        user::{SignupForm, DEFAULT_COUNTRY_CODE},
    },
    validation::{FieldErrors, PASSWORD_MIN_LEN, PASSWORD_SPECIALS},
};

const COUNTRY_CODES: [(&str, &str); 5] = [
    ("60", "+60 Malaysia"),
    ("65", "+65 Singapore"),
    ("62", "+62 Indonesia"),
    ("66", "+66 Thailand"),
    ("1", "+1 United States"),
];

#[component]
pub fn Signup() -> Element {
    let api = use_api();
    let navigator = use_navigator();

    let first_name = use_signal(String::new);
    let last_name = use_signal(String::new);
    let country_code = use_signal(|| DEFAULT_COUNTRY_CODE.to_string());
    let phone_number = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);

    let mut errors = use_signal(FieldErrors::new);
    let mut outcome = use_signal(|| None::<Outcome>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = SignupForm {
            first_name: first_name(),
            last_name: last_name(),
            country_code: country_code(),
            phone_number: phone_number(),
            email: email(),
            password: password(),
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
        submitting.set(true);

        let gateway = api.gateway();
        spawn(async move {
            let result = gateway.signup(&payload).await;
            submitting.set(false);

            outcome.set(Some(Outcome::from_result(
                &result,
                "Your account was created. You can now log in.",
            )));
        });
    };

    let field_error = move |field: &str| errors.read().get(field).map(str::to_string);
    let country_options = COUNTRY_CODES
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect::<Vec<_>>();
    let password_hint = format!(
        "At least {} characters with upper and lower case letters, a number and one of {}",
        PASSWORD_MIN_LEN, PASSWORD_SPECIALS
    );

    rsx!(
        Title { "Sign up | Paws & Tails" }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-xl",
                form { class: "card-body", onsubmit: onsubmit,
                    h2 { class: "card-title", "Create an account" }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                        TextField { label: "First Name", value: first_name, error: field_error("first_name") }
                        TextField { label: "Last Name", value: last_name, error: field_error("last_name") }
                        SelectField {
                            label: "Country Code",
                            value: country_code,
                            options: country_options,
                            error: field_error("country_code"),
                        }
                        TextField {
                            label: "Phone Number",
                            value: phone_number,
                            kind: "tel",
                            error: field_error("phone_number"),
                        }
                    }
                    TextField { label: "Email", value: email, kind: "email", error: field_error("email") }
                    TextField {
                        label: "Password",
                        value: password,
                        kind: "password",
                        error: field_error("password"),
                    }
                    p { class: "text-xs opacity-70", "{password_hint}" }
                    button {
                        class: "btn btn-primary mt-2",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Sign up"
                    }
                    p { class: "text-sm",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "link", "Login" }
                    }
                }
            }
        }
        OutcomeModal {
            outcome: outcome,
            on_close: move |closed: Outcome| {
                if closed.is_success() {
                    navigator.push(Route::Login {});
                }
            },
        }
    )
}
