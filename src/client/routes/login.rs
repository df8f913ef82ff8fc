use dioxus::prelude::*;

use crate::{
    client::{
        components::{OutcomeModal, Page, TextField},
        router::Route,
        store::use_api,
    },
    error::Error,
    model::{outcome::Outcome, user::LoginForm},
};

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut session = api.session();
    let navigator = use_navigator();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut outcome = use_signal(|| None::<Outcome>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = LoginForm {
            email: email(),
            password: password(),
        };
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                outcome.set(Some(Outcome::failure(Error::from(e).user_message())));
                return;
            }
        };

        submitting.set(true);
        let gateway = api.gateway();

        spawn(async move {
            let result = gateway.login(&credentials).await;
            submitting.set(false);

            let login = match result {
                Ok(login) => login,
                Err(e) => {
                    outcome.set(Some(Outcome::failure(e.user_message())));
                    return;
                }
            };

            let is_admin = login.user.is_admin;
            if let Err(e) = session.write().login(login.token, login.user) {
                outcome.set(Some(Outcome::failure(Error::from(e).user_message())));
                return;
            }

            if is_admin {
                navigator.push(Route::AdminPets {});
            } else {
                navigator.push(Route::Pets {});
            }
        });
    };

    rsx!(
        Title { "Login | Paws & Tails" }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                form { class: "card-body", onsubmit: onsubmit,
                    h2 { class: "card-title", "Login" }
                    TextField { label: "Email", value: email, kind: "email" }
                    TextField { label: "Password", value: password, kind: "password" }
                    button {
                        class: "btn btn-primary mt-2",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Login"
                    }
                    p { class: "text-sm",
                        "No account yet? "
                        Link { to: Route::Signup {}, class: "link", "Sign up" }
                    }
                }
            }
        }
        OutcomeModal { outcome: outcome }
    )
}
