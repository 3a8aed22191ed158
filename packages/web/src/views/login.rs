//! Login page with email/password form.

use api::{landing_path, AuthState, LoginForm};
use dioxus::prelude::*;
use ui::{use_auth, use_client, use_site, ErrorAlert, TextField};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let client = use_client();
    let site = use_site().site;
    let nav = use_navigator();
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the landing page
    use_effect(move || {
        if let Some(user) = auth.read().user() {
            nav.replace(landing_path(user));
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match client.login(&LoginForm::new(email(), password())).await {
                Ok(user) => {
                    let to = landing_path(&user);
                    auth.set(AuthState::Authenticated(user));
                    nav.push(to);
                }
                Err(e) => {
                    tracing::info!("login rejected: {e}");
                    error.set(Some(e.user_message("Login failed")));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-[80vh] bg-gradient-to-br from-green-50 to-blue-50 flex items-center justify-center px-4 py-12",
            div {
                class: "bg-white rounded-lg shadow-xl p-8 max-w-md w-full",
                div {
                    class: "text-center mb-8",
                    h1 { class: "text-3xl font-bold text-green-700", "🌾 Login" }
                    p { class: "text-gray-600 mt-2", "Welcome to {site.name} Village" }
                }

                ErrorAlert { message: error() }

                form {
                    onsubmit: handle_login,
                    class: "space-y-4",
                    TextField {
                        label: "Email Address",
                        kind: "email",
                        value: email,
                        placeholder: "your@email.com",
                        required: true,
                    }
                    TextField {
                        label: "Password",
                        kind: "password",
                        value: password,
                        placeholder: "Enter your password",
                        required: true,
                    }
                    button {
                        r#type: "submit",
                        class: "btn-primary w-full",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                div {
                    class: "mt-6 text-center",
                    p {
                        class: "text-gray-600",
                        "Don't have an account? "
                        Link {
                            to: Route::Signup {},
                            class: "text-green-700 hover:text-green-900 font-semibold",
                            "Sign Up"
                        }
                    }
                }
            }
        }
    }
}
