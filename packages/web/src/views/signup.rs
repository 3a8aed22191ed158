//! Registration page. A new account is not logged in automatically.

use api::{landing_path, SignupForm};
use dioxus::prelude::*;
use ui::timer::{redirect_after, REDIRECT_DELAY};
use ui::{use_auth, use_client, Alert, AlertKind, ErrorAlert, TextField};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let client = use_client();
    let nav = use_navigator();
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if let Some(user) = auth.read().user() {
            nav.replace(landing_path(user));
        }
    });

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            let form = SignupForm {
                name: name(),
                email: email(),
                password: password(),
                confirm_password: confirm_password(),
            };

            loading.set(true);
            match client.signup(&form).await {
                Ok(_) => {
                    success.set(Some("Account created! Redirecting to login...".to_string()));
                    redirect_after(nav, "/login", REDIRECT_DELAY);
                }
                Err(e) => error.set(Some(e.user_message("Signup failed"))),
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
                    h1 { class: "text-3xl font-bold text-green-700", "🌾 Sign Up" }
                    p { class: "text-gray-600 mt-2", "Join our village community" }
                }

                ErrorAlert { message: error() }
                if let Some(message) = success() {
                    Alert { kind: AlertKind::Success, message }
                }

                form {
                    onsubmit: handle_signup,
                    class: "space-y-4",
                    TextField { label: "Full Name", value: name, placeholder: "John Doe", required: true }
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
                        placeholder: "At least 6 chars with uppercase, lowercase, number",
                        required: true,
                    }
                    TextField {
                        label: "Confirm Password",
                        kind: "password",
                        value: confirm_password,
                        placeholder: "Confirm your password",
                        required: true,
                    }
                    button {
                        r#type: "submit",
                        class: "btn-primary w-full",
                        disabled: loading() || success().is_some(),
                        if loading() { "Creating account..." } else { "Sign Up" }
                    }
                }

                div {
                    class: "mt-6 text-center",
                    p {
                        class: "text-gray-600",
                        "Already have an account? "
                        Link {
                            to: Route::Login {},
                            class: "text-green-700 hover:text-green-900 font-semibold",
                            "Login"
                        }
                    }
                }
            }
        }
    }
}
