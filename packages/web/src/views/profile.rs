use api::{AuthState, PasswordChange, ProfileUpdate, User};
use dioxus::prelude::*;
use store::models::format_date;
use ui::timer::{sleep, MESSAGE_TTL};
use ui::{use_auth, use_client, Access, Alert, AlertKind, ErrorAlert, Protected, Spinner, TextField};

#[component]
pub fn Profile() -> Element {
    rsx! {
        Protected { access: Access::Authenticated, ProfilePage {} }
    }
}

/// Show `message`, then clear it unless a newer one replaced it.
fn flash(mut success: Signal<Option<String>>, message: &str) {
    let message = message.to_string();
    success.set(Some(message.clone()));
    spawn(async move {
        sleep(MESSAGE_TTL).await;
        if success.peek().as_deref() == Some(message.as_str()) {
            success.set(None);
        }
    });
}

#[component]
fn ProfilePage() -> Element {
    let client = use_client();
    let mut auth = use_auth();
    let mut profile = use_signal(|| Option::<User>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let success = use_signal(|| Option::<String>::None);
    let mut edit_mode = use_signal(|| false);
    let mut password_mode = use_signal(|| false);

    let mut name = use_signal(String::new);
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let loader = client.clone();
    let loaded = use_resource(move || {
        let client = loader.clone();
        async move {
            match client.profile().await {
                Ok(user) => {
                    name.set(user.name.clone());
                    profile.set(Some(user));
                }
                Err(e) => {
                    tracing::warn!("failed to load profile: {e}");
                    error.set(Some(e.user_message("Failed to load profile")));
                }
            }
        }
    });

    let updater = client.clone();
    let handle_update_profile = move |evt: FormEvent| {
        evt.prevent_default();
        let client = updater.clone();
        spawn(async move {
            error.set(None);
            let update = ProfileUpdate { name: name() };
            match client.update_profile(&update).await {
                Ok(_) => {
                    if let Some(user) = profile.write().as_mut() {
                        user.name = update.name.trim().to_string();
                        auth.set(AuthState::Authenticated(user.clone()));
                    }
                    edit_mode.set(false);
                    flash(success, "Profile updated successfully!");
                }
                Err(e) => error.set(Some(e.user_message("Failed to update profile"))),
            }
        });
    };

    let handle_change_password = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let change = PasswordChange {
                current_password: current_password(),
                new_password: new_password(),
                confirm_password: confirm_password(),
            };
            match client.change_password(&change).await {
                Ok(_) => {
                    password_mode.set(false);
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    flash(success, "Password changed successfully!");
                }
                Err(e) => error.set(Some(e.user_message("Failed to change password"))),
            }
        });
    };

    if loaded.read().is_none() {
        return rsx! { Spinner {} };
    }

    let user = profile();
    let member_since = user
        .as_ref()
        .and_then(|u| u.created_at.as_deref())
        .map(|raw| format_date(raw, true))
        .unwrap_or_default();

    rsx! {
        div {
            class: "container mx-auto px-4 py-12",
            div {
                class: "max-w-2xl mx-auto",
                h1 { class: "text-4xl font-bold text-green-700 mb-8", "👤 My Profile" }

                ErrorAlert { message: error() }
                if let Some(message) = success() {
                    Alert { kind: AlertKind::Success, message }
                }

                if let Some(user) = user.as_ref() {
                    div {
                        class: "card p-8 mb-8",
                        div {
                            class: "flex items-center gap-4 mb-6",
                            div {
                                class: "w-16 h-16 bg-green-100 rounded-full flex items-center justify-center text-3xl",
                                "👤"
                            }
                            div {
                                h2 { class: "text-2xl font-bold text-green-700", "{user.name}" }
                                p { class: "text-gray-600", "{user.email}" }
                                p {
                                    class: "text-sm text-gray-500",
                                    "Role: "
                                    span { class: "font-semibold text-green-700", {user.role.as_str().to_uppercase()} }
                                }
                            }
                        }
                        hr { class: "my-6" }
                        if !member_since.is_empty() {
                            p { class: "text-gray-600 text-sm", "Member since: {member_since}" }
                        }
                    }

                    div {
                        class: "card p-6 mb-8",
                        div {
                            class: "flex justify-between items-center mb-4",
                            h3 { class: "text-xl font-bold text-green-700", "Edit Name" }
                            button {
                                class: "text-blue-600 hover:text-blue-800 font-semibold",
                                onclick: move |_| edit_mode.toggle(),
                                if edit_mode() { "Cancel" } else { "Edit" }
                            }
                        }
                        if edit_mode() {
                            form {
                                onsubmit: handle_update_profile,
                                class: "space-y-4",
                                TextField { label: "Name", value: name, required: true }
                                button { r#type: "submit", class: "btn-primary", "Save Changes" }
                            }
                        } else {
                            p { class: "text-gray-700", "{user.name}" }
                        }
                    }

                    div {
                        class: "card p-6",
                        div {
                            class: "flex justify-between items-center mb-4",
                            h3 { class: "text-xl font-bold text-green-700", "Change Password" }
                            button {
                                class: "text-blue-600 hover:text-blue-800 font-semibold",
                                onclick: move |_| password_mode.toggle(),
                                if password_mode() { "Cancel" } else { "Change" }
                            }
                        }
                        if password_mode() {
                            form {
                                onsubmit: handle_change_password,
                                class: "space-y-4",
                                TextField { label: "Current Password", kind: "password", value: current_password, required: true }
                                TextField { label: "New Password", kind: "password", value: new_password, required: true }
                                TextField { label: "Confirm Password", kind: "password", value: confirm_password, required: true }
                                button { r#type: "submit", class: "btn-primary", "Update Password" }
                            }
                        }
                    }
                }
            }
        }
    }
}
