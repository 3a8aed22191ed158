use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center min-h-[50vh]",
            div { class: "spinner" }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Inline status message above a form or list.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> Element {
    let class = match kind {
        AlertKind::Success => "alert-success",
        AlertKind::Error => "alert-error",
    };
    rsx! {
        div {
            class: "{class} mb-4",
            role: "alert",
            "{message}"
        }
    }
}

/// Optional error line; renders nothing for `None`.
#[component]
pub fn ErrorAlert(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! { Alert { kind: AlertKind::Error, message } },
        None => rsx! {},
    }
}
