use dioxus::prelude::*;

/// Labelled single-line input bound to a string signal.
#[component]
pub fn TextField(
    label: String,
    value: Signal<String>,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
) -> Element {
    let mut value = value;
    rsx! {
        div {
            label { class: "form-label", "{label}" }
            input {
                class: "form-input",
                r#type: "{kind}",
                placeholder: "{placeholder}",
                required,
                disabled,
                value: value(),
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
        }
    }
}

/// Labelled multi-line input bound to a string signal.
#[component]
pub fn TextArea(
    label: String,
    value: Signal<String>,
    #[props(default = 5)] rows: u32,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
) -> Element {
    let mut value = value;
    rsx! {
        div {
            label { class: "form-label", "{label}" }
            textarea {
                class: "form-input",
                rows: "{rows}",
                placeholder: "{placeholder}",
                required,
                value: value(),
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
        }
    }
}
