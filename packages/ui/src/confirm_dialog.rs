use dioxus::prelude::*;

fn confirm_text(busy: bool, label: &str) -> String {
    if busy {
        let stem = label.strip_suffix('e').unwrap_or(label);
        format!("{stem}ing...")
    } else {
        label.to_string()
    }
}

/// Yes/no confirmation for destructive actions, shown over a dimmed page.
///
/// A click on the backdrop counts as cancel.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-gray-900/40 px-4",
            onclick: move |_| {
                if !busy {
                    on_cancel.call(());
                }
            },
            div {
                class: "bg-white rounded-lg shadow-xl max-w-md w-full p-6",
                role: "dialog",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                h2 { class: "text-lg font-semibold text-gray-800 mb-3", "{title}" }
                p { class: "text-gray-600 mb-6", "{message}" }
                div {
                    class: "flex gap-2 justify-end",
                    button {
                        class: "px-4 py-2 rounded-lg bg-gray-200 text-gray-800 hover:bg-gray-300",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 rounded-lg bg-red-600 text-white hover:bg-red-700",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        {confirm_text(busy, &confirm_label)}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::confirm_text;

    #[test]
    fn test_confirm_button_text() {
        assert_eq!(confirm_text(false, "Delete"), "Delete");
        assert_eq!(confirm_text(true, "Delete"), "Deleting...");
        assert_eq!(confirm_text(true, "Remove"), "Removing...");
    }
}
