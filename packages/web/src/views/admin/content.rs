use api::ContentDraft;
use dioxus::prelude::*;
use store::filter::{find_by_id, remove_by_id};
use store::models::{excerpt, format_date};
use store::{ContentItem, ContentType, Filter};
use ui::icons::{FaPen, FaTrash};
use ui::timer::{redirect_after, REDIRECT_DELAY};
use ui::{
    use_client, Access, Alert, AlertKind, ConfirmDialog, ErrorAlert, Icon, Protected, Spinner,
    TextArea, TextField,
};

use crate::Route;

const EXCERPT_CHARS: usize = 100;

#[component]
pub fn ManageContent() -> Element {
    rsx! {
        Protected { access: Access::Admin, ContentList {} }
    }
}

#[component]
pub fn AddContent() -> Element {
    rsx! {
        Protected { access: Access::Admin, ContentEditor { id: None } }
    }
}

#[component]
pub fn EditContent(id: i64) -> Element {
    rsx! {
        Protected { access: Access::Admin, ContentEditor { id: Some(id) } }
    }
}

fn filter_button_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-lg font-semibold transition bg-green-700 text-white"
    } else {
        "px-4 py-2 rounded-lg font-semibold transition bg-gray-200 text-gray-800 hover:bg-gray-300"
    }
}

/// `📅 EVENT | By: Admin | 3/10/2024`
fn meta_line(item: &ContentItem) -> String {
    let mut parts = vec![format!(
        "{} {}",
        item.content_type.emoji(),
        item.content_type.as_str().to_uppercase()
    )];
    if let Some(author) = item.created_by_name.as_deref() {
        parts.push(format!("By: {author}"));
    }
    if let Some(created) = item.created_at.as_deref() {
        parts.push(format_date(created, false));
    }
    parts.join(" | ")
}

#[component]
fn ContentList() -> Element {
    let client = use_client();
    let mut content = use_signal(Vec::<ContentItem>::new);
    let mut filter = use_signal(|| Filter::<ContentType>::All);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<i64>::None);
    let mut deleting = use_signal(|| false);

    let loader = client.clone();
    let loaded = use_resource(move || {
        let client = loader.clone();
        async move {
            match client.list_content().await {
                Ok(list) => content.set(list),
                Err(e) => {
                    tracing::warn!("failed to load content: {e}");
                    error.set(Some(e.user_message("Failed to load content")));
                }
            }
        }
    });

    let confirm_delete = move |_| {
        let Some(id) = pending_delete() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            deleting.set(true);
            match client.delete_content(id).await {
                Ok(_) => {
                    remove_by_id(&mut content.write(), id);
                    tracing::info!(id, "content deleted");
                }
                Err(e) => error.set(Some(e.user_message("Failed to delete content"))),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    if loaded.read().is_none() {
        return rsx! { Spinner {} };
    }

    let visible = filter().apply(&content.read());

    rsx! {
        div {
            class: "container mx-auto px-4 py-12",
            div {
                class: "flex justify-between items-center mb-8",
                h1 { class: "text-4xl font-bold text-green-700", "📝 Manage Content" }
                Link { to: Route::AddContent {}, class: "btn-secondary", "➕ Add New Content" }
            }

            ErrorAlert { message: error() }

            div {
                class: "flex gap-2 mb-8 flex-wrap",
                button {
                    class: filter_button_class(filter() == Filter::All),
                    onclick: move |_| filter.set(Filter::All),
                    "All ({content.read().len()})"
                }
                for kind in ContentType::ALL {
                    button {
                        key: "{kind}",
                        class: filter_button_class(filter() == Filter::Only(kind)),
                        onclick: move |_| filter.set(Filter::Only(kind)),
                        "{kind.emoji()} {kind.label()} ({Filter::Only(kind).count(&content.read())})"
                    }
                }
            }

            if visible.is_empty() {
                div {
                    class: "bg-blue-50 p-8 rounded-lg text-center",
                    p { class: "text-gray-600 text-lg", "No content yet" }
                    Link { to: Route::AddContent {}, class: "btn-primary mt-4 inline-block", "Add Your First Content" }
                }
            } else {
                div {
                    class: "space-y-4",
                    for item in visible {
                        div {
                            key: "{item.id}",
                            class: "card p-6 flex flex-col md:flex-row md:items-start md:justify-between gap-4",
                            div {
                                class: "flex-1",
                                h3 { class: "text-xl font-bold text-green-700 mb-1", "{item.title}" }
                                p { class: "text-gray-600 text-sm mb-2", {excerpt(&item.description, EXCERPT_CHARS)} }
                                p { class: "text-xs text-gray-500", {meta_line(&item)} }
                            }
                            div {
                                class: "flex gap-2",
                                Link {
                                    to: Route::EditContent { id: item.id },
                                    class: "btn-primary text-center py-1 text-sm",
                                    Icon { icon: FaPen, width: 12, height: 12, fill: "currentColor" }
                                    " Edit"
                                }
                                button {
                                    class: "bg-red-500 hover:bg-red-600 text-white px-3 py-1 rounded text-sm transition",
                                    onclick: move |_| pending_delete.set(Some(item.id)),
                                    Icon { icon: FaTrash, width: 12, height: 12, fill: "currentColor" }
                                    " Delete"
                                }
                            }
                        }
                    }
                }
            }
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                title: "Delete content",
                message: "Are you sure you want to delete this content?",
                busy: deleting(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

/// Add form when `id` is `None`, edit form otherwise.
#[component]
fn ContentEditor(id: Option<i64>) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut content_type = use_signal(|| ContentDraft::default().content_type);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let loader = client.clone();
    let prefill = use_resource(move || {
        let client = loader.clone();
        async move {
            let Some(id) = id else {
                return;
            };
            match client.list_content().await {
                Ok(list) => match find_by_id(&list, id) {
                    Some(item) => {
                        content_type.set(item.content_type);
                        title.set(item.title.clone());
                        description.set(item.description.clone());
                    }
                    None => error.set(Some("Content not found".to_string())),
                },
                Err(e) => error.set(Some(e.user_message("Failed to load content"))),
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let draft = ContentDraft {
                content_type: content_type(),
                title: title(),
                description: description(),
            };

            saving.set(true);
            let result = match id {
                Some(id) => client
                    .edit_content(id, &draft)
                    .await
                    .map(|_| "Content updated successfully!"),
                None => client
                    .add_content(&draft)
                    .await
                    .map(|_| "Content added successfully!"),
            };
            saving.set(false);

            match result {
                Ok(message) => {
                    success.set(Some(message.to_string()));
                    redirect_after(nav, "/admin/content", REDIRECT_DELAY);
                }
                Err(e) => error.set(Some(e.user_message("Failed to save content"))),
            }
        });
    };

    if id.is_some() && prefill.read().is_none() {
        return rsx! { Spinner {} };
    }

    rsx! {
        div {
            class: "container mx-auto px-4 py-12",
            div {
                class: "max-w-2xl mx-auto",
                h1 {
                    class: "text-4xl font-bold text-green-700 mb-8",
                    if id.is_some() { "✏️ Edit Content" } else { "➕ Add New Content" }
                }

                ErrorAlert { message: error() }
                if let Some(message) = success() {
                    Alert { kind: AlertKind::Success, message }
                }

                form {
                    onsubmit: handle_submit,
                    class: "card p-8 space-y-6",
                    div {
                        label { class: "form-label", "Content Type *" }
                        select {
                            class: "form-input",
                            value: "{content_type}",
                            onchange: move |evt: FormEvent| {
                                if let Ok(picked) = evt.value().parse::<ContentType>() {
                                    content_type.set(picked);
                                }
                            },
                            for kind in ContentType::ALL {
                                option {
                                    key: "{kind}",
                                    value: "{kind}",
                                    selected: kind == content_type(),
                                    "{kind.emoji()} {kind.label()}"
                                }
                            }
                        }
                    }
                    TextField { label: "Title *", value: title, placeholder: "Content title", required: true }
                    TextArea {
                        label: "Description *",
                        value: description,
                        rows: 8,
                        placeholder: "Detailed description",
                        required: true,
                    }
                    div {
                        class: "flex gap-4",
                        button {
                            r#type: "submit",
                            class: "btn-primary flex-1",
                            disabled: saving() || success().is_some(),
                            if saving() { "Saving..." } else if id.is_some() { "Update Content" } else { "Add Content" }
                        }
                        button {
                            r#type: "button",
                            class: "flex-1 bg-gray-300 hover:bg-gray-400 text-gray-800 py-2 rounded-lg font-semibold",
                            onclick: move |_| {
                                nav.push(Route::ManageContent {});
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_line() {
        let item = ContentItem {
            id: 4,
            content_type: ContentType::Event,
            title: "Cattle fair".to_string(),
            description: String::new(),
            created_by: Some(1),
            created_by_name: Some("Admin".to_string()),
            created_at: Some("2024-03-10T09:00:00.000Z".to_string()),
        };
        assert_eq!(meta_line(&item), "📅 EVENT | By: Admin | 3/10/2024");

        let bare = ContentItem {
            created_by_name: None,
            created_at: None,
            ..item
        };
        assert_eq!(meta_line(&bare), "📅 EVENT");
    }

    #[test]
    fn test_type_filter_counts_match_lists() {
        let items: Vec<ContentItem> = [
            ContentType::Event,
            ContentType::Festival,
            ContentType::Event,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, content_type)| ContentItem {
            id: i as i64,
            content_type,
            title: String::new(),
            description: String::new(),
            created_by: None,
            created_by_name: None,
            created_at: None,
        })
        .collect();

        let events = Filter::Only(ContentType::Event);
        assert_eq!(events.count(&items), events.apply(&items).len());
        assert_eq!(events.count(&items), 2);
        assert_eq!(Filter::<ContentType>::All.apply(&items).len(), 3);
    }
}
