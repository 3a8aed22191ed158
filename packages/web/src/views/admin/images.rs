use api::{ImageDetails, ImageUpload};
use dioxus::prelude::*;
use store::filter::{find_by_id, remove_by_id};
use store::models::format_date;
use store::{Category, Image};
use ui::icons::{FaPen, FaTrash};
use ui::timer::{redirect_after, REDIRECT_DELAY};
use ui::{
    use_client, Access, Alert, AlertKind, ConfirmDialog, ErrorAlert, Icon, ImageCard, Protected,
    Spinner, TextArea, TextField,
};

use crate::Route;

#[component]
pub fn ManageImages() -> Element {
    rsx! {
        Protected { access: Access::Admin, ImageList {} }
    }
}

#[component]
pub fn AddImage() -> Element {
    rsx! {
        Protected { access: Access::Admin, ImageEditor { id: None } }
    }
}

#[component]
pub fn EditImage(id: i64) -> Element {
    rsx! {
        Protected { access: Access::Admin, ImageEditor { id: Some(id) } }
    }
}

#[component]
fn ImageList() -> Element {
    let client = use_client();
    let mut images = use_signal(Vec::<Image>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<i64>::None);
    let mut deleting = use_signal(|| false);

    let loader = client.clone();
    let loaded = use_resource(move || {
        let client = loader.clone();
        async move {
            match client.list_images().await {
                Ok(list) => images.set(list),
                Err(e) => {
                    tracing::warn!("failed to load images: {e}");
                    error.set(Some(e.user_message("Failed to load images")));
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
            match client.delete_image(id).await {
                Ok(_) => {
                    remove_by_id(&mut images.write(), id);
                    tracing::info!(id, "image deleted");
                }
                Err(e) => error.set(Some(e.user_message("Failed to delete image"))),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    if loaded.read().is_none() {
        return rsx! { Spinner {} };
    }

    rsx! {
        div {
            class: "container mx-auto px-4 py-12",
            div {
                class: "flex justify-between items-center mb-8",
                h1 { class: "text-4xl font-bold text-green-700", "📸 Manage Images" }
                Link { to: Route::AddImage {}, class: "btn-secondary", "➕ Add New Image" }
            }

            ErrorAlert { message: error() }

            if images.read().is_empty() {
                div {
                    class: "bg-blue-50 p-8 rounded-lg text-center",
                    p { class: "text-gray-600 text-lg", "No images yet" }
                    Link { to: Route::AddImage {}, class: "btn-primary mt-4 inline-block", "Add Your First Image" }
                }
            } else {
                div {
                    class: "grid grid-responsive",
                    for image in images() {
                        ImageCard {
                            key: "{image.id}",
                            image: image.clone(),
                            p {
                                class: "text-xs text-gray-500 my-4",
                                "By: {image.uploaded_by_name.clone().unwrap_or_default()} | "
                                {image.created_at.as_deref().map(|d| format_date(d, false)).unwrap_or_default()}
                            }
                            div {
                                class: "flex gap-2",
                                Link {
                                    to: Route::EditImage { id: image.id },
                                    class: "flex-1 btn-primary text-center py-1 text-sm",
                                    Icon { icon: FaPen, width: 12, height: 12, fill: "currentColor" }
                                    " Edit"
                                }
                                button {
                                    class: "flex-1 bg-red-500 hover:bg-red-600 text-white px-3 py-1 rounded text-sm transition",
                                    onclick: move |_| pending_delete.set(Some(image.id)),
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
                title: "Delete image",
                message: "Are you sure you want to delete this image?",
                busy: deleting(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

/// Extension-based MIME type for the multipart part.
fn mime_for(file_name: &str) -> Option<String> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => return None,
    };
    Some(mime.to_string())
}

/// Add form when `id` is `None`, edit form otherwise.
#[component]
fn ImageEditor(id: Option<i64>) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(Category::default);
    let mut file = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Editing starts from the admin listing's copy
    let loader = client.clone();
    let prefill = use_resource(move || {
        let client = loader.clone();
        async move {
            let Some(id) = id else {
                return;
            };
            match client.list_images().await {
                Ok(list) => match find_by_id(&list, id) {
                    Some(image) => {
                        title.set(image.title.clone());
                        description.set(image.description.clone().unwrap_or_default());
                        category.set(image.category);
                    }
                    None => error.set(Some("Image not found".to_string())),
                },
                Err(e) => error.set(Some(e.user_message("Failed to load image"))),
            }
        }
    });

    let pick_file = move |evt: FormEvent| async move {
        let Some(picked) = evt.files().into_iter().next() else {
            file.set(None);
            return;
        };
        let name = picked.name();
        match picked.read_bytes().await {
            Ok(bytes) => file.set(Some((name, bytes.to_vec()))),
            Err(e) => {
                tracing::warn!("could not read {name}: {e}");
                error.set(Some("Could not read the selected file".to_string()));
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let details = ImageDetails {
                title: title(),
                description: description(),
                category: category(),
            };

            saving.set(true);
            let result = match id {
                Some(id) => client
                    .edit_image(id, &details)
                    .await
                    .map(|_| "Image updated successfully!"),
                None => {
                    let (file_name, bytes) = file().unwrap_or_default();
                    let upload = ImageUpload {
                        details,
                        mime_type: mime_for(&file_name),
                        file_name,
                        bytes,
                    };
                    client
                        .add_image(&upload)
                        .await
                        .map(|_| "Image uploaded successfully!")
                }
            };
            saving.set(false);

            match result {
                Ok(message) => {
                    success.set(Some(message.to_string()));
                    redirect_after(nav, "/admin/images", REDIRECT_DELAY);
                }
                Err(e) => error.set(Some(e.user_message("Failed to save image"))),
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
                    if id.is_some() { "✏️ Edit Image" } else { "➕ Add New Image" }
                }

                ErrorAlert { message: error() }
                if let Some(message) = success() {
                    Alert { kind: AlertKind::Success, message }
                }

                form {
                    onsubmit: handle_submit,
                    class: "card p-8 space-y-6",
                    TextField { label: "Title *", value: title, placeholder: "Image title", required: true }
                    TextArea { label: "Description", value: description, rows: 4, placeholder: "Image description" }
                    div {
                        label { class: "form-label", "Category" }
                        select {
                            class: "form-input",
                            value: "{category}",
                            onchange: move |evt: FormEvent| {
                                if let Ok(picked) = evt.value().parse::<Category>() {
                                    category.set(picked);
                                }
                            },
                            for option in [Category::General, Category::Agriculture, Category::Cultural, Category::Events] {
                                option {
                                    key: "{option}",
                                    value: "{option}",
                                    selected: option == category(),
                                    "{option.label()}"
                                }
                            }
                        }
                    }
                    if id.is_none() {
                        div {
                            label { class: "form-label", "Image *" }
                            input {
                                class: "form-input",
                                r#type: "file",
                                accept: "image/*",
                                onchange: pick_file,
                            }
                            if let Some((name, bytes)) = file() {
                                p { class: "text-sm text-gray-500 mt-2", "{name} ({bytes.len() / 1024} KB)" }
                            }
                        }
                    }
                    div {
                        class: "flex gap-4",
                        button {
                            r#type: "submit",
                            class: "btn-primary flex-1",
                            disabled: saving() || success().is_some(),
                            if saving() { "Saving..." } else if id.is_some() { "Update Image" } else { "Upload Image" }
                        }
                        button {
                            r#type: "button",
                            class: "flex-1 bg-gray-300 hover:bg-gray-400 text-gray-800 py-2 rounded-lg font-semibold",
                            onclick: move |_| {
                                nav.push(Route::ManageImages {});
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
    use super::mime_for;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_for("paddy.JPG").as_deref(), Some("image/jpeg"));
        assert_eq!(mime_for("rangoli.png").as_deref(), Some("image/png"));
        assert_eq!(mime_for("notes.txt"), None);
        assert_eq!(mime_for("no-extension"), None);
    }
}
