use dioxus::prelude::*;
use store::{Category, Filter};
use ui::{use_client, ErrorAlert, ImageCard, Spinner};

fn filter_button_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-lg font-semibold transition bg-green-700 text-white"
    } else {
        "px-4 py-2 rounded-lg font-semibold transition bg-gray-200 text-gray-800 hover:bg-gray-300"
    }
}

#[component]
pub fn Gallery() -> Element {
    let client = use_client();
    let mut filter = use_signal(|| Filter::<Category>::All);

    let images = use_resource(move || {
        let client = client.clone();
        async move { client.public_images(None).await }
    });

    let Some(result) = images.cloned() else {
        return rsx! { Spinner {} };
    };
    let (images, error) = match result {
        Ok(images) => (images, None),
        Err(e) => {
            tracing::warn!("failed to load gallery: {e}");
            (Vec::new(), Some(e.user_message("Failed to load images")))
        }
    };
    let visible = filter().apply(&images);

    rsx! {
        div {
            class: "container mx-auto px-4 py-12",
            h1 { class: "text-4xl font-bold text-green-700 mb-4", "📸 Village Gallery" }
            p { class: "text-gray-600 mb-8", "Browse beautiful images from our village" }

            ErrorAlert { message: error }

            div {
                class: "flex gap-2 mb-8 flex-wrap",
                button {
                    class: filter_button_class(filter() == Filter::All),
                    onclick: move |_| filter.set(Filter::All),
                    "All"
                }
                for category in Category::ALL {
                    button {
                        key: "{category}",
                        class: filter_button_class(filter() == Filter::Only(category)),
                        onclick: move |_| filter.set(Filter::Only(category)),
                        "{category.label()}"
                    }
                }
            }

            if visible.is_empty() {
                div {
                    class: "text-center py-12",
                    p { class: "text-gray-600 text-lg", "No images found in this category" }
                }
            } else {
                div {
                    class: "grid grid-responsive",
                    for image in visible {
                        ImageCard { key: "{image.id}", image }
                    }
                }
            }
        }
    }
}
