//! Cards shared by the public pages and the admin dashboard.

use dioxus::prelude::*;
use store::models::format_date;
use store::{ContentItem, Image};

use crate::auth::use_client;

#[component]
pub fn StatTile(value: String, label: String) -> Element {
    rsx! {
        div {
            class: "bg-green-50 p-4 rounded-lg text-center",
            h3 { class: "text-2xl font-bold text-green-700", "{value}" }
            p { class: "text-gray-600", "{label}" }
        }
    }
}

/// Gallery tile. `children` render below the caption (admin actions).
#[component]
pub fn ImageCard(image: Image, children: Element) -> Element {
    let client = use_client();
    let src = client.asset_url(&image.image_path);
    let description = image.description.clone().unwrap_or_default();

    rsx! {
        div {
            class: "card overflow-hidden hover:shadow-xl transition",
            img {
                src: "{src}",
                alt: "{image.title}",
                class: "w-full h-64 object-cover",
                loading: "lazy",
            }
            div {
                class: "p-4",
                h3 { class: "font-bold text-lg mb-2 text-green-700", "{image.title}" }
                if !description.is_empty() {
                    p { class: "text-gray-600 text-sm mb-2", "{description}" }
                }
                span {
                    class: "inline-block bg-green-100 text-green-800 px-2 py-1 rounded text-xs font-semibold",
                    "{image.category.label()}"
                }
                {children}
            }
        }
    }
}

/// Event, festival or announcement entry with its long-form date.
#[component]
pub fn ContentCard(item: ContentItem, #[props(default)] accent: String) -> Element {
    let date = item
        .created_at
        .as_deref()
        .map(|raw| format_date(raw, true))
        .unwrap_or_default();

    rsx! {
        div {
            class: "card p-6 border-l-4 {accent}",
            div {
                class: "flex items-start gap-3",
                span { class: "text-3xl", "{item.content_type.emoji()}" }
                div {
                    h3 { class: "text-xl font-bold text-gray-800 mb-2", "{item.title}" }
                    p { class: "text-gray-600 whitespace-pre-line", "{item.description}" }
                    if !date.is_empty() {
                        p { class: "text-sm text-gray-500 mt-3", "📅 {date}" }
                    }
                }
            }
        }
    }
}
