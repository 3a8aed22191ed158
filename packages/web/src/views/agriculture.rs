use dioxus::prelude::*;
use store::ContentType;
use ui::{use_client, use_site, ContentCard, ErrorAlert, Spinner};

#[component]
pub fn Agriculture() -> Element {
    let client = use_client();
    let site = use_site().site;

    let content = use_resource(move || {
        let client = client.clone();
        async move { client.content_by_type(ContentType::Agriculture).await }
    });

    let Some(result) = content.cloned() else {
        return rsx! { Spinner {} };
    };
    let (items, error) = match result {
        Ok(items) => (items, None),
        Err(e) => {
            tracing::warn!("failed to load agriculture content: {e}");
            (Vec::new(), Some(e.user_message("Failed to load agriculture information")))
        }
    };

    rsx! {
        div {
            class: "container mx-auto px-4 py-12",
            div {
                class: "max-w-4xl",
                h1 { class: "text-4xl font-bold text-green-700 mb-4", "🌾 Agriculture" }
                p {
                    class: "text-gray-600 mb-8 text-lg",
                    "Discover the agricultural practices and heritage of {site.name}"
                }

                ErrorAlert { message: error }

                if items.is_empty() {
                    div {
                        class: "bg-blue-50 p-8 rounded-lg text-center mb-8",
                        p { class: "text-gray-600 text-lg", "No agriculture information available yet." }
                        p { class: "text-gray-600 mt-2", "Please check back soon for updates!" }
                    }
                    DefaultPanels { village: site.name.clone() }
                } else {
                    div {
                        class: "space-y-8",
                        for item in items {
                            ContentCard { key: "{item.id}", item, accent: "border-green-700" }
                        }
                    }
                }
            }
        }
    }
}

/// Shown until the admins publish agriculture content.
#[component]
fn DefaultPanels(village: String) -> Element {
    let panels = [
        (
            "Traditional Farming",
            format!(
                "{village} has a rich tradition of agriculture with farmers practicing sustainable \
                 and organic farming methods passed down through generations."
            ),
        ),
        (
            "Main Crops",
            "Our village predominantly grows rice, sugarcane, and various vegetables, taking \
             advantage of the fertile soil and favorable climate."
                .to_string(),
        ),
        (
            "Sustainability",
            "We are committed to sustainable agricultural practices that preserve our environment \
             for future generations while maintaining productivity."
                .to_string(),
        ),
    ];

    rsx! {
        div {
            class: "space-y-8",
            for (title, body) in panels {
                div {
                    key: "{title}",
                    class: "card p-6 border-l-4 border-green-700",
                    h2 { class: "text-2xl font-bold text-green-700 mb-3", "{title}" }
                    p { class: "text-gray-700", "{body}" }
                }
            }
        }
    }
}
