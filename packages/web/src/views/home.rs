use dioxus::prelude::*;
use store::models::format_date;
use ui::{use_client, use_site, ErrorAlert, Spinner, StatTile};

use crate::Route;

const FEATURES: [(&str, &str, &str, &str); 3] = [
    (
        "🌾",
        "Agriculture",
        "Learn about our farming practices and agricultural heritage.",
        "/agriculture",
    ),
    (
        "🎉",
        "Cultural Events",
        "Discover our festivals, celebrations, and community gatherings.",
        "/events",
    ),
    (
        "📸",
        "Photo Gallery",
        "Browse beautiful images of our village, nature, and people.",
        "/gallery",
    ),
];

#[component]
pub fn Home() -> Element {
    let client = use_client();
    let site = use_site().site;

    let stats = use_resource(move || {
        let client = client.clone();
        async move { client.stats().await }
    });

    let Some(result) = stats.cloned() else {
        return rsx! { Spinner {} };
    };
    let (stats, error) = match result {
        Ok(stats) => (stats, None),
        Err(e) => {
            tracing::warn!("failed to load stats: {e}");
            (Default::default(), Some(e.user_message("Failed to load content")))
        }
    };

    rsx! {
        div {
            class: "bg-gray-50",
            div {
                class: "bg-gradient-to-r from-green-700 to-green-600 text-white py-16 md:py-24",
                div {
                    class: "container mx-auto px-4 text-center",
                    h1 { class: "text-4xl md:text-5xl font-bold mb-4", "🌾 Welcome to {site.name}" }
                    p { class: "text-lg md:text-xl mb-8 text-green-100", "{site.tagline}" }
                    div {
                        class: "flex gap-4 justify-center flex-wrap",
                        Link { to: Route::Gallery {}, class: "btn-secondary", "View Gallery" }
                        Link { to: Route::Agriculture {}, class: "btn-outline", "Learn About Agriculture" }
                    }
                }
            }

            div {
                class: "container mx-auto px-4 py-12",
                ErrorAlert { message: error }
                div {
                    class: "bg-white rounded-lg shadow-lg p-8 mb-12",
                    h2 { class: "text-3xl font-bold mb-4 text-green-700", "About Our Village" }
                    p {
                        class: "text-gray-700 text-lg mb-4",
                        "{site.name} is a beautiful agricultural village located in {site.mandal} Mandal, "
                        "{site.district} District, {site.state}. Our village is known for its fertile lands, "
                        "traditional farming practices, and vibrant cultural heritage. We take pride in our "
                        "agricultural produce and the tight-knit community that celebrates festivals and "
                        "cultural events throughout the year."
                    }
                    div {
                        class: "grid grid-cols-2 md:grid-cols-4 gap-4 mt-8",
                        StatTile { value: stats.total_users.to_string(), label: "Registered Users" }
                        StatTile { value: stats.image_count().to_string(), label: "Images" }
                        StatTile { value: stats.content_count().to_string(), label: "Events" }
                        StatTile { value: "100%", label: "Community" }
                    }
                }
            }

            if !stats.latest_announcements.is_empty() {
                div {
                    class: "container mx-auto px-4 py-12 bg-white rounded-lg shadow-lg my-8",
                    h2 { class: "text-3xl font-bold mb-8 text-green-700", "📢 Latest Announcements" }
                    div {
                        class: "space-y-4",
                        for announcement in stats.latest_announcements.iter() {
                            div {
                                key: "{announcement.id}",
                                class: "border-l-4 border-orange-500 pl-4 py-2 bg-orange-50 rounded",
                                h3 { class: "font-bold text-lg text-gray-800", "{announcement.title}" }
                                p { class: "text-gray-600 mt-1", "{announcement.description}" }
                                if let Some(created) = announcement.created_at.as_deref() {
                                    p { class: "text-sm text-gray-500 mt-2", {format_date(created, false)} }
                                }
                            }
                        }
                    }
                    Link { to: Route::Events {}, class: "btn-primary mt-6 inline-block", "View All Events" }
                }
            }

            div {
                class: "container mx-auto px-4 py-12",
                h2 { class: "text-3xl font-bold mb-8 text-center text-green-700", "What We Offer" }
                div {
                    class: "grid grid-responsive",
                    for (emoji, title, blurb, to) in FEATURES {
                        div {
                            key: "{to}",
                            class: "card p-6 text-center hover:shadow-xl",
                            div { class: "text-4xl mb-4", "{emoji}" }
                            h3 { class: "text-xl font-bold mb-2 text-green-700", "{title}" }
                            p { class: "text-gray-600", "{blurb}" }
                            Link {
                                to,
                                class: "text-green-700 hover:text-green-900 font-semibold mt-4 inline-block",
                                "Read More →"
                            }
                        }
                    }
                }
            }
        }
    }
}
