use api::ApiError;
use dioxus::prelude::*;
use store::{ContentItem, DashboardStats, Image};
use ui::{use_client, Access, ErrorAlert, Protected, SiteClient, Spinner};

use crate::Route;

const RECENT_IMAGES: usize = 6;
const RECENT_CONTENT: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
struct Overview {
    stats: DashboardStats,
    images: Vec<Image>,
    content: Vec<ContentItem>,
}

impl Overview {
    async fn fetch(client: &SiteClient) -> Result<Self, ApiError> {
        Ok(Self {
            stats: client.stats().await?,
            images: client.list_images().await?,
            content: client.list_content().await?,
        })
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        Protected { access: Access::Admin, Dashboard {} }
    }
}

#[component]
fn Dashboard() -> Element {
    let client = use_client();

    let fetcher = client.clone();
    let overview = use_resource(move || {
        let client = fetcher.clone();
        async move { Overview::fetch(&client).await }
    });

    let Some(result) = overview.cloned() else {
        return rsx! { Spinner {} };
    };
    let (overview, error) = match result {
        Ok(overview) => (overview, None),
        Err(e) => {
            tracing::warn!("failed to load dashboard: {e}");
            (Overview::default(), Some(e.user_message("Failed to load dashboard data")))
        }
    };

    rsx! {
        div {
            class: "container mx-auto px-4 py-12",
            h1 { class: "text-4xl font-bold text-green-700 mb-2", "🛠️ Admin Dashboard" }
            p { class: "text-gray-600 mb-8", "Manage village content and media" }

            ErrorAlert { message: error }

            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-8",
                div {
                    class: "card p-6 text-center bg-gradient-to-br from-blue-50 to-blue-100",
                    h3 { class: "text-3xl font-bold text-blue-700", "{overview.stats.total_users}" }
                    p { class: "text-gray-600", "Registered Users" }
                }
                div {
                    class: "card p-6 text-center bg-gradient-to-br from-green-50 to-green-100",
                    h3 { class: "text-3xl font-bold text-green-700", "{overview.images.len()}" }
                    p { class: "text-gray-600", "Total Images" }
                }
                div {
                    class: "card p-6 text-center bg-gradient-to-br from-orange-50 to-orange-100",
                    h3 { class: "text-3xl font-bold text-orange-700", "{overview.content.len()}" }
                    p { class: "text-gray-600", "Content Items" }
                }
                div {
                    class: "card p-6 text-center bg-gradient-to-br from-purple-50 to-purple-100",
                    h3 { class: "text-3xl font-bold text-purple-700", "{overview.stats.latest_announcements.len()}" }
                    p { class: "text-gray-600", "Announcements" }
                }
            }

            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-12",
                Link { to: Route::ManageImages {}, class: "btn-primary text-center py-4", "📸 Manage Images" }
                Link { to: Route::AddImage {}, class: "btn-secondary text-center py-4", "➕ Add Image" }
                Link { to: Route::ManageContent {}, class: "btn-primary text-center py-4", "📝 Manage Content" }
                Link { to: Route::AddContent {}, class: "btn-secondary text-center py-4", "➕ Add Content" }
            }

            div {
                class: "card p-6 mb-8",
                h2 { class: "text-2xl font-bold text-green-700 mb-4", "Recent Images" }
                if overview.images.is_empty() {
                    p { class: "text-gray-600", "No images yet" }
                } else {
                    div {
                        class: "grid grid-responsive",
                        for image in overview.images.iter().take(RECENT_IMAGES) {
                            div {
                                key: "{image.id}",
                                class: "border rounded-lg overflow-hidden",
                                img {
                                    src: client.asset_url(&image.image_path),
                                    alt: "{image.title}",
                                    class: "w-full h-40 object-cover",
                                }
                                div {
                                    class: "p-3",
                                    h3 { class: "font-bold text-sm", "{image.title}" }
                                    p { class: "text-xs text-gray-600", "{image.category.label()}" }
                                }
                            }
                        }
                    }
                }
                Link {
                    to: Route::ManageImages {},
                    class: "text-green-700 hover:text-green-900 font-semibold mt-4 inline-block",
                    "View All Images →"
                }
            }

            div {
                class: "card p-6",
                h2 { class: "text-2xl font-bold text-green-700 mb-4", "Recent Content" }
                if overview.content.is_empty() {
                    p { class: "text-gray-600", "No content yet" }
                } else {
                    div {
                        class: "space-y-3",
                        for item in overview.content.iter().take(RECENT_CONTENT) {
                            div {
                                key: "{item.id}",
                                class: "border-l-4 border-orange-500 pl-4 py-2 bg-orange-50",
                                h3 { class: "font-bold text-sm", "{item.title}" }
                                p { class: "text-xs text-gray-600 mt-1", "{item.content_type.emoji()} {item.content_type.label()}" }
                            }
                        }
                    }
                }
                Link {
                    to: Route::ManageContent {},
                    class: "text-green-700 hover:text-green-900 font-semibold mt-4 inline-block",
                    "View All Content →"
                }
            }
        }
    }
}
