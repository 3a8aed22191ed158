use api::ApiError;
use dioxus::prelude::*;
use store::{ContentItem, ContentType};
use ui::{use_client, ContentCard, ErrorAlert, SiteClient, Spinner};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Events,
    Festivals,
    Announcements,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Events, Tab::Festivals, Tab::Announcements];

    fn content_type(self) -> ContentType {
        match self {
            Tab::Events => ContentType::Event,
            Tab::Festivals => ContentType::Festival,
            Tab::Announcements => ContentType::Announcement,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Tab::Events => "Events",
            Tab::Festivals => "Festivals",
            Tab::Announcements => "Announcements",
        }
    }

    /// Button text, e.g. `📅 Events (3)`.
    fn label(self, count: usize) -> String {
        format!("{} {} ({count})", self.content_type().emoji(), self.title())
    }

    fn empty_text(self) -> String {
        format!("No {} available yet.", self.title().to_lowercase())
    }
}

/// The three lists behind the tabs.
#[derive(Clone, Debug, Default, PartialEq)]
struct Listings {
    events: Vec<ContentItem>,
    festivals: Vec<ContentItem>,
    announcements: Vec<ContentItem>,
}

impl Listings {
    async fn fetch(client: &SiteClient) -> Result<Self, ApiError> {
        Ok(Self {
            events: client.content_by_type(ContentType::Event).await?,
            festivals: client.content_by_type(ContentType::Festival).await?,
            announcements: client.content_by_type(ContentType::Announcement).await?,
        })
    }

    fn for_tab(&self, tab: Tab) -> &[ContentItem] {
        match tab {
            Tab::Events => &self.events,
            Tab::Festivals => &self.festivals,
            Tab::Announcements => &self.announcements,
        }
    }
}

#[component]
pub fn Events() -> Element {
    let client = use_client();
    let mut active = use_signal(|| Tab::Events);

    let listings = use_resource(move || {
        let client = client.clone();
        async move { Listings::fetch(&client).await }
    });

    let Some(result) = listings.cloned() else {
        return rsx! { Spinner {} };
    };
    let (listings, error) = match result {
        Ok(listings) => (listings, None),
        Err(e) => {
            tracing::warn!("failed to load events: {e}");
            (Listings::default(), Some(e.user_message("Failed to load events")))
        }
    };
    let tab = active();
    let items = listings.for_tab(tab).to_vec();

    rsx! {
        div {
            class: "container mx-auto px-4 py-12",
            div {
                class: "max-w-4xl",
                h1 { class: "text-4xl font-bold text-green-700 mb-4", "Events & Celebrations" }
                p {
                    class: "text-gray-600 mb-8 text-lg",
                    "Stay updated with our latest events, festivals, and announcements"
                }

                ErrorAlert { message: error }

                div {
                    class: "flex gap-4 mb-8 flex-wrap",
                    for t in Tab::ALL {
                        button {
                            key: "{t.title()}",
                            class: if t == tab {
                                "px-6 py-2 rounded-lg font-semibold transition bg-green-700 text-white"
                            } else {
                                "px-6 py-2 rounded-lg font-semibold transition bg-gray-200 text-gray-800 hover:bg-gray-300"
                            },
                            onclick: move |_| active.set(t),
                            {t.label(listings.for_tab(t).len())}
                        }
                    }
                }

                h2 {
                    class: "text-3xl font-bold text-green-700 mb-8",
                    "{tab.content_type().emoji()} {tab.title()}"
                }
                if items.is_empty() {
                    div {
                        class: "bg-orange-50 p-8 rounded-lg text-center",
                        p { class: "text-gray-600 text-lg", {tab.empty_text()} }
                    }
                } else {
                    div {
                        class: "space-y-6",
                        for item in items {
                            ContentCard { key: "{item.id}", item, accent: "border-orange-500" }
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

    fn item(id: i64, content_type: ContentType) -> ContentItem {
        ContentItem {
            id,
            content_type,
            title: format!("Item {id}"),
            description: String::new(),
            created_by: None,
            created_by_name: None,
            created_at: None,
        }
    }

    #[test]
    fn test_tab_labels_count_their_list() {
        let listings = Listings {
            events: vec![item(1, ContentType::Event), item(2, ContentType::Event)],
            festivals: vec![],
            announcements: vec![item(3, ContentType::Announcement)],
        };

        let labels: Vec<String> = Tab::ALL
            .iter()
            .map(|t| t.label(listings.for_tab(*t).len()))
            .collect();
        assert_eq!(
            labels,
            vec!["📅 Events (2)", "🎉 Festivals (0)", "📢 Announcements (1)"]
        );
    }

    #[test]
    fn test_tabs_show_only_their_type() {
        let listings = Listings {
            events: vec![item(1, ContentType::Event)],
            festivals: vec![item(2, ContentType::Festival)],
            announcements: vec![],
        };
        for tab in Tab::ALL {
            assert!(listings
                .for_tab(tab)
                .iter()
                .all(|i| i.content_type == tab.content_type()));
        }
        assert_eq!(Tab::Announcements.empty_text(), "No announcements available yet.");
    }
}
