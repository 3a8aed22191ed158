//! # Domain models for the village site
//!
//! Defines the REST resources the frontend renders. The server is the sole
//! source of truth; these types only mirror its JSON so they can be decoded,
//! cached in the session and shown.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A registered account. The password never reaches the client. |
//! | [`Role`] | `user` or `admin`; unknown roles decode as `user`. |
//! | [`Image`] | A gallery image referenced by a server-relative `image_path`. |
//! | [`Category`] | Gallery category (`general`, `agriculture`, `cultural`, `events`). |
//! | [`ContentItem`] | An event, festival, agriculture note or announcement. |
//! | [`ContentType`] | Kind of a content item, also used as a URL segment. |
//! | [`VillageInfo`] | Facts about the village for the about page. |
//! | [`DashboardStats`] | Aggregate counts plus the latest announcements. |
//!
//! ## Helper functions
//!
//! - [`format_date`]: renders server timestamps as `January 5, 2024` or `1/5/2024`.
//! - [`excerpt`]: shortens a description to a character budget.
//! - [`current_year`]: year shown in the footer.
//! - [`lenient_list`]: `deserialize_with` helper that drops list rows the client cannot decode.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role deciding which capability set a session has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Gallery category of an image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Agriculture,
    Cultural,
    Events,
    #[default]
    #[serde(other)]
    General,
}

impl Category {
    /// Every category, in the order the gallery filter shows them.
    pub const ALL: [Category; 4] = [
        Category::Agriculture,
        Category::Cultural,
        Category::Events,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Agriculture => "agriculture",
            Category::Cultural => "cultural",
            Category::Events => "events",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Agriculture => "Agriculture",
            Category::Cultural => "Cultural",
            Category::Events => "Events",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Category::General),
            "agriculture" => Ok(Category::Agriculture),
            "cultural" => Ok(Category::Cultural),
            "events" => Ok(Category::Events),
            other => Err(format!("Unknown category: {other}")),
        }
    }
}

/// An uploaded image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Category,
    pub image_path: String,
    #[serde(default)]
    pub uploaded_by: Option<i64>,
    /// Uploader's name, joined in by the admin listing.
    #[serde(default)]
    pub uploaded_by_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Kind of a content item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Event,
    Festival,
    Agriculture,
    Announcement,
}

impl ContentType {
    /// Every content type, in the order the admin filter shows them.
    pub const ALL: [ContentType; 4] = [
        ContentType::Agriculture,
        ContentType::Festival,
        ContentType::Event,
        ContentType::Announcement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Event => "event",
            ContentType::Festival => "festival",
            ContentType::Agriculture => "agriculture",
            ContentType::Announcement => "announcement",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Event => "Event",
            ContentType::Festival => "Festival",
            ContentType::Agriculture => "Agriculture",
            ContentType::Announcement => "Announcement",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ContentType::Event => "📅",
            ContentType::Festival => "🎉",
            ContentType::Agriculture => "🌾",
            ContentType::Announcement => "📢",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "event" => Ok(ContentType::Event),
            "festival" => Ok(ContentType::Festival),
            "agriculture" => Ok(ContentType::Agriculture),
            "announcement" => Ok(ContentType::Announcement),
            other => Err(format!("Unknown content type: {other}")),
        }
    }
}

/// A piece of editorial content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: i64,
    pub content_type: ContentType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_by: Option<i64>,
    /// Author's name, joined in by the admin listing.
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Facts about the village. Every field is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VillageInfo {
    pub description: Option<String>,
    pub mandal: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub population: Option<u64>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// One row of a grouped count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountRow {
    #[serde(deserialize_with = "count_from_number_or_string")]
    pub count: u64,
}

/// Site-wide statistics from `/content/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    #[serde(rename = "totalUsers", deserialize_with = "count_from_number_or_string")]
    pub total_users: u64,
    pub images: Vec<CountRow>,
    pub content: Vec<CountRow>,
    #[serde(rename = "latestAnnouncements", deserialize_with = "lenient_list")]
    pub latest_announcements: Vec<ContentItem>,
}

impl DashboardStats {
    /// Count of the first image group, as shown on the home page.
    pub fn image_count(&self) -> u64 {
        self.images.first().map(|row| row.count).unwrap_or(0)
    }

    /// Count of the first content group, as shown on the home page.
    pub fn content_count(&self) -> u64 {
        self.content.first().map(|row| row.count).unwrap_or(0)
    }
}

// SQL drivers hand aggregate counts back as strings.
fn count_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
        Null(Option<()>),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        Count::Null(_) => Ok(0),
    }
}

/// Decode a JSON array element by element, skipping rows that do not fit `T`.
///
/// A `null` array decodes as empty. Skipped rows are logged.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let rows = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("skipping list row: {e}");
                None
            }
        })
        .collect())
}

/// Render a server timestamp for display.
///
/// `long` gives `January 5, 2024`, otherwise `1/5/2024`. Text that is not a
/// recognised timestamp is returned unchanged.
pub fn format_date(raw: &str, long: bool) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .map(|dt| dt.date())
                .ok()
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.date())
                .ok()
        })
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());

    match date {
        Some(d) if long => d.format("%B %-d, %Y").to_string(),
        Some(d) => d.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// The current calendar year, for copyright lines.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Shorten `text` to at most `max_chars` characters, appending `...` when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_decoding() {
        let admin: User = serde_json::from_str(
            r#"{"id":1,"name":"Sita","email":"sita@example.com","role":"admin","created_at":"2024-01-05T10:00:00.000Z"}"#,
        )
        .unwrap();
        assert!(admin.is_admin());

        let unknown: User =
            serde_json::from_str(r#"{"id":2,"name":"Ravi","email":"ravi@example.com","role":"moderator"}"#)
                .unwrap();
        assert_eq!(unknown.role, Role::User);
        assert!(!unknown.is_admin());
        assert!(unknown.created_at.is_none());
    }

    #[test]
    fn test_image_unknown_category_falls_back_to_general() {
        let image: Image = serde_json::from_str(
            r#"{"id":3,"title":"Paddy","category":"landscape","image_path":"uploads/paddy.jpg"}"#,
        )
        .unwrap();
        assert_eq!(image.category, Category::General);
        assert!(image.description.is_none());
    }

    #[test]
    fn test_content_type_parsing() {
        assert_eq!("festival".parse::<ContentType>(), Ok(ContentType::Festival));
        assert!("blog".parse::<ContentType>().is_err());
        assert_eq!(ContentType::Announcement.to_string(), "announcement");
        assert_eq!("cultural".parse::<Category>(), Ok(Category::Cultural));
    }

    #[test]
    fn test_stats_counts_accept_strings_and_numbers() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{
                "totalUsers": "12",
                "images": [{"count": 7}],
                "content": [{"count": "3"}],
                "latestAnnouncements": [
                    {"id": 9, "content_type": "announcement", "title": "Gram sabha", "description": "Sunday"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.image_count(), 7);
        assert_eq!(stats.content_count(), 3);
        assert_eq!(stats.latest_announcements.len(), 1);
    }

    #[test]
    fn test_unknown_content_type_skips_only_that_row() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{
                "totalUsers": 4,
                "latestAnnouncements": [
                    {"id": 9, "content_type": "announcement", "title": "Gram sabha"},
                    {"id": 10, "content_type": "notice", "title": "Water supply"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(stats.total_users, 4);
        assert_eq!(stats.latest_announcements.len(), 1);
        assert_eq!(stats.latest_announcements[0].id, 9);

        let empty: DashboardStats =
            serde_json::from_str(r#"{"latestAnnouncements": null}"#).unwrap();
        assert!(empty.latest_announcements.is_empty());
    }

    #[test]
    fn test_roles_and_categories_serialize_lowercase() {
        let admin = User {
            role: Role::Admin,
            ..serde_json::from_str::<User>(r#"{"id":1,"name":"Sita","email":"sita@example.com"}"#).unwrap()
        };
        assert_eq!(admin.role.as_str(), "admin");
        let json = serde_json::to_value(&admin).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(serde_json::to_value(Category::General).unwrap(), "general");
        assert_eq!(serde_json::from_str::<Category>(r#""events""#).unwrap(), Category::Events);
    }

    #[test]
    fn test_stats_missing_fields_default_to_zero() {
        let stats: DashboardStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.image_count(), 0);
        assert!(stats.latest_announcements.is_empty());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05T10:00:00.000Z", true), "January 5, 2024");
        assert_eq!(format_date("2024-01-05T10:00:00.000Z", false), "1/5/2024");
        assert_eq!(format_date("2023-11-20 08:15:00", true), "November 20, 2023");
        assert_eq!(format_date("2023-11-20", false), "11/20/2023");
        assert_eq!(format_date("yesterday", true), "yesterday");
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 100), "short");
        assert_eq!(excerpt("abcdef", 3), "abc...");
        // Multi-byte characters are never split
        assert_eq!(excerpt("పండుగ వేడుక", 3), "పండ...");
    }
}
