//! Public read-only endpoints. No token is needed, but one is sent when present.

use reqwest::Method;
use serde::Deserialize;
use store::{Category, ContentItem, ContentType, DashboardStats, Image, KeyValueStore, VillageInfo};

use crate::admin::{ContentEnvelope, ImagesEnvelope};
use crate::client::{ApiClient, OnUnauthorized};
use crate::error::ApiError;

#[derive(Deserialize)]
struct VillageInfoEnvelope {
    #[serde(default, rename = "villageInfo")]
    village_info: Option<VillageInfo>,
}

impl<S: KeyValueStore> ApiClient<S> {
    /// Gallery images, optionally narrowed to one category by the server.
    pub async fn public_images(&self, category: Option<Category>) -> Result<Vec<Image>, ApiError> {
        let mut request = self.request(Method::GET, "/content/images");
        if let Some(category) = category {
            request = request.query(&[("category", category.as_str())]);
        }
        let envelope: ImagesEnvelope = self
            .send_json(request, OnUnauthorized::EvictAndRedirect)
            .await?;
        Ok(envelope.images)
    }

    pub async fn content_by_type(&self, content_type: ContentType) -> Result<Vec<ContentItem>, ApiError> {
        let envelope: ContentEnvelope = self
            .send_json(
                self.request(Method::GET, &format!("/content/content/{content_type}")),
                OnUnauthorized::EvictAndRedirect,
            )
            .await?;
        Ok(envelope.content)
    }

    /// Village facts. `None` when the backend has none on record.
    pub async fn village_info(&self) -> Result<Option<VillageInfo>, ApiError> {
        let envelope: VillageInfoEnvelope = self
            .send_json(
                self.request(Method::GET, "/content/village-info"),
                OnUnauthorized::EvictAndRedirect,
            )
            .await?;
        Ok(envelope.village_info)
    }

    pub async fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.send_json(
            self.request(Method::GET, "/content/stats"),
            OnUnauthorized::EvictAndRedirect,
        )
        .await
    }
}
