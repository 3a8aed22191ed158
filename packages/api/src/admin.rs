//! Admin-only image and content management.
//!
//! Every call here carries the admin's bearer token; the backend answers
//! `403` for ordinary users, which surfaces as [`ApiError::Server`].

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;
use store::models::lenient_list;
use store::{ContentItem, Image, KeyValueStore};

use crate::client::{ApiClient, OnUnauthorized};
use crate::error::ApiError;
use crate::forms::{ContentDraft, ImageDetails, ImageUpload};

#[derive(Deserialize)]
pub(crate) struct ImagesEnvelope {
    #[serde(default, deserialize_with = "lenient_list")]
    pub(crate) images: Vec<Image>,
}

#[derive(Deserialize)]
pub(crate) struct ContentEnvelope {
    #[serde(default, deserialize_with = "lenient_list")]
    pub(crate) content: Vec<ContentItem>,
}

fn upload_form(upload: &ImageUpload) -> Result<Form, ApiError> {
    let mut file = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
    if let Some(mime) = &upload.mime_type {
        file = file
            .mime_str(mime)
            .map_err(|e| ApiError::Validation(format!("Unsupported file type: {e}")))?;
    }

    Ok(Form::new()
        .text("title", upload.details.title.trim().to_string())
        .text("description", upload.details.description.clone())
        .text("category", upload.details.category.as_str())
        .part("image", file))
}

impl<S: KeyValueStore> ApiClient<S> {
    pub async fn list_images(&self) -> Result<Vec<Image>, ApiError> {
        let envelope: ImagesEnvelope = self
            .send_json(
                self.request(Method::GET, "/admin/images"),
                OnUnauthorized::EvictAndRedirect,
            )
            .await?;
        Ok(envelope.images)
    }

    /// Upload a new image as `multipart/form-data`.
    pub async fn add_image(&self, upload: &ImageUpload) -> Result<Option<String>, ApiError> {
        upload.validate()?;
        let form = upload_form(upload)?;
        tracing::info!(
            file = %upload.file_name,
            bytes = upload.bytes.len(),
            category = %upload.details.category,
            "uploading image"
        );

        self.send_message(
            self.request(Method::POST, "/admin/images/add").multipart(form),
            OnUnauthorized::EvictAndRedirect,
        )
        .await
    }

    pub async fn edit_image(&self, id: i64, details: &ImageDetails) -> Result<Option<String>, ApiError> {
        details.validate()?;
        self.send_message(
            self.request(Method::PUT, &format!("/admin/images/{id}")).json(details),
            OnUnauthorized::EvictAndRedirect,
        )
        .await
    }

    pub async fn delete_image(&self, id: i64) -> Result<Option<String>, ApiError> {
        self.send_message(
            self.request(Method::DELETE, &format!("/admin/images/{id}")),
            OnUnauthorized::EvictAndRedirect,
        )
        .await
    }

    pub async fn list_content(&self) -> Result<Vec<ContentItem>, ApiError> {
        let envelope: ContentEnvelope = self
            .send_json(
                self.request(Method::GET, "/admin/content"),
                OnUnauthorized::EvictAndRedirect,
            )
            .await?;
        Ok(envelope.content)
    }

    pub async fn add_content(&self, draft: &ContentDraft) -> Result<Option<String>, ApiError> {
        draft.validate()?;
        self.send_message(
            self.request(Method::POST, "/admin/content/add").json(draft),
            OnUnauthorized::EvictAndRedirect,
        )
        .await
    }

    pub async fn edit_content(&self, id: i64, draft: &ContentDraft) -> Result<Option<String>, ApiError> {
        draft.validate()?;
        self.send_message(
            self.request(Method::PUT, &format!("/admin/content/{id}")).json(draft),
            OnUnauthorized::EvictAndRedirect,
        )
        .await
    }

    pub async fn delete_content(&self, id: i64) -> Result<Option<String>, ApiError> {
        self.send_message(
            self.request(Method::DELETE, &format!("/admin/content/{id}")),
            OnUnauthorized::EvictAndRedirect,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Multipart, Path};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use store::{Category, ContentType, MemoryStore, Session};

    use super::*;
    use crate::mock::{sample_user, serve};

    fn is_admin(headers: &HeaderMap) -> bool {
        headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer admin-token")
    }

    fn client_as(base: String, admin: bool) -> ApiClient<MemoryStore> {
        let client = ApiClient::new(base, MemoryStore::new());
        client.vault().save(&Session {
            token: if admin { "admin-token" } else { "user-token" }.to_string(),
            user: sample_user(admin),
        });
        client
    }

    async fn images_handler(headers: HeaderMap) -> (StatusCode, Json<Value>) {
        if !is_admin(&headers) {
            return (StatusCode::FORBIDDEN, Json(json!({ "error": "Admin access required" })));
        }
        (
            StatusCode::OK,
            Json(json!({ "images": [{
                "id": 7,
                "title": "Paddy fields",
                "description": null,
                "category": "agriculture",
                "image_path": "/uploads/paddy.jpg",
                "uploaded_by": 1,
                "uploaded_by_name": "Admin",
                "created_at": "2024-02-01T08:00:00.000Z"
            }] })),
        )
    }

    #[tokio::test]
    async fn test_list_images_requires_admin() {
        let router = Router::new().route("/admin/images", get(images_handler));
        let base = serve(router).await;

        let images = client_as(base.clone(), true).list_images().await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].category, Category::Agriculture);
        assert!(images[0].description.is_none());

        let user = client_as(base, false);
        let err = user.list_images().await.unwrap_err();
        assert_eq!(err.user_message("Failed to load images"), "Admin access required");
        // 403 is not an expired session
        assert!(user.vault().load().is_some());
    }

    #[tokio::test]
    async fn test_add_image_sends_multipart_fields() {
        let fields: Arc<Mutex<HashMap<String, String>>> = Arc::default();
        let sink = fields.clone();
        let router = Router::new().route(
            "/admin/images/add",
            post(move |mut multipart: Multipart| {
                let sink = sink.clone();
                async move {
                    while let Some(field) = multipart.next_field().await.unwrap() {
                        let name = field.name().unwrap_or_default().to_string();
                        let value = match field.file_name() {
                            Some(file) => {
                                let file = file.to_string();
                                let bytes = field.bytes().await.unwrap();
                                format!("{file}:{}", bytes.len())
                            }
                            None => field.text().await.unwrap(),
                        };
                        sink.lock().unwrap().insert(name, value);
                    }
                    (StatusCode::CREATED, Json(json!({ "message": "Image uploaded" })))
                }
            }),
        );
        let client = client_as(serve(router).await, true);

        let upload = ImageUpload {
            details: ImageDetails {
                title: " Pongal rangoli ".to_string(),
                description: "Courtyard art".to_string(),
                category: Category::Cultural,
            },
            file_name: "rangoli.png".to_string(),
            mime_type: Some("image/png".to_string()),
            bytes: vec![0x89, b'P', b'N', b'G'],
        };
        let message = client.add_image(&upload).await.unwrap();
        assert_eq!(message.as_deref(), Some("Image uploaded"));

        let fields = fields.lock().unwrap();
        assert_eq!(fields["title"], "Pongal rangoli");
        assert_eq!(fields["description"], "Courtyard art");
        assert_eq!(fields["category"], "cultural");
        assert_eq!(fields["image"], "rangoli.png:4");
    }

    #[tokio::test]
    async fn test_add_image_without_file_is_rejected_locally() {
        let client = client_as("http://127.0.0.1:9".to_string(), true);
        let upload = ImageUpload {
            details: ImageDetails {
                title: "No file".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            client.add_image(&upload).await,
            Err(ApiError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_edit_and_delete_target_the_item() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::default();
        let on_put = seen.clone();
        let on_delete = seen.clone();
        let router = Router::new().route(
            "/admin/content/{id}",
            delete(move |Path(id): Path<i64>| {
                let seen = on_delete.clone();
                async move {
                    seen.lock().unwrap().push(format!("delete {id}"));
                    Json(json!({ "message": "Content deleted" }))
                }
            })
            .put(move |Path(id): Path<i64>, Json(body): Json<Value>| {
                let seen = on_put.clone();
                async move {
                    seen.lock()
                        .unwrap()
                        .push(format!("put {id} {} {}", body["contentType"], body["title"]));
                    Json(json!({ "message": "Content updated" }))
                }
            }),
        );
        let client = client_as(serve(router).await, true);

        let draft = ContentDraft {
            content_type: ContentType::Announcement,
            title: "Water supply".to_string(),
            description: "Tank cleaning on Sunday".to_string(),
        };
        client.edit_content(12, &draft).await.unwrap();
        client.delete_content(12).await.unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "put 12 \"announcement\" \"Water supply\"".to_string(),
                "delete 12".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_list_content_tolerates_missing_fields() {
        let router = Router::new().route(
            "/admin/content",
            get(|| async {
                Json(json!({ "content": [{
                    "id": 3,
                    "content_type": "festival",
                    "title": "Ugadi",
                    "created_at": "2024-04-09T06:00:00.000Z"
                }] }))
            }),
        );
        let client = client_as(serve(router).await, true);

        let content = client.list_content().await.unwrap();
        assert_eq!(content[0].content_type, ContentType::Festival);
        assert_eq!(content[0].description, "");
    }

    #[tokio::test]
    async fn test_list_content_keeps_rows_around_unknown_type() {
        let router = Router::new().route(
            "/admin/content",
            get(|| async {
                Json(json!({ "content": [
                    { "id": 1, "content_type": "event", "title": "Cattle fair" },
                    { "id": 2, "content_type": "notice", "title": "Power cut" },
                    { "id": 3, "content_type": "festival", "title": "Ugadi" }
                ] }))
            }),
        );
        let client = client_as(serve(router).await, true);

        let content = client.list_content().await.unwrap();
        let ids: Vec<i64> = content.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
