//! Request payloads and their client-side validation.
//!
//! Field names follow the backend's JSON (`confirmPassword`, `contentType`, ...).
//! `validate` runs before anything is sent; a failure becomes
//! [`ApiError::Validation`] and is shown inline on the form.

use serde::Serialize;
use store::{Category, ContentType};

use crate::error::ApiError;

fn require(value: &str, message: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::Validation(message.to_string()))
    } else {
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.email, "Email is required")?;
        require(&self.password, "Password is required")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.name, "Name is required")?;
        require(&self.email, "Email is required")?;
        if !looks_like_email(&self.email) {
            return Err(ApiError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        require(&self.password, "Password is required")?;
        if self.password != self.confirm_password {
            return Err(ApiError::Validation("Passwords do not match".to_string()));
        }
        Ok(())
    }

    /// Copy with surrounding whitespace removed from name and email.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.name, "Name is required")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.current_password, "Current password is required")?;
        require(&self.new_password, "New password is required")?;
        if self.new_password != self.confirm_password {
            return Err(ApiError::Validation("New passwords do not match".to_string()));
        }
        Ok(())
    }
}

/// Editable text fields of an image.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ImageDetails {
    pub title: String,
    pub description: String,
    pub category: Category,
}

impl ImageDetails {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.title, "Title is required")
    }
}

/// A new image: details plus the file picked by the admin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageUpload {
    pub details: ImageDetails,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.details.validate()?;
        if self.bytes.is_empty() {
            return Err(ApiError::Validation("Please select an image".to_string()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContentDraft {
    #[serde(rename = "contentType")]
    pub content_type: ContentType,
    pub title: String,
    pub description: String,
}

impl Default for ContentDraft {
    fn default() -> Self {
        Self {
            content_type: ContentType::Event,
            title: String::new(),
            description: String::new(),
        }
    }
}

impl ContentDraft {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.title, "Title is required")?;
        require(&self.description, "Description is required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            name: "Padma".to_string(),
            email: "padma@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_signup_validation() {
        assert!(signup("Secret1", "Secret1").validate().is_ok());
        assert_eq!(
            signup("Secret1", "Secret2").validate(),
            Err(ApiError::Validation("Passwords do not match".to_string()))
        );

        let mut form = signup("Secret1", "Secret1");
        form.email = "padma.example.com".to_string();
        assert!(form.validate().is_err());

        form.email = "padma@example.com".to_string();
        form.name = "   ".to_string();
        assert_eq!(
            form.validate(),
            Err(ApiError::Validation("Name is required".to_string()))
        );
    }

    #[test]
    fn test_signup_serializes_camel_case() {
        let json = serde_json::to_value(signup("a", "a")).unwrap();
        assert_eq!(json["confirmPassword"], "a");
        assert!(json.get("confirm_password").is_none());
    }

    #[test]
    fn test_password_change_validation() {
        let change = PasswordChange {
            current_password: "old".to_string(),
            new_password: "NewPass1".to_string(),
            confirm_password: "NewPass2".to_string(),
        };
        assert!(change.validate().is_err());

        let json = serde_json::to_value(PasswordChange {
            confirm_password: "NewPass1".to_string(),
            ..change
        })
        .unwrap();
        assert_eq!(json["currentPassword"], "old");
        assert_eq!(json["newPassword"], "NewPass1");
    }

    #[test]
    fn test_image_upload_requires_file() {
        let upload = ImageUpload {
            details: ImageDetails {
                title: "Harvest".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            upload.validate(),
            Err(ApiError::Validation("Please select an image".to_string()))
        );
    }

    #[test]
    fn test_content_draft_wire_format() {
        let draft = ContentDraft {
            content_type: ContentType::Festival,
            title: "Sankranti".to_string(),
            description: "Kite flying on the fields".to_string(),
        };
        assert!(draft.validate().is_ok());

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["contentType"], "festival");

        let empty = ContentDraft::default();
        assert_eq!(
            empty.validate(),
            Err(ApiError::Validation("Title is required".to_string()))
        );
    }
}
