use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::notification;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNotificationRequest {
    #[schema(example = "Annual Day")]
    pub title: String,

    #[schema(example = "Annual day celebrations on Friday at 10am.")]
    pub description: String,

    #[serde(default)]
    #[schema(example = "https://school.example.com/annual-day")]
    pub link: Option<String>,
}

impl CreateNotificationRequest {
    /// Trims the payload into its stored form. Title and description must be
    /// non-blank; a blank link collapses to `None`.
    pub fn normalized(self) -> Option<(String, String, Option<String>)> {
        let title = self.title.trim().to_string();
        let description = self.description.trim().to_string();
        if title.is_empty() || description.is_empty() {
            return None;
        }
        let link = self
            .link
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        Some((title, description, link))
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub notification_id: String,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl From<notification::Model> for NotificationResponse {
    fn from(model: notification::Model) -> Self {
        Self {
            notification_id: model.notification_id.to_string(),
            title: model.title,
            description: model.description,
            link: model.link,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteNotificationResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, description: &str, link: Option<&str>) -> CreateNotificationRequest {
        CreateNotificationRequest {
            title: title.to_string(),
            description: description.to_string(),
            link: link.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_payload_is_trimmed() {
        let (title, description, link) = request(
            "  Annual Day  ",
            " Celebrations on Friday. ",
            Some("https://school.example.com/annual-day"),
        )
        .normalized()
        .unwrap();
        assert_eq!(title, "Annual Day");
        assert_eq!(description, "Celebrations on Friday.");
        assert_eq!(link.as_deref(), Some("https://school.example.com/annual-day"));
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(request("", "Something happened", None).normalized().is_none());
        assert!(request("   ", "Something happened", None).normalized().is_none());
    }

    #[test]
    fn test_blank_description_rejected() {
        assert!(request("Annual Day", "", None).normalized().is_none());
        assert!(request("Annual Day", "  ", None).normalized().is_none());
    }

    #[test]
    fn test_blank_link_collapses_to_none() {
        let (_, _, link) = request("Annual Day", "Details", Some("   "))
            .normalized()
            .unwrap();
        assert_eq!(link, None);

        let (_, _, link) = request("Annual Day", "Details", None).normalized().unwrap();
        assert_eq!(link, None);
    }
}
