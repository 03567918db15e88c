use crate::macros::setter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{EmptyResponse, Method, Request, RequestData};

// Common

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    Content,
    Appearance,
    Usability,
    Browsing,
    Quality,
    Accessibility,
    Suggestion,
    Complaint,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteFeedback {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub rating: u8,
    pub content: String,
    #[serde(default)]
    pub category: FeedbackCategory,
    #[serde(default)]
    pub read: bool,
    pub created_at: Option<DateTime<Utc>>,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListSiteFeedbacks;

impl Request for ListSiteFeedbacks {
    type Data = ();
    type Response = Vec<SiteFeedback>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/site-feedbacks".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSiteFeedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    rating: u8,
    content: String,
    category: FeedbackCategory,
}

impl CreateSiteFeedback {
    /// Ratings are clamped to the 1..=5 stars the site offers
    pub fn new(rating: u8, content: impl Into<String>) -> Self {
        Self {
            name: None,
            email: None,
            rating: rating.clamp(1, 5),
            content: content.into(),
            category: FeedbackCategory::default(),
        }
    }

    setter!(opt name: String);
    setter!(opt email: String);
    setter!(category: FeedbackCategory);
}

impl Request for CreateSiteFeedback {
    type Data = Self;
    type Response = SiteFeedback;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/site-feedbacks".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteSiteFeedback {
    #[serde(skip)]
    id: String,
}

impl DeleteSiteFeedback {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for DeleteSiteFeedback {
    type Data = ();
    type Response = EmptyResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/site-feedbacks/{}", self.id).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_clamped_to_star_range() {
        let body = serde_json::to_value(CreateSiteFeedback::new(9, "Ótimo site")).unwrap();
        assert_eq!(body["rating"], 5);
        assert_eq!(body["category"], "other");

        let body = serde_json::to_value(
            CreateSiteFeedback::new(0, "Difícil de achar os vídeos")
                .category(FeedbackCategory::Browsing)
                .email("pai@exemplo.com"),
        )
        .unwrap();
        assert_eq!(body["rating"], 1);
        assert_eq!(body["category"], "browsing");
        assert_eq!(body["email"], "pai@exemplo.com");
        assert!(body.get("name").is_none());
    }
}
