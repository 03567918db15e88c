use super::MediaItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::Request;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSection {
    pub id: Option<String>,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub media_items: Vec<MediaItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePage {
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub sections: Vec<ImageSection>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ImagePage {
    pub fn image_count(&self) -> usize {
        self.sections.iter().map(|s| s.media_items.len()).sum()
    }
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListImagePages;

impl Request for ListImagePages {
    type Data = ();
    type Response = Vec<ImagePage>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/image-pages".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetImagePage {
    #[serde(skip)]
    id: String,
}

impl GetImagePage {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for GetImagePage {
    type Data = ();
    type Response = ImagePage;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/image-pages/{}", self.id).into()
    }
}
