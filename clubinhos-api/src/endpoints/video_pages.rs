use super::MediaItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::Request;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPage {
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub videos: Vec<MediaItem>,
    pub created_at: Option<DateTime<Utc>>,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListVideoPages;

impl Request for ListVideoPages {
    type Data = ();
    type Response = Vec<VideoPage>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/video-pages".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetVideoPage {
    #[serde(skip)]
    id: String,
}

impl GetVideoPage {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for GetVideoPage {
    type Data = ();
    type Response = VideoPage;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/video-pages/{}", self.id).into()
    }
}
