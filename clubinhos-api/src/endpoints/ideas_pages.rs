use super::MediaItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::Request;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeasSection {
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub medias: Vec<MediaItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeasPage {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub sections: Vec<IdeasSection>,
    pub created_at: Option<DateTime<Utc>>,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListIdeasPages;

impl Request for ListIdeasPages {
    type Data = ();
    type Response = Vec<IdeasPage>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/ideas-pages".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetIdeasPage {
    #[serde(skip)]
    id: String,
}

impl GetIdeasPage {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for GetIdeasPage {
    type Data = ();
    type Response = IdeasPage;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/ideas-pages/{}", self.id).into()
    }
}
