use super::MediaItem;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::Request;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub media: Option<MediaItem>,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListDocuments;

impl Request for ListDocuments {
    type Data = ();
    type Response = Vec<Document>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/documents".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetDocument {
    #[serde(skip)]
    id: String,
}

impl GetDocument {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for GetDocument {
    type Data = ();
    type Response = Document;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/documents/{}", self.id).into()
    }
}
