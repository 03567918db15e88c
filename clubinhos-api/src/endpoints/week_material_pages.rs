use super::MediaItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::Request;

// Common

/// Weekly study material for teachers: a lesson plus its supporting media
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekMaterialPage {
    pub id: String,
    #[serde(alias = "pageTitle")]
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(default, alias = "pageDescription")]
    pub description: String,
    #[serde(default)]
    pub current_week: bool,
    #[serde(default)]
    pub videos: Vec<MediaItem>,
    #[serde(default)]
    pub documents: Vec<MediaItem>,
    #[serde(default)]
    pub images: Vec<MediaItem>,
    #[serde(default)]
    pub audios: Vec<MediaItem>,
    pub created_at: Option<DateTime<Utc>>,
}

impl WeekMaterialPage {
    /// Media grouped under the headings the page shows them with
    pub fn media_groups(&self) -> [(&'static str, &[MediaItem]); 4] {
        [
            ("Vídeos", self.videos.as_slice()),
            ("Documentos", self.documents.as_slice()),
            ("Imagens", self.images.as_slice()),
            ("Áudios", self.audios.as_slice()),
        ]
    }
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListWeekMaterialPages;

impl Request for ListWeekMaterialPages {
    type Data = ();
    type Response = Vec<WeekMaterialPage>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/week-material-pages".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetWeekMaterialPage {
    #[serde(skip)]
    id: String,
}

impl GetWeekMaterialPage {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for GetWeekMaterialPage {
    type Data = ();
    type Response = WeekMaterialPage;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/week-material-pages/{}", self.id).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_page_prefixed_field_names() {
        let json = r#"{
            "id": "w1",
            "pageTitle": "Semana 12",
            "pageDescription": "A ovelha perdida",
            "documents": [{"title": "Roteiro", "mediaType": "document", "url": "r.pdf"}]
        }"#;
        let page: WeekMaterialPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.title, "Semana 12");
        assert_eq!(page.description, "A ovelha perdida");
        let groups = page.media_groups();
        assert_eq!(groups[1].0, "Documentos");
        assert_eq!(groups[1].1.len(), 1);
        assert!(groups[0].1.is_empty());
    }
}
