pub mod auth;
pub mod comments;
pub mod documents;
pub mod ideas_pages;
pub mod image_pages;
pub mod meditations;
pub mod routes;
pub mod site_feedbacks;
pub mod video_pages;
pub mod week_material_pages;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
    Document,
    Audio,
    #[serde(other)]
    Other,
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Document => "document",
            Self::Audio => "audio",
            Self::Other => "other",
        })
    }
}

/// Whether the media lives on the backend's storage or behind an external link
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadType {
    #[default]
    Link,
    Upload,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformType {
    Youtube,
    Googledrive,
    Onedrive,
    Dropbox,
    Any,
    #[serde(other)]
    Other,
}

impl Display for PlatformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Youtube => "YouTube",
            Self::Googledrive => "Google Drive",
            Self::Onedrive => "OneDrive",
            Self::Dropbox => "Dropbox",
            Self::Any | Self::Other => "link",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub upload_type: UploadType,
    pub platform_type: Option<PlatformType>,
    #[serde(default)]
    pub url: String,
    pub original_name: Option<String>,
    pub size: Option<u64>,
    #[serde(default)]
    pub is_local_file: bool,
}

impl MediaItem {
    /// Label shown next to the URL: the platform for links, the file name for uploads
    pub fn source_label(&self) -> String {
        match (self.upload_type, self.platform_type, &self.original_name) {
            (UploadType::Upload, _, Some(name)) => name.clone(),
            (_, Some(platform), _) => platform.to_string(),
            _ => self.media_type.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_item_tolerates_unknown_enum_values() {
        let json = r#"{
            "id": "m1",
            "title": "Louvor",
            "mediaType": "video",
            "uploadType": "link",
            "platformType": "vimeo",
            "url": "https://vimeo.com/1"
        }"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.media_type, MediaType::Video);
        assert_eq!(item.platform_type, Some(PlatformType::Other));
        assert_eq!(item.source_label(), "link");
    }

    #[test]
    fn uploaded_media_is_labelled_by_file_name() {
        let json = r#"{
            "title": "Roteiro",
            "mediaType": "document",
            "uploadType": "upload",
            "url": "https://cdn/roteiro.pdf",
            "originalName": "roteiro.pdf",
            "isLocalFile": true
        }"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert!(item.is_local_file);
        assert_eq!(item.source_label(), "roteiro.pdf");
    }
}
