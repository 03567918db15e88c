use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;
use tower_api_client::Request;

// Common

/// Kind of content page a route points at.
///
/// The set the client can render is closed; anything else the backend sends
/// lands in `Other` so a new page type never breaks deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    ImagesPage,
    VideosPage,
    WeekMaterialsPage,
    IdeasPage,
    #[serde(untagged)]
    Other(String),
}

impl EntityType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::ImagesPage => "ImagesPage",
            Self::VideosPage => "VideosPage",
            Self::WeekMaterialsPage => "WeekMaterialsPage",
            Self::IdeasPage => "IdeasPage",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EntityType {
    fn from(s: &str) -> Self {
        match s {
            "ImagesPage" => Self::ImagesPage,
            "VideosPage" => Self::VideosPage,
            "WeekMaterialsPage" => Self::WeekMaterialsPage,
            "IdeasPage" => Self::IdeasPage,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for EntityType {
    fn from(s: String) -> Self {
        EntityType::from(s.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    pub id: String,
    pub path: String,
    pub entity_type: EntityType,
    pub id_to_fetch: String,
    #[serde(default)]
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub current: bool,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListRoutes;

impl Request for ListRoutes {
    type Data = ();
    type Response = Vec<RouteEntry>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/routes".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entity_types_deserialize_to_variants() {
        let parsed: Vec<EntityType> =
            serde_json::from_str(r#"["ImagesPage","VideosPage","WeekMaterialsPage","IdeasPage"]"#)
                .unwrap();
        assert_eq!(
            parsed,
            vec![
                EntityType::ImagesPage,
                EntityType::VideosPage,
                EntityType::WeekMaterialsPage,
                EntityType::IdeasPage
            ]
        );
        assert!(parsed.iter().all(EntityType::is_known));
    }

    #[test]
    fn unknown_entity_type_is_kept_verbatim() {
        let parsed: EntityType = serde_json::from_str(r#""MeditationPage""#).unwrap();
        assert_eq!(parsed, EntityType::Other("MeditationPage".to_string()));
        assert_eq!(parsed.to_string(), "MeditationPage");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""MeditationPage""#);
    }

    #[test]
    fn route_entry_uses_camel_case_fields() {
        let json = r#"{
            "id": "r1",
            "path": "galeria-julho",
            "entityType": "ImagesPage",
            "idToFetch": "id123",
            "title": "Galeria de Julho",
            "public": true
        }"#;
        let route: RouteEntry = serde_json::from_str(json).unwrap();
        assert_eq!(route.entity_type, EntityType::ImagesPage);
        assert_eq!(route.id_to_fetch, "id123");
        assert!(route.public);
        assert!(!route.current);
        assert_eq!(route.subtitle, None);
    }
}
