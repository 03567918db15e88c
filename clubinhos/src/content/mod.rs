//! Maps a route's entity type onto the view that knows how to show it.

use clubinhos_api::endpoints::{
    ideas_pages::IdeasPage,
    image_pages::ImagePage,
    routes::{EntityType, RouteEntry},
    video_pages::VideoPage,
    week_material_pages::WeekMaterialPage,
};

/// Which content view a route mounts, carrying the id that view fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    ImageGallery { id: String },
    Videos { id: String },
    WeekMaterials { id: String },
    Ideas { id: String },
    /// Entity type with no view; renders a fallback and never fetches
    Unknown { entity_type: String },
}

impl PageView {
    pub fn resolve(entity_type: &EntityType, id_to_fetch: &str) -> Self {
        let id = id_to_fetch.to_string();
        match entity_type {
            EntityType::ImagesPage => Self::ImageGallery { id },
            EntityType::VideosPage => Self::Videos { id },
            EntityType::WeekMaterialsPage => Self::WeekMaterials { id },
            EntityType::IdeasPage => Self::Ideas { id },
            EntityType::Other(tag) => Self::Unknown {
                entity_type: tag.clone(),
            },
        }
    }

    /// Id to fetch, `None` for views that load nothing
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::ImageGallery { id }
            | Self::Videos { id }
            | Self::WeekMaterials { id }
            | Self::Ideas { id } => Some(id),
            Self::Unknown { .. } => None,
        }
    }

    pub fn needs_fetch(&self) -> bool {
        self.id().is_some()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ImageGallery { .. } => "Galeria de imagens",
            Self::Videos { .. } => "Vídeos",
            Self::WeekMaterials { .. } => "Materiais da semana",
            Self::Ideas { .. } => "Ideias",
            Self::Unknown { .. } => "Página",
        }
    }

    pub fn fallback_message(entity_type: &str) -> String {
        format!("Tipo de página desconhecido: {}", entity_type)
    }
}

impl From<&RouteEntry> for PageView {
    fn from(route: &RouteEntry) -> Self {
        Self::resolve(&route.entity_type, &route.id_to_fetch)
    }
}

/// Data fetched for a supported view
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    ImageGallery(ImagePage),
    Videos(VideoPage),
    WeekMaterials(WeekMaterialPage),
    Ideas(IdeasPage),
}

impl PageContent {
    pub fn title(&self) -> &str {
        match self {
            Self::ImageGallery(page) => &page.title,
            Self::Videos(page) => &page.title,
            Self::WeekMaterials(page) => &page.title,
            Self::Ideas(page) => &page.title,
        }
    }

    /// Whether this content is what `view` expects to show
    pub fn matches(&self, view: &PageView) -> bool {
        matches!(
            (self, view),
            (Self::ImageGallery(_), PageView::ImageGallery { .. })
                | (Self::Videos(_), PageView::Videos { .. })
                | (Self::WeekMaterials(_), PageView::WeekMaterials { .. })
                | (Self::Ideas(_), PageView::Ideas { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_resolve_to_their_views() {
        assert_eq!(
            PageView::resolve(&EntityType::ImagesPage, "id123"),
            PageView::ImageGallery {
                id: "id123".to_string()
            }
        );
        assert_eq!(
            PageView::resolve(&EntityType::VideosPage, "v1"),
            PageView::Videos {
                id: "v1".to_string()
            }
        );
        assert_eq!(
            PageView::resolve(&EntityType::WeekMaterialsPage, "w1"),
            PageView::WeekMaterials {
                id: "w1".to_string()
            }
        );
        assert_eq!(
            PageView::resolve(&EntityType::IdeasPage, "i1"),
            PageView::Ideas {
                id: "i1".to_string()
            }
        );
    }

    #[test]
    fn unknown_type_does_not_fetch() {
        let view = PageView::resolve(&EntityType::from("MeditationPage"), "m1");
        assert_eq!(
            view,
            PageView::Unknown {
                entity_type: "MeditationPage".to_string()
            }
        );
        assert!(!view.needs_fetch());
        assert_eq!(view.id(), None);
    }

    #[test]
    fn empty_type_is_unknown() {
        let view = PageView::resolve(&EntityType::from(""), "x");
        assert_eq!(
            view,
            PageView::Unknown {
                entity_type: String::new()
            }
        );
        assert_eq!(
            PageView::fallback_message(""),
            "Tipo de página desconhecido: "
        );
    }

    #[test]
    fn fallback_names_the_type() {
        assert_eq!(
            PageView::fallback_message("MeditationPage"),
            "Tipo de página desconhecido: MeditationPage"
        );
    }
}
