use crate::endpoints::{
    auth::{GetMe, Logout},
    comments::{CreateComment, DeleteComment, ListComments, UpdateComment},
    documents::{GetDocument, ListDocuments},
    ideas_pages::{GetIdeasPage, ListIdeasPages},
    image_pages::{GetImagePage, ListImagePages},
    meditations::{GetMeditation, ListMeditations},
    routes::ListRoutes,
    site_feedbacks::{CreateSiteFeedback, DeleteSiteFeedback, ListSiteFeedbacks},
    video_pages::{GetVideoPage, ListVideoPages},
    week_material_pages::{GetWeekMaterialPage, ListWeekMaterialPages},
};

pub struct AuthRepository;

impl AuthRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn me(&self) -> GetMe {
        GetMe
    }

    pub fn logout(&self) -> Logout {
        Logout
    }
}

pub struct RouteRepository;

impl RouteRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListRoutes {
        ListRoutes
    }
}

pub struct ImagePageRepository;

impl ImagePageRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListImagePages {
        ListImagePages
    }

    pub fn get(&self, id: impl Into<String>) -> GetImagePage {
        GetImagePage::new(id)
    }
}

pub struct VideoPageRepository;

impl VideoPageRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListVideoPages {
        ListVideoPages
    }

    pub fn get(&self, id: impl Into<String>) -> GetVideoPage {
        GetVideoPage::new(id)
    }
}

pub struct WeekMaterialPageRepository;

impl WeekMaterialPageRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListWeekMaterialPages {
        ListWeekMaterialPages
    }

    pub fn get(&self, id: impl Into<String>) -> GetWeekMaterialPage {
        GetWeekMaterialPage::new(id)
    }
}

pub struct IdeasPageRepository;

impl IdeasPageRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListIdeasPages {
        ListIdeasPages
    }

    pub fn get(&self, id: impl Into<String>) -> GetIdeasPage {
        GetIdeasPage::new(id)
    }
}

pub struct MeditationRepository;

impl MeditationRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListMeditations {
        ListMeditations
    }

    pub fn get(&self, id: impl Into<String>) -> GetMeditation {
        GetMeditation::new(id)
    }
}

pub struct CommentRepository;

impl CommentRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListComments {
        ListComments
    }

    pub fn create(&self, name: impl Into<String>, comment: impl Into<String>) -> CreateComment {
        CreateComment::new(name, comment)
    }

    pub fn update(&self, id: impl Into<String>) -> UpdateComment {
        UpdateComment::new(id)
    }

    pub fn publish(&self, id: impl Into<String>) -> UpdateComment {
        UpdateComment::new(id).published(true)
    }

    pub fn delete(&self, id: impl Into<String>) -> DeleteComment {
        DeleteComment::new(id)
    }
}

pub struct SiteFeedbackRepository;

impl SiteFeedbackRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListSiteFeedbacks {
        ListSiteFeedbacks
    }

    pub fn create(&self, rating: u8, content: impl Into<String>) -> CreateSiteFeedback {
        CreateSiteFeedback::new(rating, content)
    }

    pub fn delete(&self, id: impl Into<String>) -> DeleteSiteFeedback {
        DeleteSiteFeedback::new(id)
    }
}

pub struct DocumentRepository;

impl DocumentRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListDocuments {
        ListDocuments
    }

    pub fn get(&self, id: impl Into<String>) -> GetDocument {
        GetDocument::new(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::Request;
    use tower_api_client::{Method, Request as _};

    #[test]
    fn content_pages_resolve_to_their_collections() {
        assert_eq!(Request::routes().list().endpoint(), "/routes");
        assert_eq!(Request::image_pages().get("id123").endpoint(), "/image-pages/id123");
        assert_eq!(Request::video_pages().get("v1").endpoint(), "/video-pages/v1");
        assert_eq!(
            Request::week_material_pages().get("w1").endpoint(),
            "/week-material-pages/w1"
        );
        assert_eq!(Request::ideas_pages().get("i1").endpoint(), "/ideas-pages/i1");
        assert_eq!(Request::meditations().list().endpoint(), "/meditations");
        assert_eq!(Request::documents().get("d1").endpoint(), "/documents/d1");
    }

    #[test]
    fn write_operations_use_the_right_verbs() {
        fn method_of<R: tower_api_client::Request>(_: &R) -> Method {
            R::METHOD
        }

        assert_eq!(method_of(&Request::auth().me()), Method::GET);
        assert_eq!(method_of(&Request::auth().logout()), Method::POST);
        assert_eq!(method_of(&Request::comments().create("Ana", "Oi")), Method::POST);
        assert_eq!(method_of(&Request::comments().publish("c1")), Method::PUT);
        assert_eq!(method_of(&Request::comments().delete("c1")), Method::DELETE);
        assert_eq!(method_of(&Request::site_feedbacks().delete("f1")), Method::DELETE);
        assert_eq!(
            Request::site_feedbacks().delete("f1").endpoint(),
            "/site-feedbacks/f1"
        );
    }
}
