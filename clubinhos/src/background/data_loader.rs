use crate::content::{PageContent, PageView};
use crate::events::{DataEvent, Effect};
use clubinhos_api::{Client, Request};
use clubinhos_auth::{ApiGateway, AuthClient, Credentials};
use std::sync::Arc;
use tokio::sync::mpsc;

pub type AppGateway = ApiGateway<Client, AuthClient>;

/// Runs effects against the backend and reports the results as data events
#[derive(Clone)]
pub struct DataLoader {
    gateway: Arc<AppGateway>,
    data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(gateway: Arc<AppGateway>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self { gateway, data_tx }
    }

    pub async fn perform(&self, effect: Effect) {
        match effect {
            Effect::LoadRoutes => self.load_routes().await,
            Effect::LoadPage(view) => self.load_page(view).await,
            Effect::Login(credentials) => self.login(credentials).await,
            Effect::Logout => self.logout().await,
            Effect::LoadCurrentUser => self.load_current_user().await,
            Effect::LoadComments => self.load_comments().await,
        }
    }

    /// Fetch the route table. Failures are reported once and not retried.
    pub async fn load_routes(&self) {
        tracing::info!("Loading route table");
        match self.gateway.send(Request::routes().list()).await {
            Ok(routes) => {
                tracing::info!("Loaded {} routes", routes.len());
                self.emit(DataEvent::RoutesLoaded { routes });
            }
            Err(e) => {
                tracing::error!("Failed to load routes: {}", e);
                self.emit(DataEvent::RoutesLoadFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    /// Fetch the data behind a content view
    pub async fn load_page(&self, view: PageView) {
        let result = match &view {
            PageView::ImageGallery { id } => self
                .gateway
                .send(Request::image_pages().get(id.as_str()))
                .await
                .map(PageContent::ImageGallery),
            PageView::Videos { id } => self
                .gateway
                .send(Request::video_pages().get(id.as_str()))
                .await
                .map(PageContent::Videos),
            PageView::WeekMaterials { id } => self
                .gateway
                .send(Request::week_material_pages().get(id.as_str()))
                .await
                .map(PageContent::WeekMaterials),
            PageView::Ideas { id } => self
                .gateway
                .send(Request::ideas_pages().get(id.as_str()))
                .await
                .map(PageContent::Ideas),
            PageView::Unknown { entity_type } => {
                tracing::debug!(entity_type = %entity_type, "No loader for page type");
                return;
            }
        };

        match result {
            Ok(content) => {
                tracing::info!("Loaded {} '{}'", view.label(), content.title());
                self.emit(DataEvent::PageLoaded { view, content });
            }
            Err(e) => {
                tracing::error!("Failed to load {:?}: {}", view, e);
                self.emit(DataEvent::PageLoadFailed {
                    view,
                    error: e.to_string(),
                });
            }
        }
    }

    pub async fn login(&self, credentials: Credentials) {
        match self.gateway.login(&credentials).await {
            Ok(user) => self.emit(DataEvent::LoginSucceeded { user }),
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                self.emit(DataEvent::LoginFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    pub async fn logout(&self) {
        self.gateway.logout().await;
        self.emit(DataEvent::LoggedOut);
    }

    pub async fn load_current_user(&self) {
        match self.gateway.load_current_user().await {
            Ok(user) => self.emit(DataEvent::CurrentUserLoaded { user }),
            Err(e) => {
                tracing::error!("Failed to load current user: {}", e);
                self.emit(DataEvent::LoadError {
                    error: e.to_string(),
                });
            }
        }
    }

    /// Only published comments are shown
    pub async fn load_comments(&self) {
        match self.gateway.send(Request::comments().list()).await {
            Ok(comments) => {
                let comments: Vec<_> = comments.into_iter().filter(|c| c.published).collect();
                tracing::info!("Loaded {} published comments", comments.len());
                self.emit(DataEvent::CommentsLoaded { comments });
            }
            Err(e) => {
                tracing::error!("Failed to load comments: {}", e);
                self.emit(DataEvent::LoadError {
                    error: e.to_string(),
                });
            }
        }
    }

    fn emit(&self, event: DataEvent) {
        if self.data_tx.send(event).is_err() {
            tracing::debug!("UI loop gone, dropping data event");
        }
    }
}
