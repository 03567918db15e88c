use crate::macros::setter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{EmptyResponse, Method, Request, RequestData};

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub name: String,
    pub comment: String,
    pub clubinho: Option<String>,
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub published: bool,
    pub created_at: Option<DateTime<Utc>>,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListComments;

impl Request for ListComments {
    type Data = ();
    type Response = Vec<Comment>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/comments".into()
    }
}

#[derive(Default, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    name: String,
    comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    clubinho: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    neighborhood: Option<String>,
}

impl CreateComment {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
            ..Default::default()
        }
    }

    setter!(opt clubinho: String);
    setter!(opt neighborhood: String);
}

impl Request for CreateComment {
    type Data = Self;
    type Response = Comment;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/comments".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}

/// Admin update, used to publish or hide a comment
#[derive(Debug, Clone, Serialize)]
pub struct UpdateComment {
    #[serde(skip)]
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl UpdateComment {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            published: None,
            comment: None,
        }
    }

    setter!(opt published: bool);
    setter!(opt comment: String);
}

impl Request for UpdateComment {
    type Data = Self;
    type Response = Comment;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/comments/{}", self.id).into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteComment {
    #[serde(skip)]
    id: String,
}

impl DeleteComment {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for DeleteComment {
    type Data = ();
    type Response = EmptyResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/comments/{}", self.id).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_comment_omits_unset_optionals() {
        let body = serde_json::to_value(CreateComment::new("Júlia", "Amei o clubinho!")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Júlia", "comment": "Amei o clubinho!"})
        );

        let body = serde_json::to_value(
            CreateComment::new("Júlia", "Amei!")
                .clubinho("Clubinho 12")
                .neighborhood("Centro"),
        )
        .unwrap();
        assert_eq!(body["clubinho"], "Clubinho 12");
        assert_eq!(body["neighborhood"], "Centro");
    }

    #[test]
    fn publishing_sends_only_the_flag() {
        let update = UpdateComment::new("c1").published(true);
        assert_eq!(update.endpoint(), "/comments/c1");
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"published": true})
        );
    }
}
