use super::MediaItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::Request;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeditationDay {
    pub id: Option<String>,
    /// Weekday label as sent by the backend ("Seg", "Ter", ...)
    pub day: String,
    #[serde(default)]
    pub verse: String,
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meditation {
    pub id: String,
    pub topic: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub media: Option<MediaItem>,
    #[serde(default)]
    pub days: Vec<MeditationDay>,
}

impl Meditation {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListMeditations;

impl Request for ListMeditations {
    type Data = ();
    type Response = Vec<Meditation>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/meditations".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetMeditation {
    #[serde(skip)]
    id: String,
}

impl GetMeditation {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for GetMeditation {
    type Data = ();
    type Response = Meditation;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/meditations/{}", self.id).into()
    }
}
