//! Event model matching the public site's event listing.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an event. Set by admins in both directions; never
/// flipped automatically when the date passes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "upcoming" => Some(EventStatus::Upcoming),
            "completed" => Some(EventStatus::Completed),
            _ => None,
        }
    }
}

/// A club event, past or upcoming.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO 8601 date or datetime, as submitted.
    pub date: String,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
    pub status: EventStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated fields for creating an event, collected from the multipart form.
#[derive(Debug, Clone)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: String,
    pub venue: String,
    pub image_url: Option<String>,
    pub registration_link: Option<String>,
    pub status: EventStatus,
}

/// Partial update for an event.
///
/// Outer `None` means the field was absent from the form and keeps its prior
/// value; for the clearable optional fields, `Some(None)` means an empty
/// value was submitted and the field is cleared.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub image_url: Option<Option<String>>,
    pub registration_link: Option<Option<String>>,
    pub status: Option<EventStatus>,
}
