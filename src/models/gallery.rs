//! Gallery image model.

use serde::Serialize;

/// A photo in the public gallery.
///
/// `event_id` is a weak reference: it is stored as-is, never validated for
/// existence, and deleting the event leaves it dangling. `event_title` is
/// resolved at read time and is `None` for a dangling or absent reference.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    pub image_url: String,
    pub event_id: Option<String>,
    pub event_title: Option<String>,
    pub created_at: String,
}

/// Validated fields for adding a gallery image.
#[derive(Debug, Clone)]
pub struct CreateGalleryImageRequest {
    pub image_url: String,
    pub event_id: Option<String>,
}
