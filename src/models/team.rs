//! Team roster model.

use serde::Serialize;

/// A member of the club's core team, shown on the roster page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Academic term the member holds the role for, e.g. "2025-2026".
    pub term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Roster position; the list endpoint sorts by this, ascending.
    #[serde(rename = "order")]
    pub display_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated fields for adding a team member.
#[derive(Debug, Clone)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub role: String,
    pub term: String,
    pub image_url: Option<String>,
    pub display_order: i64,
}

/// Partial update for a team member. Outer `None` keeps the prior value;
/// `Some(None)` on `image_url` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamMemberRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub term: Option<String>,
    pub image_url: Option<Option<String>>,
    pub display_order: Option<i64>,
}
