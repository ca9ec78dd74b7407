//! Membership application model.

use serde::{Deserialize, Serialize};

/// Review status of a membership application. Admins may move an
/// application between any of the three states; there is no terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ApplicationStatus::Pending),
            "approved" => Some(ApplicationStatus::Approved),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

/// A membership application submitted through the public join form.
///
/// Applications are never deleted; admins only move them between statuses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub year: String,
    pub skills: String,
    pub status: ApplicationStatus,
    pub created_at: String,
}

/// Request body for submitting an application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
}

/// Validated application fields, ready for insert.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub year: String,
    pub skills: String,
}

/// Request body for PUT /api/applications/{id}/status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// Public status-lookup result: just enough for an applicant to check
/// where they stand, nothing more.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatusView {
    pub name: String,
    pub status: ApplicationStatus,
}
