//! Integration tests for the club backend.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::auth;
use crate::config::Config;
use crate::db::{init_database, Repository};
use crate::models::AdminUser;
use crate::{create_router, AppState};

const ADMIN_EMAIL: &str = "admin@club.test";
const ADMIN_PASSWORD: &str = "club-admin-pw";
const JWT_SECRET: &str = "test-secret";

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    admin_token: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        // Initialize database and seed the admin account
        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        let hash = auth::hash_password(ADMIN_PASSWORD).expect("Failed to hash password");
        repo.upsert_admin("Site Admin", ADMIN_EMAIL, &hash)
            .await
            .expect("Failed to seed admin");

        // Create config
        let config = Config {
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            jwt_secret: Some(JWT_SECRET.to_string()),
            token_ttl_hours: 1,
            admin_email: None,
            admin_password: None,
            media: None,
        };

        let state = AppState {
            repo,
            media: None,
            config: Arc::new(config),
            jwt_secret: JWT_SECRET.to_string(),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        let client = Client::new();

        // Log in for the admin token
        let resp = client
            .post(format!("{}/api/auth/login", base_url))
            .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        let admin_token = body["token"].as_str().unwrap().to_string();

        TestFixture {
            client,
            base_url,
            admin_token,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.admin_token)
    }

    /// Create an event through the API and return its JSON body.
    async fn create_event(&self, title: &str, date: &str) -> Value {
        let form = reqwest::multipart::Form::new()
            .text("title", title.to_string())
            .text("description", "An event for testing".to_string())
            .text("date", date.to_string())
            .text("venue", "Main Hall".to_string());

        let resp = self
            .client
            .post(self.url("/api/events"))
            .header("Authorization", self.bearer())
            .multipart(form)
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 201);
        resp.json().await.unwrap()
    }

    /// Submit a membership application and return the response.
    async fn submit_application(
        &self,
        name: &str,
        email: &str,
        student_id: &str,
    ) -> reqwest::Response {
        self.client
            .post(self.url("/api/applications"))
            .json(&json!({
                "name": name,
                "email": email,
                "studentId": student_id,
                "department": "CS",
                "year": "First Year",
                "skills": "Arduino"
            }))
            .send()
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_login_success() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(body["token"].as_str().unwrap().len() > 20);
    assert_eq!(body["name"], "Site Admin");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let fixture = TestFixture::new().await;

    // Wrong password
    let resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "email": ADMIN_EMAIL, "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid email or password");

    // Unknown email gets the same message
    let resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "email": "nobody@club.test", "password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let fixture = TestFixture::new().await;

    // No token
    let resp = fixture
        .client
        .post(fixture.url("/api/announcements"))
        .json(&json!({ "title": "T", "message": "M" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    // Garbage token
    let resp = fixture
        .client
        .post(fixture.url("/api/announcements"))
        .header("Authorization", "Bearer not-a-token")
        .json(&json!({ "title": "T", "message": "M" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_non_admin_role_forbidden() {
    let fixture = TestFixture::new().await;

    // A validly signed token whose role is not admin must be refused with 403
    let outsider = AdminUser {
        id: "outsider-1".to_string(),
        name: "Outsider".to_string(),
        email: "outsider@club.test".to_string(),
        password_hash: String::new(),
        role: "member".to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    let token = auth::issue_token(JWT_SECRET, &outsider, chrono::Duration::hours(1)).unwrap();

    let resp = fixture
        .client
        .get(fixture.url("/api/applications"))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn test_event_crud() {
    let fixture = TestFixture::new().await;

    // Create without image or status
    let created = fixture.create_event("Robo Race", "2026-09-12").await;
    let event_id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["status"], "upcoming");
    assert!(created["imageUrl"].is_null());

    // Get
    let resp = fixture
        .client
        .get(fixture.url(&format!("/api/events/{}", event_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Robo Race");

    // Partial update: only the venue changes
    let form = reqwest::multipart::Form::new().text("venue", "Auditorium".to_string());
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/events/{}", event_id)))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["venue"], "Auditorium");
    assert_eq!(body["title"], "Robo Race");
    assert_eq!(body["date"], "2026-09-12");

    // Mark completed
    let form = reqwest::multipart::Form::new().text("status", "completed".to_string());
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/events/{}", event_id)))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "completed");

    // Delete
    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/events/{}", event_id)))
        .header("Authorization", fixture.bearer())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Event removed");

    // Delete again
    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/events/{}", event_id)))
        .header("Authorization", fixture.bearer())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Get after delete
    let resp = fixture
        .client
        .get(fixture.url(&format!("/api/events/{}", event_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_event_registration_link_set_and_clear() {
    let fixture = TestFixture::new().await;

    let created = fixture.create_event("Workshop", "2026-10-01").await;
    let event_id = created["id"].as_str().unwrap().to_string();
    assert!(created["registrationLink"].is_null());

    // Set the link
    let form =
        reqwest::multipart::Form::new().text("registrationLink", "https://forms.test/w1".to_string());
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/events/{}", event_id)))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["registrationLink"], "https://forms.test/w1");

    // An update that omits the field keeps it
    let form = reqwest::multipart::Form::new().text("venue", "Lab 2".to_string());
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/events/{}", event_id)))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["registrationLink"], "https://forms.test/w1");

    // Submitting it empty clears it
    let form = reqwest::multipart::Form::new().text("registrationLink", String::new());
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/events/{}", event_id)))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert!(body["registrationLink"].is_null());
}

#[tokio::test]
async fn test_event_validation_errors() {
    let fixture = TestFixture::new().await;

    // Missing title
    let form = reqwest::multipart::Form::new()
        .text("description", "d".to_string())
        .text("date", "2026-09-12".to_string())
        .text("venue", "Hall".to_string());
    let resp = fixture
        .client
        .post(fixture.url("/api/events"))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("title"));

    // Unparseable date
    let form = reqwest::multipart::Form::new()
        .text("title", "t".to_string())
        .text("description", "d".to_string())
        .text("date", "next tuesday".to_string())
        .text("venue", "Hall".to_string());
    let resp = fixture
        .client
        .post(fixture.url("/api/events"))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Unknown status
    let form = reqwest::multipart::Form::new()
        .text("title", "t".to_string())
        .text("description", "d".to_string())
        .text("date", "2026-09-12".to_string())
        .text("venue", "Hall".to_string())
        .text("status", "cancelled".to_string());
    let resp = fixture
        .client
        .post(fixture.url("/api/events"))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_events_ordered_by_date_ascending() {
    let fixture = TestFixture::new().await;

    fixture.create_event("Later", "2026-12-01").await;
    fixture.create_event("Soonest", "2026-08-20").await;
    fixture.create_event("Middle", "2026-09-15").await;

    let resp = fixture
        .client
        .get(fixture.url("/api/events"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Soonest", "Middle", "Later"]);
}

#[tokio::test]
async fn test_announcement_flow() {
    let fixture = TestFixture::new().await;

    // Create two announcements
    for (title, message) in [("First", "one"), ("Second", "two")] {
        let resp = fixture
            .client
            .post(fixture.url("/api/announcements"))
            .header("Authorization", fixture.bearer())
            .json(&json!({ "title": title, "message": message }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    // Missing message is rejected
    let resp = fixture
        .client
        .post(fixture.url("/api/announcements"))
        .header("Authorization", fixture.bearer())
        .json(&json!({ "title": "No body" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Public list, newest first
    let resp = fixture
        .client
        .get(fixture.url("/api/announcements"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Second");
    assert_eq!(items[1]["title"], "First");

    // Delete the newest, then delete it again
    let id = items[0]["id"].as_str().unwrap();
    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/announcements/{}", id)))
        .header("Authorization", fixture.bearer())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Announcement removed");

    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/announcements/{}", id)))
        .header("Authorization", fixture.bearer())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_gallery_flow_and_weak_reference() {
    let fixture = TestFixture::new().await;

    let event = fixture.create_event("Tech Fest", "2026-11-05").await;
    let event_id = event["id"].as_str().unwrap().to_string();

    // Image tied to a real event (URL-based, no file upload configured)
    let form = reqwest::multipart::Form::new()
        .text("imageUrl", "https://img.test/fest.jpg".to_string())
        .text("eventId", event_id.clone());
    let resp = fixture
        .client
        .post(fixture.url("/api/gallery"))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    // Image with a dangling reference is accepted: existence is never
    // checked at write time
    let form = reqwest::multipart::Form::new()
        .text("imageUrl", "https://img.test/old.jpg".to_string())
        .text("eventId", "no-such-event".to_string());
    let resp = fixture
        .client
        .post(fixture.url("/api/gallery"))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    // Neither a file nor a URL is a validation error
    let form = reqwest::multipart::Form::new().text("eventId", event_id.clone());
    let resp = fixture
        .client
        .post(fixture.url("/api/gallery"))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // List: newest first, titles resolved where the event exists
    let resp = fixture
        .client
        .get(fixture.url("/api/gallery"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["imageUrl"], "https://img.test/old.jpg");
    assert!(items[0]["eventTitle"].is_null());
    assert_eq!(items[1]["eventTitle"], "Tech Fest");

    // Deleting the event leaves the reference dangling, not cascaded
    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/events/{}", event_id)))
        .header("Authorization", fixture.bearer())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = fixture
        .client
        .get(fixture.url("/api/gallery"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[1]["eventTitle"].is_null());
}

#[tokio::test]
async fn test_team_flow() {
    let fixture = TestFixture::new().await;

    // Create members out of display order
    for (name, order) in [("Secretary", "2"), ("President", ""), ("Vice President", "1")] {
        let mut form = reqwest::multipart::Form::new()
            .text("name", name.to_string())
            .text("role", name.to_string())
            .text("term", "2025-2026".to_string());
        if !order.is_empty() {
            form = form.text("order", order.to_string());
        }
        let resp = fixture
            .client
            .post(fixture.url("/api/team"))
            .header("Authorization", fixture.bearer())
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    // List is ordered ascending; the omitted order defaulted to 0
    let resp = fixture
        .client
        .get(fixture.url("/api/team"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["President", "Vice President", "Secretary"]);
    assert_eq!(body[0]["order"], 0);

    // Partial update keeps the other fields
    let member_id = body[2]["id"].as_str().unwrap().to_string();
    let form = reqwest::multipart::Form::new().text("name", "General Secretary".to_string());
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/team/{}", member_id)))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["name"], "General Secretary");
    assert_eq!(updated["role"], "Secretary");
    assert_eq!(updated["term"], "2025-2026");

    // Non-integer order is rejected
    let form = reqwest::multipart::Form::new().text("order", "third".to_string());
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/team/{}", member_id)))
        .header("Authorization", fixture.bearer())
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Delete, then delete again
    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/team/{}", member_id)))
        .header("Authorization", fixture.bearer())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/team/{}", member_id)))
        .header("Authorization", fixture.bearer())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_application_duplicates_rejected() {
    let fixture = TestFixture::new().await;

    let resp = fixture.submit_application("A", "a@x.com", "S1").await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "pending");

    // Same student id, different email
    let resp = fixture.submit_application("A", "other@x.com", "S1").await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Application with this email or ID already exists"
    );

    // Same email, different student id
    let resp = fixture.submit_application("A", "a@x.com", "S2").await;
    assert_eq!(resp.status(), 400);

    // Missing required field
    let resp = fixture
        .client
        .post(fixture.url("/api/applications"))
        .json(&json!({ "name": "B", "email": "b@x.com", "studentId": "S3" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_application_status_flow() {
    let fixture = TestFixture::new().await;

    let resp = fixture.submit_application("A", "a@x.com", "S1").await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let app_id = body["id"].as_str().unwrap().to_string();

    // Listing requires the admin gate
    let resp = fixture
        .client
        .get(fixture.url("/api/applications"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = fixture
        .client
        .get(fixture.url("/api/applications"))
        .header("Authorization", fixture.bearer())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Approve
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/applications/{}/status", app_id)))
        .header("Authorization", fixture.bearer())
        .json(&json!({ "status": "approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "approved");

    // Public status lookup reflects the change
    let resp = fixture
        .client
        .get(fixture.url("/api/applications/status/S1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "A");
    assert_eq!(body["status"], "approved");

    // Approved back to rejected is permitted
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/applications/{}/status", app_id)))
        .header("Authorization", fixture.bearer())
        .json(&json!({ "status": "rejected" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // Unknown status value
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/applications/{}/status", app_id)))
        .header("Authorization", fixture.bearer())
        .json(&json!({ "status": "waitlisted" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Unknown application id
    let resp = fixture
        .client
        .put(fixture.url("/api/applications/no-such-id/status"))
        .header("Authorization", fixture.bearer())
        .json(&json!({ "status": "approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Unknown student id on the public lookup
    let resp = fixture
        .client
        .get(fixture.url("/api/applications/status/UNKNOWN"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_applications_listed_newest_first() {
    let fixture = TestFixture::new().await;

    fixture.submit_application("First", "f@x.com", "S1").await;
    fixture.submit_application("Second", "s@x.com", "S2").await;

    let resp = fixture
        .client
        .get(fixture.url("/api/applications"))
        .header("Authorization", fixture.bearer())
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items[0]["name"], "Second");
    assert_eq!(items[1]["name"], "First");
}

#[tokio::test]
async fn test_not_found_errors() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/events/non-existent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Event not found");

    let resp = fixture
        .client
        .delete(fixture.url("/api/gallery/non-existent-id"))
        .header("Authorization", fixture.bearer())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
