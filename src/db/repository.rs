//! Database repository for all store operations.
//!
//! Every write is a single-row statement; the store's own per-row atomicity
//! is the consistency guarantee.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    AdminUser, Announcement, Application, ApplicationStatus, CreateEventRequest,
    CreateGalleryImageRequest, CreateTeamMemberRequest, Event, EventStatus, GalleryImage,
    NewApplication, TeamMember, UpdateEventRequest, UpdateTeamMemberRequest,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== ADMIN OPERATIONS ====================

    /// Look up an admin account by email.
    pub async fn get_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, role, created_at FROM admin_users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(admin_from_row))
    }

    /// Create the admin account, or refresh its password hash if the email
    /// already exists. Used by startup seeding.
    pub async fn upsert_admin(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<AdminUser, AppError> {
        if let Some(existing) = self.get_admin_by_email(email).await? {
            sqlx::query("UPDATE admin_users SET password_hash = ? WHERE id = ?")
                .bind(password_hash)
                .bind(&existing.id)
                .execute(&self.pool)
                .await?;

            return Ok(AdminUser {
                password_hash: password_hash.to_string(),
                ..existing
            });
        }

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO admin_users (id, name, email, password_hash, role, created_at) VALUES (?, ?, ?, ?, 'admin', ?)",
        )
        .bind(&id)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(AdminUser {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role: "admin".to_string(),
            created_at: now,
        })
    }

    // ==================== EVENT OPERATIONS ====================

    /// List all events, soonest first.
    pub async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, description, date, venue, image_url, registration_link, status, created_at, updated_at FROM events ORDER BY date ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(event_from_row).collect())
    }

    /// Get an event by ID.
    pub async fn get_event(&self, id: &str) -> Result<Option<Event>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, description, date, venue, image_url, registration_link, status, created_at, updated_at FROM events WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(event_from_row))
    }

    /// Create a new event.
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO events (id, title, description, date, venue, image_url, registration_link, status, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.date)
        .bind(&request.venue)
        .bind(&request.image_url)
        .bind(&request.registration_link)
        .bind(request.status.as_str())
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Event {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            date: request.date.clone(),
            venue: request.venue.clone(),
            image_url: request.image_url.clone(),
            registration_link: request.registration_link.clone(),
            status: request.status,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update an event. An absent field keeps its prior value.
    pub async fn update_event(
        &self,
        id: &str,
        request: &UpdateEventRequest,
    ) -> Result<Event, AppError> {
        let existing = self
            .get_event(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let now = Utc::now().to_rfc3339();

        let title = request.title.as_ref().unwrap_or(&existing.title);
        let description = request.description.as_ref().unwrap_or(&existing.description);
        let date = request.date.as_ref().unwrap_or(&existing.date);
        let venue = request.venue.as_ref().unwrap_or(&existing.venue);
        let image_url = match &request.image_url {
            Some(value) => value.clone(),
            None => existing.image_url.clone(),
        };
        let registration_link = match &request.registration_link {
            Some(value) => value.clone(),
            None => existing.registration_link.clone(),
        };
        let status = request.status.unwrap_or(existing.status);

        sqlx::query(
            "UPDATE events SET title = ?, description = ?, date = ?, venue = ?, image_url = ?, registration_link = ?, status = ?, updated_at = ? WHERE id = ?",
        )
        .bind(title)
        .bind(description)
        .bind(date)
        .bind(venue)
        .bind(&image_url)
        .bind(&registration_link)
        .bind(status.as_str())
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Event {
            id: id.to_string(),
            title: title.clone(),
            description: description.clone(),
            date: date.clone(),
            venue: venue.clone(),
            image_url,
            registration_link,
            status,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete an event. Gallery rows referencing it are left untouched.
    pub async fn delete_event(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        Ok(())
    }

    // ==================== ANNOUNCEMENT OPERATIONS ====================

    /// List all announcements, newest first.
    pub async fn list_announcements(&self) -> Result<Vec<Announcement>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, message, created_at FROM announcements ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(announcement_from_row).collect())
    }

    /// Create a new announcement.
    pub async fn create_announcement(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Announcement, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query("INSERT INTO announcements (id, title, message, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(title)
            .bind(message)
            .bind(&now)
            .execute(&self.pool)
            .await?;

        Ok(Announcement {
            id,
            title: title.to_string(),
            message: message.to_string(),
            created_at: now,
        })
    }

    /// Delete an announcement.
    pub async fn delete_announcement(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Announcement not found".to_string()));
        }

        Ok(())
    }

    // ==================== GALLERY OPERATIONS ====================

    /// List all gallery images, newest first, with the referenced event's
    /// title resolved at read time. A dangling reference yields no title.
    pub async fn list_gallery_images(&self) -> Result<Vec<GalleryImage>, AppError> {
        let rows = sqlx::query(
            r#"SELECT g.id, g.image_url, g.event_id, e.title AS event_title, g.created_at
               FROM gallery_images g
               LEFT JOIN events e ON g.event_id = e.id
               ORDER BY g.created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(gallery_image_from_row).collect())
    }

    /// Add a gallery image. The event reference is stored as-is, never
    /// checked for existence.
    pub async fn create_gallery_image(
        &self,
        request: &CreateGalleryImageRequest,
    ) -> Result<GalleryImage, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO gallery_images (id, image_url, event_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.image_url)
        .bind(&request.event_id)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(GalleryImage {
            id,
            image_url: request.image_url.clone(),
            event_id: request.event_id.clone(),
            event_title: None,
            created_at: now,
        })
    }

    /// Delete a gallery image.
    pub async fn delete_gallery_image(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Image not found".to_string()));
        }

        Ok(())
    }

    // ==================== TEAM OPERATIONS ====================

    /// List the team roster in display order.
    pub async fn list_team_members(&self) -> Result<Vec<TeamMember>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, role, term, image_url, display_order, created_at, updated_at FROM team_members ORDER BY display_order ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(team_member_from_row).collect())
    }

    /// Get a team member by ID.
    pub async fn get_team_member(&self, id: &str) -> Result<Option<TeamMember>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, role, term, image_url, display_order, created_at, updated_at FROM team_members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(team_member_from_row))
    }

    /// Add a team member.
    pub async fn create_team_member(
        &self,
        request: &CreateTeamMemberRequest,
    ) -> Result<TeamMember, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO team_members (id, name, role, term, image_url, display_order, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.role)
        .bind(&request.term)
        .bind(&request.image_url)
        .bind(request.display_order)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(TeamMember {
            id,
            name: request.name.clone(),
            role: request.role.clone(),
            term: request.term.clone(),
            image_url: request.image_url.clone(),
            display_order: request.display_order,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a team member. An absent field keeps its prior value.
    pub async fn update_team_member(
        &self,
        id: &str,
        request: &UpdateTeamMemberRequest,
    ) -> Result<TeamMember, AppError> {
        let existing = self
            .get_team_member(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team member not found".to_string()))?;

        let now = Utc::now().to_rfc3339();

        let name = request.name.as_ref().unwrap_or(&existing.name);
        let role = request.role.as_ref().unwrap_or(&existing.role);
        let term = request.term.as_ref().unwrap_or(&existing.term);
        let image_url = match &request.image_url {
            Some(value) => value.clone(),
            None => existing.image_url.clone(),
        };
        let display_order = request.display_order.unwrap_or(existing.display_order);

        sqlx::query(
            "UPDATE team_members SET name = ?, role = ?, term = ?, image_url = ?, display_order = ?, updated_at = ? WHERE id = ?",
        )
        .bind(name)
        .bind(role)
        .bind(term)
        .bind(&image_url)
        .bind(display_order)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(TeamMember {
            id: id.to_string(),
            name: name.clone(),
            role: role.clone(),
            term: term.clone(),
            image_url,
            display_order,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Remove a team member.
    pub async fn delete_team_member(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Team member not found".to_string()));
        }

        Ok(())
    }

    // ==================== APPLICATION OPERATIONS ====================

    /// List all applications, newest first.
    pub async fn list_applications(&self) -> Result<Vec<Application>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, email, student_id, department, year, skills, status, created_at FROM applications ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(application_from_row).collect())
    }

    /// Get an application by ID.
    pub async fn get_application(&self, id: &str) -> Result<Option<Application>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, email, student_id, department, year, skills, status, created_at FROM applications WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(application_from_row))
    }

    /// Submit an application. Uniqueness of email and student id is enforced
    /// by the store in the same statement as the insert, so concurrent
    /// submissions cannot both pass a separate check.
    pub async fn create_application(
        &self,
        request: &NewApplication,
    ) -> Result<Application, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO applications (id, name, email, student_id, department, year, skills, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, 'pending', ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.student_id)
        .bind(&request.department)
        .bind(&request.year)
        .bind(&request.skills)
        .bind(&now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(Application {
                id,
                name: request.name.clone(),
                email: request.email.clone(),
                student_id: request.student_id.clone(),
                department: request.department.clone(),
                year: request.year.clone(),
                skills: request.skills.clone(),
                status: ApplicationStatus::Pending,
                created_at: now,
            }),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AppError::Duplicate(
                    "Application with this email or ID already exists".to_string(),
                ))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Set an application's review status. Any transition between the three
    /// states is permitted.
    pub async fn update_application_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<Application, AppError> {
        let existing = self
            .get_application(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

        sqlx::query("UPDATE applications SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Application { status, ..existing })
    }

    /// Public status lookup by student id.
    pub async fn find_application_by_student_id(
        &self,
        student_id: &str,
    ) -> Result<Option<Application>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, email, student_id, department, year, skills, status, created_at FROM applications WHERE student_id = ?",
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(application_from_row))
    }
}

// Helper functions for row conversion

fn admin_from_row(row: &sqlx::sqlite::SqliteRow) -> AdminUser {
    AdminUser {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        role: row.get("role"),
        created_at: row.get("created_at"),
    }
}

fn event_from_row(row: &sqlx::sqlite::SqliteRow) -> Event {
    let status: String = row.get("status");
    Event {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        date: row.get("date"),
        venue: row.get("venue"),
        image_url: row.get("image_url"),
        registration_link: row.get("registration_link"),
        status: EventStatus::from_str(&status).unwrap_or(EventStatus::Upcoming),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn announcement_from_row(row: &sqlx::sqlite::SqliteRow) -> Announcement {
    Announcement {
        id: row.get("id"),
        title: row.get("title"),
        message: row.get("message"),
        created_at: row.get("created_at"),
    }
}

fn gallery_image_from_row(row: &sqlx::sqlite::SqliteRow) -> GalleryImage {
    GalleryImage {
        id: row.get("id"),
        image_url: row.get("image_url"),
        event_id: row.get("event_id"),
        event_title: row.get("event_title"),
        created_at: row.get("created_at"),
    }
}

fn team_member_from_row(row: &sqlx::sqlite::SqliteRow) -> TeamMember {
    TeamMember {
        id: row.get("id"),
        name: row.get("name"),
        role: row.get("role"),
        term: row.get("term"),
        image_url: row.get("image_url"),
        display_order: row.get("display_order"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn application_from_row(row: &sqlx::sqlite::SqliteRow) -> Application {
    let status: String = row.get("status");
    Application {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        student_id: row.get("student_id"),
        department: row.get("department"),
        year: row.get("year"),
        skills: row.get("skills"),
        status: ApplicationStatus::from_str(&status).unwrap_or(ApplicationStatus::Pending),
        created_at: row.get("created_at"),
    }
}
