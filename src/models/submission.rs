use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored contact-form entry. `created_at` is assigned by the store.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A validated submission that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}
