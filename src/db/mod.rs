pub mod submissions;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewSubmission, Submission};

/// Durable storage for contact submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert one record. `created_at` is assigned by the store.
    async fn create(&self, submission: &NewSubmission) -> Result<Submission, sqlx::Error>;
}

/// Postgres-backed store over a shared connection pool.
#[derive(Clone)]
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn create(&self, submission: &NewSubmission) -> Result<Submission, sqlx::Error> {
        submissions::create(&self.pool, submission).await
    }
}
