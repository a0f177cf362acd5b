use sqlx::PgPool;

use crate::models::{NewSubmission, Submission};

pub async fn create(pool: &PgPool, submission: &NewSubmission) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "INSERT INTO contact_submissions (name, email, message)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&submission.name)
    .bind(&submission.email)
    .bind(&submission.message)
    .fetch_one(pool)
    .await
}
