use serde_json::Value;

use crate::email::templates;
use crate::error::ContactError;
use crate::models::Submission;
use crate::state::SharedState;

use super::fields;

/// Validate, persist, then notify.
///
/// Notification is only attempted once the record is stored. A notification
/// failure does not remove the stored record.
pub async fn run(state: &SharedState, raw: Value) -> Result<Submission, ContactError> {
    let new = fields::validate(&raw).map_err(ContactError::Validation)?;

    let submission = state.store.create(&new).await?;
    tracing::info!("Stored contact submission {}", submission.id);

    let email = templates::render_contact(&submission.name, &submission.email, &submission.message);
    state
        .notifier
        .notify(&email)
        .await
        .map_err(ContactError::Notification)?;
    tracing::info!("Notification sent for contact submission {}", submission.id);

    Ok(submission)
}
