use bistro_storage::{KeyValueStore, REVIEW_USER_ID_KEY};
use tracing::warn;
use uuid::Uuid;

pub const REVIEWER_ID_PREFIX: &str = "user_";

/// Identifier of this browser's reviewer, created and stored on first use.
///
/// When storage cannot be read or written a fresh id is still returned; it
/// lasts for the current page only.
pub fn reviewer_id<S: KeyValueStore + ?Sized>(store: &S) -> String {
    match store.get_item(REVIEW_USER_ID_KEY) {
        Ok(Some(existing)) if !existing.trim().is_empty() => return existing,
        Ok(_) => {}
        Err(err) => warn!(error = %err, "reviewer id read failed"),
    }

    let id = format!("{REVIEWER_ID_PREFIX}{}", Uuid::new_v4().simple());
    if let Err(err) = store.set_item(REVIEW_USER_ID_KEY, &id) {
        warn!(error = %err, "reviewer id not persisted");
    }
    id
}

/// Whether `reviewer` appears in a `likedBy` list.
///
/// The list is comma-separated, as rendered into a like button's
/// `data-liked-by` attribute.
pub fn liked_by(list: &str, reviewer: &str) -> bool {
    !reviewer.is_empty() && list.split(',').any(|entry| entry.trim() == reviewer)
}
