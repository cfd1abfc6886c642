//! Review likes: the per-browser reviewer identifier and an optimistic
//! like/unlike state machine.

pub mod identity;
pub mod likes;

pub use identity::{REVIEWER_ID_PREFIX, liked_by, reviewer_id};
pub use likes::{LikeError, LikePhase, LikeState, ReviewLikes};
