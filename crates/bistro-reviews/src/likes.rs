//! Optimistic like toggling.
//!
//! A click flips the like immediately and marks the review `Pending`; the
//! server response then either commits its own numbers or rolls the review
//! back to what it showed before the click.

use bistro_api_types::{LikeResponse, ReviewId};
use bistro_client::ClientError;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikePhase {
    Committed,
    Pending { previous_likes: u32, previous_liked: bool },
    RolledBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub likes: u32,
    pub liked: bool,
    pub phase: LikePhase,
}

impl LikeState {
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, LikePhase::Pending { .. })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LikeError {
    #[error("review {0} is not on this page")]
    UnknownReview(ReviewId),
    #[error("review {0} already has a like request in flight")]
    AlreadyPending(ReviewId),
    #[error("review {0} has no like request in flight")]
    NotPending(ReviewId),
    #[error("like request for review {review_id} failed: {source}")]
    Rejected {
        review_id: ReviewId,
        #[source]
        source: ClientError,
    },
}

#[derive(Debug, Default)]
pub struct ReviewLikes {
    reviews: HashMap<ReviewId, LikeState>,
}

impl ReviewLikes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a review with the count and state the page rendered.
    pub fn register(&mut self, review_id: ReviewId, likes: u32, liked: bool) {
        self.reviews.insert(
            review_id,
            LikeState {
                likes,
                liked,
                phase: LikePhase::Committed,
            },
        );
    }

    pub fn state(&self, review_id: ReviewId) -> Option<LikeState> {
        self.reviews.get(&review_id).copied()
    }

    pub fn toggle(&mut self, review_id: ReviewId) -> Result<LikeState, LikeError> {
        let state = self
            .reviews
            .get_mut(&review_id)
            .ok_or(LikeError::UnknownReview(review_id))?;
        if state.is_pending() {
            return Err(LikeError::AlreadyPending(review_id));
        }

        let previous_likes = state.likes;
        let previous_liked = state.liked;
        state.liked = !previous_liked;
        state.likes = if state.liked {
            previous_likes.saturating_add(1)
        } else {
            previous_likes.saturating_sub(1)
        };
        state.phase = LikePhase::Pending {
            previous_likes,
            previous_liked,
        };
        debug!(%review_id, liked = state.liked, "like toggled optimistically");
        Ok(*state)
    }

    /// Adopt the server's view of the review.
    pub fn commit(&mut self, review_id: ReviewId, response: &LikeResponse) -> Result<LikeState, LikeError> {
        let state = self.pending_mut(review_id)?;
        state.likes = response.new_likes;
        state.liked = response.is_liked;
        state.phase = LikePhase::Committed;
        Ok(*state)
    }

    /// Restore what the review showed before the toggle.
    pub fn roll_back(&mut self, review_id: ReviewId) -> Result<LikeState, LikeError> {
        let state = self.pending_mut(review_id)?;
        if let LikePhase::Pending {
            previous_likes,
            previous_liked,
        } = state.phase
        {
            state.likes = previous_likes;
            state.liked = previous_liked;
        }
        state.phase = LikePhase::RolledBack;
        debug!(%review_id, "like rolled back");
        Ok(*state)
    }

    /// Apply the outcome of the like request: commit on success, roll back on failure.
    pub fn settle(
        &mut self,
        review_id: ReviewId,
        outcome: Result<LikeResponse, ClientError>,
    ) -> Result<LikeState, LikeError> {
        match outcome {
            Ok(response) => self.commit(review_id, &response),
            Err(source) => {
                self.roll_back(review_id)?;
                Err(LikeError::Rejected { review_id, source })
            }
        }
    }

    fn pending_mut(&mut self, review_id: ReviewId) -> Result<&mut LikeState, LikeError> {
        let state = self
            .reviews
            .get_mut(&review_id)
            .ok_or(LikeError::UnknownReview(review_id))?;
        if !state.is_pending() {
            return Err(LikeError::NotPending(review_id));
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVIEW: ReviewId = ReviewId(7);

    fn likes() -> ReviewLikes {
        let mut likes = ReviewLikes::new();
        likes.register(REVIEW, 12, false);
        likes
    }

    #[test]
    fn toggle_is_optimistic_and_pending() -> anyhow::Result<()> {
        let mut likes = likes();
        let state = likes.toggle(REVIEW)?;
        assert_eq!((state.likes, state.liked), (13, true));
        assert!(state.is_pending());
        assert_eq!(likes.toggle(REVIEW), Err(LikeError::AlreadyPending(REVIEW)));
        Ok(())
    }

    #[test]
    fn commit_adopts_server_numbers() -> anyhow::Result<()> {
        let mut likes = likes();
        likes.toggle(REVIEW)?;
        let response = LikeResponse {
            status: "success".to_owned(),
            is_liked: true,
            new_likes: 20,
        };
        let state = likes.commit(REVIEW, &response)?;
        assert_eq!((state.likes, state.liked, state.phase), (20, true, LikePhase::Committed));
        assert_eq!(likes.commit(REVIEW, &response), Err(LikeError::NotPending(REVIEW)));
        Ok(())
    }

    #[test]
    fn failed_request_restores_previous_state() -> anyhow::Result<()> {
        let mut likes = likes();
        likes.toggle(REVIEW)?;
        let unauthorized = ClientError::Status {
            status: 401,
            message: Some("Please log in first".to_owned()),
        };
        let err = likes.settle(REVIEW, Err(unauthorized.clone()));
        assert_eq!(
            err,
            Err(LikeError::Rejected {
                review_id: REVIEW,
                source: unauthorized
            })
        );

        let state = likes.state(REVIEW).expect("tracked");
        assert_eq!((state.likes, state.liked, state.phase), (12, false, LikePhase::RolledBack));

        let again = likes.toggle(REVIEW)?;
        assert_eq!((again.likes, again.liked), (13, true));
        Ok(())
    }

    #[test]
    fn unliking_at_zero_does_not_underflow() -> anyhow::Result<()> {
        let mut likes = ReviewLikes::new();
        likes.register(REVIEW, 0, true);
        let state = likes.toggle(REVIEW)?;
        assert_eq!((state.likes, state.liked), (0, false));
        Ok(())
    }

    #[test]
    fn unknown_review_is_rejected() {
        let mut likes = ReviewLikes::new();
        assert_eq!(likes.toggle(ReviewId(1)), Err(LikeError::UnknownReview(ReviewId(1))));
        assert_eq!(likes.roll_back(ReviewId(1)), Err(LikeError::UnknownReview(ReviewId(1))));
    }
}
