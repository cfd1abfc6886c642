//! Like buttons on the reviews list.

use crate::api::BrowserApi;
use crate::dom;
use crate::state;
use crate::storage::BrowserStore;
use crate::toast;
use bistro_api_types::ReviewId;
use bistro_client::ReviewApi;
use bistro_reviews::{LikeError, LikeState, liked_by, reviewer_id};
use web_sys::Element;

const LIKED_ICON: &str = "\u{2764}\u{fe0f}";
const UNLIKED_ICON: &str = "\u{1f90d}";

fn review_id(button: &Element) -> Option<ReviewId> {
    dom::data_attr(button, "review-id")
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .map(ReviewId)
}

/// Record the counts the server rendered.
///
/// A button starts liked when it carries the `liked` class or lists this
/// browser's reviewer id in `data-liked-by`.
pub fn init(buttons: &[Element]) {
    let reviewer = reviewer_id(&BrowserStore);
    state::with_mut(|s| {
        for button in buttons {
            let Some(id) = review_id(button) else {
                continue;
            };
            let likes = dom::query_all_within(button, ".like-count")
                .first()
                .and_then(|el| el.text_content())
                .and_then(|text| text.trim().parse::<u32>().ok())
                .unwrap_or_default();
            let liked = dom::has_class(button, "liked")
                || dom::data_attr(button, "liked-by").is_some_and(|list| liked_by(&list, &reviewer));
            s.likes.register(id, likes, liked);
        }
    });
    for button in buttons {
        if let Some(like) = review_id(button).and_then(|id| state::with(|s| s.likes.state(id))) {
            paint(button, like);
        }
    }
}

fn paint(button: &Element, like: LikeState) {
    dom::toggle_class(button, "liked", like.liked);
    dom::toggle_class(button, "pending", like.is_pending());
    if let Some(icon) = dom::query_all_within(button, ".like-icon").first() {
        dom::set_text(icon, if like.liked { LIKED_ICON } else { UNLIKED_ICON });
    }
    if let Some(count) = dom::query_all_within(button, ".like-count").first() {
        dom::set_text(count, &like.likes.to_string());
    }
}

pub async fn on_like_click(button: Element) {
    let Some(id) = review_id(&button) else {
        return;
    };

    match state::with_mut(|s| s.likes.toggle(id)) {
        Ok(optimistic) => paint(&button, optimistic),
        Err(LikeError::AlreadyPending(_)) => return,
        Err(err) => {
            gloo_console::warn!(format!("like toggle refused: {err}"));
            return;
        }
    }

    let outcome = BrowserApi.toggle_like(id).await;
    let settled = state::with_mut(|s| s.likes.settle(id, outcome));
    match settled {
        Ok(confirmed) => paint(&button, confirmed),
        Err(LikeError::Rejected { source, .. }) => {
            if let Some(restored) = state::with(|s| s.likes.state(id)) {
                paint(&button, restored);
            }
            let message = source
                .server_message()
                .map(str::to_owned)
                .unwrap_or_else(|| state::messages().like_failed.to_owned());
            toast::show_message(message);
        }
        Err(err) => gloo_console::warn!(format!("like settle failed: {err}")),
    }
}
