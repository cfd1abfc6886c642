//! Menu listing: fixed-size pages over the menu rows and star ratings.

pub mod listing;
pub mod paginator;
pub mod rating;

pub use listing::{DEFAULT_MENU_IMAGE, MenuEntry};
pub use paginator::{DEFAULT_PAGE_SIZE, PageLabel, Paginator};
pub use rating::{MAX_STARS, StarIcon, Stars};
