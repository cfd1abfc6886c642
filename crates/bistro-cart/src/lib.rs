//! Shopping cart state for the storefront.
//!
//! `CartStore` owns the persisted line items, `CartPanel` the modal's view
//! state, and `checkout` the order submission. None of it touches the DOM;
//! the WASM adapter subscribes to the store and renders.

pub mod catalog;
pub mod checkout;
pub mod locale;
pub mod notice;
pub mod panel;
pub mod store;

pub use catalog::{Catalog, OrderButton, ResolvedItem, resolve_order_button};
pub use checkout::{CheckoutError, checkout, checkout_request};
pub use locale::{Locale, Messages};
pub use notice::Notice;
pub use panel::{CartPanel, CartTab, EmptyReason, HistoryView, TabEffect, badge_label, format_price};
pub use store::{CartError, CartStore};
