//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Never hold a borrow while calling into the cart store: its listeners read
//! the state again to re-render.

use crate::storage::BrowserStore;
use bistro_cart::{CartPanel, CartStore, Locale, Messages};
use bistro_carousel::Carousel;
use bistro_menu::{MenuEntry, Paginator};
use bistro_reviews::ReviewLikes;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;

pub type Cart = CartStore<BrowserStore>;

#[derive(Default)]
pub struct AppState {
    pub locale: Locale,
    pub cart: Option<Rc<Cart>>,
    pub panel: CartPanel,
    pub menu: Vec<MenuEntry>,
    pub menu_pages: Paginator,
    pub carousel: Option<Carousel>,
    pub likes: ReviewLikes,
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
    static AUTO_ADVANCE: RefCell<Option<Interval>> = const { RefCell::new(None) };
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn cart() -> Option<Rc<Cart>> {
    with(|s| s.cart.clone())
}

pub fn set_cart(cart: Cart) {
    with_mut(|s| s.cart = Some(Rc::new(cart)));
}

pub fn messages() -> &'static Messages {
    with(|s| s.locale.messages())
}

pub fn set_locale(locale: Locale) {
    with_mut(|s| s.locale = locale);
}

/// Replace the auto-advance timer; the previous one is dropped, which cancels it.
pub fn set_auto_advance(timer: Option<Interval>) {
    AUTO_ADVANCE.with(|t| *t.borrow_mut() = timer);
}
