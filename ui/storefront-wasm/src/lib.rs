//! Bistro storefront WASM frontend.
//!
//! Thin browser adapter over the domain crates: binds the page's elements,
//! renders cart, menu, carousel and like state, and runs the timers. All
//! decisions live in `bistro-cart`, `bistro-menu`, `bistro-carousel` and
//! `bistro-reviews`.

pub mod api;
pub mod carousel_view;
pub mod cart_view;
pub mod config;
pub mod dom;
pub mod events;
pub mod menu_view;
pub mod reviews_view;
pub mod state;
pub mod storage;
pub mod toast;

use bistro_cart::{CartStore, CartTab, Catalog};
use bistro_menu::MenuEntry;
use storage::BrowserStore;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind();
    state::set_locale(config::locale());

    let records = config::menu_records();
    gloo_console::log!(format!("storefront: {} menu items", records.len()));
    let catalog = Catalog::from_menu(records.clone());

    let mut cart = CartStore::new(BrowserStore, catalog);
    let badges = els.badges.clone();
    let cart_els = els.cart.clone();
    cart.subscribe(move |items| {
        let total_quantity = items
            .iter()
            .fold(0_u32, |total, item| total.saturating_add(item.quantity));
        cart_view::render_badges(&badges, total_quantity);
        let showing_cart = state::with(|s| s.panel.is_open() && s.panel.tab() == CartTab::Current);
        if let (true, Some(cart_els)) = (showing_cart, &cart_els) {
            cart_view::render_cart(cart_els);
        }
    });
    cart_view::render_badges(&els.badges, cart.total_quantity());
    state::set_cart(cart);

    if let Some(menu) = &els.menu {
        menu_view::mount(menu, MenuEntry::from_records(&records));
    }
    let carousel = els.swiper_root.as_ref().and_then(carousel_view::mount);
    reviews_view::init(&els.like_buttons);

    events::bind_events(&els, carousel.as_ref())
}
