//! Event binding.
//!
//! Wires every listener once at start-up. Closures are leaked with
//! `forget()`; the page owns them for its whole lifetime. Lists that are
//! re-rendered (cart lines, order history, menu rows, carousel spots) use a
//! single delegated listener on their container.

use crate::cart_view;
use crate::carousel_view::{self, CarouselView};
use crate::dom::{CartElements, Elements, MenuElements};
use crate::menu_view;
use crate::reviews_view;
use bistro_cart::CartTab;
use bistro_carousel::Point;
use std::str::FromStr;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, TouchEvent};

/// Attach a listener, leaking the closure.
macro_rules! listen {
    ($el:expr, $event:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(Event)>);
        let bound = $el.add_event_listener_with_callback($event, cb.as_ref().unchecked_ref());
        cb.forget();
        bound
    }};
}

fn target_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn touch_point(event: &Event) -> Option<Point> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements, carousel: Option<&CarouselView>) -> Result<(), JsValue> {
    if let Some(cart) = &els.cart {
        bind_cart(els, cart)?;
    }
    bind_order_buttons(els)?;
    if let Some(menu) = &els.menu {
        bind_menu(menu)?;
    }
    if let Some(view) = carousel {
        bind_carousel(view)?;
    }
    bind_likes(els)?;
    Ok(())
}

fn bind_cart(els: &Elements, cart: &CartElements) -> Result<(), JsValue> {
    // ── Open / close ──
    for button in &els.badges.open_buttons {
        let cart = cart.clone();
        listen!(button, "click", move |event: Event| {
            event.prevent_default();
            cart_view::show_modal(&cart);
        })?;
    }
    for closer in cart.close_btn.iter().chain(cart.overlay.iter()) {
        let cart = cart.clone();
        listen!(closer, "click", move |_: Event| cart_view::hide_modal(&cart))?;
    }

    // ── Tabs ──
    for button in &cart.tab_buttons {
        let Some(tab) = button
            .get_attribute("data-tab")
            .and_then(|raw| CartTab::from_str(&raw).ok())
        else {
            continue;
        };
        let cart = cart.clone();
        listen!(button, "click", move |_: Event| cart_view::switch_tab(&cart, tab))?;
    }

    // ── Lists ──
    listen!(cart.items_list, "click", move |event: Event| {
        if let Some(target) = target_element(&event) {
            cart_view::on_items_click(&target);
        }
    })?;
    if let Some(history) = &cart.history_list {
        let cart = cart.clone();
        listen!(history, "click", move |event: Event| {
            if let Some(target) = target_element(&event) {
                cart_view::on_history_click(&cart, &target);
            }
        })?;
    }

    // ── Checkout ──
    if let Some(checkout) = &cart.checkout_btn {
        let cart = cart.clone();
        listen!(checkout, "click", move |_: Event| {
            let cart = cart.clone();
            wasm_bindgen_futures::spawn_local(async move {
                cart_view::on_checkout(&cart).await;
            });
        })?;
    }
    Ok(())
}

fn bind_order_buttons(els: &Elements) -> Result<(), JsValue> {
    for button in &els.order_buttons {
        let clicked = button.clone();
        listen!(button, "click", move |event: Event| {
            event.prevent_default();
            cart_view::on_order_click(&clicked);
        })?;
    }
    Ok(())
}

fn bind_menu(menu: &MenuElements) -> Result<(), JsValue> {
    listen!(menu.container, "click", |event: Event| {
        let ordered = target_element(&event).is_some_and(|target| menu_view::on_container_click(&target));
        if ordered {
            event.prevent_default();
        }
    })?;
    if let Some(prev) = &menu.prev_btn {
        let menu = menu.clone();
        listen!(prev, "click", move |_: Event| menu_view::on_prev(&menu))?;
    }
    if let Some(next) = &menu.next_btn {
        let menu = menu.clone();
        listen!(next, "click", move |_: Event| menu_view::on_next(&menu))?;
    }
    Ok(())
}

fn bind_carousel(view: &CarouselView) -> Result<(), JsValue> {
    listen!(view.left_btn, "click", |_: Event| carousel_view::on_prev())?;
    listen!(view.right_btn, "click", |_: Event| carousel_view::on_next())?;

    let hover_targets: [&EventTarget; 3] = [&view.left_btn, &view.right_btn, &view.spot_list];
    for target in hover_targets {
        listen!(target, "mouseover", |_: Event| carousel_view::on_pointer_enter())?;
        listen!(target, "mouseout", |_: Event| carousel_view::on_pointer_leave())?;
    }

    listen!(view.spot_list, "click", |event: Event| {
        if let Some(spot) = target_element(&event) {
            carousel_view::on_spot_click(&spot);
        }
    })?;

    listen!(view.strip, "touchstart", |event: Event| {
        if let Some(point) = touch_point(&event) {
            carousel_view::on_touch_start(point);
        }
    })?;
    listen!(view.strip, "touchmove", |event: Event| {
        if let Some(point) = touch_point(&event) {
            carousel_view::on_touch_move(point);
        }
    })?;
    listen!(view.strip, "touchend", |_: Event| carousel_view::on_touch_end())?;
    Ok(())
}

fn bind_likes(els: &Elements) -> Result<(), JsValue> {
    for button in &els.like_buttons {
        let clicked = button.clone();
        listen!(button, "click", move |event: Event| {
            event.stop_propagation();
            let button = clicked.clone();
            wasm_bindgen_futures::spawn_local(reviews_view::on_like_click(button));
        })?;
    }
    Ok(())
}
