//! Cart modal, badges and order buttons.
//!
//! Everything here renders from `state`; the cart store and panel decide,
//! this module only draws and forwards clicks.

use crate::api::BrowserApi;
use crate::dom::{self, BadgeElements, CartElements};
use crate::state;
use crate::toast;
use bistro_api_types::{CartLineItem, ItemId, OrderSummary};
use bistro_cart::{
    CartError, CartTab, HistoryView, OrderButton, TabEffect, badge_label, checkout, format_price,
    resolve_order_button,
};
use bistro_client::OrderApi;
use web_sys::Element;

// ── Badges ──

pub fn render_badges(badges: &BadgeElements, total_quantity: u32) {
    let label = badge_label(total_quantity);
    for (badge, shown) in &badges.badges {
        dom::set_text(badge, label.as_deref().unwrap_or("0"));
        dom::set_visible(badge, label.is_some(), shown);
    }
}

// ── Current cart tab ──

pub fn render_cart(els: &CartElements) {
    let Some(cart) = state::cart() else {
        return;
    };
    let items = cart.get();
    let messages = state::messages();

    dom::set_inner_html(&els.items_list, "");
    let empty = items.is_empty();
    dom::set_visible(&els.items_list, !empty, "flex");
    if let Some(message) = &els.empty_message {
        dom::set_visible(message, empty, "block");
    }

    if !empty {
        let html: String = items
            .iter()
            .map(|item| cart_item_html(item, messages.each))
            .collect();
        dom::set_inner_html(&els.items_list, &html);
    }

    if let Some(total) = &els.total_price {
        dom::set_text(total, &format_price(cart.total()));
    }
}

fn cart_item_html(item: &CartLineItem, each: &str) -> String {
    let name = dom::escape_html(&item.name);
    format!(
        r#"<div class="cart-item">
  <img src="{image}" alt="{name}" class="cart-item-image">
  <div class="cart-item-info">
    <div class="cart-item-name">{name}</div>
    <div class="cart-item-price">${price} {each}</div>
  </div>
  <div class="cart-item-controls">
    <div class="cart-item-quantity">
      <button class="quantity-btn" data-item-id="{id}" data-action="decrease">-</button>
      <span class="quantity-value">{quantity}</span>
      <button class="quantity-btn" data-item-id="{id}" data-action="increase">+</button>
    </div>
    <div class="cart-item-total">${line_total}</div>
  </div>
</div>"#,
        image = dom::escape_html(&item.image),
        price = format_price(item.price),
        id = item.id,
        quantity = item.quantity,
        line_total = format_price(item.line_total()),
    )
}

/// Click inside the cart list; only `.quantity-btn` targets act.
pub fn on_items_click(target: &Element) {
    let Ok(Some(button)) = target.closest(".quantity-btn") else {
        return;
    };
    let Some(id) = dom::data_attr(&button, "item-id").and_then(|raw| raw.parse::<u64>().ok())
    else {
        return;
    };
    let delta = match dom::data_attr(&button, "action").as_deref() {
        Some("increase") => 1,
        _ => -1,
    };

    let Some(cart) = state::cart() else {
        return;
    };
    if let Err(err) = cart.update_quantity(ItemId(id), delta) {
        gloo_console::warn!(format!("quantity change failed: {err}"));
    }
}

// ── Modal ──

pub fn show_modal(els: &CartElements) {
    state::with_mut(|s| s.panel.show());
    render_cart(els);
    dom::add_class(&els.modal, "active");
    dom::set_body_scroll_locked(true);
}

pub fn hide_modal(els: &CartElements) {
    state::with_mut(|s| s.panel.hide());
    dom::remove_class(&els.modal, "active");
    dom::set_body_scroll_locked(false);
}

pub fn switch_tab(els: &CartElements, tab: CartTab) {
    let effect = state::with_mut(|s| s.panel.switch_tab(tab));

    for button in &els.tab_buttons {
        let active = dom::data_attr(button, "tab").as_deref() == Some(tab.as_str());
        dom::toggle_class(button, "active", active);
    }
    if let Some(current) = &els.current_tab {
        dom::toggle_class(current, "active", tab == CartTab::Current);
    }
    if let Some(history) = &els.history_tab {
        dom::toggle_class(history, "active", tab == CartTab::History);
    }

    match effect {
        TabEffect::RenderCart => render_cart(els),
        TabEffect::FetchHistory => {
            render_history(els);
            let els = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                load_history(&els).await;
            });
        }
    }
}

// ── History tab ──

async fn load_history(els: &CartElements) {
    let result = BrowserApi.order_history().await;
    let messages = state::messages();
    let notice = state::with_mut(|s| s.panel.history_loaded(result, messages));
    render_history(els);
    if let Some(notice) = notice {
        toast::show(&notice);
    }
}

pub fn render_history(els: &CartElements) {
    let (Some(list), Some(empty)) = (&els.history_list, &els.history_empty) else {
        return;
    };
    let messages = state::messages();

    state::with(|s| match s.panel.history() {
        HistoryView::Loading => {
            dom::set_inner_html(
                list,
                &format!(
                    r#"<p style="padding: 16px;">{}</p>"#,
                    dom::escape_html(messages.loading_orders)
                ),
            );
            dom::set_visible(list, true, "block");
            dom::set_visible(empty, false, "block");
        }
        HistoryView::Loaded(orders) => {
            let html: String = orders
                .iter()
                .map(|order| order_html(order, s.panel.is_expanded(&order.order_id), messages.quantity))
                .collect();
            dom::set_inner_html(list, &html);
            dom::set_visible(list, true, "flex");
            dom::set_visible(empty, false, "block");
        }
        HistoryView::NotLoaded | HistoryView::Empty(_) => {
            dom::set_inner_html(list, "");
            dom::set_visible(list, false, "flex");
            dom::set_visible(empty, true, "block");
        }
    });
}

fn order_html(order: &OrderSummary, expanded: bool, quantity_label: &str) -> String {
    let active = if expanded { " active" } else { "" };
    let order_id = dom::escape_html(&order.order_id);
    let lines: String = order
        .items
        .iter()
        .map(|line| {
            format!(
                r#"<div class="order-history-item-detail">
  <div class="order-history-item-name">{name}</div>
  <div class="order-history-item-info">
    <span class="order-history-item-quantity">{quantity_label}: {quantity}</span>
    <span class="order-history-item-price">${total}</span>
  </div>
</div>"#,
                name = dom::escape_html(&line.name),
                quantity = line.quantity,
                total = format_price(line.line_total()),
            )
        })
        .collect();

    format!(
        r#"<div class="order-history-item">
  <div class="order-history-header{active}" data-order-id="{order_id}">
    <div class="order-history-info">
      <div class="order-history-number">{order_id}</div>
      <div class="order-history-date">{date}</div>
    </div>
    <div class="order-history-total">${total}</div>
    <span class="order-history-toggle">&#9660;</span>
  </div>
  <div class="order-history-details{active}" id="details-{order_id}">
    <div class="order-history-items">{lines}</div>
  </div>
</div>"#,
        date = dom::escape_html(&order.date),
        total = format_price(order.total),
    )
}

/// Click inside the history list; headers expand or collapse their order.
pub fn on_history_click(els: &CartElements, target: &Element) {
    let Ok(Some(header)) = target.closest(".order-history-header") else {
        return;
    };
    let Some(order_id) = dom::data_attr(&header, "order-id") else {
        return;
    };
    state::with_mut(|s| s.panel.toggle_order(&order_id));
    render_history(els);
}

// ── Checkout ──

pub async fn on_checkout(els: &CartElements) {
    let Some(cart) = state::cart() else {
        return;
    };
    let messages = state::messages();
    match checkout(&*cart, &BrowserApi).await {
        Ok(order) => {
            match order {
                Some(order) => gloo_console::log!(format!("order {} placed", order.order_id)),
                None => gloo_console::log!("order placed"),
            }
            toast::show_message(messages.order_placed);
            switch_tab(els, CartTab::History);
        }
        Err(err) => toast::show(&err.notice(messages)),
    }
}

// ── Order buttons ──

pub fn on_order_click(button: &Element) {
    let messages = state::messages();
    let Some(cart) = state::cart() else {
        return;
    };

    let attrs = OrderButton {
        name: button.get_attribute("data-pizza-type"),
        item_id: dom::data_attr(button, "item-id"),
        item_price: dom::data_attr(button, "item-price"),
        item_image: dom::data_attr(button, "item-image"),
    };
    let Some(resolved) = resolve_order_button(&attrs, cart.catalog()) else {
        gloo_console::error!(format!(
            "no catalog item for order button {:?}",
            attrs.name.unwrap_or_default()
        ));
        toast::show_message(messages.item_not_found);
        return;
    };

    match cart.add(resolved.id, resolved.data.as_ref()) {
        Ok(()) => toast::show_message(messages.added_to_cart),
        Err(CartError::UnknownItem(id)) => {
            gloo_console::error!(format!("item {id} is not in the catalog"));
            toast::show_message(messages.item_not_found);
        }
        Err(err) => {
            gloo_console::error!(format!("add to cart failed: {err}"));
            toast::show_message(messages.add_failed);
        }
    }
}
