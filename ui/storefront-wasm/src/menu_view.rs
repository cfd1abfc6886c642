//! Paginated menu listing.
//!
//! Renders the current page of menu rows into `#menu-container` and keeps
//! the prev/next buttons and page label in step with the paginator.

use crate::cart_view;
use crate::dom::{self, MenuElements};
use crate::state;
use bistro_cart::{Messages, format_price};
use bistro_menu::{DEFAULT_PAGE_SIZE, MenuEntry, PageLabel, Paginator};
use web_sys::Element;

pub fn mount(els: &MenuElements, entries: Vec<MenuEntry>) {
    state::with_mut(|s| {
        s.menu_pages = Paginator::new(entries.len(), DEFAULT_PAGE_SIZE);
        s.menu = entries;
    });
    render(els);
}

pub fn render(els: &MenuElements) {
    let messages = state::messages();
    let (html, label, has_prev, has_next) = state::with(|s| {
        let page = s.menu_pages.page_of(&s.menu);
        let html = if page.is_empty() {
            no_results_html(messages)
        } else {
            page.iter().map(|entry| entry_html(entry, messages)).collect()
        };
        (
            html,
            s.menu_pages.label(),
            s.menu_pages.has_prev(),
            s.menu_pages.has_next(),
        )
    });

    dom::set_inner_html(&els.container, &html);
    if let Some(info) = &els.page_info {
        let text = match label {
            PageLabel::Empty => messages.no_items_found.to_owned(),
            PageLabel::Page { current, total } => (messages.page_of)(current, total),
        };
        dom::set_text(info, &text);
    }
    if let Some(prev) = &els.prev_btn {
        paint_page_button(prev, has_prev);
    }
    if let Some(next) = &els.next_btn {
        paint_page_button(next, has_next);
    }
}

fn paint_page_button(button: &Element, enabled: bool) {
    dom::set_disabled(button, !enabled);
    dom::set_style(button, "opacity", if enabled { "1" } else { "0.5" });
    dom::set_style(button, "cursor", if enabled { "pointer" } else { "not-allowed" });
}

fn no_results_html(messages: &Messages) -> String {
    format!(
        r#"<div class="menu-no-results"><h3>{}</h3></div>"#,
        dom::escape_html(messages.no_items_found)
    )
}

fn entry_html(entry: &MenuEntry, messages: &Messages) -> String {
    let name = dom::escape_html(&entry.name);
    let stars: String = entry
        .stars
        .icons()
        .map(|icon| format!(r#"<img src="{}" class="noeffects" alt="star">"#, icon.image_path()))
        .collect();
    format!(
        r#"<div class="menu-item">
  <div class="menu-header">
    <h3>{name}: ${price}</h3>
    <a class="button" href="" data-pizza-type="{name}">{order_now}</a>
  </div>
  <div class="star mb-2">{stars}</div>
  <div class="row align-items-start">
    <div class="col-12 col-md-4 mb-3 mb-md-0">
      <img src="{image}" class="img-fluid item-image" alt="{name}">
    </div>
    <div class="col-12 col-md-8">
      <p>{description}</p>
      <span class="menu-item-category">{category}</span>
    </div>
  </div>
  <div class="border3 mt-3"></div>
</div>"#,
        price = format_price(entry.price),
        order_now = dom::escape_html(messages.order_now),
        image = dom::escape_html(&entry.image),
        description = dom::escape_html(&entry.description),
        category = dom::escape_html(&entry.category),
    )
}

// ── Event handlers ──

pub fn on_prev(els: &MenuElements) {
    if state::with_mut(|s| s.menu_pages.prev()) {
        render(els);
    }
}

pub fn on_next(els: &MenuElements) {
    if state::with_mut(|s| s.menu_pages.next()) {
        render(els);
    }
}

/// Click inside the listing; returns whether an order button was hit.
pub fn on_container_click(target: &Element) -> bool {
    let Ok(Some(button)) = target.closest("[data-pizza-type]") else {
        return false;
    };
    cart_view::on_order_click(&button);
    true
}
