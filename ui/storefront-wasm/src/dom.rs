//! DOM helpers and element bindings.
//!
//! Pages differ: the cart modal, the menu listing, the carousel and the
//! reviews list are each optional, so every group binds to `None` when its root element is missing.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(list) => collect_nodes(&list),
        Err(_) => Vec::new(),
    }
}

pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(list) => collect_nodes(&list),
        Err(_) => Vec::new(),
    }
}

fn collect_nodes(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// `display: <shown>` or `display: none`.
pub fn set_visible(el: &Element, visible: bool, shown: &str) {
    set_style(el, "display", if visible { shown } else { "none" });
}

pub fn set_disabled(el: &Element, disabled: bool) {
    let _ = el.toggle_attribute_with_force("disabled", disabled);
}

pub fn data_attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{name}"))
        .filter(|value| !value.is_empty())
}

pub fn create_element(tag: &str) -> Option<Element> {
    document().create_element(tag).ok()
}

pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

/// Escape text for interpolation into HTML.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Milliseconds since the epoch, from the browser clock.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

// ── Element groups ──

/// The cart modal and its tabs.
#[derive(Clone)]
pub struct CartElements {
    pub modal: Element,
    pub items_list: Element,
    pub empty_message: Option<Element>,
    pub total_price: Option<Element>,
    pub history_list: Option<Element>,
    pub history_empty: Option<Element>,
    pub current_tab: Option<Element>,
    pub history_tab: Option<Element>,
    pub tab_buttons: Vec<Element>,
    pub close_btn: Option<Element>,
    pub overlay: Option<Element>,
    pub checkout_btn: Option<Element>,
}

impl CartElements {
    pub fn bind() -> Option<Self> {
        let modal = by_id("cartModal")?;
        let items_list = by_id("cartItemsList")?;
        Some(Self {
            overlay: query_all_within(&modal, ".cart-modal-overlay").into_iter().next(),
            modal,
            items_list,
            empty_message: by_id("cartEmptyMessage"),
            total_price: by_id("cartTotalPrice"),
            history_list: by_id("orderHistoryList"),
            history_empty: by_id("orderHistoryEmpty"),
            current_tab: by_id("currentOrderTab"),
            history_tab: by_id("orderHistoryTab"),
            tab_buttons: query_all(".cart-tab-btn"),
            close_btn: by_id("cartModalClose"),
            checkout_btn: by_id("checkoutBtn"),
        })
    }
}

/// Quantity badges and the buttons that open the cart.
#[derive(Clone, Default)]
pub struct BadgeElements {
    /// `(badge, display value when shown)`.
    pub badges: Vec<(Element, &'static str)>,
    pub open_buttons: Vec<Element>,
}

impl BadgeElements {
    pub fn bind() -> Self {
        let mut badges: Vec<(Element, &'static str)> = query_all("#cart-badge, .cart-badge")
            .into_iter()
            .map(|el| (el, "inline-block"))
            .collect();
        if let Some(fixed) = by_id("cartBadgeFixed") {
            badges.push((fixed, "flex"));
        }

        let open_buttons = ["viewCartBtn", "viewCartBtnFixed"]
            .into_iter()
            .filter_map(by_id)
            .collect();
        Self {
            badges,
            open_buttons,
        }
    }
}

/// Menu listing and its page controls.
#[derive(Clone)]
pub struct MenuElements {
    pub container: Element,
    pub prev_btn: Option<Element>,
    pub next_btn: Option<Element>,
    pub page_info: Option<Element>,
}

impl MenuElements {
    pub fn bind() -> Option<Self> {
        Some(Self {
            container: by_id("menu-container")?,
            prev_btn: by_id("prevBtn"),
            next_btn: by_id("nextBtn"),
            page_info: by_id("pageInfo"),
        })
    }
}

/// All element groups on the current page.
#[derive(Clone)]
pub struct Elements {
    pub cart: Option<CartElements>,
    pub badges: BadgeElements,
    pub menu: Option<MenuElements>,
    pub order_buttons: Vec<Element>,
    pub swiper_root: Option<Element>,
    pub like_buttons: Vec<Element>,
}

impl Elements {
    pub fn bind() -> Self {
        Self {
            cart: CartElements::bind(),
            badges: BadgeElements::bind(),
            menu: MenuElements::bind(),
            order_buttons: query_all("[data-pizza-type]"),
            swiper_root: query(".swiper-list"),
            like_buttons: query_all(".comment-like-btn"),
        }
    }
}
