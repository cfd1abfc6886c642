//! Transient notifications.
//!
//! One toast at a time: showing a new one removes the old element and drops
//! its timers, which cancels them.

use crate::dom;
use bistro_cart::Notice;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use web_sys::Element;

const TOAST_ID: &str = "toast-notification";
const FADE_MS: u32 = 300;

thread_local! {
    static TIMERS: RefCell<Vec<Timeout>> = const { RefCell::new(Vec::new()) };
}

const TOAST_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
background-color: #9c5959; color: #f5f5f5; padding: 15px 25px; border-radius: 5px; \
box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3); z-index: 10000; font-size: 18px; \
opacity: 0; transform: translateX(100px); transition: opacity 0.3s ease, transform 0.3s ease;";

pub fn show(notice: &Notice) {
    TIMERS.with(|t| t.borrow_mut().clear());
    if let Some(existing) = dom::by_id(TOAST_ID) {
        existing.remove();
    }

    let Some(toast) = attach(&notice.message) else {
        return;
    };

    let shown = toast.clone();
    let enter = Timeout::new(10, move || {
        dom::set_style(&shown, "opacity", "1");
        dom::set_style(&shown, "transform", "translateX(0)");
    });

    let duration_ms = u32::try_from(notice.duration.as_millis()).unwrap_or(u32::MAX);
    let leave = Timeout::new(duration_ms, move || {
        dom::set_style(&toast, "opacity", "0");
        dom::set_style(&toast, "transform", "translateX(100px)");
        let fading = toast.clone();
        let remove = Timeout::new(FADE_MS, move || fading.remove());
        TIMERS.with(|t| t.borrow_mut().push(remove));
    });

    TIMERS.with(|t| {
        let mut timers = t.borrow_mut();
        timers.push(enter);
        timers.push(leave);
    });
}

/// Build the toast element and append it to `<body>`.
fn attach(message: &str) -> Option<Element> {
    let toast = dom::create_element("div")?;
    toast.set_id(TOAST_ID);
    dom::set_text(&toast, message);
    toast.set_attribute("style", TOAST_STYLE).ok()?;
    position_near_user_menu(&toast);
    dom::document().body()?.append_child(&toast).ok()?;
    Some(toast)
}

pub fn show_message(message: impl Into<String>) {
    show(&Notice::new(message));
}

fn position_near_user_menu(toast: &Element) {
    let Some(anchor) = dom::by_id("userMenuContainer").or_else(|| dom::query(".user-menu-fixed"))
    else {
        return;
    };
    let rect = anchor.get_bounding_client_rect();
    let viewport = dom::window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(rect.right());
    let right = (viewport - rect.right()).max(20.0);
    dom::set_style(toast, "top", &format!("{}px", rect.bottom() + 10.0));
    dom::set_style(toast, "right", &format!("{right}px"));
}
