//! Page-provided configuration.
//!
//! The server renders the menu into `window.MENU_ITEMS_FROM_DB`, carousel
//! options into `data-*` attributes of `.swiper-list`, and the language into
//! `<html lang>`. Anything missing or malformed falls back to defaults.

use crate::dom;
use bistro_api_types::{MenuRecord, Slide};
use bistro_cart::Locale;
use bistro_carousel::CarouselConfig;
use wasm_bindgen::JsValue;
use web_sys::Element;

pub const MENU_GLOBAL: &str = "MENU_ITEMS_FROM_DB";

pub fn locale() -> Locale {
    dom::document()
        .document_element()
        .and_then(|html| html.get_attribute("lang"))
        .map(|tag| Locale::from_tag(&tag))
        .unwrap_or_default()
}

/// Menu rows injected by the server; empty when missing or malformed.
pub fn menu_records() -> Vec<MenuRecord> {
    let window: JsValue = dom::window().into();
    let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(MENU_GLOBAL)) {
        Ok(raw) if !raw.is_undefined() && !raw.is_null() => raw,
        _ => return Vec::new(),
    };

    serde_wasm_bindgen::from_value(raw).unwrap_or_else(|err| {
        gloo_console::warn!(format!("ignoring malformed {MENU_GLOBAL}: {err}"));
        Vec::new()
    })
}

/// Raw `data-*` values of the carousel root.
#[derive(Debug, Default)]
pub struct CarouselAttrs {
    pub slides: Option<String>,
    pub ani_time: Option<String>,
    pub interval_time: Option<String>,
    pub autoplay: Option<String>,
}

impl CarouselAttrs {
    pub fn read(root: &Element) -> Self {
        Self {
            slides: dom::data_attr(root, "slides"),
            ani_time: dom::data_attr(root, "ani-time"),
            interval_time: dom::data_attr(root, "interval-time"),
            autoplay: dom::data_attr(root, "autoplay"),
        }
    }

    pub fn config(&self) -> CarouselConfig {
        let mut config = CarouselConfig::default();
        if let Some(ms) = parse_ms(self.ani_time.as_deref()) {
            config.ani_time = ms;
        }
        if let Some(ms) = parse_ms(self.interval_time.as_deref()) {
            config.interval_time = ms;
        }
        if let Some(flag) = self.autoplay.as_deref() {
            config.autoplay = !matches!(flag.trim(), "false" | "0" | "off");
        }
        config
    }

    pub fn slides(&self) -> Vec<Slide> {
        let Some(raw) = self.slides.as_deref() else {
            return Vec::new();
        };
        serde_json::from_str(raw).unwrap_or_else(|err| {
            gloo_console::warn!(format!("ignoring malformed carousel slides: {err}"));
            Vec::new()
        })
    }
}

fn parse_ms(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}
