//! Carousel rendering and timers.
//!
//! Builds the padded slide strip inside `.swiper-list`, moves it with CSS
//! transitions, and owns the auto-advance `Interval` and the end-of-animation
//! `Timeout`. Dropping either handle cancels it.

use crate::config::CarouselAttrs;
use crate::dom;
use crate::state;
use bistro_carousel::{Carousel, Point, SlideSet, TimerCommand, Transition};
use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

const ACTIVE_SPOT: &str = "#ff5c1f";
const IDLE_SPOT: &str = "#ccc";
const BUTTON_IMAGE: &str = "../images/blank.png";

/// Elements created for a mounted carousel.
#[derive(Clone)]
pub struct CarouselView {
    pub strip: Element,
    pub spot_list: Element,
    pub spots: Vec<Element>,
    pub left_btn: Element,
    pub right_btn: Element,
    width: f64,
}

thread_local! {
    static VIEW: RefCell<Option<CarouselView>> = const { RefCell::new(None) };
    static SETTLE: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

fn view() -> Option<CarouselView> {
    VIEW.with(|v| v.borrow().clone())
}

/// Build the carousel under `root` and start auto-advance.
pub fn mount(root: &Element) -> Option<CarouselView> {
    let attrs = CarouselAttrs::read(root);
    let slides = SlideSet::new(attrs.slides());
    if slides.is_empty() {
        gloo_console::warn!("carousel has no slides");
        return None;
    }
    let carousel = Carousel::new(slides, attrs.config());

    let width = root
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_width()))
        .unwrap_or_default();

    let strip = dom::create_element("ul")?;
    strip.set_class_name("swiper-main");
    let padded = carousel.slides().padded();
    let items: String = padded
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            format!(
                r#"<li style="left: {left}px; width: {width}px" class="swiper-item"><a href="{url}"><img src="{src}" alt=""></a></li>"#,
                left = i as f64 * width,
                url = dom::escape_html(&slide.url),
                src = dom::escape_html(&slide.image_path),
            )
        })
        .collect();
    dom::set_inner_html(&strip, &items);
    dom::set_style(&strip, "width", &format!("{}px", width * padded.len() as f64));
    dom::set_style(&strip, "left", &format!("{}px", -width));
    root.append_child(&strip).ok()?;

    let spot_list = dom::create_element("ul")?;
    spot_list.set_class_name("swiper-spot");
    let spots_html: String = (0..carousel.slides().len())
        .map(|i| format!(r#"<li class="spot-item" data-index="{i}"></li>"#))
        .collect();
    dom::set_inner_html(&spot_list, &spots_html);
    root.append_child(&spot_list).ok()?;
    let spots = dom::query_all_within(&spot_list, ".spot-item");

    let left_btn = nav_button("leftBtn")?;
    let right_btn = nav_button("rightBtn")?;
    dom::set_visible(&left_btn, carousel.controls_visible(), "");
    dom::set_visible(&right_btn, carousel.controls_visible(), "");
    root.append_child(&left_btn).ok()?;
    root.append_child(&right_btn).ok()?;

    let view = CarouselView {
        strip,
        spot_list,
        spots,
        left_btn,
        right_btn,
        width,
    };
    paint_spots(&view, 0);

    let timer = carousel.initial_timer();
    state::with_mut(|s| s.carousel = Some(carousel));
    VIEW.with(|v| *v.borrow_mut() = Some(view.clone()));
    apply_timer(timer);
    Some(view)
}

fn nav_button(class: &str) -> Option<Element> {
    let button = dom::create_element("img")?;
    button.set_class_name(class);
    button.set_attribute("src", BUTTON_IMAGE).ok()?;
    button.set_attribute("alt", "1").ok()?;
    Some(button)
}

fn paint_spots(view: &CarouselView, current: usize) {
    for (i, spot) in view.spots.iter().enumerate() {
        let colour = if i == current { ACTIVE_SPOT } else { IDLE_SPOT };
        dom::set_style(spot, "background-color", colour);
    }
}

fn move_strip(view: &CarouselView, position: usize, animate_ms: Option<u32>) {
    match animate_ms {
        Some(ms) => dom::set_style(&view.strip, "transition", &format!("left {}s", f64::from(ms) / 1000.0)),
        None => dom::set_style(&view.strip, "transition", "none"),
    }
    dom::set_style(&view.strip, "left", &format!("{}px", -(position as f64) * view.width));
}

/// Animate a transition and settle it once the animation has run.
fn render(transition: Transition) {
    let Some(view) = view() else {
        return;
    };
    let ani_time = state::with(|s| s.carousel.as_ref().map(|c| c.config().ani_time)).unwrap_or_default();

    move_strip(&view, transition.animate_to, Some(ani_time));
    paint_spots(&view, transition.to);

    let settle = Timeout::new(ani_time, move || {
        state::with_mut(|s| {
            if let Some(carousel) = s.carousel.as_mut() {
                carousel.finish_transition();
            }
        });
        if let Some(position) = transition.settle_at {
            move_strip(&view, position, None);
        }
    });
    SETTLE.with(|t| *t.borrow_mut() = Some(settle));
}

fn apply_timer(command: TimerCommand) {
    match command {
        TimerCommand::Arm { period_ms } => {
            state::set_auto_advance(Some(Interval::new(period_ms, tick)));
        }
        TimerCommand::Cancel => state::set_auto_advance(None),
        TimerCommand::Keep => {}
    }
}

fn drive<F>(f: F)
where
    F: FnOnce(&mut Carousel) -> Option<Transition>,
{
    if let Some(transition) = state::with_mut(|s| s.carousel.as_mut().and_then(f)) {
        render(transition);
    }
}

fn command<F>(f: F)
where
    F: FnOnce(&mut Carousel) -> TimerCommand,
{
    let timer = state::with_mut(|s| s.carousel.as_mut().map(f));
    if let Some(timer) = timer {
        apply_timer(timer);
    }
}

fn tick() {
    drive(Carousel::tick);
}

// ── Event handlers ──

pub fn on_prev() {
    let now = dom::now_ms();
    drive(|c| c.prev(now));
}

pub fn on_next() {
    let now = dom::now_ms();
    drive(|c| c.next(now));
}

pub fn on_spot_click(target: &Element) {
    let Some(index) = dom::data_attr(target, "index").and_then(|raw| raw.parse::<usize>().ok())
    else {
        return;
    };
    let now = dom::now_ms();
    drive(|c| c.jump_to(index, now));
}

pub fn on_pointer_enter() {
    command(Carousel::pointer_enter_control);
}

pub fn on_pointer_leave() {
    command(Carousel::pointer_leave_control);
}

pub fn on_touch_start(point: Point) {
    command(|c| c.touch_start(point));
}

pub fn on_touch_move(point: Point) {
    state::with_mut(|s| {
        if let Some(carousel) = s.carousel.as_mut() {
            carousel.touch_move(point);
        }
    });
}

pub fn on_touch_end() {
    let now = dom::now_ms();
    let outcome = state::with_mut(|s| s.carousel.as_mut().map(|c| c.touch_end(now)));
    let Some((transition, timer)) = outcome else {
        return;
    };
    if let Some(transition) = transition {
        render(transition);
    }
    apply_timer(timer);
}
