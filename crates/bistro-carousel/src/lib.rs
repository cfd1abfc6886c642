//! Slide carousel logic: slide set, navigation state machine, swipe detection
//! and click throttling. Rendering and timers live in the WASM adapter.

pub mod config;
pub mod gesture;
pub mod machine;
pub mod slides;
pub mod throttle;

pub use config::CarouselConfig;
pub use gesture::{Point, Swipe, SwipeTracker, classify_swipe};
pub use machine::{AutoAdvance, Carousel, Direction, Phase, TimerCommand, Transition};
pub use slides::SlideSet;
pub use throttle::Throttle;
