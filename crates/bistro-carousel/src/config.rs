use serde::{Deserialize, Serialize};

/// Carousel timing and gesture settings.
///
/// Deserialises from the page's `{aniTime, intervalTime, autoplay}` object;
/// anything missing takes the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselConfig {
    /// Slide animation length in milliseconds.
    pub ani_time: u32,
    /// How long a slide stays put between animations, in milliseconds.
    pub interval_time: u32,
    pub autoplay: bool,
    /// Cooldown between manual transitions, in milliseconds.
    pub throttle_ms: u32,
    /// Steepest swipe still treated as horizontal, in degrees.
    pub max_swipe_angle: f64,
    /// Shortest horizontal travel that counts as a swipe, in pixels.
    pub min_swipe_distance: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            ani_time: 1500,
            interval_time: 1000,
            autoplay: true,
            throttle_ms: 300,
            max_swipe_angle: 30.0,
            min_swipe_distance: 30.0,
        }
    }
}

impl CarouselConfig {
    /// Auto-advance period: one dwell plus one animation.
    pub fn auto_advance_ms(&self) -> u32 {
        self.interval_time.saturating_add(self.ani_time)
    }
}
