/// Stars drawn for every rating.
pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarIcon {
    Full,
    Half,
    Empty,
}

impl StarIcon {
    pub fn image_path(self) -> &'static str {
        match self {
            Self::Full => "/static/images/star_full.png",
            Self::Half => "/static/images/star_half_full.png",
            Self::Empty => "/static/images/star_empty.png",
        }
    }
}

/// A 0–5 rating split into full, half and empty stars.
///
/// A fractional part of .5 or more earns the half star. Ratings outside the
/// range are clamped and non-finite ones read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stars {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl Default for Stars {
    fn default() -> Self {
        Self::from_rating(0.0)
    }
}

impl Stars {
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, f64::from(MAX_STARS))
        } else {
            0.0
        };
        let full = rating.floor() as u8;
        let half = full < MAX_STARS && rating.fract() >= 0.5;
        Self {
            full,
            half,
            empty: MAX_STARS - full - u8::from(half),
        }
    }

    /// Icons left to right.
    pub fn icons(&self) -> impl Iterator<Item = StarIcon> {
        std::iter::repeat_n(StarIcon::Full, usize::from(self.full))
            .chain(self.half.then_some(StarIcon::Half))
            .chain(std::iter::repeat_n(StarIcon::Empty, usize::from(self.empty)))
    }
}
