use bistro_api_types::Slide;

/// The fixed, ordered slides of one carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// With fewer than two slides there is nowhere to go.
    pub fn is_navigable(&self) -> bool {
        self.slides.len() > 1
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Slides as laid out on the strip: a copy of the last slide in front and a
    /// copy of the first at the back, so wrapping around animates one step.
    pub fn padded(&self) -> Vec<&Slide> {
        let (Some(first), Some(last)) = (self.slides.first(), self.slides.last()) else {
            return Vec::new();
        };
        let mut strip = Vec::with_capacity(self.slides.len() + 2);
        strip.push(last);
        strip.extend(self.slides.iter());
        strip.push(first);
        strip
    }

    /// Strip position of a real slide index.
    pub fn strip_position(index: usize) -> usize {
        index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(n: usize) -> Slide {
        Slide {
            url: format!("/promo/{n}"),
            image_path: format!("/images/banner{n}.jpg"),
        }
    }

    #[test]
    fn padded_strip_wraps_both_ends() {
        let set = SlideSet::new((0..3).map(slide).collect());
        let urls: Vec<&str> = set.padded().iter().map(|s| s.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["/promo/2", "/promo/0", "/promo/1", "/promo/2", "/promo/0"]
        );
    }

    #[test]
    fn empty_set_has_empty_strip() {
        let set = SlideSet::default();
        assert!(set.padded().is_empty());
        assert!(!set.is_navigable());
    }

    #[test]
    fn single_slide_is_not_navigable() {
        let set = SlideSet::new(vec![slide(0)]);
        assert_eq!(set.padded().len(), 3);
        assert!(!set.is_navigable());
    }
}
