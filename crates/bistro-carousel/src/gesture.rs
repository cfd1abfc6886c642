#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Direction the finger travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

/// Classify a touch drag as a horizontal swipe.
///
/// Drags steeper than `max_angle_deg` from horizontal, or shorter than
/// `min_distance` horizontally, are not swipes.
pub fn classify_swipe(start: Point, end: Point, max_angle_deg: f64, min_distance: f64) -> Option<Swipe> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx == 0.0 || dx.abs() < min_distance {
        return None;
    }

    let angle = dy.abs().atan2(dx.abs()).to_degrees();
    if angle > max_angle_deg {
        return None;
    }

    if dx > 0.0 { Some(Swipe::Right) } else { Some(Swipe::Left) }
}

/// Touch positions between `touchstart` and `touchend`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start: Point,
    end: Point,
}

impl SwipeTracker {
    pub fn begin(start: Point) -> Self {
        Self { start, end: start }
    }

    pub fn track(&mut self, point: Point) {
        self.end = point;
    }

    pub fn finish(self, max_angle_deg: f64, min_distance: f64) -> Option<Swipe> {
        classify_swipe(self.start, self.end, max_angle_deg, min_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_drags_are_swipes() {
        let start = Point::new(200.0, 100.0);
        assert_eq!(
            classify_swipe(start, Point::new(100.0, 120.0), 30.0, 30.0),
            Some(Swipe::Left)
        );
        assert_eq!(
            classify_swipe(start, Point::new(300.0, 80.0), 30.0, 30.0),
            Some(Swipe::Right)
        );
    }

    #[test]
    fn steep_drags_are_ignored() {
        let start = Point::new(200.0, 100.0);
        assert_eq!(classify_swipe(start, Point::new(150.0, 200.0), 30.0, 30.0), None);
        assert_eq!(classify_swipe(start, Point::new(200.0, 300.0), 30.0, 30.0), None);
    }

    #[test]
    fn short_drags_and_taps_are_ignored() {
        let mut tracker = SwipeTracker::begin(Point::new(10.0, 10.0));
        assert_eq!(tracker.finish(30.0, 30.0), None);

        tracker.track(Point::new(25.0, 10.0));
        assert_eq!(tracker.finish(30.0, 30.0), None);

        tracker.track(Point::new(60.0, 12.0));
        assert_eq!(tracker.finish(30.0, 30.0), Some(Swipe::Right));
    }
}
