//! Carousel state machine.
//!
//! States: `Idle` → `Transitioning` → `Idle`, with `Suspended` standing in for
//! `Idle` while a pointer rests on a control. Auto-advance is either armed or
//! suspended; the adapter owns the real timer and follows the
//! [`TimerCommand`]s returned here.
//!
//! Time is passed in as milliseconds so the machine stays free of clocks.

use crate::config::CarouselConfig;
use crate::gesture::{Point, Swipe, SwipeTracker};
use crate::slides::SlideSet;
use crate::throttle::Throttle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning { from: usize, to: usize },
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAdvance {
    Armed,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A strip move for the renderer to animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// Single-slide steps replayed to get from `from` to `to`.
    pub steps: usize,
    /// Strip position to animate to.
    pub animate_to: usize,
    /// Strip position to jump to without animation once the move ends
    /// (set when the move landed on a boundary copy).
    pub settle_at: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// (Re)start the recurring auto-advance timer with this period.
    Arm { period_ms: u32 },
    /// Tear the timer down.
    Cancel,
    /// Leave the timer as it is.
    Keep,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    slides: SlideSet,
    config: CarouselConfig,
    current: usize,
    phase: Phase,
    auto_advance: AutoAdvance,
    hovering: bool,
    throttle: Throttle,
    touch: Option<SwipeTracker>,
}

impl Carousel {
    pub fn new(slides: SlideSet, config: CarouselConfig) -> Self {
        let auto_advance = if config.autoplay && slides.is_navigable() {
            AutoAdvance::Armed
        } else {
            AutoAdvance::Suspended
        };
        Self {
            throttle: Throttle::new(u64::from(config.throttle_ms)),
            slides,
            config,
            current: 0,
            phase: Phase::Idle,
            auto_advance,
            hovering: false,
            touch: None,
        }
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        self.auto_advance
    }

    /// Previous/next buttons are hidden for single-slide sets.
    pub fn controls_visible(&self) -> bool {
        self.slides.is_navigable()
    }

    /// Timer to start when the carousel is first mounted.
    pub fn initial_timer(&self) -> TimerCommand {
        self.arm_command()
    }

    pub fn next(&mut self, now_ms: u64) -> Option<Transition> {
        self.manual_step(Direction::Forward, now_ms)
    }

    pub fn prev(&mut self, now_ms: u64) -> Option<Transition> {
        self.manual_step(Direction::Backward, now_ms)
    }

    /// Auto-advance tick; only moves while armed and idle.
    pub fn tick(&mut self) -> Option<Transition> {
        if self.auto_advance != AutoAdvance::Armed || self.phase != Phase::Idle {
            return None;
        }
        self.step(Direction::Forward)
    }

    /// Jump to `target` from a pagination indicator.
    ///
    /// Replays single steps forward when `target` is ahead of the current
    /// index and backward when it is behind, never around the wrap.
    pub fn jump_to(&mut self, target: usize, now_ms: u64) -> Option<Transition> {
        if !self.can_move() || target >= self.slides.len() || target == self.current {
            return None;
        }
        if !self.throttle.try_acquire(now_ms) {
            return None;
        }

        let from = self.current;
        let (direction, steps) = if target > from {
            (Direction::Forward, target - from)
        } else {
            (Direction::Backward, from - target)
        };

        let mut index = from;
        for _ in 0..steps {
            index = self.neighbour(index, direction);
        }

        self.begin(from, index, direction);
        Some(Transition {
            from,
            to: index,
            direction,
            steps,
            animate_to: SlideSet::strip_position(index),
            settle_at: None,
        })
    }

    /// The strip animation ended.
    pub fn finish_transition(&mut self) -> usize {
        if let Phase::Transitioning { to, .. } = self.phase {
            self.phase = self.resting_phase();
            debug!(index = to, "carousel settled");
        }
        self.current
    }

    pub fn pointer_enter_control(&mut self) -> TimerCommand {
        if !self.slides.is_navigable() {
            return TimerCommand::Keep;
        }
        self.hovering = true;
        self.auto_advance = AutoAdvance::Suspended;
        if self.phase == Phase::Idle {
            self.phase = Phase::Suspended;
        }
        TimerCommand::Cancel
    }

    pub fn pointer_leave_control(&mut self) -> TimerCommand {
        if !self.slides.is_navigable() {
            return TimerCommand::Keep;
        }
        self.hovering = false;
        if self.phase == Phase::Suspended {
            self.phase = Phase::Idle;
        }
        self.rearm()
    }

    pub fn touch_start(&mut self, point: Point) -> TimerCommand {
        if !self.slides.is_navigable() {
            return TimerCommand::Keep;
        }
        self.touch = Some(SwipeTracker::begin(point));
        self.auto_advance = AutoAdvance::Suspended;
        TimerCommand::Cancel
    }

    pub fn touch_move(&mut self, point: Point) {
        if let Some(tracker) = self.touch.as_mut() {
            tracker.track(point);
        }
    }

    /// Finish a touch: a leftward swipe moves forward, a rightward one back.
    pub fn touch_end(&mut self, now_ms: u64) -> (Option<Transition>, TimerCommand) {
        let Some(tracker) = self.touch.take() else {
            return (None, TimerCommand::Keep);
        };
        let swipe = tracker.finish(self.config.max_swipe_angle, self.config.min_swipe_distance);
        let transition = match swipe {
            Some(Swipe::Left) => self.next(now_ms),
            Some(Swipe::Right) => self.prev(now_ms),
            None => None,
        };
        (transition, self.rearm())
    }

    fn rearm(&mut self) -> TimerCommand {
        if self.config.autoplay && !self.hovering {
            self.auto_advance = AutoAdvance::Armed;
        }
        self.arm_command()
    }

    fn arm_command(&self) -> TimerCommand {
        match self.auto_advance {
            AutoAdvance::Armed => TimerCommand::Arm {
                period_ms: self.config.auto_advance_ms(),
            },
            AutoAdvance::Suspended => TimerCommand::Keep,
        }
    }

    fn can_move(&self) -> bool {
        self.slides.is_navigable() && !matches!(self.phase, Phase::Transitioning { .. })
    }

    fn manual_step(&mut self, direction: Direction, now_ms: u64) -> Option<Transition> {
        if !self.can_move() || !self.throttle.try_acquire(now_ms) {
            return None;
        }
        self.step(direction)
    }

    fn step(&mut self, direction: Direction) -> Option<Transition> {
        if !self.can_move() {
            return None;
        }
        let count = self.slides.len();
        let from = self.current;
        let to = self.neighbour(from, direction);

        let (animate_to, settle_at) = match direction {
            Direction::Forward if from + 1 == count => (count + 1, Some(SlideSet::strip_position(0))),
            Direction::Backward if from == 0 => (0, Some(SlideSet::strip_position(count - 1))),
            _ => (SlideSet::strip_position(to), None),
        };

        self.begin(from, to, direction);
        Some(Transition {
            from,
            to,
            direction,
            steps: 1,
            animate_to,
            settle_at,
        })
    }

    fn neighbour(&self, index: usize, direction: Direction) -> usize {
        let count = self.slides.len();
        match direction {
            Direction::Forward => (index + 1) % count,
            Direction::Backward => (index + count - 1) % count,
        }
    }

    fn begin(&mut self, from: usize, to: usize, direction: Direction) {
        debug!(from, to, ?direction, "carousel transition");
        self.current = to;
        self.phase = Phase::Transitioning { from, to };
    }

    fn resting_phase(&self) -> Phase {
        if self.hovering {
            Phase::Suspended
        } else {
            Phase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_api_types::Slide;

    fn carousel(count: usize) -> Carousel {
        let slides = (0..count)
            .map(|n| Slide {
                url: format!("/promo/{n}"),
                image_path: format!("/images/banner{n}.jpg"),
            })
            .collect();
        Carousel::new(SlideSet::new(slides), CarouselConfig::default())
    }

    #[test]
    fn next_cycles_back_to_start() {
        let mut c = carousel(4);
        let mut now = 0;
        for _ in 0..4 {
            now += 500;
            assert!(c.next(now).is_some());
            c.finish_transition();
        }
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut c = carousel(1);
        assert!(!c.controls_visible());
        assert_eq!(c.initial_timer(), TimerCommand::Keep);
        assert_eq!(c.next(1_000), None);
        assert_eq!(c.prev(2_000), None);
        assert_eq!(c.jump_to(0, 3_000), None);
        assert_eq!(c.tick(), None);
        assert_eq!(c.pointer_enter_control(), TimerCommand::Keep);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn empty_set_never_moves() {
        let mut c = carousel(0);
        assert_eq!(c.next(1_000), None);
        assert_eq!(c.jump_to(0, 1_000), None);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn wrapping_forward_lands_on_trailing_copy() {
        let mut c = carousel(3);
        c.jump_to(2, 0);
        c.finish_transition();

        let t = c.next(1_000).expect("forward");
        assert_eq!((t.from, t.to), (2, 0));
        assert_eq!(t.animate_to, 4);
        assert_eq!(t.settle_at, Some(1));
    }

    #[test]
    fn wrapping_backward_lands_on_leading_copy() {
        let mut c = carousel(3);
        let t = c.prev(1_000).expect("backward");
        assert_eq!((t.from, t.to), (0, 2));
        assert_eq!(t.animate_to, 0);
        assert_eq!(t.settle_at, Some(3));
        assert_eq!(c.phase(), Phase::Transitioning { from: 0, to: 2 });
    }

    #[test]
    fn rapid_clicks_are_throttled() {
        let mut c = carousel(3);
        assert!(c.next(1_000).is_some());
        c.finish_transition();
        assert!(c.next(1_200).is_none());
        assert!(c.prev(1_299).is_none());
        assert!(c.prev(1_300).is_some());
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn no_manual_move_mid_transition() {
        let mut c = carousel(3);
        assert!(c.next(0).is_some());
        assert!(c.next(5_000).is_none());
        assert_eq!(c.tick(), None);
        c.finish_transition();
        assert!(c.next(5_000).is_some());
    }

    #[test]
    fn jump_replays_steps_by_index_order() {
        let mut c = carousel(5);
        let t = c.jump_to(4, 0).expect("forward jump");
        assert_eq!(t.direction, Direction::Forward);
        assert_eq!(t.steps, 4);
        assert_eq!(t.animate_to, 5);
        assert_eq!(t.settle_at, None);
        c.finish_transition();

        let t = c.jump_to(1, 1_000).expect("backward jump");
        assert_eq!(t.direction, Direction::Backward);
        assert_eq!(t.steps, 3);
        c.finish_transition();
        assert_eq!(c.current_index(), 1);

        assert_eq!(c.jump_to(1, 2_000), None);
        assert_eq!(c.jump_to(9, 3_000), None);
    }

    #[test]
    fn hover_suspends_auto_advance() {
        let mut c = carousel(3);
        assert_eq!(c.initial_timer(), TimerCommand::Arm { period_ms: 2500 });

        assert_eq!(c.pointer_enter_control(), TimerCommand::Cancel);
        assert_eq!(c.auto_advance(), AutoAdvance::Suspended);
        assert_eq!(c.phase(), Phase::Suspended);
        assert_eq!(c.tick(), None);

        assert!(c.next(1_000).is_some());
        c.finish_transition();
        assert_eq!(c.phase(), Phase::Suspended);

        assert_eq!(
            c.pointer_leave_control(),
            TimerCommand::Arm { period_ms: 2500 }
        );
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.tick().is_some());
    }

    #[test]
    fn autoplay_off_never_arms() {
        let slides = SlideSet::new(vec![
            Slide {
                url: "/a".to_owned(),
                image_path: "/a.jpg".to_owned(),
            },
            Slide {
                url: "/b".to_owned(),
                image_path: "/b.jpg".to_owned(),
            },
        ]);
        let config = CarouselConfig {
            autoplay: false,
            ..CarouselConfig::default()
        };
        let mut c = Carousel::new(slides, config);
        assert_eq!(c.initial_timer(), TimerCommand::Keep);
        c.pointer_enter_control();
        assert_eq!(c.pointer_leave_control(), TimerCommand::Keep);
        assert_eq!(c.tick(), None);
    }

    #[test]
    fn swipes_drive_navigation() {
        let mut c = carousel(3);
        assert_eq!(c.touch_start(Point::new(300.0, 50.0)), TimerCommand::Cancel);
        c.touch_move(Point::new(120.0, 60.0));
        let (transition, timer) = c.touch_end(1_000);
        assert_eq!(transition.map(|t| t.to), Some(1));
        assert_eq!(timer, TimerCommand::Arm { period_ms: 2500 });
        c.finish_transition();

        c.touch_start(Point::new(100.0, 50.0));
        c.touch_move(Point::new(260.0, 70.0));
        let (transition, _) = c.touch_end(2_000);
        assert_eq!(transition.map(|t| t.to), Some(0));
        c.finish_transition();

        c.touch_start(Point::new(100.0, 50.0));
        c.touch_move(Point::new(140.0, 250.0));
        let (transition, _) = c.touch_end(3_000);
        assert_eq!(transition, None);
        assert_eq!(c.current_index(), 0);
    }
}
