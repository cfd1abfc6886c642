/// Timestamp throttle: at most one acceptance per cooldown window.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    cooldown_ms: u64,
    last_ms: Option<u64>,
}

impl Throttle {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            last_ms: None,
        }
    }

    /// Accept an action at `now_ms` unless the previous accepted one is too recent.
    pub fn try_acquire(&mut self, now_ms: u64) -> bool {
        match self.last_ms {
            Some(last) if now_ms.saturating_sub(last) < self.cooldown_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}
