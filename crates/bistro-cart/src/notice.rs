use std::time::Duration;

/// How long a notice stays on screen unless told otherwise.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// A transient, dismissible message for the user (rendered as a toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub duration: Duration,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: DEFAULT_NOTICE_DURATION,
        }
    }
}
