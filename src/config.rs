use std::time::Duration;

/// Standard cast receiver control port
pub const DEFAULT_PORT: u16 = 8009;

/// How often playback status is polled while waiting
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// What `play` does with errors from its intermediate steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log and record settle and load errors, keep going, and report only
    /// the final wait
    #[default]
    BestEffort,

    /// Fail on the first error from any step
    Strict,
}

/// Notifier session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    pub poll_interval: Duration,
    pub error_policy: ErrorPolicy,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl NotifierConfig {
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}
