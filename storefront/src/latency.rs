use std::time::Duration;

/// Artificial delays applied before each mock response
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Latency {
    /// Full order list
    pub list: Duration,
    /// Single order lookup
    pub detail: Duration,
    /// Login endpoint
    pub login: Duration,
    /// Registration endpoint
    pub register: Duration,
    /// Client-side login/registration in the user store
    pub session: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(800),
            detail: Duration::from_millis(600),
            login: Duration::from_millis(800),
            register: Duration::from_millis(1000),
            session: Duration::from_millis(1000),
        }
    }
}

impl Latency {
    /// No delays at all
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            detail: Duration::ZERO,
            login: Duration::ZERO,
            register: Duration::ZERO,
            session: Duration::ZERO,
        }
    }

    /// Multiplies every delay by `factor`. Negative or non-finite factors disable delays.
    /// Returns `None` when a scaled delay would not fit in a `Duration`.
    pub fn scaled(self, factor: f64) -> Option<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Some(Self::none());
        }
        let scale = |d: Duration| Duration::try_from_secs_f64(d.as_secs_f64() * factor).ok();
        Some(Self {
            list: scale(self.list)?,
            detail: scale(self.detail)?,
            login: scale(self.login)?,
            register: scale(self.register)?,
            session: scale(self.session)?,
        })
    }
}
