//! The single transient notification banner shared by every page.

use std::time::Duration;

/// How long a notice stays visible before it dismisses itself.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Holds at most one notice. The latest notice always wins.
#[derive(Debug, Clone, Default)]
pub struct BannerSlot {
    current: Option<(Notice, Duration)>,
}

impl BannerSlot {
    pub const fn new() -> Self {
        Self { current: None }
    }

    pub fn show(&mut self, notice: Notice) {
        self.current = Some((notice, BANNER_TIMEOUT));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }

    pub const fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Advance the auto-dismiss timer by the time elapsed since the last frame.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some((_, remaining)) = &mut self.current {
            *remaining = remaining.saturating_sub(elapsed);
            if remaining.is_zero() {
                self.current = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_notice_replaces_previous() {
        let mut slot = BannerSlot::new();
        slot.show(Notice::error("first"));
        slot.show(Notice::success("second"));

        let current = slot.current().expect("banner visible");
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Success);
    }

    #[test]
    fn dismisses_after_timeout() {
        let mut slot = BannerSlot::new();
        slot.show(Notice::warning("careful"));

        slot.tick(Duration::from_secs(5));
        assert!(slot.is_visible());

        slot.tick(Duration::from_secs(1));
        assert!(!slot.is_visible());
    }

    #[test]
    fn new_notice_restarts_the_timer() {
        let mut slot = BannerSlot::new();
        slot.show(Notice::warning("old"));
        slot.tick(Duration::from_secs(5));
        slot.show(Notice::success("new"));
        slot.tick(Duration::from_secs(5));

        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("new"));
    }

    #[test]
    fn manual_close_clears_slot() {
        let mut slot = BannerSlot::new();
        slot.show(Notice::success("done"));
        slot.dismiss();
        assert!(slot.current().is_none());
    }
}
