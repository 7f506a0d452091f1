//! Transient notification banner.
//!
//! The banner is either hidden or showing exactly one message. Each
//! `notify` replaces the message, cancels the pending dismissal and
//! schedules a new one; dismissals are tagged with the generation that
//! scheduled them so a stale one can never hide a newer message.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::document::{ContainerId, Document};
use crate::timer::{TimerHandle, TimerQueue};

/// Default time a notification stays visible.
pub const DEFAULT_DWELL: Duration = Duration::from_secs(3);

/// Color category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    /// CSS class applied to the banner.
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Positive => "notification-green",
            Tone::Negative => "notification-red",
        }
    }
}

/// Banner state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Banner {
    Hidden,
    Visible { message: String, tone: Tone },
}

/// Scheduled task that hides the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dismiss {
    pub generation: u64,
}

/// Notification presenter.
#[derive(Debug, Clone)]
pub struct Notifier {
    dwell: Duration,
    banner: Banner,
    generation: u64,
    pending: Option<TimerHandle>,
}

impl Notifier {
    /// Create a hidden notifier with the given dwell time.
    pub fn new(dwell: Duration) -> Self {
        Self {
            dwell,
            banner: Banner::Hidden,
            generation: 0,
            pending: None,
        }
    }

    /// Show `message`, replacing whatever is showing, and schedule its
    /// dismissal at `now + dwell`.
    pub fn notify<T: From<Dismiss>>(
        &mut self,
        message: impl Into<String>,
        tone: Tone,
        now: Duration,
        timers: &mut TimerQueue<T>,
    ) {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }

        self.generation += 1;
        self.banner = Banner::Visible {
            message: message.into(),
            tone,
        };
        let dismiss = Dismiss {
            generation: self.generation,
        };
        self.pending = Some(timers.schedule(now + self.dwell, T::from(dismiss)));
    }

    /// Handle a fired dismissal. Returns true if the banner was hidden.
    pub fn dismiss(&mut self, dismiss: Dismiss) -> bool {
        if dismiss.generation != self.generation || self.banner == Banner::Hidden {
            debug!(generation = dismiss.generation, "stale dismissal ignored");
            return false;
        }
        self.banner = Banner::Hidden;
        self.pending = None;
        true
    }

    /// Current banner.
    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Check if a message is showing.
    pub fn is_visible(&self) -> bool {
        matches!(self.banner, Banner::Visible { .. })
    }

    /// Reflect the banner into the document.
    pub fn apply(&self, document: &mut impl Document) {
        match &self.banner {
            Banner::Hidden => {
                document.set_class(ContainerId::Notification, "show", false);
            }
            Banner::Visible { message, tone } => {
                for t in [Tone::Positive, Tone::Negative] {
                    document.set_class(ContainerId::Notification, t.class(), t == *tone);
                }
                document.set_text(ContainerId::NotificationMessage, message);
                document.set_class(ContainerId::Notification, "show", true);
            }
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_DWELL)
    }
}
