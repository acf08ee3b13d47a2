//! Cycling between dashboards and driving their refresh cadence.
//!
//! Time is threaded in as `Instant` parameters rather than read from a
//! global clock, so every transition is deterministic under test. The
//! controller owns exactly one refresh deadline: the active dashboard's.
//! Switching dashboards replaces it (old cancelled, new armed) and marks
//! an immediate refresh so a freshly shown dashboard never sits on stale
//! or empty data until its next tick.

use std::fmt;
use std::time::Instant;

use crate::dashboard::DashboardView;
use crate::source::MetricSource;
use crate::theme::Theme;

/// Error constructing a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    /// At least one dashboard is required.
    NoDashboards,
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDashboards => write!(f, "at least one dashboard is required"),
        }
    }
}

impl std::error::Error for CarouselError {}

/// Ordered collection of dashboards with one active at a time.
#[derive(Debug)]
pub struct CarouselController {
    views: Vec<DashboardView>,
    active: usize,
    deadline: Instant,
    pending: bool,
}

impl CarouselController {
    /// Create a carousel over `views`, active index 0, with an immediate
    /// refresh pending and the periodic deadline armed.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::NoDashboards`] when `views` is empty.
    pub fn new(views: Vec<DashboardView>, now: Instant) -> Result<Self, CarouselError> {
        if views.is_empty() {
            return Err(CarouselError::NoDashboards);
        }
        let deadline = now + views[0].config().refresh_period();
        Ok(Self {
            views,
            active: 0,
            deadline,
            pending: true,
        })
    }

    /// Number of dashboards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Always false: construction requires at least one dashboard.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Index of the active dashboard.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active dashboard.
    #[must_use]
    pub fn active(&self) -> &DashboardView {
        &self.views[self.active]
    }

    /// The active dashboard, mutably.
    pub fn active_mut(&mut self) -> &mut DashboardView {
        &mut self.views[self.active]
    }

    /// Switch to the next dashboard (wrapping). No-op with a single
    /// dashboard.
    pub fn next(&mut self, now: Instant) {
        if self.views.len() <= 1 {
            return;
        }
        self.active = (self.active + 1) % self.views.len();
        self.arm(now);
    }

    /// Switch to the previous dashboard (wrapping). No-op with a single
    /// dashboard.
    pub fn previous(&mut self, now: Instant) {
        if self.views.len() <= 1 {
            return;
        }
        self.active = (self.active + self.views.len() - 1) % self.views.len();
        self.arm(now);
    }

    /// Request a refresh of the active dashboard without touching the
    /// periodic deadline.
    pub fn manual_refresh(&mut self) {
        self.pending = true;
    }

    /// Whether a refresh should run now.
    ///
    /// Returns true at most once per due event: a pending request is
    /// consumed, and a passed deadline re-arms itself at the active
    /// dashboard's interval.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        if self.pending {
            self.pending = false;
            return true;
        }
        if now >= self.deadline {
            self.deadline = now + self.active_period();
            return true;
        }
        false
    }

    /// Refresh the active dashboard only.
    pub fn refresh_active(&mut self, source: &mut dyn MetricSource, theme: &Theme) {
        let active = self.active;
        self.views[active].refresh_all(source, theme);
    }

    /// Cancel the old deadline, arm the new dashboard's, and mark an
    /// immediate refresh.
    fn arm(&mut self, now: Instant) {
        self.pending = true;
        self.deadline = now + self.active_period();
    }

    fn active_period(&self) -> std::time::Duration {
        self.views[self.active].config().refresh_period()
    }
}
