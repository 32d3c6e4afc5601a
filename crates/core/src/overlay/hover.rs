//! Debounced hover state for saved highlights.

use std::time::{Duration, Instant};

use crate::params::EngineParams;

use super::HighlightId;

/// Hover tracker with a debounced clear.
///
/// Leaving a highlight schedules the clear instead of applying it, so the
/// pointer can cross the gap to the floating action controls without the
/// hover state (and the controls) vanishing underneath it. Re-entering
/// cancels the pending clear.
///
/// The deadline is an explicit value fed through `poll`, not an ambient
/// timer, so callers drive it from their event loop and tests drive it
/// from a virtual clock.
#[derive(Debug, Clone)]
pub struct HoverTracker {
    hovered: Option<HighlightId>,
    clear_at: Option<Instant>,
    grace: Duration,
}

impl HoverTracker {
    pub fn new(grace: Duration) -> Self {
        Self {
            hovered: None,
            clear_at: None,
            grace,
        }
    }

    pub fn from_params(params: &EngineParams) -> Self {
        Self::new(params.hover_grace)
    }

    /// The currently hovered highlight, ignoring any pending clear.
    pub const fn hovered(&self) -> Option<HighlightId> {
        self.hovered
    }

    /// Pointer entered a highlight (or its action controls): cancels any
    /// pending clear and makes it the hovered one.
    pub fn enter_hover(&mut self, id: HighlightId) {
        self.clear_at = None;
        self.hovered = Some(id);
    }

    /// Pointer left the highlight: the hover state survives until the grace
    /// period elapses.
    pub fn schedule_leave(&mut self, now: Instant) {
        if self.hovered.is_some() {
            self.clear_at = Some(now + self.grace);
        }
    }

    /// Applies an elapsed grace period, returning the hovered highlight
    /// as of `now`.
    pub fn poll(&mut self, now: Instant) -> Option<HighlightId> {
        if let Some(deadline) = self.clear_at
            && now >= deadline
        {
            self.hovered = None;
            self.clear_at = None;
        }
        self.hovered
    }
}
