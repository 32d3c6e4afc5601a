//! Drag-gesture state machine.

/// State of the drag gesture.
///
/// A tagged enum so that "dragging with no start span" is unrepresentable.
/// `start` and `end` are span ids and deliberately unordered; the range is
/// normalized with min/max at the point of use. There is no committed
/// state — committing is a side effect of leaving `Dragging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        start: u32,
        end: u32,
    },
}

/// Tracks one contiguous span range across a pointer-down/move/up sequence.
///
/// One tracker per rendered page; drags on different pages are independent
/// and never merge. The tracker knows nothing about geometry — the caller
/// hit-tests and feeds it span ids.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    state: DragState,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> DragState {
        self.state
    }

    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer-down over a hit span: both endpoints start there.
    pub const fn begin(&mut self, span_id: u32) {
        self.state = DragState::Dragging {
            start: span_id,
            end: span_id,
        };
    }

    /// Pointer-move over a hit span: only the endpoint moves. A move that
    /// hits nothing leaves the selection unchanged; multi-range selection
    /// is not supported.
    pub const fn extend(&mut self, span_id: u32) {
        if let DragState::Dragging { start, .. } = self.state {
            self.state = DragState::Dragging {
                start,
                end: span_id,
            };
        }
    }

    /// The normalized `(low, high)` id range while dragging.
    pub fn range(&self) -> Option<(u32, u32)> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { start, end } => Some((start.min(end), start.max(end))),
        }
    }

    /// Ends the gesture, returning the normalized range it covered.
    ///
    /// The caller decides whether the range commits (it must cover at least
    /// the minimum span count) — either way the tracker is Idle afterwards.
    pub fn finish(&mut self) -> Option<(u32, u32)> {
        let range = self.range();
        self.state = DragState::Idle;
        range
    }

    /// Discards any in-flight gesture without committing.
    pub const fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
