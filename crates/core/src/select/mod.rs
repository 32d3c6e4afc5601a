//! Pointer-driven selection over spans.
//!
//! This module contains:
//! - The padded nearest-span hit test
//! - The drag-gesture state machine tracking a contiguous span range

pub mod hit;
pub mod tracker;

pub use hit::hit_test;
pub use tracker::{DragState, SelectionTracker};
