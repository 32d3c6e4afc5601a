//! Highlight geometry and excerpt compilation.
//!
//! This module contains:
//! - The persisted position-data types
//! - The per-line rectangle compiler (scale-independent output)
//! - The reading-order text compiler

pub mod rects;
pub mod text;
pub mod types;

pub use rects::{compile_rects, line_boxes};
pub use text::compile_text;
pub use types::{HighlightRequest, PositionData};
