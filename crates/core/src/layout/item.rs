//! Positioned text items, the foreign input boundary.

use serde::{Deserialize, Serialize};

use crate::geom::Matrix;

/// A positioned text item produced by an external page-rendering engine.
///
/// Modeled as a capability rather than a concrete type so the extraction
/// engine can be swapped. The data is read once per page render and treated
/// as untrusted: empty strings, zero or missing widths, and out-of-order
/// vertical positions must all be tolerated downstream.
pub trait TextItem {
    /// The item's Unicode string.
    fn text(&self) -> &str;

    /// Affine transform placing the item, composed with the page transform
    /// before use.
    fn transform(&self) -> Matrix;

    /// Declared width, when the source provides one.
    fn width(&self) -> Option<f64>;
}

/// Owned text item backing page dumps and tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageTextItem {
    pub text: String,
    pub transform: Matrix,
    #[serde(default)]
    pub width: Option<f64>,
}

impl PageTextItem {
    pub fn new(text: impl Into<String>, transform: Matrix, width: Option<f64>) -> Self {
        Self {
            text: text.into(),
            transform,
            width,
        }
    }
}

impl TextItem for PageTextItem {
    fn text(&self) -> &str {
        &self.text
    }

    fn transform(&self) -> Matrix {
        self.transform
    }

    fn width(&self) -> Option<f64> {
        self.width
    }
}
