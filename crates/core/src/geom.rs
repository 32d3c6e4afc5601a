//! Geometric primitives shared across the engine.
//!
//! Provides:
//! - Point and 6-element affine Matrix types with composition helpers
//! - Rect, the axis-aligned rectangle used for highlight geometry
//! - Unit conversion between document-native and scaled screen units
//!
//! All geometry lives in resolution-independent scaled units. A
//! device-pixel-ratio applies only to a rendering surface's backing
//! resolution and never enters this math.

use serde::{Deserialize, Serialize};

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A 6-element affine transformation matrix (a, b, c, d, e, f).
/// Transforms point (x, y) to (ax + cy + e, bx + dy + f).
pub type Matrix = (f64, f64, f64, f64, f64, f64);

/// Identity transformation matrix.
pub const MATRIX_IDENTITY: Matrix = (1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

/// Small epsilon for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// Compares two floats for approximate equality.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Multiplies two matrices: result = m0 * m1.
/// This applies m1 first, then m0.
pub fn mult_matrix(m1: Matrix, m0: Matrix) -> Matrix {
    let (a1, b1, c1, d1, e1, f1) = m1;
    let (a0, b0, c0, d0, e0, f0) = m0;
    (
        a0 * a1 + c0 * b1,
        b0 * a1 + d0 * b1,
        a0 * c1 + c0 * d1,
        b0 * c1 + d0 * d1,
        a0 * e1 + c0 * f1 + e0,
        b0 * e1 + d0 * f1 + f0,
    )
}

/// Horizontal scale factor of a matrix, robust under rotation.
#[inline]
pub fn scale_x_of(m: Matrix) -> f64 {
    let (a, b, ..) = m;
    a.hypot(b)
}

/// Vertical scale factor of a matrix, robust under rotation.
#[inline]
pub fn scale_y_of(m: Matrix) -> f64 {
    let (_, _, c, d, ..) = m;
    c.hypot(d)
}

/// Converts a document-native value to scaled screen units.
#[inline]
pub fn to_scaled(native: f64, scale: f64) -> f64 {
    native * scale
}

/// Converts a scaled screen value back to document-native units.
#[inline]
pub fn to_native(scaled: f64, scale: f64) -> f64 {
    scaled / scale
}

/// An axis-aligned rectangle with a top-left origin.
///
/// The same shape is used in both unit systems: highlight geometry is
/// persisted in document-native units and multiplied by the page scale at
/// draw time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Multiplies every field by `scale` (native -> scaled units).
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            x: to_scaled(self.x, scale),
            y: to_scaled(self.y, scale),
            width: to_scaled(self.width, scale),
            height: to_scaled(self.height, scale),
        }
    }

    /// Divides every field by `scale` (scaled -> native units).
    pub fn to_native(&self, scale: f64) -> Self {
        Self {
            x: to_native(self.x, scale),
            y: to_native(self.y, scale),
            width: to_native(self.width, scale),
            height: to_native(self.height, scale),
        }
    }
}
