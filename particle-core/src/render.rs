//! What the engine draws, independent of any graphics API.
//!
//! A host implements [`Surface`] over its canvas; the engine issues one
//! background fill followed by one square per particle.

use crate::types::{ArenaSize, Rgba};

/// Translucent white painted over the previous frame, leaving short trails.
pub const BACKGROUND: Rgba = Rgba::new(255, 255, 255, 178);

/// A drawing target the engine can paint onto.
///
/// Coordinates are arena coordinates: `(0, 0)` is the arena's top-left
/// corner and `y` grows downward. Implementations translate to their own
/// canvas; the engine only issues the two calls below.
pub trait Surface {
    /// Fills the whole arena with `color`.
    ///
    /// ### Parameters
    /// - `arena` - Extent to fill, starting at the origin.
    /// - `color` - Fill color, possibly translucent.
    fn fill_background(&mut self, arena: ArenaSize, color: Rgba);

    /// Fills the axis-aligned rectangle whose top-left corner is `(x, y)`.
    ///
    /// ### Parameters
    /// - `x`, `y` - Top-left corner.
    /// - `width`, `height` - Size of the rectangle.
    /// - `color` - Fill color.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);
}

/// One call made against a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCall {
    Background {
        arena: ArenaSize,
        color: Rgba,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgba,
    },
}

/// A [`Surface`] that only remembers what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Creates a surface with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rectangles drawn (background excluded).
    pub fn rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn fill_background(&mut self, arena: ArenaSize, color: Rgba) {
        self.calls.push(DrawCall::Background { arena, color });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }
}
