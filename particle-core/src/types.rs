use serde::{Deserialize, Serialize};

/// Identifier for a particle in a [`crate::engine::ParticleEngine`].
///
/// This is an index into the engine's particle list, and is only meaningful
/// until the particle set is replaced.
pub type ParticleId = usize;

/// Size of the rectangular arena particles bounce around in.
///
/// The arena spans `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaSize {
    pub width: f64,
    pub height: f64,
}

impl ArenaSize {
    /// Creates an arena spanning `[0, width] x [0, height]`.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Fill color a particle is drawn with.
///
/// The engine never looks at it; it is carried through to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates a color from raw 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from CSS-style channels, where alpha is in `[0, 1]`.
    ///
    /// ### Parameters
    /// - `r`, `g`, `b` - Color channels.
    /// - `alpha` - Opacity; values outside `[0, 1]` are clamped.
    ///
    /// ### Returns
    /// The color with alpha scaled onto `0..=255`.
    pub fn from_css(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_css_maps_alpha_onto_byte_range() {
        assert_eq!(Rgba::from_css(200, 0, 0, 0.4), Rgba::new(200, 0, 0, 102));
        assert_eq!(Rgba::from_css(1, 2, 3, 1.0).a, 255);
        assert_eq!(Rgba::from_css(1, 2, 3, 0.0).a, 0);
        assert_eq!(Rgba::from_css(1, 2, 3, 7.0).a, 255);
    }
}
