//! Small 2-D vector algebra used by the simulation.
//!
//! [`Vector2`] is [`glam::DVec2`]; it is `Copy`, so every operation below
//! returns a fresh value and never mutates its receiver.

use glam::DVec2;

pub type Vector2 = DVec2;

/// Named vector operations the force and boundary code is written in terms of.
pub trait VectorOps: Sized {
    /// `self - other`, component-wise.
    fn difference(self, other: Self) -> Self;

    /// `self + other`, component-wise.
    fn sum(self, other: Self) -> Self;

    /// `self * scalar`.
    fn scaled(self, scalar: f64) -> Self;

    /// Returns the unit vector pointing along `self` together with the length
    /// of `self`.
    ///
    /// Returns `None` when the length is zero (or not finite), since there is
    /// no direction to normalize to.
    fn normalized_and_magnitude(self) -> Option<(Self, f64)>;

    /// Returns a copy with only the supplied components replaced.
    fn with_updated(self, x: Option<f64>, y: Option<f64>) -> Self;
}

impl VectorOps for DVec2 {
    #[inline]
    fn difference(self, other: Self) -> Self {
        self - other
    }

    #[inline]
    fn sum(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn scaled(self, scalar: f64) -> Self {
        self * scalar
    }

    fn normalized_and_magnitude(self) -> Option<(Self, f64)> {
        let magnitude = self.length();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return None;
        }
        Some((self / magnitude, magnitude))
    }

    #[inline]
    fn with_updated(self, x: Option<f64>, y: Option<f64>) -> Self {
        DVec2::new(x.unwrap_or(self.x), y.unwrap_or(self.y))
    }
}
