use serde::{Deserialize, Serialize};

use crate::vector::{Vector2, VectorOps};

/// A point that pulls every particle toward it (positive mass) or pushes it
/// away (negative mass).
///
/// Wells hold no reference to the particles they act on; their force is
/// computed on demand each tick.
///
/// ### Fields
/// - `position` - Arena coordinates of the well.
/// - `mass` - Strength of the pull; negative values repel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GravityWell {
    pub position: Vector2,
    pub mass: f64,
}

impl GravityWell {
    /// Creates a well at `position` with the given signed `mass`.
    pub fn new(position: Vector2, mass: f64) -> Self {
        Self { position, mass }
    }

    /// Force this well exerts on a particle at `position`.
    ///
    /// The magnitude is `g * mass * min(1, 1 / distance)`, clamped to
    /// `[-|force_cap|, |force_cap|]`, and points from the particle toward the
    /// well. The `min(1, ..)` term stops the inverse-distance blowup inside
    /// unit distance.
    ///
    /// ### Parameters
    /// - `position` - Position of the particle being pulled.
    /// - `g` - Gravitational constant.
    /// - `force_cap` - Bound on the magnitude; only its absolute value is used.
    ///
    /// ### Returns
    /// The force vector. It is zero when the particle sits exactly on the
    /// well, or when any input is non-finite, so NaN never reaches a particle.
    pub fn force_on(&self, position: Vector2, g: f64, force_cap: f64) -> Vector2 {
        let Some((direction, distance)) = self
            .position
            .difference(position)
            .normalized_and_magnitude()
        else {
            return Vector2::ZERO;
        };

        let cap = force_cap.abs();
        let raw = g * self.mass * (1.0 / distance).min(1.0);
        if !raw.is_finite() || cap.is_nan() {
            return Vector2::ZERO;
        }
        direction.scaled(raw.max(-cap).min(cap))
    }

    /// Copy of this well with its mass forced negative.
    pub fn repelling(self) -> Self {
        Self {
            mass: -self.mass.abs(),
            ..self
        }
    }

    /// Copy of this well with its mass forced positive.
    pub fn attracting(self) -> Self {
        Self {
            mass: self.mass.abs(),
            ..self
        }
    }
}
