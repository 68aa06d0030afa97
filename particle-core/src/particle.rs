use crate::{
    config::WidthRange,
    types::Rgba,
    vector::Vector2,
};

/// A single point in the swarm.
///
/// Particles are owned by the engine's particle list and identified only by
/// their index in it.
///
/// ### Fields
/// - `position` - Current position in arena coordinates.
/// - `velocity` - Displacement applied on the next tick.
/// - `render_hint` - Fill color; the engine passes it through untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub render_hint: Rgba,
}

impl Particle {
    /// Creates a particle with the given state.
    pub fn new(position: Vector2, velocity: Vector2, render_hint: Rgba) -> Self {
        Self {
            position,
            velocity,
            render_hint,
        }
    }

    /// A particle at `position` with zero velocity.
    pub fn at_rest(position: Vector2, render_hint: Rgba) -> Self {
        Self::new(position, Vector2::ZERO, render_hint)
    }

    /// Magnitude of the velocity.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Side length of the square this particle is drawn as. Faster particles
    /// are drawn bigger.
    ///
    /// ### Parameters
    /// - `range` - Smallest and largest width to draw.
    ///
    /// ### Returns
    /// The speed raised to at least `range.min`, then capped at `range.max`.
    /// An inverted range therefore yields `range.max`, and a NaN bound is
    /// ignored; this never panics.
    pub fn display_width(&self, range: WidthRange) -> f64 {
        self.speed().max(range.min).min(range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::new(200, 0, 0, 102);

    #[test]
    fn display_width_clamps_speed() {
        let range = WidthRange { min: 2.0, max: 10.0 };

        let slow = Particle::at_rest(Vector2::ZERO, RED);
        assert_eq!(slow.display_width(range), 2.0);

        let medium = Particle::new(Vector2::ZERO, Vector2::new(3.0, 4.0), RED);
        assert_eq!(medium.display_width(range), 5.0);

        let fast = Particle::new(Vector2::ZERO, Vector2::new(30.0, 40.0), RED);
        assert_eq!(fast.display_width(range), 10.0);
    }

    #[test]
    fn display_width_with_inverted_range_uses_max() {
        let range = WidthRange { min: 10.0, max: 2.0 };
        let p = Particle::new(Vector2::ZERO, Vector2::new(3.0, 4.0), RED);
        assert_eq!(p.display_width(range), 2.0);

        let range = WidthRange {
            min: f64::NAN,
            max: 10.0,
        };
        assert_eq!(p.display_width(range), 5.0);
    }

    #[test]
    fn at_rest_has_zero_velocity() {
        let p = Particle::at_rest(Vector2::new(4.0, 5.0), RED);
        assert_eq!(p.velocity, Vector2::ZERO);
        assert_eq!(p.speed(), 0.0);
        assert_eq!(p.render_hint, RED);
    }
}
