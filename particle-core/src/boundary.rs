//! Wall bounce for the rectangular arena.
//!
//! Each axis is handled on its own: a particle past the far edge gets a
//! velocity component pointing back in (`-|v|`), a particle below zero gets
//! `|v|`. Particles inside the arena, or exactly on an edge, are untouched.

use crate::{
    types::ArenaSize,
    vector::{Vector2, VectorOps},
};

/// Corrected velocity component for one axis.
#[inline]
pub fn reflect_axis(position: f64, velocity: f64, extent: f64) -> f64 {
    if position > extent {
        -velocity.abs()
    } else if position < 0.0 {
        velocity.abs()
    } else {
        velocity
    }
}

/// Applies [`reflect_axis`] to both axes of `velocity`.
pub fn reflect(position: Vector2, velocity: Vector2, arena: ArenaSize) -> Vector2 {
    velocity.with_updated(
        Some(reflect_axis(position.x, velocity.x, arena.width)),
        Some(reflect_axis(position.y, velocity.y, arena.height)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: ArenaSize = ArenaSize {
        width: 100.0,
        height: 50.0,
    };

    #[test]
    fn reflect_axis_points_back_inside() {
        assert_eq!(reflect_axis(101.0, 2.0, 100.0), -2.0);
        assert_eq!(reflect_axis(101.0, -2.0, 100.0), -2.0);
        assert_eq!(reflect_axis(-1.0, -2.0, 100.0), 2.0);
        assert_eq!(reflect_axis(-1.0, 2.0, 100.0), 2.0);
    }

    #[test]
    fn reflect_axis_leaves_inside_and_edge_alone() {
        assert_eq!(reflect_axis(50.0, 3.0, 100.0), 3.0);
        assert_eq!(reflect_axis(100.0, 3.0, 100.0), 3.0);
        assert_eq!(reflect_axis(0.0, -3.0, 100.0), -3.0);
    }

    #[test]
    fn reflect_handles_both_axes_independently() {
        let v = reflect(Vector2::new(120.0, -5.0), Vector2::new(1.0, -1.0), ARENA);
        assert_eq!(v, Vector2::new(-1.0, 1.0));

        let v = reflect(Vector2::new(120.0, 25.0), Vector2::new(1.0, -1.0), ARENA);
        assert_eq!(v, Vector2::new(-1.0, -1.0));
    }
}
