use rand::Rng;

use crate::{
    particle::Particle,
    types::{ArenaSize, Rgba},
    vector::Vector2,
};

/// Scatters `count` resting particles uniformly over `[0, width] x [0, height]`.
///
/// Both ends of each range can be drawn.
pub fn scatter(count: usize, area: ArenaSize, hint: Rgba, rng: &mut impl Rng) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let x = rng.random_range(0.0..=area.width.max(0.0));
            let y = rng.random_range(0.0..=area.height.max(0.0));
            Particle::at_rest(Vector2::new(x, y), hint)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn scatter_places_resting_particles_inside_area() {
        let mut rng = StdRng::seed_from_u64(1);
        let area = ArenaSize::new(640.0, 480.0);
        let hint = Rgba::new(200, 0, 0, 102);

        let particles = scatter(500, area, hint, &mut rng);

        assert_eq!(particles.len(), 500);
        for p in &particles {
            assert!((0.0..=area.width).contains(&p.position.x));
            assert!((0.0..=area.height).contains(&p.position.y));
            assert_eq!(p.velocity, Vector2::ZERO);
            assert_eq!(p.render_hint, hint);
        }
    }

    #[test]
    fn scatter_over_degenerate_area_collapses_to_origin() {
        let mut rng = StdRng::seed_from_u64(2);
        let particles = scatter(3, ArenaSize::new(0.0, 0.0), Rgba::new(0, 0, 0, 0), &mut rng);
        assert!(particles.iter().all(|p| p.position == Vector2::ZERO));
    }

    #[test]
    fn scatter_zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(scatter(0, ArenaSize::new(10.0, 10.0), Rgba::new(0, 0, 0, 0), &mut rng).is_empty());
    }
}
