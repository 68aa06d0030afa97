//! Extra per-particle forces that are not tied to a gravity well.
//!
//! Anything that maps a [`Particle`] to a force vector can be a metaforce:
//! closures work directly through the blanket impl, and [`Jitter`] is the
//! stock random wobble used before the user starts interacting.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    particle::Particle,
    vector::{Vector2, VectorOps},
};

/// A force source that is not distance-based.
///
/// The engine calls [`Metaforce::force`] once per particle per tick and adds
/// the result to the particle's net force without inspecting it. Any state a
/// metaforce keeps (an RNG, a clock) is its own business; nothing requires it
/// to be `Send`, since the engine is stepped from a single thread.
pub trait Metaforce {
    /// Additional force acting on `particle` this tick.
    ///
    /// ### Parameters
    /// - `particle` - The particle being updated, in its pre-tick state.
    ///
    /// ### Returns
    /// A force vector to add. Non-finite results are discarded by the engine.
    fn force(&mut self, particle: &Particle) -> Vector2;
}

impl<F> Metaforce for F
where
    F: FnMut(&Particle) -> Vector2,
{
    fn force(&mut self, particle: &Particle) -> Vector2 {
        self(particle)
    }
}

/// Parameters of a [`Jitter`] metaforce.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JitterConfig {
    /// Each axis is sampled uniformly from `[-spread, spread]`.
    pub spread: f64,
    /// The sample is multiplied by this before being applied.
    pub scale: f64,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            spread: 1.0,
            scale: 0.05,
        }
    }
}

impl JitterConfig {
    /// Checks that both values are finite and `spread` is not negative.
    ///
    /// ### Returns
    /// - `Ok(())` if a [`Jitter`] can be built from this config.
    /// - `Err` naming the first offending value otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("jitter.spread", self.spread), ("jitter.scale", self.scale)] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        if self.spread < 0.0 {
            return Err(ConfigError::NegativeJitterSpread(self.spread));
        }
        Ok(())
    }
}

/// Small bounded random force, sampled independently per axis.
#[derive(Debug)]
pub struct Jitter<R> {
    rng: R,
    spread: f64,
    scale: f64,
}

impl<R: Rng> Jitter<R> {
    /// Creates a jitter metaforce drawing from `rng`.
    ///
    /// ### Parameters
    /// - `cfg` - Spread and scale; validated with [`JitterConfig::validate`].
    /// - `rng` - Random source owned by the metaforce.
    ///
    /// ### Returns
    /// The metaforce, or the validation error if `cfg` could not be sampled.
    pub fn new(cfg: JitterConfig, rng: R) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            rng,
            spread: cfg.spread,
            scale: cfg.scale,
        })
    }

    /// Largest magnitude a single axis of the output can reach.
    pub fn max_component(&self) -> f64 {
        self.spread * self.scale.abs()
    }
}

impl<R: Rng> Metaforce for Jitter<R> {
    fn force(&mut self, _particle: &Particle) -> Vector2 {
        let x = self.rng.random_range(-self.spread..=self.spread);
        let y = self.rng.random_range(-self.spread..=self.spread);
        Vector2::new(x, y).scaled(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;
    use rand::{SeedableRng, rngs::StdRng};
    use std::{cell::Cell, rc::Rc};

    fn particle() -> Particle {
        Particle::at_rest(Vector2::new(1.0, 1.0), Rgba::new(0, 0, 0, 255))
    }

    #[test]
    fn closures_are_metaforces() {
        let mut wind = |_: &Particle| Vector2::new(0.5, 0.0);
        assert_eq!(wind.force(&particle()), Vector2::new(0.5, 0.0));

        let mut boxed: Box<dyn Metaforce> = Box::new(|p: &Particle| p.position.scaled(-1.0));
        assert_eq!(boxed.force(&particle()), Vector2::new(-1.0, -1.0));
    }

    #[test]
    fn closures_need_not_be_send() {
        // `Rc` is not `Send`; such a closure must still be accepted.
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut boxed: Box<dyn Metaforce> = Box::new(move |_: &Particle| {
            counter.set(counter.get() + 1);
            Vector2::ZERO
        });

        boxed.force(&particle());
        boxed.force(&particle());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let cfg = JitterConfig {
            spread: 2.0,
            scale: 0.1,
        };
        let mut jitter = Jitter::new(cfg, StdRng::seed_from_u64(7)).unwrap();
        let bound = jitter.max_component();
        assert!((bound - 0.2).abs() < 1e-12);

        for _ in 0..1000 {
            let f = jitter.force(&particle());
            assert!(f.x.abs() <= bound && f.y.abs() <= bound, "out of bounds: {f:?}");
        }
    }

    #[test]
    fn jitter_with_zero_spread_is_silent() {
        let cfg = JitterConfig {
            spread: 0.0,
            scale: 1.0,
        };
        let mut jitter = Jitter::new(cfg, StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(jitter.force(&particle()), Vector2::ZERO);
    }

    #[test]
    fn jitter_with_same_seed_is_reproducible() {
        let cfg = JitterConfig::default();
        let mut a = Jitter::new(cfg, StdRng::seed_from_u64(42)).unwrap();
        let mut b = Jitter::new(cfg, StdRng::seed_from_u64(42)).unwrap();
        for _ in 0..10 {
            assert_eq!(a.force(&particle()), b.force(&particle()));
        }
    }

    #[test]
    fn jitter_rejects_unsampleable_config() {
        for spread in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let cfg = JitterConfig { spread, scale: 0.05 };
            assert!(matches!(
                Jitter::new(cfg, StdRng::seed_from_u64(0)),
                Err(ConfigError::NotFinite {
                    field: "jitter.spread",
                    ..
                })
            ));
        }

        let cfg = JitterConfig {
            spread: 1.0,
            scale: f64::NAN,
        };
        assert!(cfg.validate().is_err());

        let cfg = JitterConfig {
            spread: -1.0,
            scale: 0.05,
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NegativeJitterSpread(-1.0))
        );
    }
}
