//! The two phases of a simulation tick.
//!
//! A tick looks like:
//! 1. [`accumulate_phase`] — every well and metaforce contributes a force to
//!    every particle, summed into a [`ForceBuffer`].
//! 2. [`integrate_phase`] — each particle's velocity takes its net force,
//!    friction is applied, the velocity is bounced off the arena walls, and
//!    finally the position moves by the velocity.
//!
//! Particles never interact with each other, so running all of phase 1
//! before phase 2 gives the same result as finishing each particle in turn.

use log::warn;

use crate::{
    boundary,
    config::EngineConfig,
    force_buffer::ForceBuffer,
    metaforce::Metaforce,
    particle::Particle,
    types::ArenaSize,
    vector::{Vector2, VectorOps},
    well::GravityWell,
};

/// Net force on a single particle from all wells and metaforces.
///
/// A metaforce returning a non-finite vector is dropped for this particle,
/// since NaN would never leave the particle's state again.
pub fn net_force(
    particle: &Particle,
    wells: &[GravityWell],
    metaforces: &mut [Box<dyn Metaforce>],
    cfg: &EngineConfig,
) -> Vector2 {
    let mut force = Vector2::ZERO;

    for well in wells {
        force = force.sum(well.force_on(
            particle.position,
            cfg.gravitational_constant,
            cfg.force_cap,
        ));
    }

    for metaforce in metaforces.iter_mut() {
        let f = metaforce.force(particle);
        if f.is_finite() {
            force = force.sum(f);
        } else {
            warn!("discarding non-finite metaforce output {f:?}");
        }
    }

    force
}

/// Fills `acc` with the net force on every particle.
///
/// The buffer is resized (and cleared) to `particles.len()` first.
pub fn accumulate_phase(
    particles: &[Particle],
    wells: &[GravityWell],
    metaforces: &mut [Box<dyn Metaforce>],
    cfg: &EngineConfig,
    acc: &mut ForceBuffer,
) {
    acc.ensure_len(particles.len());

    for (id, particle) in particles.iter().enumerate() {
        acc.add(id, net_force(particle, wells, metaforces, cfg));
    }
}

/// Advances every particle by one tick using the forces in `acc`.
///
/// ### Panics
/// Panics if `acc` is shorter than `particles`.
pub fn integrate_phase(
    particles: &mut [Particle],
    acc: &ForceBuffer,
    cfg: &EngineConfig,
    arena: ArenaSize,
) {
    for (id, p) in particles.iter_mut().enumerate() {
        let velocity = p.velocity.sum(acc.net(id)).scaled(cfg.friction);
        p.velocity = boundary::reflect(p.position, velocity, arena);
        p.position = p.position.sum(p.velocity);
    }
}
