use std::fmt;

use log::{debug, trace};

use crate::{
    config::EngineConfig,
    error::ConfigError,
    force_buffer::ForceBuffer,
    metaforce::Metaforce,
    particle::Particle,
    phases,
    render::{BACKGROUND, Surface},
    types::{ArenaSize, ParticleId},
    vector::Vector2,
    well::GravityWell,
};

/// Owns all simulation state: particles, gravity wells, metaforces and the
/// arena they live in.
///
/// The host drives it by calling [`ParticleEngine::step`] on a fixed cadence
/// and [`ParticleEngine::render`] whenever it wants a frame. Between ticks
/// the host may replace any of the collections wholesale or resize the arena.
/// `step` takes `&mut self`, so concurrent ticks on one engine are ruled out
/// by the borrow checker.
pub struct ParticleEngine {
    arena: ArenaSize,
    particles: Vec<Particle>,
    wells: Vec<GravityWell>,
    metaforces: Vec<Box<dyn Metaforce>>,
    cfg: EngineConfig,
    acc: ForceBuffer,
    ticks: u64,
}

impl fmt::Debug for ParticleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParticleEngine")
            .field("arena", &self.arena)
            .field("particles", &self.particles.len())
            .field("wells", &self.wells)
            .field("metaforces", &self.metaforces.len())
            .field("cfg", &self.cfg)
            .field("ticks", &self.ticks)
            .finish()
    }
}

impl ParticleEngine {
    /// An empty engine over `arena` with the default tuning.
    pub fn new(arena: ArenaSize) -> Self {
        Self {
            arena,
            particles: Vec::new(),
            wells: Vec::new(),
            metaforces: Vec::new(),
            cfg: EngineConfig::default(),
            acc: ForceBuffer::default(),
            ticks: 0,
        }
    }

    /// Builder form of [`ParticleEngine::set_particles`].
    pub fn with_particles(mut self, particles: Vec<Particle>) -> Self {
        self.set_particles(particles);
        self
    }

    /// Builder form of [`ParticleEngine::set_wells`].
    pub fn with_wells(mut self, wells: Vec<GravityWell>) -> Self {
        self.set_wells(wells);
        self
    }

    /// Builder form of [`ParticleEngine::push_metaforce`].
    pub fn with_metaforce(mut self, metaforce: impl Metaforce + 'static) -> Self {
        self.push_metaforce(metaforce);
        self
    }

    /// Replaces the tuning constants without checking them.
    ///
    /// Out-of-range values never make [`ParticleEngine::step`] or
    /// [`ParticleEngine::render`] panic: a negative force cap acts as its
    /// absolute value and an inverted width range draws every particle at
    /// `width.max`. Use [`ParticleEngine::try_with_config`] to reject them
    /// instead.
    pub fn with_config(mut self, cfg: EngineConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Like [`ParticleEngine::with_config`], but rejects invalid constants.
    ///
    /// ### Returns
    /// - `Ok` with the reconfigured engine if [`EngineConfig::validate`] passes.
    /// - `Err` with the validation error otherwise; the engine is dropped.
    pub fn try_with_config(self, cfg: EngineConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(self.with_config(cfg))
    }

    /// Shorthand for the gravitational constant alone.
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.cfg.gravitational_constant = g;
        self
    }

    /// Current arena size.
    pub fn arena(&self) -> ArenaSize {
        self.arena
    }

    /// Resizes the arena, e.g. when the host's viewport changes.
    ///
    /// Particles left outside the new bounds are bounced back in over the
    /// following ticks; nothing is moved immediately.
    pub fn set_arena(&mut self, arena: ArenaSize) {
        if arena != self.arena {
            debug!("arena resized to {}x{}", arena.width, arena.height);
        }
        self.arena = arena;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Live access to the tuning constants. Like
    /// [`ParticleEngine::with_config`], changes made here are not validated.
    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.cfg
    }

    /// Particles in index order, for rendering or inspection.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replaces every particle; the next tick only touches the new set.
    pub fn set_particles(&mut self, particles: Vec<Particle>) {
        debug!("particle set replaced ({} particles)", particles.len());
        self.particles = particles;
    }

    pub fn wells(&self) -> &[GravityWell] {
        &self.wells
    }

    /// Mutable access for hosts that move wells around in place.
    pub fn wells_mut(&mut self) -> &mut [GravityWell] {
        &mut self.wells
    }

    /// Replaces every gravity well. An empty list is fine: particles then
    /// only feel metaforces and friction.
    pub fn set_wells(&mut self, wells: Vec<GravityWell>) {
        debug!("well set replaced ({} wells)", wells.len());
        self.wells = wells;
    }

    /// Appends one well, keeping the existing ones.
    pub fn push_well(&mut self, well: GravityWell) {
        self.wells.push(well);
    }

    pub fn clear_wells(&mut self) {
        self.set_wells(Vec::new());
    }

    /// Number of installed metaforces. The metaforces themselves are opaque.
    pub fn metaforce_count(&self) -> usize {
        self.metaforces.len()
    }

    /// Replaces every metaforce.
    ///
    /// ### Parameters
    /// - `metaforces` - New force sources; their order does not matter since
    ///   contributions are summed.
    pub fn set_metaforces(&mut self, metaforces: Vec<Box<dyn Metaforce>>) {
        debug!("metaforce set replaced ({} metaforces)", metaforces.len());
        self.metaforces = metaforces;
    }

    /// Appends one metaforce, boxing it.
    pub fn push_metaforce(&mut self, metaforce: impl Metaforce + 'static) {
        self.metaforces.push(Box::new(metaforce));
    }

    /// Removes all metaforces, e.g. once the user takes over with a well.
    pub fn clear_metaforces(&mut self) {
        self.set_metaforces(Vec::new());
    }

    /// Number of completed calls to [`ParticleEngine::step`].
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Force particle `id` would receive if the engine stepped now.
    ///
    /// Metaforces are invoked, so any randomness they carry advances.
    /// Returns `None` if `id` is out of range.
    pub fn net_force_on(&mut self, id: ParticleId) -> Option<Vector2> {
        let particle = self.particles.get(id)?;
        Some(phases::net_force(
            particle,
            &self.wells,
            &mut self.metaforces,
            &self.cfg,
        ))
    }

    /// Advances the simulation by one tick.
    ///
    /// See [`phases`] for the pipeline.
    pub fn step(&mut self) {
        trace!(
            "tick {}: {} particles, {} wells, {} metaforces",
            self.ticks,
            self.particles.len(),
            self.wells.len(),
            self.metaforces.len()
        );

        phases::accumulate_phase(
            &self.particles,
            &self.wells,
            &mut self.metaforces,
            &self.cfg,
            &mut self.acc,
        );
        phases::integrate_phase(&mut self.particles, &self.acc, &self.cfg, self.arena);

        self.ticks += 1;
    }

    /// Draws the current state: one background fill, then one square per
    /// particle, centered on the particle, sized by its display width and
    /// filled with its render hint.
    pub fn render(&self, surface: &mut impl Surface) {
        surface.fill_background(self.arena, BACKGROUND);

        for p in &self.particles {
            let width = p.display_width(self.cfg.width);
            surface.fill_rect(
                p.position.x - width / 2.0,
                p.position.y - width / 2.0,
                width,
                width,
                p.render_hint,
            );
        }
    }
}
