//! Core of a 2-D particle swarm pulled around by gravity wells.
//!
//! Main components:
//! - [`vector`] — the [`Vector2`] value type and its operations.
//! - [`particle`] — particle state and its display size.
//! - [`well`] — gravity wells and the force they exert.
//! - [`metaforce`] — pluggable non-distance forces, including random jitter.
//! - [`boundary`] — per-axis wall bounce.
//! - [`force_buffer`] — per-tick net force scratch space.
//! - [`phases`] — the accumulate / integrate pipeline of one tick.
//! - [`engine`] — [`ParticleEngine`], which owns everything and steps it.
//! - [`render`] — the drawing-surface contract.
//! - [`spawn`] — random particle placement.
//! - [`config`] / [`error`] — tuning constants and their validation.
//! - [`types`] — shared small types.

pub mod boundary;
pub mod config;
pub mod engine;
pub mod error;
pub mod force_buffer;
pub mod metaforce;
pub mod particle;
pub mod phases;
pub mod render;
pub mod spawn;
pub mod types;
pub mod vector;
pub mod well;

pub use config::{EngineConfig, WidthRange};
pub use engine::ParticleEngine;
pub use error::ConfigError;
pub use metaforce::{Jitter, JitterConfig, Metaforce};
pub use particle::Particle;
pub use render::{DrawCall, RecordingSurface, Surface};
pub use types::{ArenaSize, ParticleId, Rgba};
pub use vector::{Vector2, VectorOps};
pub use well::GravityWell;
