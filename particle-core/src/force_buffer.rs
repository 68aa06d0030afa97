use crate::{types::ParticleId, vector::Vector2};

/// Scratch buffer that accumulates the net force on each particle for one
/// tick.
///
/// Entry `i` belongs to particle `i` of the engine's particle list. The
/// buffer is refilled from scratch every step, so it never carries forces
/// from one tick into the next.
#[derive(Debug, Default)]
pub struct ForceBuffer {
    net: Vec<Vector2>,
}

impl ForceBuffer {
    /// Creates a buffer of `len` zero forces.
    pub fn with_len(len: usize) -> Self {
        Self {
            net: vec![Vector2::ZERO; len],
        }
    }

    /// Resizes the buffer to `len` entries and zeroes all of them, even if
    /// the length was already correct.
    ///
    /// Call this at the start of every tick; the particle set may have been
    /// replaced since the previous one.
    pub fn ensure_len(&mut self, len: usize) {
        if self.net.len() != len {
            self.net.resize(len, Vector2::ZERO);
        }
        self.clear();
    }

    /// Zeroes every entry, keeping the length.
    pub fn clear(&mut self) {
        for f in &mut self.net {
            *f = Vector2::ZERO;
        }
    }

    /// Adds one force contribution to particle `id`.
    ///
    /// ### Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn add(&mut self, id: ParticleId, force: Vector2) {
        self.net[id] += force;
    }

    /// Net force accumulated for particle `id` so far.
    #[inline]
    pub fn net(&self, id: ParticleId) -> Vector2 {
        self.net[id]
    }

    pub fn len(&self) -> usize {
        self.net.len()
    }

    pub fn is_empty(&self) -> bool {
        self.net.is_empty()
    }
}
