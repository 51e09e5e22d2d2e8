//! Point field generation.
//!
//! Builds the full set of rendered points once at startup: either a
//! procedural double-sided spiral (100 points per ring, one ring every
//! 0.02π revolution, stacked 0.1 units apart) or positions copied from a
//! loaded mesh. Positions never move individually afterwards — the whole
//! field rotates rigidly via the model matrix.

use helix_common::AssetError;
use rand::Rng;

use super::types::PointInstance;

/// Points per spiral ring; the radius sweeps from -1.5 to +1.47 across
/// each ring, producing the two opposing arms.
const RING: usize = 100;

/// A fixed-size point cloud with three parallel per-point attributes.
///
/// Invariant: all four arrays share one point count; index `i` in every
/// array refers to the same logical point.
#[derive(Debug)]
pub struct PointField {
    positions: Vec<[f32; 3]>,
    /// General-purpose per-point seed (drives sprite size).
    jitter: Vec<f32>,
    /// Color-variation seed.
    color_seed: Vec<f32>,
    /// Animation phase offset; zero-filled for mesh-sourced fields.
    anim_offset: Vec<f32>,
}

impl PointField {
    /// Generate `n` points along the procedural spiral.
    ///
    /// Positions are deterministic in `n`; the attribute arrays are fresh
    /// uniform [0,1) draws on every call. A final partial ring is simply
    /// truncated at `n`. Cannot fail for any `n`.
    pub fn spiral(n: usize) -> Self {
        let mut rng = rand::thread_rng();

        let mut positions = Vec::with_capacity(n);
        let mut jitter = Vec::with_capacity(n);
        let mut color_seed = Vec::with_capacity(n);
        let mut anim_offset = Vec::with_capacity(n);

        for i in 0..n {
            let ring = (i / RING) as f32;
            let theta = 0.02 * std::f32::consts::PI * ring;
            let radius = 0.03 * ((i % RING) as f32 - 50.0);

            positions.push([
                theta.cos() * radius,
                0.1 * ring - 2.0,
                theta.sin() * radius,
            ]);
            jitter.push(rng.gen::<f32>());
            color_seed.push(rng.gen::<f32>());
            anim_offset.push(rng.gen::<f32>());
        }

        Self {
            positions,
            jitter,
            color_seed,
            anim_offset,
        }
    }

    /// Build a field from an already-centered flat position buffer
    /// (one x,y,z triple per point).
    ///
    /// `jitter` and `color_seed` are redrawn per point; `anim_offset` is
    /// zero-filled (the shader's phase term is unused for mesh fields).
    pub fn from_positions(buf: &[f32]) -> Result<Self, AssetError> {
        if buf.len() % 3 != 0 {
            return Err(AssetError::MalformedPositions(buf.len()));
        }

        let mut rng = rand::thread_rng();
        let n = buf.len() / 3;

        let positions = buf
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect::<Vec<_>>();
        let jitter = (0..n).map(|_| rng.gen::<f32>()).collect();
        let color_seed = (0..n).map(|_| rng.gen::<f32>()).collect();
        let anim_offset = vec![0.0; n];

        Ok(Self {
            positions,
            jitter,
            color_seed,
            anim_offset,
        })
    }

    /// Number of points in the field.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn jitter(&self) -> &[f32] {
        &self.jitter
    }

    pub fn color_seed(&self) -> &[f32] {
        &self.color_seed
    }

    pub fn anim_offset(&self) -> &[f32] {
        &self.anim_offset
    }

    /// Flatten the parallel arrays into the GPU instance buffer layout.
    pub fn instances(&self) -> Vec<PointInstance> {
        (0..self.len())
            .map(|i| PointInstance {
                position: self.positions[i],
                jitter: self.jitter[i],
                color_seed: self.color_seed[i],
                anim_offset: self.anim_offset[i],
            })
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
