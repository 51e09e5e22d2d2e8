//! OBJ model loading for the from-mesh point source.
//!
//! Yields the first model's position buffer, centered on its bounding-box
//! centroid, ready to feed `PointField::from_positions`.

use std::path::Path;

use helix_common::AssetError;

/// Load the position buffer of the first model in an OBJ file and center
/// it on its bounding-box centroid.
pub fn load_positions(path: &Path) -> Result<Vec<f32>, AssetError> {
    let (models, _materials) = tobj::load_obj(path, &tobj::LoadOptions::default())
        .map_err(|e| AssetError::LoadError(format!("{}: {e}", path.display())))?;

    let mesh = models
        .first()
        .map(|m| &m.mesh)
        .ok_or_else(|| AssetError::EmptyModel(path.to_path_buf()))?;

    if mesh.positions.is_empty() {
        return Err(AssetError::EmptyModel(path.to_path_buf()));
    }
    if mesh.positions.len() % 3 != 0 {
        return Err(AssetError::MalformedPositions(mesh.positions.len()));
    }

    let mut positions = mesh.positions.clone();
    center(&mut positions);

    tracing::info!(
        "loaded {} ({} vertices)",
        path.display(),
        positions.len() / 3
    );
    Ok(positions)
}

/// Translate a flat position buffer so its bounding-box center sits at
/// the origin.
fn center(buf: &mut [f32]) {
    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for triple in buf.chunks_exact(3) {
        for axis in 0..3 {
            min[axis] = min[axis].min(triple[axis]);
            max[axis] = max[axis].max(triple[axis]);
        }
    }
    let mid = [
        (min[0] + max[0]) * 0.5,
        (min[1] + max[1]) * 0.5,
        (min[2] + max[2]) * 0.5,
    ];
    for triple in buf.chunks_exact_mut(3) {
        for axis in 0..3 {
            triple[axis] -= mid[axis];
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
