//! Procedural texture coordinates.

use crate::bounding_volume::details::flat_point_cloud_aabb;
use crate::math::{Real, DIM};

/// The number of components of generated texture coordinates.
pub const GENERATED_TEX_COORD_WIDTH: usize = 2;

/// A procedural texture-coordinate generation mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum TexCoordGenMode {
    /// Spherical mapping from the normals: `u = 0.5 + nx / 2`, `v = 0.5 + ny / 2`.
    SphereLocal,
    /// Projection of the positions on the two largest axes of their bounding box.
    #[default]
    Planar,
}

impl TexCoordGenMode {
    /// Parses a generation mode, ignoring case.
    ///
    /// Unknown modes, including the empty string, select [`TexCoordGenMode::Planar`].
    pub fn from_mode_str(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("SPHERE-LOCAL") {
            TexCoordGenMode::SphereLocal
        } else {
            TexCoordGenMode::Planar
        }
    }
}

/// Generates two-component texture coordinates.
///
/// `positions` and `normals` are flattened `xyz` buffers. [`TexCoordGenMode::SphereLocal`]
/// emits one coordinate per normal, [`TexCoordGenMode::Planar`] one per position.
pub fn generate_tex_coords(mode: TexCoordGenMode, positions: &[Real], normals: &[Real]) -> Vec<Real> {
    match mode {
        TexCoordGenMode::SphereLocal => normals
            .chunks_exact(DIM)
            .flat_map(|n| [0.5 + n[0] / 2.0, 0.5 + n[1] / 2.0])
            .collect(),
        TexCoordGenMode::Planar => planar_tex_coords(positions),
    }
}

fn planar_tex_coords(positions: &[Real]) -> Vec<Real> {
    let Some(aabb) = flat_point_cloud_aabb(positions) else {
        return Vec::new();
    };

    let extents = aabb.extents();
    // Stable sort: ties keep the x, y, z order.
    let mut axes: [usize; DIM] = [0, 1, 2];
    axes.sort_by(|a, b| extents[*b].total_cmp(&extents[*a]));
    let (s, t) = (axes[0], axes[1]);

    let scale = |extent: Real| {
        if relative_eq!(extent, 0.0) {
            1.0
        } else {
            extent
        }
    };
    let (s_extent, t_extent) = (scale(extents[s]), scale(extents[t]));

    positions
        .chunks_exact(DIM)
        .flat_map(|p| {
            [
                (p[s] - aabb.mins[s]) / s_extent,
                (p[t] - aabb.mins[t]) / t_extent,
            ]
        })
        .collect()
}
