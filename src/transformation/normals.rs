//! Procedural normals of an indexed quad set.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::transformation::quads_to_triangles::quads_to_triangles;
use crate::utils::{self, ccw_face_normal, ccw_scaled_face_normal};

fn triangle_points<'a>(
    positions: &'a [Point<Real>],
    tri: [u32; 3],
    ccw: bool,
) -> Option<[&'a Point<Real>; 3]> {
    let [a, b, c] = if ccw { tri } else { [tri[0], tri[2], tri[1]] };
    Some([
        positions.get(a as usize)?,
        positions.get(b as usize)?,
        positions.get(c as usize)?,
    ])
}

/// Computes one smooth normal per position.
///
/// Each triangle contributes its normal, weighted by its area, to its three vertices.
/// Vertices without any non-degenerate adjacent triangle get the `+Z` normal.
/// Triangles referencing out-of-bounds positions are skipped.
pub fn smooth_vertex_normals(
    positions: &[Point<Real>],
    triangles: &[u32],
    ccw: bool,
) -> Vec<Vector<Real>> {
    let mut normals = vec![Vector::<Real>::zeros(); positions.len()];
    let mut num_skipped = 0;

    for tri in triangles.chunks_exact(3) {
        let tri = [tri[0], tri[1], tri[2]];
        let Some(pts) = triangle_points(positions, tri, ccw) else {
            num_skipped += 1;
            continue;
        };

        // The norm of the scaled normal is twice the triangle area.
        let weighted = ccw_scaled_face_normal(pts);
        for i in tri {
            normals[i as usize] += weighted;
        }
    }

    if num_skipped != 0 {
        log::warn!(
            "Skipped {} triangles with out-of-bounds indices while computing smooth normals.",
            num_skipped
        );
    }

    normals
        .into_iter()
        .map(|n| n.try_normalize(DEFAULT_EPSILON).unwrap_or_else(Vector::z))
        .collect()
}

/// Computes one flat normal per triangle.
///
/// Degenerate triangles, and triangles referencing out-of-bounds positions, get the
/// `+Z` normal.
pub fn hard_triangle_normals(
    positions: &[Point<Real>],
    triangles: &[u32],
    ccw: bool,
) -> Vec<Vector<Real>> {
    let mut num_skipped = 0;
    let normals = triangles
        .chunks_exact(3)
        .map(|tri| match triangle_points(positions, [tri[0], tri[1], tri[2]], ccw) {
            Some(pts) => ccw_face_normal(pts).map_or_else(Vector::z, |n| n.into_inner()),
            None => {
                num_skipped += 1;
                Vector::z()
            }
        })
        .collect();

    if num_skipped != 0 {
        log::warn!(
            "Found {} triangles with out-of-bounds indices while computing hard normals.",
            num_skipped
        );
    }

    normals
}

/// Computes the flattened normal buffer of a quad set lacking explicit normals.
///
/// `quads` must already be padded to a multiple of four indices. With a `crease_angle`
/// greater than epsilon, returns one smooth normal per position. Otherwise, returns
/// one hard normal per triangle, repeated for each of the three vertices of that
/// triangle.
pub fn compute_normals(
    positions: &[Point<Real>],
    quads: &[u32],
    crease_angle: Real,
    ccw: bool,
) -> Vec<Real> {
    let triangles = quads_to_triangles(quads);

    if crease_angle > DEFAULT_EPSILON {
        utils::flatten(&smooth_vertex_normals(positions, &triangles, ccw))
    } else {
        let face_normals = hard_triangle_normals(positions, &triangles, ccw);
        let mut out = Vec::with_capacity(face_normals.len() * 3 * 3);
        for n in &face_normals {
            for _ in 0..3 {
                out.extend_from_slice(n.as_slice());
            }
        }
        out
    }
}
