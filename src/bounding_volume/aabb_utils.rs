use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};

/// Computes the AABB of a flattened `[x0, y0, z0, x1, y1, z1, ...]` coordinate buffer.
///
/// Trailing components that do not form a complete point are ignored.
/// Returns `None` if the buffer does not contain at least one point.
pub fn flat_point_cloud_aabb(coords: &[Real]) -> Option<Aabb> {
    let mut it = coords
        .chunks_exact(DIM)
        .map(|c| Point::new(c[0], c[1], c[2]));

    let p0 = it.next()?;
    let mut aabb = Aabb::new(p0, p0);

    for pt in it {
        aabb.take_point(pt);
    }

    Some(aabb)
}
