//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// The bounding volume of a quad set is the AABB of its position buffer. It is
/// cached by the mesh invalidator and recomputed lazily after any change of the
/// positions.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use quadset3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::from_flat_coords(&[
///     1.0, 2.0, 3.0,
///     -1.0, 4.0, 2.0,
///     0.0, 0.0, 5.0,
/// ])
/// .unwrap();
///
/// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(1.0, 4.0, 5.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates the tightest AABB enclosing a flattened `xyz` coordinate buffer.
    ///
    /// Returns `None` if the buffer holds less than one complete point.
    pub fn from_flat_coords(coords: &[Real]) -> Option<Self> {
        super::aabb_utils::flat_point_cloud_aabb(coords)
    }

    /// The extents of this AABB, i.e., its size along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }
}
