//! Attribute sources feeding a quad set.
//!
//! Each source is a plain value owned by the [`QuadSetDesc`](crate::shape::QuadSetDesc).
//! Variants that change the layout of the generated buffers (alpha-carrying colors,
//! 3-component texture coordinates, procedural texture coordinates, multi-texture
//! indirection) are explicit enum variants so they can be resolved once.

use crate::math::{Point, Real, Vector};
use crate::utils::{self, Flatten};

/// The mandatory list of vertex positions of a quad set.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PositionSource {
    /// The vertex positions, referenced by the quad set's index list.
    pub points: Vec<Point<Real>>,
}

impl PositionSource {
    /// Creates a new position source.
    pub fn new(points: Vec<Point<Real>>) -> Self {
        Self { points }
    }

    /// The number of positions.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there is no position.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// An explicit list of normal vectors.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct NormalSource {
    /// The normals, one per vertex or one per face depending on the quad set's binding.
    pub vectors: Vec<Vector<Real>>,
}

impl NormalSource {
    /// Creates a new normal source.
    pub fn new(vectors: Vec<Vector<Real>>) -> Self {
        Self { vectors }
    }

    /// The number of normals.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns `true` if there is no normal.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Appends the `i`-th normal to `out`.
    ///
    /// Falls back to `+Z` and returns `false` if `i` is out of bounds.
    pub fn extend_flat_or_default(&self, i: usize, out: &mut Vec<Real>) -> bool {
        match self.vectors.get(i) {
            Some(n) => {
                n.extend_flat(out);
                true
            }
            None => {
                Vector::<Real>::z().extend_flat(out);
                false
            }
        }
    }

    /// Flattens all the normals into a new `xyz` buffer.
    pub fn to_flat(&self) -> Vec<Real> {
        utils::flatten(&self.vectors)
    }
}

/// A list of colors, with or without an alpha channel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ColorSource {
    /// Opaque colors with 3 components.
    Rgb(Vec<[Real; 3]>),
    /// Colors with 4 components, the last one being the alpha.
    Rgba(Vec<[Real; 4]>),
}

impl ColorSource {
    /// The number of components of each color of this source.
    pub fn num_components(&self) -> usize {
        match self {
            ColorSource::Rgb(_) => 3,
            ColorSource::Rgba(_) => 4,
        }
    }

    /// The number of colors.
    pub fn len(&self) -> usize {
        match self {
            ColorSource::Rgb(c) => c.len(),
            ColorSource::Rgba(c) => c.len(),
        }
    }

    /// Returns `true` if there is no color.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the `i`-th color to `out`.
    ///
    /// Falls back to opaque white and returns `false` if `i` is out of bounds.
    pub fn extend_flat_or_default(&self, i: usize, out: &mut Vec<Real>) -> bool {
        match self {
            ColorSource::Rgb(c) => match c.get(i) {
                Some(rgb) => {
                    rgb.extend_flat(out);
                    true
                }
                None => {
                    out.extend_from_slice(&[1.0; 3]);
                    false
                }
            },
            ColorSource::Rgba(c) => match c.get(i) {
                Some(rgba) => {
                    rgba.extend_flat(out);
                    true
                }
                None => {
                    out.extend_from_slice(&[1.0; 4]);
                    false
                }
            },
        }
    }

    /// Flattens all the colors into a new buffer of `self.num_components()` floats per color.
    pub fn to_flat(&self) -> Vec<Real> {
        match self {
            ColorSource::Rgb(c) => utils::flatten(c),
            ColorSource::Rgba(c) => utils::flatten(c),
        }
    }
}

/// A texture-coordinate source: explicit coordinates, or a procedural mode.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum TexCoordSource {
    /// Explicit 2D texture coordinates.
    TexCoord2(Vec<[Real; 2]>),
    /// Explicit 3D texture coordinates.
    TexCoord3(Vec<[Real; 3]>),
    /// No explicit coordinates: they are generated from the given mode.
    ///
    /// See [`generate_tex_coords`](crate::transformation::generate_tex_coords) for
    /// the supported modes.
    Generator {
        /// The generation mode, e.g., `"SPHERE-LOCAL"`. Empty means planar projection.
        mode: String,
    },
}

impl TexCoordSource {
    /// Creates a procedural texture-coordinate source.
    pub fn generator(mode: impl Into<String>) -> Self {
        TexCoordSource::Generator { mode: mode.into() }
    }

    /// The number of components of each explicit coordinate, or `None` for a generator.
    pub fn num_components(&self) -> Option<usize> {
        match self {
            TexCoordSource::TexCoord2(_) => Some(2),
            TexCoordSource::TexCoord3(_) => Some(3),
            TexCoordSource::Generator { .. } => None,
        }
    }

    /// Flattens the explicit coordinates. Empty for a generator.
    pub fn to_flat(&self) -> Vec<Real> {
        match self {
            TexCoordSource::TexCoord2(t) => utils::flatten(t),
            TexCoordSource::TexCoord3(t) => utils::flatten(t),
            TexCoordSource::Generator { .. } => Vec::new(),
        }
    }
}

/// An indirection over several texture-coordinate sources.
///
/// Only the first child contributes to the generated mesh.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MultiTexCoord {
    /// The texture-coordinate sources, one per texture unit.
    pub children: Vec<TexCoordSource>,
}

/// The value of the texture-coordinate slot of a quad set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum TexCoordNode {
    /// A single texture-coordinate source.
    Source(TexCoordSource),
    /// An indirection forwarding to its first child.
    Multi(MultiTexCoord),
}

impl TexCoordNode {
    /// The source this node forwards to, if any.
    pub fn resolve(&self) -> Option<&TexCoordSource> {
        match self {
            TexCoordNode::Source(source) => Some(source),
            TexCoordNode::Multi(multi) => multi.children.first(),
        }
    }
}

impl From<TexCoordSource> for TexCoordNode {
    fn from(source: TexCoordSource) -> Self {
        TexCoordNode::Source(source)
    }
}

impl From<MultiTexCoord> for TexCoordNode {
    fn from(multi: MultiTexCoord) -> Self {
        TexCoordNode::Multi(multi)
    }
}
