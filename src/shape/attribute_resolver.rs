use crate::shape::{
    ColorSource, NormalSource, PositionSource, QuadSetDesc, QuadSetError, TexCoordNode,
    TexCoordSource,
};

/// How the values of an attribute channel are bound to the generated geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BindingMode {
    /// One value per vertex, indexed like the positions.
    PerVertex,
    /// One value per face, repeated for every element of that face.
    PerFace,
}

impl BindingMode {
    /// The binding mode selected by a `*_per_vertex` flag.
    #[inline]
    pub fn from_per_vertex(per_vertex: bool) -> Self {
        if per_vertex {
            BindingMode::PerVertex
        } else {
            BindingMode::PerFace
        }
    }
}

/// The resolved binding of the color channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorBinding {
    /// Per-vertex or per-face.
    pub mode: BindingMode,
    /// 3 for RGB sources, 4 for RGBA sources.
    pub num_components: usize,
}

/// The resolved texture-coordinate channel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TexCoordBinding<'a> {
    /// Explicit per-vertex coordinates.
    Explicit {
        /// The source holding the coordinates.
        source: &'a TexCoordSource,
        /// 2 or 3.
        num_components: usize,
    },
    /// No explicit coordinates: generate them procedurally from this mode.
    Generated {
        /// The generation mode. Empty selects the default planar projection.
        mode: &'a str,
    },
}

/// Classifies the normal channel.
///
/// Returns `None` if no normal source is supplied.
pub fn resolve_normal(normal: Option<&NormalSource>, normal_per_vertex: bool) -> Option<BindingMode> {
    normal.map(|_| BindingMode::from_per_vertex(normal_per_vertex))
}

/// Classifies the color channel.
///
/// Returns `None` if no color source is supplied.
pub fn resolve_color(color: Option<&ColorSource>, color_per_vertex: bool) -> Option<ColorBinding> {
    color.map(|c| ColorBinding {
        mode: BindingMode::from_per_vertex(color_per_vertex),
        num_components: c.num_components(),
    })
}

/// Classifies the texture-coordinate channel, following indirections to their first child.
///
/// A missing source, or an indirection without any child, resolves to the default
/// procedural generation.
pub fn resolve_tex_coord(tex_coord: Option<&TexCoordNode>) -> TexCoordBinding<'_> {
    match tex_coord.and_then(TexCoordNode::resolve) {
        Some(TexCoordSource::Generator { mode }) => TexCoordBinding::Generated {
            mode: mode.as_str(),
        },
        Some(source) => TexCoordBinding::Explicit {
            source,
            // Only generators have no component count.
            num_components: source.num_components().unwrap_or(2),
        },
        None => TexCoordBinding::Generated { mode: "" },
    }
}

/// The attribute sources of a quad set, classified once.
#[derive(Copy, Clone, Debug)]
pub struct AttributeBindings<'a> {
    /// The mandatory positions.
    pub coord: &'a PositionSource,
    /// The normal source and its binding, if any.
    pub normal: Option<(&'a NormalSource, BindingMode)>,
    /// The color source and its binding, if any.
    pub color: Option<(&'a ColorSource, ColorBinding)>,
    /// The texture-coordinate channel.
    pub tex_coord: TexCoordBinding<'a>,
}

impl<'a> AttributeBindings<'a> {
    /// Resolves all the attribute channels of `desc`.
    ///
    /// Fails with [`QuadSetError::MissingCoord`] if `desc` has no position source.
    pub fn resolve(desc: &'a QuadSetDesc) -> Result<Self, QuadSetError> {
        let coord = desc.coord.as_ref().ok_or(QuadSetError::MissingCoord)?;
        let normal = desc
            .normal
            .as_ref()
            .zip(resolve_normal(desc.normal.as_ref(), desc.normal_per_vertex));
        let color = desc
            .color
            .as_ref()
            .zip(resolve_color(desc.color.as_ref(), desc.color_per_vertex));

        Ok(Self {
            coord,
            normal,
            color,
            tex_coord: resolve_tex_coord(desc.tex_coord.as_ref()),
        })
    }
}
