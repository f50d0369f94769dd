use crate::bounding_volume::Aabb;
use crate::mesh::{ConsumerId, ConsumerSignals, MeshInvalidator, RenderMesh};
use crate::shape::{ColorSource, NormalSource, PositionSource, TexCoordNode};
use crate::transformation::padded_len;

/// Errors raised while building or updating a quad set.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuadSetError {
    /// A quad set must have a position source.
    #[error("A quad set must have a position source.")]
    MissingCoord,
    /// There are more coordinates than the index buffer can address.
    #[error("{coords} coordinates cannot be addressed by indices limited to {max} coordinates.")]
    IndexWidthExceeded {
        /// The number of coordinates, after padding.
        coords: usize,
        /// The maximum number of coordinates addressable by the index buffer.
        max: usize,
    },
}

/// The width of the indices accepted by the rendering backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum IndexWidth {
    /// 16-bit indices.
    #[default]
    U16,
    /// 32-bit indices.
    U32,
}

impl IndexWidth {
    /// The maximum number of coordinates addressable with this index width.
    pub fn max_indexable_coords(self) -> usize {
        match self {
            IndexWidth::U16 => u16::MAX as usize,
            IndexWidth::U32 => u32::MAX as usize,
        }
    }

    /// Fails if `num_coords` coordinates cannot be addressed with this index width.
    pub fn check(self, num_coords: usize) -> Result<(), QuadSetError> {
        let max = self.max_indexable_coords();
        if num_coords > max {
            Err(QuadSetError::IndexWidthExceeded {
                coords: num_coords,
                max,
            })
        } else {
            Ok(())
        }
    }
}

/// A field of a [`QuadSetDesc`] that can be updated without re-triangulating.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum QuadSetField {
    /// The position source.
    Coord,
    /// The color source.
    Color,
    /// The normal source.
    Normal,
    /// The texture-coordinate source.
    TexCoord,
}

/// The description of an indexed quad set.
///
/// Every group of four consecutive indices describes one planar quad.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct QuadSetDesc {
    /// The raw quad indices, referencing the positions.
    pub index: Vec<u32>,
    /// The positions. Mandatory.
    pub coord: Option<PositionSource>,
    /// The explicit normals. Generated if `None`.
    pub normal: Option<NormalSource>,
    /// The colors.
    pub color: Option<ColorSource>,
    /// The texture coordinates. Generated if `None`.
    pub tex_coord: Option<TexCoordNode>,
    /// Are normals bound per vertex (`true`) or per face (`false`)?
    pub normal_per_vertex: bool,
    /// Are colors bound per vertex (`true`) or per face (`false`)?
    pub color_per_vertex: bool,
    /// Are the quads oriented counter-clockwise?
    pub ccw: bool,
    /// The index width of the rendering backend.
    pub index_width: IndexWidth,
}

impl Default for QuadSetDesc {
    fn default() -> Self {
        Self {
            index: Vec::new(),
            coord: None,
            normal: None,
            color: None,
            tex_coord: None,
            normal_per_vertex: true,
            color_per_vertex: true,
            ccw: true,
            index_width: IndexWidth::default(),
        }
    }
}

impl QuadSetDesc {
    /// Describes a quad set with the given indices and positions, and default settings.
    pub fn new(index: Vec<u32>, coord: PositionSource) -> Self {
        Self {
            index,
            coord: Some(coord),
            ..Default::default()
        }
    }

    /// Sets the explicit normals.
    pub fn with_normal(mut self, normal: NormalSource) -> Self {
        self.normal = Some(normal);
        self
    }

    /// Sets the colors.
    pub fn with_color(mut self, color: ColorSource) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the texture coordinates.
    pub fn with_tex_coord(mut self, tex_coord: impl Into<TexCoordNode>) -> Self {
        self.tex_coord = Some(tex_coord.into());
        self
    }

    /// Sets the normal binding.
    pub fn with_normal_per_vertex(mut self, per_vertex: bool) -> Self {
        self.normal_per_vertex = per_vertex;
        self
    }

    /// Sets the color binding.
    pub fn with_color_per_vertex(mut self, per_vertex: bool) -> Self {
        self.color_per_vertex = per_vertex;
        self
    }

    /// Sets the orientation of the quads.
    pub fn with_ccw(mut self, ccw: bool) -> Self {
        self.ccw = ccw;
        self
    }

    /// Sets the index width of the rendering backend.
    pub fn with_index_width(mut self, index_width: IndexWidth) -> Self {
        self.index_width = index_width;
        self
    }
}

/// An indexed quad set together with its triangulated render mesh.
///
/// The mesh is rebuilt whenever the index list or a binding changes, and patched
/// channel by channel when a single attribute source changes. Consumers of the mesh
/// register themselves to be told which buffers they must re-upload.
#[derive(Clone, Debug)]
pub struct QuadSet {
    pub(super) desc: QuadSetDesc,
    pub(super) mesh: RenderMesh,
    pub(super) invalidator: MeshInvalidator,
}

impl QuadSet {
    /// Builds the render mesh of a quad set.
    ///
    /// Fails with [`QuadSetError::MissingCoord`] if `desc` has no position source.
    pub fn new(desc: QuadSetDesc) -> Result<Self, QuadSetError> {
        let mut result = Self {
            desc,
            mesh: RenderMesh::new(),
            invalidator: MeshInvalidator::new(),
        };
        result.rebuild()?;
        Ok(result)
    }

    /// The description of this quad set.
    #[inline]
    pub fn desc(&self) -> &QuadSetDesc {
        &self.desc
    }

    /// The triangulated render mesh.
    #[inline]
    pub fn mesh(&self) -> &RenderMesh {
        &self.mesh
    }

    /// The bounding box of the position buffer, recomputed lazily after each invalidation.
    pub fn bounding_volume(&self) -> Option<Aabb> {
        self.invalidator
            .bounding_volume(self.mesh.positions().data())
    }

    /// Registers a consumer of the render mesh.
    pub fn register_consumer(&mut self) -> ConsumerId {
        self.invalidator.register_consumer()
    }

    /// Unregisters a consumer. Returns `false` if it was not registered.
    pub fn unregister_consumer(&mut self, id: ConsumerId) -> bool {
        self.invalidator.unregister_consumer(id)
    }

    /// Returns and clears the signals received by a consumer since its last call.
    pub fn take_signals(&mut self, id: ConsumerId) -> Option<ConsumerSignals> {
        self.invalidator.take_signals(id)
    }

    /// Replaces the positions and patches the position buffer.
    ///
    /// Nothing is modified if the new positions exceed the index width.
    pub fn set_coord(&mut self, coord: PositionSource) -> Result<(), QuadSetError> {
        self.check_index_width(coord.len())?;
        self.desc.coord = Some(coord);
        self.field_changed(QuadSetField::Coord)
    }

    /// Replaces the normals and patches the normal buffer.
    pub fn set_normal(&mut self, normal: Option<NormalSource>) -> Result<(), QuadSetError> {
        self.desc.normal = normal;
        self.field_changed(QuadSetField::Normal)
    }

    /// Replaces the colors and patches the color buffer.
    pub fn set_color(&mut self, color: Option<ColorSource>) -> Result<(), QuadSetError> {
        self.desc.color = color;
        self.field_changed(QuadSetField::Color)
    }

    /// Replaces the texture coordinates and patches the texture-coordinate buffer.
    pub fn set_tex_coord(&mut self, tex_coord: Option<TexCoordNode>) -> Result<(), QuadSetError> {
        self.desc.tex_coord = tex_coord;
        self.field_changed(QuadSetField::TexCoord)
    }

    /// Replaces the index list and rebuilds the whole mesh.
    pub fn set_index(&mut self, index: Vec<u32>) -> Result<(), QuadSetError> {
        self.desc.index = index;
        self.rebuild()
    }

    /// Changes the normal binding and rebuilds the whole mesh.
    pub fn set_normal_per_vertex(&mut self, per_vertex: bool) -> Result<(), QuadSetError> {
        self.desc.normal_per_vertex = per_vertex;
        self.rebuild()
    }

    /// Changes the color binding and rebuilds the whole mesh.
    pub fn set_color_per_vertex(&mut self, per_vertex: bool) -> Result<(), QuadSetError> {
        self.desc.color_per_vertex = per_vertex;
        self.rebuild()
    }

    /// Changes the orientation of the quads and rebuilds the whole mesh.
    pub fn set_ccw(&mut self, ccw: bool) -> Result<(), QuadSetError> {
        self.desc.ccw = ccw;
        self.rebuild()
    }

    /// Fails if `num_positions` positions, once padded, exceed the index width.
    pub(super) fn check_index_width(&self, num_positions: usize) -> Result<(), QuadSetError> {
        let result = self.desc.index_width.check(padded_len(num_positions));
        if let Err(err) = &result {
            log::warn!("Rejected position update: {}", err);
        }
        result
    }
}
