use crate::math::{Real, DIM};

/// One of the float attribute channels of a [`RenderMesh`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum AttributeChannel {
    /// Vertex positions, 3 components.
    Position,
    /// Normals, 3 components.
    Normal,
    /// Colors, 3 or 4 components.
    Color,
    /// Texture coordinates, 2 or 3 components.
    TexCoord,
}

impl AttributeChannel {
    /// All the attribute channels.
    pub const ALL: [AttributeChannel; 4] = [
        AttributeChannel::Position,
        AttributeChannel::Normal,
        AttributeChannel::Color,
        AttributeChannel::TexCoord,
    ];

    /// The number of components of this channel on an empty mesh.
    pub fn default_num_components(self) -> usize {
        match self {
            AttributeChannel::Position | AttributeChannel::Normal | AttributeChannel::Color => 3,
            AttributeChannel::TexCoord => 2,
        }
    }
}

/// A flattened float buffer with its tuple width.
///
/// The `version` is stamped by the owning [`RenderMesh`] each time the buffer
/// is replaced; it is left untouched otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeBuffer {
    data: Vec<Real>,
    num_components: usize,
    version: u64,
}

impl AttributeBuffer {
    fn empty(num_components: usize) -> Self {
        Self {
            data: Vec::new(),
            num_components,
            version: 0,
        }
    }

    /// The flattened values.
    #[inline]
    pub fn data(&self) -> &[Real] {
        &self.data
    }

    /// The number of components of each tuple.
    #[inline]
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// The number of complete tuples in this buffer.
    #[inline]
    pub fn num_tuples(&self) -> usize {
        self.data.len() / self.num_components.max(1)
    }

    /// The number of floats in this buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this buffer holds no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The version of the mesh at which this buffer was last replaced.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// A flattened triangle index buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexBuffer {
    data: Vec<u32>,
    version: u64,
}

impl IndexBuffer {
    /// The flattened triangle indices, three per triangle.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// The number of indices.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there is no index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The version of the mesh at which this buffer was last replaced.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Iterates through the triangles of this buffer.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [u32; 3]> + '_ {
        self.data.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// The complete set of buffers produced by a full rebuild.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    /// The triangle indices.
    pub indices: Vec<u32>,
    /// The flattened positions, 3 components each.
    pub positions: Vec<Real>,
    /// The flattened normals, 3 components each.
    pub normals: Vec<Real>,
    /// The flattened colors.
    pub colors: Vec<Real>,
    /// The number of components of each color.
    pub num_color_components: usize,
    /// The flattened texture coordinates.
    pub tex_coords: Vec<Real>,
    /// The number of components of each texture coordinate.
    pub num_tex_components: usize,
}

/// The renderer-ready triangle mesh of a quad set.
///
/// Buffers are only ever replaced as a whole: [`RenderMesh::rebuild`] replaces all
/// of them, [`RenderMesh::patch`] replaces a single attribute channel.
#[derive(Clone, Debug)]
pub struct RenderMesh {
    indices: IndexBuffer,
    positions: AttributeBuffer,
    normals: AttributeBuffer,
    colors: AttributeBuffer,
    tex_coords: AttributeBuffer,
    num_faces: usize,
    num_coords: usize,
    version: u64,
}

impl Default for RenderMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderMesh {
    /// Creates an empty mesh at version 0.
    pub fn new() -> Self {
        Self {
            indices: IndexBuffer::default(),
            positions: AttributeBuffer::empty(AttributeChannel::Position.default_num_components()),
            normals: AttributeBuffer::empty(AttributeChannel::Normal.default_num_components()),
            colors: AttributeBuffer::empty(AttributeChannel::Color.default_num_components()),
            tex_coords: AttributeBuffer::empty(AttributeChannel::TexCoord.default_num_components()),
            num_faces: 0,
            num_coords: 0,
            version: 0,
        }
    }

    /// The triangle index buffer.
    #[inline]
    pub fn indices(&self) -> &IndexBuffer {
        &self.indices
    }

    /// The buffer of the given attribute channel.
    #[inline]
    pub fn attribute(&self, channel: AttributeChannel) -> &AttributeBuffer {
        match channel {
            AttributeChannel::Position => &self.positions,
            AttributeChannel::Normal => &self.normals,
            AttributeChannel::Color => &self.colors,
            AttributeChannel::TexCoord => &self.tex_coords,
        }
    }

    /// The position buffer.
    #[inline]
    pub fn positions(&self) -> &AttributeBuffer {
        &self.positions
    }

    /// The normal buffer.
    #[inline]
    pub fn normals(&self) -> &AttributeBuffer {
        &self.normals
    }

    /// The color buffer.
    #[inline]
    pub fn colors(&self) -> &AttributeBuffer {
        &self.colors
    }

    /// The texture-coordinate buffer.
    #[inline]
    pub fn tex_coords(&self) -> &AttributeBuffer {
        &self.tex_coords
    }

    /// The number of triangles, as computed by the last rebuild.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.num_faces
    }

    /// The number of coordinates, as computed by the last rebuild.
    #[inline]
    pub fn num_coords(&self) -> usize {
        self.num_coords
    }

    /// The number of times any buffer of this mesh was replaced.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replaces every buffer and recomputes the face and coordinate counters.
    pub fn rebuild(&mut self, buffers: MeshBuffers) {
        self.version += 1;
        let version = self.version;

        self.indices = IndexBuffer {
            data: buffers.indices,
            version,
        };
        self.positions = AttributeBuffer {
            data: buffers.positions,
            num_components: DIM,
            version,
        };
        self.normals = AttributeBuffer {
            data: buffers.normals,
            num_components: DIM,
            version,
        };
        self.colors = AttributeBuffer {
            data: buffers.colors,
            num_components: buffers.num_color_components,
            version,
        };
        self.tex_coords = AttributeBuffer {
            data: buffers.tex_coords,
            num_components: buffers.num_tex_components,
            version,
        };

        self.recompute_counters();
    }

    /// Replaces the buffer of a single channel.
    ///
    /// The index buffer, the other channels and the counters are left untouched.
    pub fn patch(&mut self, channel: AttributeChannel, data: Vec<Real>, num_components: usize) {
        self.version += 1;
        let buffer = AttributeBuffer {
            data,
            num_components,
            version: self.version,
        };

        match channel {
            AttributeChannel::Position => self.positions = buffer,
            AttributeChannel::Normal => self.normals = buffer,
            AttributeChannel::Color => self.colors = buffer,
            AttributeChannel::TexCoord => self.tex_coords = buffer,
        }
    }

    fn recompute_counters(&mut self) {
        self.num_faces = self.indices.len() / 3;
        self.num_coords = self.positions.len() / DIM;
    }
}
