//! Renderer-ready mesh buffers and their invalidation.

pub use self::dirty::{ConsumerId, ConsumerSignals, DirtyFlags};
pub use self::invalidation::MeshInvalidator;
pub use self::render_mesh::{AttributeBuffer, AttributeChannel, IndexBuffer, MeshBuffers, RenderMesh};

mod dirty;
mod invalidation;
mod render_mesh;
