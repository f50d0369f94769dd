//! Indexed quad sets and the attribute sources feeding them.

pub use self::attribute_resolver::{
    resolve_color, resolve_normal, resolve_tex_coord, AttributeBindings, BindingMode,
    ColorBinding, TexCoordBinding,
};
pub use self::attribute_source::{
    ColorSource, MultiTexCoord, NormalSource, PositionSource, TexCoordNode, TexCoordSource,
};
pub use self::quad_set::{IndexWidth, QuadSet, QuadSetDesc, QuadSetError, QuadSetField};
pub use self::quad_set_builder::build_mesh_buffers;

mod attribute_resolver;
mod attribute_source;
mod quad_set;
mod quad_set_builder;
mod quad_set_update;
