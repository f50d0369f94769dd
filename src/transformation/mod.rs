//! Triangulation of quad sets and generation of missing attributes.

pub use self::normals::{compute_normals, hard_triangle_normals, smooth_vertex_normals};
pub use self::quads_to_triangles::{
    pad_indices, pad_positions, padded_len, push_quad_triangles, quads_to_triangles, QUAD_LEN,
};
pub use self::tex_coords::{generate_tex_coords, TexCoordGenMode, GENERATED_TEX_COORD_WIDTH};

mod normals;
mod quads_to_triangles;
mod tex_coords;
