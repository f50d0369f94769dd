use na::RealField;

use crate::math::Real;
use crate::mesh::{DirtyFlags, MeshBuffers};
use crate::shape::{
    AttributeBindings, BindingMode, QuadSet, QuadSetDesc, QuadSetError, TexCoordBinding,
};
use crate::transformation::{
    compute_normals, generate_tex_coords, pad_indices, pad_positions, push_quad_triangles,
    TexCoordGenMode, GENERATED_TEX_COORD_WIDTH, QUAD_LEN,
};
use crate::utils;

/// The crease angle of the generated normals: smooth if bound per vertex, hard otherwise.
pub(crate) fn default_crease_angle(normal_per_vertex: bool) -> Real {
    if normal_per_vertex {
        Real::pi()
    } else {
        0.0
    }
}

/// Builds all the render buffers of a quad set.
///
/// Each quad of the padded index list is split into two triangles. Per-face
/// normals and colors are repeated once for each of the four indices of their quad.
/// Missing normals and texture coordinates are generated.
pub fn build_mesh_buffers(desc: &QuadSetDesc, bindings: &AttributeBindings) -> MeshBuffers {
    let positions = pad_positions(&bindings.coord.points);
    let quads = pad_indices(&desc.index, bindings.coord.len());

    if let Err(err) = desc.index_width.check(positions.len()) {
        log::warn!("Building a mesh that cannot be rendered correctly: {}", err);
    }

    let per_face_normals = match bindings.normal {
        Some((source, BindingMode::PerFace)) => Some(source),
        _ => None,
    };
    let per_face_colors = match bindings.color {
        Some((source, binding)) if binding.mode == BindingMode::PerFace => Some(source),
        _ => None,
    };

    let num_quads = quads.len() / QUAD_LEN;
    let mut indices = Vec::with_capacity(num_quads * 6);
    let mut face_normals = Vec::new();
    let mut face_colors = Vec::new();
    let mut num_missing_face_values = 0;

    for (quad_id, q) in quads.chunks_exact(QUAD_LEN).enumerate() {
        push_quad_triangles([q[0], q[1], q[2], q[3]], &mut indices);

        for _ in 0..QUAD_LEN {
            if let Some(normals) = per_face_normals {
                if !normals.extend_flat_or_default(quad_id, &mut face_normals) {
                    num_missing_face_values += 1;
                }
            }
            if let Some(colors) = per_face_colors {
                if !colors.extend_flat_or_default(quad_id, &mut face_colors) {
                    num_missing_face_values += 1;
                }
            }
        }
    }

    if num_missing_face_values != 0 {
        log::warn!(
            "Per-face sources are shorter than the {} quads: {} values replaced by defaults.",
            num_quads,
            num_missing_face_values
        );
    }

    let flat_positions = utils::flatten(&positions);

    let normals = match bindings.normal {
        Some((source, BindingMode::PerVertex)) => source.to_flat(),
        Some((_, BindingMode::PerFace)) => face_normals,
        None => compute_normals(
            &positions,
            &quads,
            default_crease_angle(desc.normal_per_vertex),
            desc.ccw,
        ),
    };

    let (tex_coords, num_tex_components) = match bindings.tex_coord {
        TexCoordBinding::Explicit {
            source,
            num_components,
        } => (source.to_flat(), num_components),
        TexCoordBinding::Generated { mode } => (
            generate_tex_coords(
                TexCoordGenMode::from_mode_str(mode),
                &flat_positions,
                &normals,
            ),
            GENERATED_TEX_COORD_WIDTH,
        ),
    };

    let (colors, num_color_components) = match bindings.color {
        Some((source, binding)) if binding.mode == BindingMode::PerVertex => {
            (source.to_flat(), binding.num_components)
        }
        Some((_, binding)) => (face_colors, binding.num_components),
        None => (Vec::new(), 3),
    };

    MeshBuffers {
        indices,
        positions: flat_positions,
        normals,
        colors,
        num_color_components,
        tex_coords,
        num_tex_components,
    }
}

impl QuadSetDesc {
    /// Resolves the attribute bindings of this description and builds its render buffers.
    pub fn build_mesh_buffers(&self) -> Result<MeshBuffers, QuadSetError> {
        let bindings = AttributeBindings::resolve(self)?;
        Ok(build_mesh_buffers(self, &bindings))
    }
}

impl QuadSet {
    /// Rebuilds every buffer of the render mesh from the description.
    ///
    /// All the consumers are told that every channel and the bounding volume changed.
    pub fn rebuild(&mut self) -> Result<(), QuadSetError> {
        let buffers = self.desc.build_mesh_buffers()?;
        self.mesh.rebuild(buffers);
        self.invalidator.invalidate_volume();
        self.invalidator.signal(DirtyFlags::all());

        log::debug!(
            "Rebuilt quad set mesh: {} faces, {} coordinates.",
            self.mesh.num_faces(),
            self.mesh.num_coords()
        );

        Ok(())
    }
}
