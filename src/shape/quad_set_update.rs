use crate::math::{Real, DIM};
use crate::mesh::AttributeChannel;
use crate::shape::quad_set_builder::default_crease_angle;
use crate::shape::{AttributeBindings, BindingMode, QuadSet, QuadSetError, QuadSetField, TexCoordBinding};
use crate::transformation::{
    compute_normals, generate_tex_coords, pad_indices, pad_positions, TexCoordGenMode,
    GENERATED_TEX_COORD_WIDTH,
};
use crate::utils;

/// Emits one value per consecutive triple of `indices`, including an incomplete last triple.
fn per_triangle_values(
    indices: &[u32],
    mut push_value: impl FnMut(usize, &mut Vec<Real>) -> bool,
    out: &mut Vec<Real>,
) -> usize {
    let mut num_missing = 0;
    for face_id in 0..indices.len().div_ceil(3) {
        if !push_value(face_id, out) {
            num_missing += 1;
        }
    }
    num_missing
}

impl QuadSet {
    /// Patches the buffer of a single attribute channel after its source changed.
    ///
    /// The index buffer and the face and coordinate counters are left untouched: changes
    /// to the index list or to the bindings require a [`QuadSet::rebuild`]. Only the
    /// signal of the patched channel is sent to the consumers, along with a bounding
    /// volume invalidation for position changes.
    ///
    /// Per-face values are taken one per consecutive triple of the raw index list.
    pub fn field_changed(&mut self, field: QuadSetField) -> Result<(), QuadSetError> {
        let bindings = AttributeBindings::resolve(&self.desc)?;

        let channel = match field {
            QuadSetField::Coord => {
                self.check_index_width(bindings.coord.len())?;
                let positions = utils::flatten(&pad_positions(&bindings.coord.points));
                self.mesh.patch(AttributeChannel::Position, positions, DIM);
                self.invalidator.invalidate_volume();
                AttributeChannel::Position
            }
            QuadSetField::Color => {
                let (colors, num_components) = match bindings.color {
                    Some((source, binding)) if binding.mode == BindingMode::PerVertex => {
                        (source.to_flat(), binding.num_components)
                    }
                    Some((source, binding)) => {
                        let mut colors = Vec::new();
                        let num_missing = per_triangle_values(
                            &self.desc.index,
                            |i, out| source.extend_flat_or_default(i, out),
                            &mut colors,
                        );
                        warn_missing_face_values("color", num_missing);
                        (colors, binding.num_components)
                    }
                    None => (Vec::new(), 3),
                };
                self.mesh.patch(AttributeChannel::Color, colors, num_components);
                AttributeChannel::Color
            }
            QuadSetField::Normal => {
                let normals = match bindings.normal {
                    Some((source, BindingMode::PerVertex)) => source.to_flat(),
                    Some((source, BindingMode::PerFace)) => {
                        let mut normals = Vec::new();
                        let num_missing = per_triangle_values(
                            &self.desc.index,
                            |i, out| source.extend_flat_or_default(i, out),
                            &mut normals,
                        );
                        warn_missing_face_values("normal", num_missing);
                        normals
                    }
                    None => compute_normals(
                        &pad_positions(&bindings.coord.points),
                        &pad_indices(&self.desc.index, bindings.coord.len()),
                        default_crease_angle(self.desc.normal_per_vertex),
                        self.desc.ccw,
                    ),
                };
                self.mesh.patch(AttributeChannel::Normal, normals, DIM);
                AttributeChannel::Normal
            }
            QuadSetField::TexCoord => {
                let (tex_coords, num_components) = match bindings.tex_coord {
                    TexCoordBinding::Explicit {
                        source,
                        num_components,
                    } => (source.to_flat(), num_components),
                    TexCoordBinding::Generated { mode } => (
                        generate_tex_coords(
                            TexCoordGenMode::from_mode_str(mode),
                            self.mesh.positions().data(),
                            self.mesh.normals().data(),
                        ),
                        GENERATED_TEX_COORD_WIDTH,
                    ),
                };
                self.mesh
                    .patch(AttributeChannel::TexCoord, tex_coords, num_components);
                AttributeChannel::TexCoord
            }
        };

        self.invalidator.signal(channel.into());
        Ok(())
    }
}

fn warn_missing_face_values(channel: &str, num_missing: usize) {
    if num_missing != 0 {
        log::warn!(
            "The per-face {} source is too short: {} values replaced by defaults.",
            channel,
            num_missing
        );
    }
}
