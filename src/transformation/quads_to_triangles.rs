//! Splitting of indexed quads into triangles.

use std::borrow::Cow;

/// The number of indices of a quad.
pub const QUAD_LEN: usize = 4;

/// The length `len` rounds up to so it is a multiple of [`QUAD_LEN`].
#[inline]
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(QUAD_LEN) * QUAD_LEN
}

/// Pads a raw quad index list to a multiple of four indices.
///
/// The appended indices all reference the last position, i.e., `num_positions - 1`
/// (or `0` if there is no position). Existing indices are never modified or removed,
/// and an already aligned list is borrowed as-is.
pub fn pad_indices(indices: &[u32], num_positions: usize) -> Cow<'_, [u32]> {
    if indices.len() % QUAD_LEN == 0 {
        return Cow::Borrowed(indices);
    }

    let filler = num_positions.saturating_sub(1) as u32;
    let mut padded = Vec::with_capacity(padded_len(indices.len()));
    padded.extend_from_slice(indices);
    padded.resize(padded_len(indices.len()), filler);

    log::debug!(
        "Padded quad index list from {} to {} indices.",
        indices.len(),
        padded.len()
    );

    Cow::Owned(padded)
}

/// Pads a list of attribute tuples to a multiple of four elements.
///
/// Copies of the last element are appended. An empty list stays empty.
pub fn pad_positions<T: Clone>(elements: &[T]) -> Cow<'_, [T]> {
    match elements.last() {
        Some(last) if elements.len() % QUAD_LEN != 0 => {
            let mut padded = elements.to_vec();
            padded.resize(padded_len(elements.len()), last.clone());
            Cow::Owned(padded)
        }
        _ => Cow::Borrowed(elements),
    }
}

/// Pushes the two triangles `(q0, q1, q2)` and `(q0, q2, q3)` of the quad `q`.
#[inline]
pub fn push_quad_triangles(q: [u32; 4], out: &mut Vec<u32>) {
    out.extend_from_slice(&[q[0], q[1], q[2], q[0], q[2], q[3]]);
}

/// Splits every complete group of four indices into two triangles.
///
/// Trailing indices that do not form a complete quad are ignored: pad the list
/// with [`pad_indices`] first.
pub fn quads_to_triangles(indices: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(indices.len() / QUAD_LEN * 6);

    for q in indices.chunks_exact(QUAD_LEN) {
        push_quad_triangles([q[0], q[1], q[2], q[3]], &mut out);
    }

    out
}
