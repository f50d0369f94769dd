use crate::math::{Point, Real, Vector};

/// Trait for attribute tuples that can be written into a flat float buffer.
pub trait Flatten {
    /// Number of scalar components written by [`Flatten::extend_flat`].
    const NUM_COMPONENTS: usize;

    /// Appends the components of `self` to `out`.
    fn extend_flat(&self, out: &mut Vec<Real>);
}

macro_rules! array_flatten_impl(
    ($dimension: expr) => (
        impl Flatten for [Real; $dimension] {
            const NUM_COMPONENTS: usize = $dimension;

            #[inline(always)]
            fn extend_flat(&self, out: &mut Vec<Real>) {
                out.extend_from_slice(self);
            }
        }
    )
);

array_flatten_impl!(2);
array_flatten_impl!(3);
array_flatten_impl!(4);

impl Flatten for Point<Real> {
    const NUM_COMPONENTS: usize = 3;

    #[inline(always)]
    fn extend_flat(&self, out: &mut Vec<Real>) {
        out.extend_from_slice(self.coords.as_slice());
    }
}

impl Flatten for Vector<Real> {
    const NUM_COMPONENTS: usize = 3;

    #[inline(always)]
    fn extend_flat(&self, out: &mut Vec<Real>) {
        out.extend_from_slice(self.as_slice());
    }
}

/// Flattens a slice of tuples into a new `[a0, b0, c0, a1, b1, c1, ...]` buffer.
pub fn flatten<T: Flatten>(items: &[T]) -> Vec<Real> {
    let mut out = Vec::with_capacity(items.len() * T::NUM_COMPONENTS);
    items.iter().for_each(|item| item.extend_flat(&mut out));
    out
}
