use alloc::boxed::Box;
use alloc::vec::Vec;

use super::dyn_shape::DynShape;
use super::extents::HasExtents;
use super::seq::AxisSpec;
use super::shape::{Dim, Shape};

/// Drops size 1 axes, never going below rank 2.
///
/// The exact rules, in order:
/// 1. A shape holding at most 2 elements comes back unchanged.
/// 2. When axis 0 is 1, axis 1 is not, and exactly one axis past axis 0
///    is 1, the result is `[1, extent(1)]`.
/// 3. Otherwise every size 1 axis is dropped and the remainder padded
///    with trailing 1s up to rank 2.
///
/// The output axes are always dynamic; squeezing decides the axis list
/// from the resolved sizes, so build time fixedness does not carry over.
///
/// ```rust
/// # use mdshape::prelude::*;
/// assert_eq!(squeeze(&(1, 2, 3)).to_vec(), [2, 3]);
/// assert_eq!(squeeze(&(1, 3, 1)).to_vec(), [1, 3]);
/// assert_eq!(squeeze(&(2, 1)).to_vec(), [2, 1]);
/// ```
pub fn squeeze<E: HasExtents + ?Sized>(extents: &E) -> DynShape {
    let rank = extents.rank();
    if extents.size() <= 2 {
        return DynShape(
            (0..rank)
                .map(|k| (AxisSpec::Dyn, extents.extent(k)))
                .collect(),
        );
    }
    if rank >= 2 && extents.extent(0) == 1 && extents.extent(1) != 1 {
        let unit_axes_past_first = (1..rank).filter(|&k| extents.extent(k) == 1).count();
        if unit_axes_past_first == 1 {
            return DynShape(Box::from([
                (AxisSpec::Dyn, 1),
                (AxisSpec::Dyn, extents.extent(1)),
            ]));
        }
    }
    let mut kept: Vec<(AxisSpec, usize)> = (0..rank)
        .map(|k| extents.extent(k))
        .filter(|&d| d != 1)
        .map(|d| (AxisSpec::Dyn, d))
        .collect();
    while kept.len() < 2 {
        kept.push((AxisSpec::Dyn, 1));
    }
    DynShape(kept.into_boxed_slice())
}

/// The shape holding `lhs`'s axes followed by `rhs`'s axes. Each axis
/// keeps its build time fixed or dynamic specification. A rank 0 side
/// leaves the other side untouched.
pub fn concat<A, B>(lhs: &A, rhs: &B) -> DynShape
where
    A: HasExtents + ?Sized,
    B: HasExtents + ?Sized,
{
    DynShape(
        (0..lhs.rank())
            .map(|k| (lhs.static_extent(k), lhs.extent(k)))
            .chain((0..rhs.rank()).map(|k| (rhs.static_extent(k), rhs.extent(k))))
            .collect(),
    )
}

/// The shape with the axis at `axis` deleted and all later axes shifted
/// down. Panics when `axis >= rank()`. The output axes are always
/// dynamic.
pub fn remove_axis<E: HasExtents + ?Sized>(extents: &E, axis: usize) -> DynShape {
    let rank = extents.rank();
    assert!(axis < rank, "axis {axis} is out of range for rank {rank}");
    DynShape(
        (0..rank)
            .filter(|&k| k != axis)
            .map(|k| (AxisSpec::Dyn, extents.extent(k)))
            .collect(),
    )
}

/// Concatenate a pair of tuple shapes into one tuple shape, keeping every
/// dimension's compile time encoding.
///
/// ```rust
/// # use mdshape::prelude::*;
/// let a: (Const<2>, Const<3>) = (Const, Const);
/// let b = (4usize,);
/// let c: (Const<2>, Const<3>, usize) = (a, b).concat_shape();
/// assert_eq!(c, (Const, Const, 4));
/// ```
pub trait ConcatShape: Sized {
    type Output: Shape;

    /// Concatenates the axes of the pair's left shape with the right's.
    fn concat_shape(self) -> Self::Output;
}

macro_rules! impl_concat_shape {
    ([$($A:tt),*], [$($B:tt),*]) => {
        impl<$($A: Dim, )* $($B: Dim, )*> ConcatShape for (($($A, )*), ($($B, )*)) {
            type Output = ($($A, )* $($B, )*);

            fn concat_shape(self) -> Self::Output {
                let (lhs, rhs) = self;
                let mut out_dims: <Self::Output as Shape>::Concrete = Default::default();
                for (i, dim) in lhs.concrete().into_iter().chain(rhs.concrete()).enumerate() {
                    out_dims[i] = dim;
                }
                Self::Output::from_concrete(&out_dims).unwrap()
            }
        }
    };
}

impl_concat_shape!([], []);
impl_concat_shape!([], [B1]);
impl_concat_shape!([], [B1, B2]);
impl_concat_shape!([], [B1, B2, B3]);
impl_concat_shape!([], [B1, B2, B3, B4]);
impl_concat_shape!([], [B1, B2, B3, B4, B5]);
impl_concat_shape!([], [B1, B2, B3, B4, B5, B6]);

impl_concat_shape!([A1], []);
impl_concat_shape!([A1], [B1]);
impl_concat_shape!([A1], [B1, B2]);
impl_concat_shape!([A1], [B1, B2, B3]);
impl_concat_shape!([A1], [B1, B2, B3, B4]);
impl_concat_shape!([A1], [B1, B2, B3, B4, B5]);

impl_concat_shape!([A1, A2], []);
impl_concat_shape!([A1, A2], [B1]);
impl_concat_shape!([A1, A2], [B1, B2]);
impl_concat_shape!([A1, A2], [B1, B2, B3]);
impl_concat_shape!([A1, A2], [B1, B2, B3, B4]);

impl_concat_shape!([A1, A2, A3], []);
impl_concat_shape!([A1, A2, A3], [B1]);
impl_concat_shape!([A1, A2, A3], [B1, B2]);
impl_concat_shape!([A1, A2, A3], [B1, B2, B3]);

impl_concat_shape!([A1, A2, A3, A4], []);
impl_concat_shape!([A1, A2, A3, A4], [B1]);
impl_concat_shape!([A1, A2, A3, A4], [B1, B2]);

impl_concat_shape!([A1, A2, A3, A4, A5], []);
impl_concat_shape!([A1, A2, A3, A4, A5], [B1]);

impl_concat_shape!([A1, A2, A3, A4, A5, A6], []);
