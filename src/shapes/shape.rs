use alloc::vec::Vec;

use super::seq::{AxisSeq, AxisSpec};
use super::ShapeError;

/// Represents a single dimension of a multi dimensional [Shape]
pub trait Dim: 'static + Copy + Clone + core::fmt::Debug + Send + Sync + Eq + PartialEq {
    /// How this dimension is specified before any value exists.
    const SPEC: AxisSpec;
    fn size(&self) -> usize;
    fn from_size(size: usize) -> Option<Self>;
}

/// Represents a single dimension where all instances
/// have the same size at compile time.
pub trait ConstDim: Default + Dim {}

impl Dim for usize {
    const SPEC: AxisSpec = AxisSpec::Dyn;
    #[inline(always)]
    fn size(&self) -> usize {
        *self
    }
    #[inline(always)]
    fn from_size(size: usize) -> Option<Self> {
        Some(size)
    }
}

/// Represents a [Dim] with size known at compile time
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Const<const M: usize>;
impl<const M: usize> Dim for Const<M> {
    const SPEC: AxisSpec = AxisSpec::Fixed(M);
    #[inline(always)]
    fn size(&self) -> usize {
        M
    }
    #[inline(always)]
    fn from_size(size: usize) -> Option<Self> {
        if size == M {
            Some(Const)
        } else {
            None
        }
    }
}

impl<const M: usize> ConstDim for Const<M> {}

/// A collection of dimensions ([Dim]) describing one axis each, rank 0
/// through 6. Implemented for tuples of [Dim]s; shapes of higher or run
/// time varying rank use [DynShape](super::DynShape) instead.
///
/// Dynamic dimensions default to size 0 when a shape is built with
/// [Default], and are filled in axis order by [Shape::try_from_dyn_sizes].
pub trait Shape: 'static + core::fmt::Debug + Clone + Copy + Send + Sync + Eq + PartialEq {
    /// The number of dimensions the shape has
    const NUM_DIMS: usize;

    /// The number of dimensions whose size is supplied at construction
    /// time rather than fixed up front.
    const NUM_DYN_DIMS: usize;

    /// Is `[usize; Self::NUM_DIMS]`, but that is not usable yet.
    type Concrete: core::fmt::Debug
        + Clone
        + Copy
        + Default
        + Eq
        + PartialEq
        + core::ops::Index<usize, Output = usize>
        + core::ops::IndexMut<usize>
        + Send
        + Sync
        + IntoIterator<Item = usize>
        + Into<Vec<usize>>;

    /// The build time specification of axis `k`. Panics when
    /// `k >= Self::NUM_DIMS`.
    fn axis_spec(k: usize) -> AxisSpec;

    fn concrete(&self) -> Self::Concrete;
    fn from_concrete(concrete: &Self::Concrete) -> Option<Self>;

    /// The per axis specifications as a value level [AxisSeq].
    fn axis_seq() -> AxisSeq {
        (0..Self::NUM_DIMS).map(Self::axis_spec).collect()
    }

    /// Builds the shape from the sizes of its dynamic dimensions, matched
    /// in axis order. Fixed dimensions take their fixed size.
    ///
    /// Fails when `dyn_sizes.len() != Self::NUM_DYN_DIMS`.
    ///
    /// ```rust
    /// # use mdshape::prelude::*;
    /// let s = <(usize, Const<3>, usize)>::try_from_dyn_sizes(&[2, 4]).unwrap();
    /// assert_eq!(s, (2, Const::<3>, 4));
    /// ```
    fn try_from_dyn_sizes(dyn_sizes: &[usize]) -> Result<Self, ShapeError> {
        if dyn_sizes.len() != Self::NUM_DYN_DIMS {
            return Err(ShapeError::ArityMismatch {
                expected: Self::NUM_DYN_DIMS,
                found: dyn_sizes.len(),
            });
        }
        let mut supplied = dyn_sizes.iter().copied();
        let mut concrete: Self::Concrete = Default::default();
        for k in 0..Self::NUM_DIMS {
            concrete[k] = match Self::axis_spec(k) {
                AxisSpec::Fixed(n) => n,
                AxisSpec::Dyn => supplied.next().unwrap(),
            };
        }
        Ok(Self::from_concrete(&concrete).unwrap())
    }

    /// Row major strides for this shape. The last axis always has
    /// stride 1.
    #[inline(always)]
    fn strides(&self) -> Self::Concrete {
        let sizes = self.concrete();
        let mut strides: Self::Concrete = Default::default();
        strides[Self::NUM_DIMS - 1] = 1;
        for i in (0..(Self::NUM_DIMS - 1)).rev() {
            strides[i] = strides[i + 1] * sizes[i + 1];
        }
        strides
    }
}

/// Represents a [Shape] that has all [ConstDim]s
pub trait ConstShape: Default + Shape {}

/// Represents something that has a [Shape].
pub trait HasShape {
    type WithShape<New: Shape>: HasShape<Shape = New>;
    type Shape: Shape;
    fn shape(&self) -> &Self::Shape;
}

impl<S: Shape> HasShape for S {
    type WithShape<New: Shape> = New;
    type Shape = Self;
    fn shape(&self) -> &Self::Shape {
        self
    }
}

/// Compile time known shape with 0 dimensions
pub type Rank0 = ();
/// Compile time known shape with 1 dimensions
pub type Rank1<const M: usize> = (Const<M>,);
/// Compile time known shape with 2 dimensions
pub type Rank2<const M: usize, const N: usize> = (Const<M>, Const<N>);
/// Compile time known shape with 3 dimensions
pub type Rank3<const M: usize, const N: usize, const O: usize> = (Const<M>, Const<N>, Const<O>);
/// Compile time known shape with 4 dimensions
pub type Rank4<const M: usize, const N: usize, const O: usize, const P: usize> =
    (Const<M>, Const<N>, Const<O>, Const<P>);
/// Compile time known shape with 5 dimensions
pub type Rank5<const M: usize, const N: usize, const O: usize, const P: usize, const Q: usize> =
    (Const<M>, Const<N>, Const<O>, Const<P>, Const<Q>);
#[rustfmt::skip]
/// Compile time known shape with 6 dimensions
pub type Rank6<const M: usize, const N: usize, const O: usize, const P: usize, const Q: usize, const R: usize> =
    (Const<M>, Const<N>, Const<O>, Const<P>, Const<Q>, Const<R>);

macro_rules! shape {
    (($($D:tt $Idx:tt),*), rank=$Num:expr) => {
impl<$($D: Dim, )*> Shape for ($($D, )*) {
    const NUM_DIMS: usize = $Num;
    const NUM_DYN_DIMS: usize = 0 $(+ $D::SPEC.is_dynamic() as usize)*;
    type Concrete = [usize; $Num];
    #[inline(always)]
    fn axis_spec(k: usize) -> AxisSpec {
        [$($D::SPEC, )*][k]
    }
    #[inline(always)]
    fn concrete(&self) -> Self::Concrete {
        [$(self.$Idx.size(), )*]
    }
    #[inline(always)]
    fn from_concrete(concrete: &Self::Concrete) -> Option<Self> {
        Some(($(Dim::from_size(concrete[$Idx])?, )*))
    }
}
impl<$($D: ConstDim, )*> ConstShape for ($($D, )*) { }
    };
}

impl Shape for () {
    const NUM_DIMS: usize = 0;
    const NUM_DYN_DIMS: usize = 0;
    type Concrete = [usize; 0];
    #[inline(always)]
    fn axis_spec(k: usize) -> AxisSpec {
        let specs: [AxisSpec; 0] = [];
        specs[k]
    }
    #[inline(always)]
    fn concrete(&self) -> Self::Concrete {
        []
    }
    #[inline(always)]
    fn strides(&self) -> Self::Concrete {
        []
    }
    #[inline(always)]
    fn from_concrete(_: &Self::Concrete) -> Option<Self> {
        Some(())
    }
}
impl ConstShape for () {}

shape!((D1 0), rank=1);
shape!((D1 0, D2 1), rank=2);
shape!((D1 0, D2 1, D3 2), rank=3);
shape!((D1 0, D2 1, D3 2, D4 3), rank=4);
shape!((D1 0, D2 1, D3 2, D4 3, D5 4), rank=5);
shape!((D1 0, D2 1, D3 2, D4 3, D5 4, D6 5), rank=6);
