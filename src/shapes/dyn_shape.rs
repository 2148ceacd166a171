use alloc::boxed::Box;
use alloc::vec::Vec;

use super::edit;
use super::extents::HasExtents;
use super::seq::AxisSpec;
use super::shape::Shape;
use super::ShapeError;

/// A shape whose rank is only known at run time, backed by one flat
/// ordered list of `(spec, size)` pairs.
///
/// This is the encoding for any rank the [Shape](super::Shape) tuples do
/// not cover, and the common output type of the shape editing operations.
/// Equality and hashing look at the resolved sizes only, never at whether
/// an axis was fixed or dynamic, so a `DynShape` works as a cache or
/// dispatch key across encodings:
///
/// ```rust
/// # use mdshape::prelude::*;
/// let listed = DynShape::try_new([1, 2, 3]).unwrap();
/// let bridged = DynShape::from(&(Const::<1>, Const::<2>, 3));
/// assert_eq!(listed, bridged);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DynShape(pub(crate) Box<[(AxisSpec, usize)]>);

impl DynShape {
    /// Builds an all dynamic shape from a full list of axis sizes: a
    /// literal, a `Vec`, a slice, or a range of endpoints.
    ///
    /// Fails with [ShapeError::TooFewAxes] on fewer than 2 sizes and with
    /// [ShapeError::ZeroExtent] when a size is 0; no value is produced in
    /// either case.
    ///
    /// ```rust
    /// # use mdshape::prelude::*;
    /// let s = DynShape::try_new(2..5).unwrap();
    /// assert_eq!(s.to_vec(), [2, 3, 4]);
    /// assert!(DynShape::try_new([0, 5]).is_err());
    /// ```
    pub fn try_new(sizes: impl IntoIterator<Item = usize>) -> Result<Self, ShapeError> {
        let sizes: Vec<usize> = sizes.into_iter().collect();
        if sizes.len() < 2 {
            return Err(ShapeError::TooFewAxes { rank: sizes.len() });
        }
        if let Some(axis) = sizes.iter().position(|&n| n == 0) {
            return Err(ShapeError::ZeroExtent { axis });
        }
        Ok(Self(
            sizes.into_iter().map(|n| (AxisSpec::Dyn, n)).collect(),
        ))
    }

    /// Number of axes.
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.0.len()
    }

    /// Number of axes whose size was supplied at construction time.
    #[must_use]
    pub fn rank_dynamic(&self) -> usize {
        self.0.iter().filter(|(spec, _)| spec.is_dynamic()).count()
    }

    /// The build time specification of axis `k`. Panics out of range.
    #[must_use]
    pub fn static_extent(&self, k: usize) -> AxisSpec {
        self.0[k].0
    }

    /// Resolved size of axis `k`. Panics when `k` is outside
    /// `[0, rank())`.
    #[must_use]
    pub fn extent(&self, k: usize) -> usize {
        self.0[k].1
    }

    /// Alias for [DynShape::extent].
    #[must_use]
    pub fn at(&self, k: usize) -> usize {
        self.extent(k)
    }

    /// Resolved size of axis `k`, or [ShapeError::AxisOutOfRange] instead
    /// of a panic.
    pub fn try_extent(&self, k: usize) -> Result<usize, ShapeError> {
        self.0.get(k).map(|&(_, n)| n).ok_or(ShapeError::AxisOutOfRange {
            axis: k,
            rank: self.rank(),
        })
    }

    /// Iterates the resolved sizes in axis order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&(_, n)| n)
    }

    /// The resolved sizes in axis order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Row major strides. The last axis always has stride 1.
    #[must_use]
    pub fn strides(&self) -> Vec<usize> {
        let mut acc = 1;
        let mut strides: Vec<usize> = self
            .0
            .iter()
            .rev()
            .map(|&(_, n)| {
                let stride = acc;
                acc *= n;
                stride
            })
            .collect();
        strides.reverse();
        strides
    }

    /// Exchanges the axes of two shapes.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Resets to the rank 0 shape.
    pub fn clear(&mut self) {
        self.0 = Box::from([]);
    }

    /// See [squeeze](super::squeeze).
    #[must_use]
    pub fn squeeze(&self) -> DynShape {
        edit::squeeze(self)
    }

    /// See [remove_axis](super::remove_axis).
    #[must_use]
    pub fn remove_axis(&self, axis: usize) -> DynShape {
        edit::remove_axis(self, axis)
    }

    /// See [concat](super::concat).
    #[must_use]
    pub fn concat<E: HasExtents + ?Sized>(&self, other: &E) -> DynShape {
        edit::concat(self, other)
    }
}

impl HasExtents for DynShape {
    fn rank(&self) -> usize {
        DynShape::rank(self)
    }
    fn rank_dynamic(&self) -> usize {
        DynShape::rank_dynamic(self)
    }
    fn static_extent(&self, k: usize) -> AxisSpec {
        DynShape::static_extent(self, k)
    }
    fn extent(&self, k: usize) -> usize {
        DynShape::extent(self, k)
    }
}

/// Axis wise size comparison; fixed and dynamic axes compare alike.
impl PartialEq for DynShape {
    fn eq(&self, other: &Self) -> bool {
        self.same_extents(other)
    }
}
impl Eq for DynShape {}

impl<S: Shape> PartialEq<S> for DynShape {
    fn eq(&self, other: &S) -> bool {
        self.same_extents(other)
    }
}

impl core::hash::Hash for DynShape {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.rank());
        for &(_, n) in self.0.iter() {
            state.write_usize(n);
        }
    }
}

impl core::ops::Index<usize> for DynShape {
    type Output = usize;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index].1
    }
}

/// Carries each axis's fixed or dynamic specification over, along with
/// its resolved size. Never fails: the value already existed.
impl<S: Shape> From<&S> for DynShape {
    fn from(shape: &S) -> Self {
        let sizes = shape.concrete();
        Self(
            (0..S::NUM_DIMS)
                .map(|k| (S::axis_spec(k), sizes[k]))
                .collect(),
        )
    }
}

impl TryFrom<&[usize]> for DynShape {
    type Error = ShapeError;
    fn try_from(sizes: &[usize]) -> Result<Self, Self::Error> {
        Self::try_new(sizes.iter().copied())
    }
}

impl TryFrom<Vec<usize>> for DynShape {
    type Error = ShapeError;
    fn try_from(sizes: Vec<usize>) -> Result<Self, Self::Error> {
        Self::try_new(sizes)
    }
}

impl<const N: usize> TryFrom<[usize; N]> for DynShape {
    type Error = ShapeError;
    fn try_from(sizes: [usize; N]) -> Result<Self, Self::Error> {
        Self::try_new(sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Const;
    use std::collections::HashSet;

    #[test]
    fn test_try_new_validates() {
        assert_eq!(
            DynShape::try_new([]),
            Err(ShapeError::TooFewAxes { rank: 0 })
        );
        assert_eq!(
            DynShape::try_new([5]),
            Err(ShapeError::TooFewAxes { rank: 1 })
        );
        assert_eq!(
            DynShape::try_new([0, 5]),
            Err(ShapeError::ZeroExtent { axis: 0 })
        );
        assert_eq!(
            DynShape::try_new([5, 3, 0]),
            Err(ShapeError::ZeroExtent { axis: 2 })
        );

        let s = DynShape::try_new([2, 3, 4]).unwrap();
        assert_eq!(s.rank(), 3);
        assert_eq!(s.rank_dynamic(), 3);
        assert!(s.is_valid());
    }

    #[test]
    fn test_extent_access() {
        let s = DynShape::try_new([2, 3, 4]).unwrap();
        assert_eq!(s.extent(0), 2);
        assert_eq!(s.at(2), 4);
        assert_eq!(s[1], 3);
        assert_eq!(s.try_extent(1), Ok(3));
        assert_eq!(
            s.try_extent(3),
            Err(ShapeError::AxisOutOfRange { axis: 3, rank: 3 })
        );
    }

    #[test]
    #[should_panic]
    fn test_extent_out_of_range() {
        let s = DynShape::try_new([2, 3]).unwrap();
        s.extent(2);
    }

    #[test]
    fn test_strides() {
        let s = DynShape::try_new([2, 3, 4]).unwrap();
        assert_eq!(s.strides(), [12, 4, 1]);
        assert_eq!(DynShape::default().strides(), []);
    }

    #[test]
    fn test_equality_ignores_specs() {
        let listed = DynShape::try_new([1, 2, 3]).unwrap();
        let bridged = DynShape::from(&(Const::<1>, Const::<2>, 3));
        assert_eq!(listed, bridged);
        assert_eq!(bridged.rank_dynamic(), 1);
        assert_eq!(bridged.static_extent(0), AxisSpec::Fixed(1));

        assert_eq!(listed, (1, 2, 3));
        assert_eq!(listed, (Const::<1>, Const::<2>, Const::<3>));
        assert_ne!(listed, DynShape::try_new([1, 2, 4]).unwrap());
        assert_ne!(listed, DynShape::try_new([1, 2]).unwrap());
    }

    #[test]
    fn test_usable_as_cache_key() {
        let mut seen = HashSet::new();
        assert!(seen.insert(DynShape::try_new([2, 3]).unwrap()));
        assert!(seen.insert(DynShape::try_new([3, 2]).unwrap()));
        // same sizes under a different encoding hash alike
        assert!(!seen.insert(DynShape::from(&(Const::<2>, Const::<3>))));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_swap_and_clear() {
        let mut a = DynShape::try_new([2, 3]).unwrap();
        let mut b = DynShape::try_new([4, 5, 6]).unwrap();
        a.swap(&mut b);
        assert_eq!(a.to_vec(), [4, 5, 6]);
        assert_eq!(b.to_vec(), [2, 3]);

        a.clear();
        assert_eq!(a.rank(), 0);
        assert_eq!(a.size(), 1);
    }

    #[test]
    fn test_from_shape_round_trip() {
        let s = (2, Const::<3>, 4);
        let d = DynShape::from(&s);
        assert!(d.same_extents(&s));
        assert_eq!(d.rank_dynamic(), 2);
    }
}
