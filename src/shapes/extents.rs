use super::reductions::{all_of, all_of_in, any_of_in, none_of};
use super::seq::AxisSpec;
use super::shape::Shape;

/// Value level queries shared by every shape encoding: tuple [Shape]s and
/// [DynShape](super::DynShape).
///
/// `extent(k)` and everything built on it panic when `k` is outside
/// `[0, rank())`, the same way slice indexing does. [DynShape] offers
/// [try_extent](super::DynShape::try_extent) as the recoverable form.
///
/// [DynShape]: super::DynShape
pub trait HasExtents {
    /// Number of axes.
    fn rank(&self) -> usize;

    /// Number of axes whose size was supplied at construction time.
    fn rank_dynamic(&self) -> usize;

    /// The build time specification of axis `k`.
    fn static_extent(&self, k: usize) -> AxisSpec;

    /// Resolved size of axis `k`.
    fn extent(&self, k: usize) -> usize;

    /// Alias for [HasExtents::extent].
    fn at(&self, k: usize) -> usize {
        self.extent(k)
    }

    /// Product of the extents in `[k, rank())`. The empty suffix
    /// multiplies out to 1, so `size_from(rank()) == 1`.
    fn size_from(&self, k: usize) -> usize {
        assert!(
            k <= self.rank(),
            "suffix start {k} is out of range for rank {}",
            self.rank()
        );
        (k..self.rank()).map(|i| self.extent(i)).product()
    }

    /// The number of elements in this shape; the product of all extents.
    /// A rank 0 shape holds one element.
    fn size(&self) -> usize {
        self.size_from(0)
    }

    /// Alias for [HasExtents::size].
    fn product(&self) -> usize {
        self.size()
    }

    /// Whether the shape holds no elements, i.e. some extent is 0.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether `rank() > 1` and no extent is 0. Advisory: nothing outside
    /// [DynShape::try_new](super::DynShape::try_new) enforces it.
    fn is_valid(&self) -> bool {
        self.rank() > 1 && none_of(self, |d| d == 0)
    }

    /// Whether `index` names an element of this shape: one coordinate per
    /// axis, each strictly below that axis's extent.
    fn in_bounds(&self, index: &[usize]) -> bool {
        index.len() == self.rank() && index.iter().enumerate().all(|(k, &i)| i < self.extent(k))
    }

    /// Axis wise equality across any two encodings. Whether an axis was
    /// fixed or dynamic never matters, only the resolved extents.
    fn same_extents<E: HasExtents + ?Sized>(&self, other: &E) -> bool {
        self.rank() == other.rank() && (0..self.rank()).all(|k| self.extent(k) == other.extent(k))
    }

    /// Positive rank and every extent is 1.
    fn is_scalar(&self) -> bool {
        self.rank() != 0 && all_of(self, |d| d == 1)
    }

    /// One axis holding more than one element, everything else size 1.
    /// For ranks above 1 the deciding window is the first two axes: one of
    /// them must be above 1 and one of them must be exactly 1.
    fn is_vector(&self) -> bool {
        match self.rank() {
            0 => false,
            1 => self.extent(0) > 1,
            rank => {
                any_of_in(self, 0..2, |d| d > 1)
                    && any_of_in(self, 0..2, |d| d == 1)
                    && all_of_in(self, 2..rank, |d| d == 1)
            }
        }
    }

    /// Both leading axes above 1, every later axis size 1.
    fn is_matrix(&self) -> bool {
        let rank = self.rank();
        rank >= 2 && all_of_in(self, 0..2, |d| d > 1) && all_of_in(self, 2..rank, |d| d == 1)
    }

    /// Rank at least 3 with some axis past the second above 1.
    fn is_tensor(&self) -> bool {
        let rank = self.rank();
        rank >= 3 && any_of_in(self, 2..rank, |d| d > 1)
    }
}

impl<S: Shape> HasExtents for S {
    #[inline(always)]
    fn rank(&self) -> usize {
        S::NUM_DIMS
    }
    #[inline(always)]
    fn rank_dynamic(&self) -> usize {
        S::NUM_DYN_DIMS
    }
    #[inline(always)]
    fn static_extent(&self, k: usize) -> AxisSpec {
        S::axis_spec(k)
    }
    #[inline(always)]
    fn extent(&self, k: usize) -> usize {
        self.concrete()[k]
    }
    #[inline(always)]
    fn size(&self) -> usize {
        self.concrete().into_iter().product()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Const, DynShape, Rank0, Rank1, Rank3};
    use super::*;

    #[test]
    fn test_sizes() {
        let s: Rank3<2, 3, 4> = Default::default();
        assert_eq!(s.rank(), 3);
        assert_eq!(s.size(), 24);
        assert_eq!(s.product(), 24);
        assert_eq!(s.size_from(0), 24);
        assert_eq!(s.size_from(1), 12);
        assert_eq!(s.size_from(2), 4);
        assert_eq!(s.size_from(3), 1);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_rank0_size() {
        let s: Rank0 = ();
        assert_eq!(s.size(), 1);
        assert_eq!(s.size_from(0), 1);
        assert!(!s.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_size_from_out_of_range() {
        let s: Rank3<2, 3, 4> = Default::default();
        s.size_from(4);
    }

    #[test]
    fn test_extent_and_at() {
        let s = (2, Const::<3>, 4);
        assert_eq!(s.extent(0), 2);
        assert_eq!(s.at(1), 3);
        assert_eq!(s.extent(2), 4);
    }

    #[test]
    fn test_is_valid() {
        let good = DynShape::try_new([2, 3]).unwrap();
        assert!(good.is_valid());

        let s = (5usize,);
        assert!(!s.is_valid());

        let zero = (0, Const::<5>);
        assert!(!zero.is_valid());
        assert!(zero.is_empty());
    }

    #[test]
    fn test_in_bounds() {
        let s = (2, Const::<3>);
        assert!(s.in_bounds(&[0, 0]));
        assert!(s.in_bounds(&[1, 2]));
        assert!(!s.in_bounds(&[2, 0]));
        assert!(!s.in_bounds(&[0, 3]));
        assert!(!s.in_bounds(&[0]));
        assert!(!s.in_bounds(&[0, 0, 0]));
    }

    #[test]
    fn test_same_extents() {
        let a: Rank3<1, 2, 3> = Default::default();
        let b = (1, 2, 3);
        let c = DynShape::try_new([1, 2, 3]).unwrap();
        assert!(a.same_extents(&b));
        assert!(a.same_extents(&c));
        assert!(b.same_extents(&c));
        assert!(!a.same_extents(&(1, 2)));
        assert!(!a.same_extents(&(1, 2, 4)));
    }

    #[test]
    fn test_classification() {
        assert!((3, 4).is_matrix());
        assert!(!(3, 4).is_vector());
        assert!(!(3, 4).is_scalar());
        assert!(!(3, 4).is_tensor());

        assert!((1, 5).is_vector());
        assert!((5, 1).is_vector());
        assert!(!(1, 5).is_matrix());

        assert!((3, 4, 2).is_tensor());
        assert!(!(3, 4, 2).is_matrix());

        assert!((1, 1, 1).is_scalar());
        assert!(!(1, 1, 1).is_vector());

        // both leading axes above 1 defeats the unit axis requirement
        assert!(!(3, 4, 1).is_vector());
        assert!((3, 4, 1).is_matrix());

        assert!((1, 5, 1, 1).is_vector());
        assert!(!(1, 5, 2).is_vector());

        let v: Rank1<7> = Default::default();
        assert!(v.is_vector());
        let one: Rank1<1> = Default::default();
        assert!(one.is_scalar());
        assert!(!one.is_vector());

        let none: Rank0 = ();
        assert!(!none.is_scalar());
        assert!(!none.is_vector());
        assert!(!none.is_matrix());
        assert!(!none.is_tensor());
    }
}
