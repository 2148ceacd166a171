use alloc::boxed::Box;

use super::{DynShape, ShapeError};

/// Describes one axis of a shape before any concrete value exists.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AxisSpec {
    /// The size is supplied when a shape value is built.
    Dyn,
    /// The size is fixed up front.
    Fixed(usize),
}

impl AxisSpec {
    /// Whether the axis takes its size at construction time.
    #[inline(always)]
    pub const fn is_dynamic(self) -> bool {
        matches!(self, AxisSpec::Dyn)
    }

    /// Whether the axis size is fixed up front.
    #[inline(always)]
    pub const fn is_fixed(self) -> bool {
        !self.is_dynamic()
    }

    /// The fixed size, if there is one.
    #[inline(always)]
    pub const fn fixed(self) -> Option<usize> {
        match self {
            AxisSpec::Fixed(n) => Some(n),
            AxisSpec::Dyn => None,
        }
    }
}

/// An ordered list of [AxisSpec]s. Its length is the rank of the shapes it
/// describes.
///
/// Use [AxisSeq::resolve] to turn a sequence into a concrete [DynShape] by
/// filling the dynamic slots:
/// ```rust
/// # use mdshape::prelude::*;
/// let seq = AxisSeq::from_specs([AxisSpec::Fixed(2), AxisSpec::Dyn]);
/// let shape = seq.resolve(&[3]).unwrap();
/// assert_eq!(shape, DynShape::try_new([2, 3]).unwrap());
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AxisSeq(pub(crate) Box<[AxisSpec]>);

impl AxisSeq {
    /// Builds a sequence from explicit per axis specifications.
    pub fn from_specs(specs: impl IntoIterator<Item = AxisSpec>) -> Self {
        Self(specs.into_iter().collect())
    }

    /// Builds an all dynamic sequence of the given rank.
    ///
    /// The sequence is assembled by splitting `[0, rank)` in half and
    /// concatenating the halves, so the recursion depth stays logarithmic
    /// in `rank`.
    pub fn dynamic(rank: usize) -> Self {
        fn build(lo: usize, hi: usize) -> AxisSeq {
            match hi - lo {
                0 => AxisSeq::default(),
                1 => AxisSeq(Box::from([AxisSpec::Dyn])),
                n => {
                    let mid = lo + n / 2;
                    build(lo, mid).concat(&build(mid, hi))
                }
            }
        }
        build(0, rank)
    }

    /// Builds an all fixed sequence. Fails when the number of sizes does
    /// not match the requested rank.
    pub fn try_fixed(rank: usize, sizes: &[usize]) -> Result<Self, ShapeError> {
        if sizes.len() != rank {
            return Err(ShapeError::ArityMismatch {
                expected: rank,
                found: sizes.len(),
            });
        }
        Ok(Self(sizes.iter().map(|&n| AxisSpec::Fixed(n)).collect()))
    }

    /// The sequence holding `self`'s axes followed by `other`'s.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self(self.0.iter().chain(other.0.iter()).copied().collect())
    }

    /// Number of axes described.
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.0.len()
    }

    /// Number of axes whose size is supplied at construction time.
    #[must_use]
    pub fn rank_dynamic(&self) -> usize {
        self.0.iter().filter(|s| s.is_dynamic()).count()
    }

    /// The specification of axis `k`, or `None` past the end.
    #[must_use]
    pub fn get(&self, k: usize) -> Option<AxisSpec> {
        self.0.get(k).copied()
    }

    /// The sequence with the specification at `index` deleted and every
    /// later axis shifted down one position.
    ///
    /// # Panics
    /// When `index` is out of range.
    #[must_use]
    pub fn remove(&self, index: usize) -> Self {
        let rank = self.rank();
        assert!(index < rank, "axis {index} is out of range for rank {rank}");
        self.0
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, &spec)| spec)
            .collect()
    }

    /// Iterates the per axis specifications in axis order.
    pub fn iter(&self) -> impl Iterator<Item = &AxisSpec> {
        self.0.iter()
    }

    /// Produces a [DynShape] by baking in the fixed sizes and filling the
    /// dynamic slots with `dyn_sizes`, matched in axis order.
    ///
    /// Fails when `dyn_sizes.len() != self.rank_dynamic()`. The result is
    /// not zero validated; check [HasExtents::is_valid] if the caller
    /// needs that.
    ///
    /// [HasExtents::is_valid]: super::HasExtents::is_valid
    pub fn resolve(&self, dyn_sizes: &[usize]) -> Result<DynShape, ShapeError> {
        if dyn_sizes.len() != self.rank_dynamic() {
            return Err(ShapeError::ArityMismatch {
                expected: self.rank_dynamic(),
                found: dyn_sizes.len(),
            });
        }
        let mut supplied = dyn_sizes.iter().copied();
        Ok(DynShape(
            self.0
                .iter()
                .map(|&spec| match spec {
                    AxisSpec::Fixed(n) => (spec, n),
                    AxisSpec::Dyn => (spec, supplied.next().unwrap()),
                })
                .collect(),
        ))
    }
}

impl core::ops::Index<usize> for AxisSeq {
    type Output = AxisSpec;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a AxisSeq {
    type Item = &'a AxisSpec;
    type IntoIter = core::slice::Iter<'a, AxisSpec>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<AxisSpec> for AxisSeq {
    fn from_iter<I: IntoIterator<Item = AxisSpec>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_seq() {
        for rank in 0..64 {
            let seq = AxisSeq::dynamic(rank);
            assert_eq!(seq.rank(), rank);
            assert_eq!(seq.rank_dynamic(), rank);
            assert!(seq.iter().all(|s| s.is_dynamic()));
        }
    }

    #[test]
    fn test_fixed_seq() {
        let seq = AxisSeq::try_fixed(3, &[2, 3, 4]).unwrap();
        assert_eq!(seq.rank(), 3);
        assert_eq!(seq.rank_dynamic(), 0);
        assert_eq!(seq[1], AxisSpec::Fixed(3));

        assert_eq!(
            AxisSeq::try_fixed(3, &[2, 3]),
            Err(ShapeError::ArityMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_concat_seqs() {
        let a = AxisSeq::try_fixed(2, &[2, 3]).unwrap();
        let b = AxisSeq::dynamic(1);
        let c = a.concat(&b);
        assert_eq!(c.rank(), 3);
        assert_eq!(c.rank_dynamic(), 1);
        assert_eq!(c.get(2), Some(AxisSpec::Dyn));
    }

    #[test]
    fn test_resolve() {
        let seq = AxisSeq::from_specs([AxisSpec::Dyn, AxisSpec::Fixed(3), AxisSpec::Dyn]);
        let shape = seq.resolve(&[2, 4]).unwrap();
        assert_eq!(shape.to_vec(), [2, 3, 4]);
        assert_eq!(shape.rank_dynamic(), 2);
        assert_eq!(shape.static_extent(1), AxisSpec::Fixed(3));

        assert_eq!(
            seq.resolve(&[2]),
            Err(ShapeError::ArityMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_remove() {
        let seq = AxisSeq::from_specs([AxisSpec::Fixed(2), AxisSpec::Dyn, AxisSpec::Fixed(4)]);
        let out = seq.remove(1);
        assert_eq!(out.rank(), 2);
        assert_eq!(out.get(0), Some(AxisSpec::Fixed(2)));
        assert_eq!(out.get(1), Some(AxisSpec::Fixed(4)));
    }

    #[test]
    #[should_panic = "axis 3 is out of range for rank 3"]
    fn test_remove_out_of_range() {
        let _ = AxisSeq::dynamic(3).remove(3);
    }

    #[test]
    fn test_resolve_all_fixed_takes_no_sizes() {
        let seq = AxisSeq::try_fixed(2, &[5, 7]).unwrap();
        let shape = seq.resolve(&[]).unwrap();
        assert_eq!(shape.to_vec(), [5, 7]);
        assert_eq!(shape.rank_dynamic(), 0);
    }
}
