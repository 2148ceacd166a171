//! Range reductions over the axes of a shape.
//!
//! Each primitive scans a half open axis range `[begin, end)` of any
//! [HasExtents] value and combines the resolved extents. The short names
//! (`all_of`, `any_of`, ...) cover the full `[0, rank())` range; the `_in`
//! forms take the range explicitly. All of them are pure linear scans.

use core::ops::Range;

use super::extents::HasExtents;

/// Whether every extent in `[0, rank())` satisfies `f`.
pub fn all_of<E, F>(extents: &E, f: F) -> bool
where
    E: HasExtents + ?Sized,
    F: FnMut(usize) -> bool,
{
    all_of_in(extents, 0..extents.rank(), f)
}

/// Whether every extent in `axes` satisfies `f`. Vacuously true on an
/// empty range.
pub fn all_of_in<E, F>(extents: &E, axes: Range<usize>, mut f: F) -> bool
where
    E: HasExtents + ?Sized,
    F: FnMut(usize) -> bool,
{
    axes.into_iter().all(|k| f(extents.extent(k)))
}

/// Whether some extent in `[0, rank())` satisfies `f`.
pub fn any_of<E, F>(extents: &E, f: F) -> bool
where
    E: HasExtents + ?Sized,
    F: FnMut(usize) -> bool,
{
    any_of_in(extents, 0..extents.rank(), f)
}

/// Whether some extent in `axes` satisfies `f`. Vacuously false on an
/// empty range.
pub fn any_of_in<E, F>(extents: &E, axes: Range<usize>, mut f: F) -> bool
where
    E: HasExtents + ?Sized,
    F: FnMut(usize) -> bool,
{
    axes.into_iter().any(|k| f(extents.extent(k)))
}

/// Whether no extent in `[0, rank())` satisfies `f`.
pub fn none_of<E, F>(extents: &E, f: F) -> bool
where
    E: HasExtents + ?Sized,
    F: FnMut(usize) -> bool,
{
    none_of_in(extents, 0..extents.rank(), f)
}

/// Whether no extent in `axes` satisfies `f`.
pub fn none_of_in<E, F>(extents: &E, axes: Range<usize>, f: F) -> bool
where
    E: HasExtents + ?Sized,
    F: FnMut(usize) -> bool,
{
    !any_of_in(extents, axes, f)
}

/// Whether some axis in `[0, rank())` has exactly this extent.
pub fn find<E>(extents: &E, value: usize) -> bool
where
    E: HasExtents + ?Sized,
{
    find_in(extents, 0..extents.rank(), value)
}

/// Whether some axis in `axes` has exactly this extent.
pub fn find_in<E>(extents: &E, axes: Range<usize>, value: usize) -> bool
where
    E: HasExtents + ?Sized,
{
    any_of_in(extents, axes, |d| d == value)
}

/// Whether some extent in `[0, rank())` satisfies `f`. The predicate form
/// of [find].
pub fn find_if<E, F>(extents: &E, f: F) -> bool
where
    E: HasExtents + ?Sized,
    F: FnMut(usize) -> bool,
{
    any_of(extents, f)
}

/// Whether some extent in `axes` satisfies `f`.
pub fn find_if_in<E, F>(extents: &E, axes: Range<usize>, f: F) -> bool
where
    E: HasExtents + ?Sized,
    F: FnMut(usize) -> bool,
{
    any_of_in(extents, axes, f)
}

/// Folds `f` over the extents in `[0, rank())`, starting from `init`.
pub fn accumulate<E, T, F>(extents: &E, init: T, f: F) -> T
where
    E: HasExtents + ?Sized,
    F: FnMut(T, usize) -> T,
{
    accumulate_in(extents, 0..extents.rank(), init, f)
}

/// Folds `f` over the extents in `axes`, starting from `init`.
pub fn accumulate_in<E, T, F>(extents: &E, axes: Range<usize>, init: T, mut f: F) -> T
where
    E: HasExtents + ?Sized,
    F: FnMut(T, usize) -> T,
{
    axes.into_iter()
        .fold(init, |acc, k| f(acc, extents.extent(k)))
}

/// Sum of the extents in `[0, rank())`. [accumulate] with addition.
pub fn sum<E>(extents: &E) -> usize
where
    E: HasExtents + ?Sized,
{
    sum_in(extents, 0..extents.rank())
}

/// Sum of the extents in `axes`.
pub fn sum_in<E>(extents: &E, axes: Range<usize>) -> usize
where
    E: HasExtents + ?Sized,
{
    accumulate_in(extents, axes, 0, |acc, d| acc + d)
}

#[cfg(test)]
mod tests {
    use super::super::Const;
    use super::*;

    #[test]
    fn test_quantifiers() {
        let s = (2, Const::<3>, 4);
        assert!(all_of(&s, |d| d > 1));
        assert!(!all_of(&s, |d| d > 2));
        assert!(any_of(&s, |d| d == 3));
        assert!(!any_of(&s, |d| d == 5));
        assert!(none_of(&s, |d| d == 0));
        assert!(!none_of(&s, |d| d == 2));
    }

    #[test]
    fn test_ranged_quantifiers() {
        let s = (1, 5, 1, 1);
        assert!(all_of_in(&s, 2..4, |d| d == 1));
        assert!(any_of_in(&s, 0..2, |d| d > 1));
        assert!(none_of_in(&s, 2..4, |d| d > 1));
        // empty ranges
        assert!(all_of_in(&s, 1..1, |_| false));
        assert!(!any_of_in(&s, 1..1, |_| true));
    }

    #[test]
    fn test_find() {
        let s = (2, Const::<3>, 4);
        assert!(find(&s, 3));
        assert!(!find(&s, 5));
        assert!(find_in(&s, 1..3, 4));
        assert!(!find_in(&s, 0..1, 4));
        assert!(find_if(&s, |d| d % 2 == 0));
        assert!(!find_if_in(&s, 1..2, |d| d % 2 == 0));
    }

    #[test]
    fn test_accumulate() {
        let s = (2, Const::<3>, 4);
        assert_eq!(sum(&s), 9);
        assert_eq!(sum_in(&s, 1..3), 7);
        assert_eq!(accumulate(&s, 1, |acc, d| acc * d), 24);
        assert_eq!(accumulate_in(&s, 0..2, 0, |acc, d| acc + d * d), 13);
    }
}
