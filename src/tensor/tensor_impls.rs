use core::marker::PhantomData;

use super::storage::{Compress, Dense, Storage};
use crate::shapes::{HasExtents, HasShape, Shape};

/// A multidimensional array: one [Shape] paired with a [Storage] back
/// end sized for it.
///
/// Generics:
/// 1. [Shape] - the shape of the array
/// 2. `E` - the type of the elements stored in the array
/// 3. [Storage] - the back end holding the elements, [Dense] by default
///
/// Elements are addressed by one coordinate per axis, linearized through
/// the shape's row major strides:
/// ```rust
/// # use mdshape::prelude::*;
/// let mut t: Tensor<(Const<2>, usize), f32> = Tensor::new((Const, 3));
/// t.set(2.5, &[1, 0]);
/// assert_eq!(t.get(&[1, 0]), 2.5);
/// assert_eq!(t.get(&[0, 2]), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tensor<S: Shape, E, St: Storage<E> = Dense<E>> {
    pub(crate) shape: S,
    pub(crate) storage: St,
    pub(crate) elem: PhantomData<E>,
}

impl<S: Shape, E, St: Storage<E>> Tensor<S, E, St> {
    /// Allocates an all zero tensor of the given shape.
    pub fn new(shape: S) -> Self {
        Self {
            storage: St::with_len(shape.size()),
            shape,
            elem: PhantomData,
        }
    }

    /// The number of elements, the product of the shape's extents.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// The element at `index`, one coordinate per axis. Panics when the
    /// index is not [in_bounds](HasExtents::in_bounds) for the shape.
    pub fn get(&self, index: &[usize]) -> E {
        self.storage.get(self.offset(index))
    }

    /// Stores `value` at `index`, one coordinate per axis. Panics when
    /// the index is not [in_bounds](HasExtents::in_bounds) for the shape.
    pub fn set(&mut self, value: E, index: &[usize]) {
        let offset = self.offset(index);
        self.storage.set(value, offset);
    }

    fn offset(&self, index: &[usize]) -> usize {
        assert!(
            self.shape.in_bounds(index),
            "index {index:?} is out of bounds for shape {:?}",
            self.shape.concrete()
        );
        index
            .iter()
            .zip(self.shape.strides().into_iter())
            .map(|(&coord, stride)| coord * stride)
            .sum()
    }
}

impl<S: Shape, E> Tensor<S, E, Dense<E>>
where
    Dense<E>: Storage<E>,
{
    /// Rebuilds this tensor on a compressed back end, dropping its
    /// zeros. The shape is untouched.
    pub fn compress<St: Compress<E>>(&self) -> Tensor<S, E, St> {
        Tensor {
            shape: self.shape,
            storage: St::compress(&self.storage),
            elem: PhantomData,
        }
    }
}

impl<S: Shape, E, St: Compress<E>> Tensor<S, E, St>
where
    Dense<E>: Storage<E>,
{
    /// Rebuilds this tensor on contiguous storage. The shape is
    /// untouched.
    pub fn uncompress(&self) -> Tensor<S, E, Dense<E>> {
        Tensor {
            shape: self.shape,
            storage: self.storage.uncompress(),
            elem: PhantomData,
        }
    }
}

impl<S: Shape, E, St: Storage<E>> HasShape for Tensor<S, E, St> {
    type WithShape<New: Shape> = Tensor<New, E, St>;
    type Shape = S;
    fn shape(&self) -> &Self::Shape {
        &self.shape
    }
}

#[cfg(test)]
mod tests {
    use super::super::Sparse;
    use super::*;
    use crate::shapes::{Const, Rank2};

    #[test]
    fn test_new_is_zero_filled() {
        let t: Tensor<Rank2<2, 3>, f32> = Tensor::new(Default::default());
        assert_eq!(t.len(), 6);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(t.get(&[row, col]), 0.0);
            }
        }
    }

    #[test]
    fn test_get_set_strided() {
        let mut t: Tensor<(usize, Const<3>), i32> = Tensor::new((2, Const));
        t.set(5, &[0, 1]);
        t.set(-3, &[1, 2]);
        assert_eq!(t.get(&[0, 1]), 5);
        assert_eq!(t.get(&[1, 2]), -3);
        // row major layout: [1, 2] sits at offset 1 * 3 + 2
        assert_eq!(t.storage.get(5), -3);
    }

    #[test]
    fn test_rank0_holds_one_element() {
        let mut t: Tensor<(), f64> = Tensor::new(());
        assert_eq!(t.len(), 1);
        t.set(4.5, &[]);
        assert_eq!(t.get(&[]), 4.5);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_index() {
        let t: Tensor<Rank2<2, 3>, f32> = Tensor::new(Default::default());
        t.get(&[2, 0]);
    }

    #[test]
    #[should_panic]
    fn test_wrong_arity_index() {
        let t: Tensor<Rank2<2, 3>, f32> = Tensor::new(Default::default());
        t.get(&[0]);
    }

    #[test]
    fn test_shape_getter() {
        let t: Tensor<(usize, Const<3>), f32> = Tensor::new((4, Const));
        assert_eq!(t.shape().concrete(), [4, 3]);
    }

    #[test]
    fn test_compress_uncompress() {
        let mut t: Tensor<Rank2<2, 2>, f32> = Tensor::new(Default::default());
        t.set(1.5, &[0, 1]);
        t.set(2.5, &[1, 0]);

        let sparse: Tensor<Rank2<2, 2>, f32, Sparse<f32>> = t.compress();
        assert_eq!(sparse.get(&[0, 1]), 1.5);
        assert_eq!(sparse.get(&[0, 0]), 0.0);
        assert_eq!(sparse.storage.num_stored(), 2);

        let dense = sparse.uncompress();
        assert_eq!(dense, t);
    }
}
