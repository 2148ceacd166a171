use alloc::collections::BTreeMap;
use alloc::{vec, vec::Vec};

use num_traits::Zero;

/// Something that can hold the elements of one multidimensional array,
/// addressed by linearized index.
///
/// Back ends only see flat indices; the paired shape decides how multi
/// axis coordinates map onto them. Indexing outside `[0, len())` panics,
/// the same way slice indexing does.
pub trait Storage<E> {
    /// Allocates a back end for `len` elements, all zero.
    fn with_len(len: usize) -> Self;

    /// Number of elements addressable, counting zeros.
    fn len(&self) -> usize;

    /// Whether the back end addresses no elements at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`.
    fn get(&self, index: usize) -> E;

    /// Stores `value` at `index`.
    fn set(&mut self, value: E, index: usize);
}

/// Contiguous storage: one element slot per index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dense<E> {
    pub(crate) data: Vec<E>,
}

impl<E: Zero + Clone> Storage<E> for Dense<E> {
    fn with_len(len: usize) -> Self {
        Self {
            data: vec![E::zero(); len],
        }
    }
    fn len(&self) -> usize {
        self.data.len()
    }
    fn get(&self, index: usize) -> E {
        self.data[index].clone()
    }
    fn set(&mut self, value: E, index: usize) {
        self.data[index] = value;
    }
}

/// Compressed storage holding only the non zero elements, keyed by
/// linearized index.
///
/// Reading an absent index yields zero; writing a zero removes the
/// entry, so the stored form stays canonical and two [Sparse] values
/// holding the same elements always compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sparse<E> {
    pub(crate) elems: BTreeMap<usize, E>,
    pub(crate) len: usize,
}

impl<E: Zero + Clone> Storage<E> for Sparse<E> {
    fn with_len(len: usize) -> Self {
        Self {
            elems: BTreeMap::new(),
            len,
        }
    }
    fn len(&self) -> usize {
        self.len
    }
    fn get(&self, index: usize) -> E {
        assert!(
            index < self.len,
            "index {index} is out of range for len {}",
            self.len
        );
        self.elems.get(&index).cloned().unwrap_or_else(E::zero)
    }
    fn set(&mut self, value: E, index: usize) {
        assert!(
            index < self.len,
            "index {index} is out of range for len {}",
            self.len
        );
        if value.is_zero() {
            self.elems.remove(&index);
        } else {
            self.elems.insert(index, value);
        }
    }
}

impl<E> Sparse<E> {
    /// Number of elements actually stored.
    pub fn num_stored(&self) -> usize {
        self.elems.len()
    }
}

/// A back end that holds a compressed rendition of a [Dense] one.
pub trait Compress<E>: Storage<E> {
    /// Builds the compressed form, dropping every zero element.
    fn compress(dense: &Dense<E>) -> Self;

    /// Expands back out to contiguous storage.
    fn uncompress(&self) -> Dense<E>;
}

impl<E: Zero + Clone> Compress<E> for Sparse<E> {
    fn compress(dense: &Dense<E>) -> Self {
        let mut elems = BTreeMap::new();
        for (index, value) in dense.data.iter().enumerate() {
            if !value.is_zero() {
                elems.insert(index, value.clone());
            }
        }
        Self {
            elems,
            len: dense.data.len(),
        }
    }
    fn uncompress(&self) -> Dense<E> {
        let mut dense = Dense::with_len(self.len);
        for (&index, value) in &self.elems {
            dense.data[index] = value.clone();
        }
        dense
    }
}
