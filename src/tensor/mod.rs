//! A [Tensor] that pairs a shape with a storage back end, and the
//! [Storage] contract that back ends satisfy.
//!
//! At a high level a tensor consists of only two parts
//! 1. A shape implementing [crate::shapes::Shape].
//! 2. A storage implementing [Storage], which owns `shape.size()` elements.
//!
//! # Creating tensors
//!
//! [Tensor::new()] allocates zero filled storage sized from the shape:
//!
//! ```rust
//! # use mdshape::prelude::*;
//! let t: Tensor<Rank2<2, 3>, f32> = Tensor::new(Default::default());
//! assert_eq!(t.len(), 6);
//! ```
//!
//! # Accessing or modifying elements
//!
//! Use [Tensor::get()] and [Tensor::set()] with one coordinate per axis.
//! Offsets are computed from [crate::shapes::Shape::strides()].
//!
//! ```rust
//! # use mdshape::prelude::*;
//! let mut t: Tensor<Rank2<2, 3>, f32> = Tensor::new(Default::default());
//! t.set(1.0, &[1, 2]);
//! assert_eq!(t.get(&[1, 2]), 1.0);
//! ```
//!
//! # Storage back ends
//!
//! [Dense] keeps every element in a contiguous buffer. [Sparse] keeps
//! only the non-zero elements. A back end implementing [Compress] can be
//! built from dense storage and rebuilt into it:
//!
//! ```rust
//! # use mdshape::prelude::*;
//! let mut t: Tensor<Rank1<100>, f32> = Tensor::new(Default::default());
//! t.set(2.5, &[40]);
//! let packed: Tensor<_, _, Sparse<f32>> = t.compress();
//! assert_eq!(packed.get(&[40]), 2.5);
//! assert_eq!(packed.uncompress(), t);
//! ```

mod storage;
mod tensor_impls;

pub use storage::{Compress, Dense, Sparse, Storage};
pub use tensor_impls::Tensor;
