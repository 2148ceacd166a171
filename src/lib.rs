//! Shape descriptors for multidimensional arrays. Main features include:
//!
//! 1. Mixing compile time and run time sizes in a single shape,
//!    e.g. `(usize, Const<3>)`.
//! 2. One query surface over every encoding through [shapes::HasExtents]:
//!    rank, extents, sizes, strides, and classification.
//! 3. Shape editing with [shapes::squeeze()], [shapes::concat()], and
//!    [shapes::remove_axis()].
//! 4. A fully run time [shapes::DynShape] for when even the rank is only
//!    known at run time.
//!
//! # Shapes
//!
//! *See [shapes] for more information.*
//!
//! Shapes are represented with **tuples** of dimensions. For example:
//! - `()` - a rank 0 shape
//! - `(usize,)` - a rank 1 shape
//! - `(usize, Const<N>)` - a rank 2 shape
//! - and so on up to rank 6!
//!
//! Each dimension can either be:
//! 1. Fixed at compile time: [`shapes::Const<M>`]
//! 2. Resolved at run time: [`usize`]
//!
//! ```rust
//! use mdshape::prelude::*;
//! let fixed: Rank2<2, 3> = Default::default();
//! let mixed: (usize, Const<3>) = (2, Const);
//! assert_eq!(fixed.concrete(), [2, 3]);
//! assert_eq!(fixed.concrete(), mixed.concrete());
//! assert_eq!(mixed.rank_dynamic(), 1);
//! ```
//!
//! [shapes::DynShape] drops the tuple encoding entirely and carries its
//! axes on the heap. The two encodings compare equal extent by extent:
//!
//! ```rust
//! use mdshape::prelude::*;
//! let s = DynShape::try_new([2, 3]).unwrap();
//! assert_eq!(s, (2, Const::<3>));
//! ```
//!
//! # Queries
//!
//! Every encoding answers the same questions through [shapes::HasExtents],
//! and the quantifiers in [shapes] ([shapes::all_of()], [shapes::any_of()],
//! [shapes::find()], [shapes::accumulate()], ...) reduce over extents
//! without caring which encoding they came from:
//!
//! ```rust
//! use mdshape::prelude::*;
//! let s = (2, Const::<3>, 4);
//! assert_eq!(s.size(), 24);
//! assert!(s.is_tensor());
//! assert!(all_of(&s, |d| d > 1));
//! ```
//!
//! # Tensors
//!
//! *See [tensor] for more information.*
//!
//! A [tensor::Tensor] pairs a shape with a [tensor::Storage] back end
//! holding `size()` elements, addressed through the shape's strides.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod shapes;
pub mod tensor;

/// Contains all public exports.
pub mod prelude {
    pub use crate::shapes::*;
    pub use crate::tensor::*;
}
