//! Shape related traits/structs like [Shape], [Dim], [Const], [DynShape],
//! and [AxisSeq]
//!
//! Example shapes:
//! ```rust
//! # use mdshape::shapes::*;
//! let _: Rank3<2, 3, 4> = Default::default();
//! let _: (Const<2>, Const<3>) = Default::default();
//! let _: (usize, Const<4>) = (3, Const);
//! let _: (Const<5>, usize, Const<3>, usize) = (Const, 4, Const, 2);
//! let _ = DynShape::try_new([5, 4, 3, 2]).unwrap();
//! ```
//!
//! Every encoding answers the same questions through [HasExtents]:
//! ```rust
//! # use mdshape::shapes::*;
//! let s = (2, Const::<3>, 4);
//! assert_eq!(s.rank(), 3);
//! assert_eq!(s.size(), 24);
//! assert_eq!(s.size_from(1), 12);
//! assert!(s.is_tensor());
//! ```

mod dyn_shape;
mod edit;
mod error;
mod extents;
mod reductions;
mod seq;
mod shape;

pub use dyn_shape::DynShape;
pub use edit::{concat, remove_axis, squeeze, ConcatShape};
pub use error::ShapeError;
pub use extents::HasExtents;
pub use reductions::{
    accumulate, accumulate_in, all_of, all_of_in, any_of, any_of_in, find, find_if, find_if_in,
    find_in, none_of, none_of_in, sum, sum_in,
};
pub use seq::{AxisSeq, AxisSpec};
pub use shape::{Const, ConstDim, Dim};
pub use shape::{ConstShape, HasShape, Shape};
pub use shape::{Rank0, Rank1, Rank2, Rank3, Rank4, Rank5, Rank6};
