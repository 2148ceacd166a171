/// Represents the ways building or querying a shape can fail. Every failure
/// is local to the failing call; no partially constructed shape is ever
/// handed out.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The number of supplied sizes does not match the number of slots.
    ArityMismatch {
        /// How many sizes the shape needed
        expected: usize,
        /// How many sizes were supplied
        found: usize,
    },
    /// A checked axis access outside `[0, rank())`.
    AxisOutOfRange {
        /// Requested axis
        axis: usize,
        /// Rank of the shape
        rank: usize,
    },
    /// A dynamic shape was built from fewer than 2 axis sizes.
    TooFewAxes {
        /// How many sizes were supplied
        rank: usize,
    },
    /// A dynamic shape was built from a list containing a zero.
    ZeroExtent {
        /// First axis whose size was zero
        axis: usize,
    },
}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShapeError::ArityMismatch { expected, found } => f.write_fmt(format_args!(
                "ArityMismatch: expected {expected} sizes but {found} were supplied"
            )),
            ShapeError::AxisOutOfRange { axis, rank } => f.write_fmt(format_args!(
                "AxisOutOfRange: axis {axis} is out of range for rank {rank}"
            )),
            ShapeError::TooFewAxes { rank } => f.write_fmt(format_args!(
                "TooFewAxes: a dynamic shape needs at least 2 axes, got {rank}"
            )),
            ShapeError::ZeroExtent { axis } => {
                f.write_fmt(format_args!("ZeroExtent: axis {axis} has size 0"))
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}
