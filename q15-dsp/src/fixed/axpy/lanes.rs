//! Wide-lane processing backends.
//!
//! The vectorized kernel is written against [`VectorUnit`] so the number
//! of elements consumed per pass stays a runtime property of the backend,
//! the way vector-length-agnostic ISAs expose it through a set-length
//! instruction. Swapping the unit swaps the execution width without
//! touching the element-wise algorithm.

use crate::kernel::ConfigError;

/// Upper bound on the lanes a unit may claim in one pass.
///
/// Sizes the kernel's wide scratch; claims above this are clamped.
pub const MAX_LANES: usize = 64;

/// A vector execution unit with a queryable per-pass run length.
pub trait VectorUnit {
    /// Largest number of 16-bit lanes the unit can process in one pass.
    fn max_lanes(&self) -> usize;

    /// Number of elements claimed for this pass.
    ///
    /// `remaining` is always nonzero; the result must lie in
    /// `1..=remaining.min(self.max_lanes())`. The claim may differ from
    /// pass to pass and need not be a power of two, so callers must be
    /// correct for any conforming sequence.
    fn next_run(&mut self, remaining: usize) -> usize {
        remaining.min(self.max_lanes())
    }
}

/// Portable unit emulating a fixed hardware register width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthUnit {
    lanes: usize,
}

impl FixedWidthUnit {
    /// Default width: 16-bit lanes of one 256-bit register group.
    pub const NATIVE_LANES: usize = 16;

    /// Construct a unit with the given lane count, in `1..=MAX_LANES`.
    pub fn new(lanes: usize) -> Result<Self, ConfigError> {
        if lanes == 0 {
            return Err(ConfigError::InvalidArgument {
                arg: "lanes",
                reason: "unit must process at least one lane per pass",
            });
        }
        if lanes > MAX_LANES {
            return Err(ConfigError::InvalidArgument {
                arg: "lanes",
                reason: "lane count exceeds the wide-scratch capacity",
            });
        }
        Ok(Self { lanes })
    }
}

impl Default for FixedWidthUnit {
    fn default() -> Self {
        Self {
            lanes: Self::NATIVE_LANES,
        }
    }
}

impl VectorUnit for FixedWidthUnit {
    fn max_lanes(&self) -> usize {
        self.lanes
    }
}

/// Degenerate one-lane fallback unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarUnit;

impl VectorUnit for ScalarUnit {
    fn max_lanes(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedWidthUnit, ScalarUnit, VectorUnit, MAX_LANES};
    use crate::kernel::ConfigError;

    #[test]
    fn fixed_width_unit_validates_lane_count() {
        let err = FixedWidthUnit::new(0).expect_err("zero lanes must fail");
        assert_eq!(
            err,
            ConfigError::InvalidArgument {
                arg: "lanes",
                reason: "unit must process at least one lane per pass",
            }
        );

        let err = FixedWidthUnit::new(MAX_LANES + 1).expect_err("oversized unit must fail");
        assert!(matches!(err, ConfigError::InvalidArgument { arg: "lanes", .. }));

        let unit = FixedWidthUnit::new(MAX_LANES).expect("full-width unit");
        assert_eq!(unit.max_lanes(), MAX_LANES);
    }

    #[test]
    fn next_run_is_bounded_by_remaining_and_width() {
        let mut unit = FixedWidthUnit::default();
        assert_eq!(unit.next_run(3), 3);
        assert_eq!(unit.next_run(100), FixedWidthUnit::NATIVE_LANES);

        let mut scalar = ScalarUnit;
        assert_eq!(scalar.next_run(100), 1);
    }
}
