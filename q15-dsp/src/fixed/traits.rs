//! Trait interfaces for fixed-point kernel capabilities.

use crate::kernel::{ExecInvariantViolation, ReadSamples, WriteSamples};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// 1D saturating fixed-point AXPY capability.
///
/// The receiver is `&mut` because a backend may carry per-pass state
/// (e.g. a vector unit whose run length varies between passes).
pub trait Axpy1D<T> {
    /// Run the operation into a caller-provided output buffer.
    fn run_into<A, B, O>(&mut self, a: &A, b: &B, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        A: ReadSamples<T> + ?Sized,
        B: ReadSamples<T> + ?Sized,
        O: WriteSamples<T> + ?Sized;

    /// Run the operation in place, with `acc` serving as both the addend
    /// operand and the output.
    fn run_in_place<C, B>(&mut self, acc: &mut C, b: &B) -> Result<(), ExecInvariantViolation>
    where
        C: WriteSamples<T> + ?Sized,
        B: ReadSamples<T> + ?Sized;

    /// Run the operation and allocate the output buffer.
    #[cfg(feature = "alloc")]
    fn run_alloc<A, B>(&mut self, a: &A, b: &B) -> Result<Vec<T>, ExecInvariantViolation>
    where
        A: ReadSamples<T> + ?Sized,
        B: ReadSamples<T> + ?Sized;
}
