//! Scalar reference implementation of the saturating Q15 AXPY.
//!
//! Element by element, plain integer arithmetic, manual saturation. This
//! is the oracle the vectorized kernel is judged against.

use crate::fixed::q15;
use crate::fixed::traits::Axpy1D;
use crate::kernel::{
    ConfigError, ExecInvariantViolation, KernelLifecycle, ReadSamples, WriteSamples,
};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// One output sample: `sat16(a + ((alpha * b) >> 15))`.
#[inline]
pub(crate) fn axpy_sample(a: i16, b: i16, alpha: i16) -> i16 {
    let prod = q15::rescale(q15::widening_mul(alpha, b));
    q15::saturate(a as i32 + prod)
}

/// Constructor config for [`ReferenceAxpyKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceAxpyConfig {
    /// Q15 coefficient applied to the scaled operand.
    pub alpha: i16,
}

/// Element-by-element Q15 AXPY oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceAxpyKernel {
    alpha: i16,
}

impl ReferenceAxpyKernel {
    /// Return the configured coefficient.
    pub fn alpha(&self) -> i16 {
        self.alpha
    }
}

impl KernelLifecycle for ReferenceAxpyKernel {
    type Config = ReferenceAxpyConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        // Every i16 is a valid Q15 coefficient.
        Ok(Self {
            alpha: config.alpha,
        })
    }
}

impl Axpy1D<i16> for ReferenceAxpyKernel {
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
        for ((y, &av), &bv) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
            *y = axpy_sample(av, bv, self.alpha);
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
        for (y, &bv) in acc.iter_mut().zip(b.iter()) {
            *y = axpy_sample(*y, bv, self.alpha);
        }
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<A, B>(&mut self, a: &A, b: &B) -> Result<Vec<i16>, ExecInvariantViolation>
    where
        A: ReadSamples<i16> + ?Sized,
        B: ReadSamples<i16> + ?Sized,
    {
        let a = a.read_samples().map_err(ExecInvariantViolation::from)?;
        let b = b.read_samples().map_err(ExecInvariantViolation::from)?;
        if b.len() != a.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "b",
                expected: a.len(),
                got: b.len(),
            });
        }
        Ok(a.iter()
            .zip(b.iter())
            .map(|(&av, &bv)| axpy_sample(av, bv, self.alpha))
            .collect())
    }
}

/// Ground-truth fixed-point AXPY over equal-length slices.
///
/// `y.len()` is the element count; `n = 0` writes nothing. Mismatched
/// slice lengths are rejected.
pub fn reference_axpy_q15(
    a: &[i16],
    b: &[i16],
    y: &mut [i16],
    alpha: i16,
) -> Result<(), ExecInvariantViolation> {
    let mut kernel = ReferenceAxpyKernel::try_new(ReferenceAxpyConfig { alpha })
        .map_err(ExecInvariantViolation::from)?;
    kernel.run_into(a, b, y)
}

#[cfg(test)]
mod tests {
    use super::{axpy_sample, reference_axpy_q15, ReferenceAxpyConfig, ReferenceAxpyKernel};
    use crate::fixed::traits::Axpy1D;
    use crate::kernel::{ExecInvariantViolation, KernelLifecycle};
    use alloc::{vec, vec::Vec};

    #[test]
    fn sample_floors_negative_products() {
        // (-1 * 1) >> 15 is -1 under a truncating arithmetic shift.
        assert_eq!(axpy_sample(0, 1, -1), -1);
        assert_eq!(axpy_sample(0, -1, 1), -1);
        assert_eq!(axpy_sample(5, 1, -1), 4);
    }

    #[test]
    fn sample_saturates_both_rails() {
        assert_eq!(axpy_sample(32767, 32767, 32767), 32767);
        assert_eq!(axpy_sample(-32768, -32768, 32767), -32768);
        assert_eq!(axpy_sample(30000, 32767, 32767), 32767);
        assert_eq!(axpy_sample(-30000, -32768, 32767), -32768);
    }

    #[test]
    fn zero_coefficient_passes_the_addend_through() {
        let mut kernel = ReferenceAxpyKernel::try_new(ReferenceAxpyConfig { alpha: 0 })
            .expect("kernel should initialize");
        let a = [1i16, -2, 3, -4];
        let b = [5i16, 6, 7, 8];
        let y = kernel.run_alloc(&a, &b).expect("reference should run");
        assert_eq!(y, a.to_vec());
    }

    #[test]
    fn zero_length_writes_nothing() {
        let a: [i16; 0] = [];
        let b: [i16; 0] = [];
        let mut y: [i16; 0] = [];
        reference_axpy_q15(&a, &b, &mut y, 100).expect("empty run should succeed");
    }

    #[test]
    fn small_products_round_to_zero_contribution() {
        // alpha * b stays below one Q15 LSB for the descending ramp, so
        // the output equals the addend.
        let a: Vec<i16> = (1..=16).collect();
        let b: Vec<i16> = (1..=16).rev().collect();
        let mut y = vec![0i16; 16];
        reference_axpy_q15(&a, &b, &mut y, 100).expect("reference should run");
        assert_eq!(y, a);
    }

    #[test]
    fn run_in_place_matches_run_into() {
        let mut kernel = ReferenceAxpyKernel::try_new(ReferenceAxpyConfig { alpha: 12345 })
            .expect("kernel should initialize");
        let a = [1000i16, -2000, 30000, -30000];
        let b = [-3000i16, 4000, 32767, -32768];

        let mut out = [0i16; 4];
        kernel.run_into(&a, &b, &mut out).expect("run_into");

        let mut acc = a;
        kernel.run_in_place(&mut acc, &b).expect("run_in_place");
        assert_eq!(acc, out);
    }

    #[test]
    fn run_into_rejects_mismatched_lengths() {
        let mut kernel = ReferenceAxpyKernel::try_new(ReferenceAxpyConfig { alpha: 1 })
            .expect("kernel should initialize");
        let a = [1i16, 2, 3];
        let b = [1i16, 2];
        let mut y = [0i16; 3];
        let err = kernel
            .run_into(&a, &b, &mut y)
            .expect_err("short b must fail");
        assert_eq!(
            err,
            ExecInvariantViolation::LengthMismatch {
                arg: "b",
                expected: 3,
                got: 2
            }
        );

        let b = [1i16, 2, 3];
        let mut y = [0i16; 2];
        let err = kernel
            .run_into(&a, &b, &mut y)
            .expect_err("short out must fail");
        assert_eq!(
            err,
            ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: 3,
                got: 2
            }
        );
    }
}
