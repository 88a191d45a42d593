//! Saturating Q15 AXPY kernels.
//!
//! `y[i] = sat16(a[i] + ((alpha * b[i]) >> 15))` for every `i`, with the
//! product widened to 32 bits and the shift truncating. Each output
//! element depends only on the inputs at the same index, so the operation
//! may be computed in runs of any size and order; the vectorized kernel
//! exploits exactly that.

mod lanes;
mod scalar;
mod vectorized;

pub use lanes::{FixedWidthUnit, ScalarUnit, VectorUnit, MAX_LANES};
pub use scalar::{reference_axpy_q15, ReferenceAxpyConfig, ReferenceAxpyKernel};
pub use vectorized::{vector_axpy_q15, VectorAxpyConfig, VectorAxpyKernel};
