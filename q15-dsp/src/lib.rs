//! Saturating Q15 fixed-point DSP kernels.
//!
//! The crate pairs a scalar reference implementation of the Q15 AXPY
//! primitive (`y[i] = sat16(a[i] + ((alpha * b[i]) >> 15))`) with a
//! vector-length-agnostic implementation that processes a backend-chosen
//! run of elements per pass. Both are exposed through the trait-first
//! kernel interfaces in [`kernel`] so callers can drive them uniformly
//! over slices, arrays, `Vec`s, and ndarray buffers.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod fixed;
pub mod kernel;
