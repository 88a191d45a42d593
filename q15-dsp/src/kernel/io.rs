use super::ConfigError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use ndarray::{Array1, ArrayView1, ArrayViewMut1};

/// Adapter trait for reading a contiguous 1D run of samples.
pub trait ReadSamples<T> {
    /// Borrow the underlying input as a contiguous slice.
    fn read_samples(&self) -> Result<&[T], ConfigError>;
}

/// Adapter trait for writing a contiguous 1D run of samples.
pub trait WriteSamples<T> {
    /// Borrow the underlying output as a mutable contiguous slice.
    fn write_samples_mut(&mut self) -> Result<&mut [T], ConfigError>;
}

impl<T> ReadSamples<T> for [T] {
    fn read_samples(&self) -> Result<&[T], ConfigError> {
        Ok(self)
    }
}

impl<T> WriteSamples<T> for [T] {
    fn write_samples_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self)
    }
}

impl<T, const N: usize> ReadSamples<T> for [T; N] {
    fn read_samples(&self) -> Result<&[T], ConfigError> {
        Ok(self)
    }
}

impl<T, const N: usize> WriteSamples<T> for [T; N] {
    fn write_samples_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self)
    }
}

#[cfg(feature = "alloc")]
impl<T> ReadSamples<T> for Vec<T> {
    fn read_samples(&self) -> Result<&[T], ConfigError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl<T> WriteSamples<T> for Vec<T> {
    fn write_samples_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self.as_mut_slice())
    }
}

#[cfg(feature = "alloc")]
impl<T> ReadSamples<T> for Array1<T> {
    fn read_samples(&self) -> Result<&[T], ConfigError> {
        self.as_slice()
            .ok_or(ConfigError::NonContiguous { arg: "array" })
    }
}

#[cfg(feature = "alloc")]
impl<T> WriteSamples<T> for Array1<T> {
    fn write_samples_mut(&mut self) -> Result<&mut [T], ConfigError> {
        self.as_slice_mut()
            .ok_or(ConfigError::NonContiguous { arg: "array" })
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> ReadSamples<T> for ArrayView1<'a, T> {
    fn read_samples(&self) -> Result<&[T], ConfigError> {
        self.as_slice()
            .ok_or(ConfigError::NonContiguous { arg: "array_view" })
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> WriteSamples<T> for ArrayViewMut1<'a, T> {
    fn write_samples_mut(&mut self) -> Result<&mut [T], ConfigError> {
        self.as_slice_mut().ok_or(ConfigError::NonContiguous {
            arg: "array_view_mut",
        })
    }
}
