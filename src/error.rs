//! Error handling primitives for the DACxx11 driver.

use crate::encoder::EncodeError;

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// A parameter lies outside its documented domain.
    InvalidArgument,
    /// The operation needs a transport but `setup` has not succeeded yet.
    NotConfigured,
    /// The session was built for a resolution the family does not have.
    UnsupportedResolution,
}

impl<E> Error<E> {
    /// Returns the negative errno-style status code for this error.
    ///
    /// `Ok(())` corresponds to status `0`.
    pub const fn code(&self) -> i32 {
        match self {
            Self::Interface(_) => -EIO,
            Self::InvalidArgument | Self::UnsupportedResolution => -EINVAL,
            Self::NotConfigured => -ENODEV,
        }
    }
}

impl<E> From<EncodeError> for Error<E> {
    fn from(err: EncodeError) -> Self {
        match err {
            EncodeError::InvalidArgument => Self::InvalidArgument,
            EncodeError::UnsupportedResolution => Self::UnsupportedResolution,
        }
    }
}

/// Collapses an operation result into the signed status convention.
pub fn status_code<T, E>(result: &Result<T, E>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err) => err.code(),
    }
}

const EIO: i32 = 5;
const ENODEV: i32 = 19;
const EINVAL: i32 = 22;
