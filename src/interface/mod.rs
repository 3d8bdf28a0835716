//! Bus interface abstraction for the DACxx11 driver.

pub mod spi;

use crate::config::BusConfig;

/// Abstraction over the low-level bus access required by the driver.
///
/// The family is write-only: every exchange is a single frame clocked out while
/// chip-select is held low.
pub trait Dacxx11Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Prepares the transport for `bus` and drives chip-select to its idle (high) level.
    fn init(&mut self, bus: &BusConfig) -> core::result::Result<(), Self::Error>;

    /// Writes one frame as a single chip-select framed transaction.
    ///
    /// Implementations must release chip-select before returning, including on
    /// error.
    fn write_frame(&mut self, frame: &[u8]) -> core::result::Result<(), Self::Error>;
}
