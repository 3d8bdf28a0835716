//! Configuration primitives for the DACxx11 driver.

use embedded_hal::spi::{Mode, MODE_0};

/// Fastest SCLK the family accepts, in hertz.
pub const MAX_CLOCK_RATE_HZ: u32 = 50_000_000;
/// Highest reference (supply) voltage the family accepts, in volts.
pub const MAX_REFERENCE_VOLTAGE: f32 = 6.0;

/// Order in which bits of each byte are shifted out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most-significant bit first.
    MsbFirst,
}

/// Bus settings a session applies to every transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// SCLK rate in hertz.
    pub clock_rate_hz: u32,
    /// Bit order; the family only supports MSB first.
    pub bit_order: BitOrder,
    /// Clock polarity and phase; the family samples on the falling edge of mode 0.
    pub mode: Mode,
}

impl BusConfig {
    /// Begins building a [`BusConfig`] using the builder pattern.
    pub fn new() -> BusConfigBuilder {
        BusConfigBuilder::new()
    }

    /// Checks whether these settings are within the family's limits.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.clock_rate_hz > MAX_CLOCK_RATE_HZ {
            return Err(ConfigError::ClockRateTooHigh);
        }

        Ok(())
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            clock_rate_hz: MAX_CLOCK_RATE_HZ,
            bit_order: BitOrder::MsbFirst,
            mode: MODE_0,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BusConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "BusConfig {{ clock_rate_hz: {}, bit_order: {}, mode: {} }}",
            self.clock_rate_hz,
            self.bit_order,
            if self.mode == MODE_0 { "MODE_0" } else { "other" }
        );
    }
}

/// Builder for [`BusConfig`].
#[derive(Debug, Clone, Copy)]
pub struct BusConfigBuilder {
    config: BusConfig,
}

impl BusConfigBuilder {
    /// Creates a new builder seeded with [`BusConfig::default()`].
    pub fn new() -> Self {
        Self {
            config: BusConfig::default(),
        }
    }

    /// Overrides the SCLK rate.
    pub fn clock_rate_hz(mut self, clock_rate_hz: u32) -> Self {
        self.config.clock_rate_hz = clock_rate_hz;
        self
    }

    /// Finalizes the builder and returns the [`BusConfig`].
    pub fn build(self) -> BusConfig {
        self.config
    }
}

impl Default for BusConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation errors generated while verifying a [`BusConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Requested SCLK exceeds [`MAX_CLOCK_RATE_HZ`].
    ClockRateTooHigh,
}

/// Returns `true` when `voltage` may be stored as the reference.
///
/// NaN is refused.
pub fn reference_voltage_valid(voltage: f32) -> bool {
    voltage <= MAX_REFERENCE_VOLTAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_msb_first_mode_0() {
        let config = BusConfig::default();
        assert_eq!(config.bit_order, BitOrder::MsbFirst);
        assert_eq!(config.mode, MODE_0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn clock_limit_is_inclusive() {
        let at_limit = BusConfig::new().clock_rate_hz(50_000_000).build();
        assert_eq!(at_limit.validate(), Ok(()));

        let over = BusConfig::new().clock_rate_hz(50_000_001).build();
        assert_eq!(over.validate(), Err(ConfigError::ClockRateTooHigh));
    }

    #[test]
    fn reference_voltage_limit() {
        assert!(reference_voltage_valid(6.0));
        assert!(reference_voltage_valid(0.0));
        assert!(reference_voltage_valid(-1.0));
        assert!(!reference_voltage_valid(6.01));
        assert!(!reference_voltage_valid(f32::NAN));
    }
}
