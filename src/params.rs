//! Strongly typed parameter enumerations for the DACxx11 driver.
//!
//! These enums cover the handful of values the family accepts: the native
//! resolution of each part and the power-down selections encoded in the top
//! two bits of every command frame. Prefer them over raw integers so invalid
//! values cannot reach the bus.
//!
//! # Examples
//!
//! ```rust
//! use dacxx11::params::{Part, PowerDownMode, Resolution};
//!
//! let resolution = Part::Dac7311.resolution();
//! assert_eq!(resolution, Resolution::Bits12);
//! assert_eq!(resolution.full_scale(), 4_095);
//! let _ = PowerDownMode::HighImpedance;
//! ```

use modular_bitfield::prelude::Specifier;

/// Native resolutions offered by the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Resolution {
    /// 8-bit (DAC5311).
    Bits8 = 8,
    /// 10-bit (DAC6311).
    Bits10 = 10,
    /// 12-bit (DAC7311).
    Bits12 = 12,
    /// 14-bit (DAC8311).
    Bits14 = 14,
    /// 16-bit (DAC8411).
    Bits16 = 16,
}

impl Resolution {
    /// Returns the resolution in bits.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the number of distinct output levels.
    pub const fn levels(self) -> u32 {
        1 << self.bits()
    }

    /// Returns the largest input code.
    pub const fn full_scale(self) -> u32 {
        self.levels() - 1
    }
}

/// Raised when a bit count does not match any part of the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedResolution(pub u8);

impl TryFrom<u8> for Resolution {
    type Error = UnsupportedResolution;

    fn try_from(bits: u8) -> core::result::Result<Self, Self::Error> {
        match bits {
            8 => Ok(Self::Bits8),
            10 => Ok(Self::Bits10),
            12 => Ok(Self::Bits12),
            14 => Ok(Self::Bits14),
            16 => Ok(Self::Bits16),
            other => Err(UnsupportedResolution(other)),
        }
    }
}

/// Members of the DACxx11 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Part {
    /// 8-bit, 256 levels.
    Dac5311,
    /// 10-bit, 1024 levels.
    Dac6311,
    /// 12-bit, 4096 levels.
    Dac7311,
    /// 14-bit, 16384 levels.
    Dac8311,
    /// 16-bit, 65536 levels.
    Dac8411,
}

impl Part {
    /// Returns the native resolution of the part.
    pub const fn resolution(self) -> Resolution {
        match self {
            Self::Dac5311 => Resolution::Bits8,
            Self::Dac6311 => Resolution::Bits10,
            Self::Dac7311 => Resolution::Bits12,
            Self::Dac8311 => Resolution::Bits14,
            Self::Dac8411 => Resolution::Bits16,
        }
    }
}

/// Output states selectable through [`power_down`](crate::Dacxx11::power_down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerDownMode {
    /// Output pulled to GND through 1 kΩ.
    Pulldown1k,
    /// Output pulled to GND through 100 kΩ.
    Pulldown100k,
    /// Output left floating.
    HighImpedance,
}

impl From<PowerDownMode> for OperatingMode {
    fn from(mode: PowerDownMode) -> Self {
        match mode {
            PowerDownMode::Pulldown1k => Self::Pulldown1k,
            PowerDownMode::Pulldown100k => Self::Pulldown100k,
            PowerDownMode::HighImpedance => Self::HighImpedance,
        }
    }
}

/// Operating mode bits `PD1:PD0` at the top of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum OperatingMode {
    /// Normal operation, output follows the data field.
    Normal = 0b00,
    /// 1 kΩ to GND.
    Pulldown1k = 0b01,
    /// 100 kΩ to GND.
    Pulldown100k = 0b10,
    /// High-Z.
    HighImpedance = 0b11,
}
