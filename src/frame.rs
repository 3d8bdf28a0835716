//! Command frame layouts shared by the DACxx11 family.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::OperatingMode;

/// Width of the data field in the 16-bit frame.
pub const SHORT_DATA_BITS: u8 = 14;
/// Offset of the data field in the 24-bit frame.
pub const LONG_DATA_SHIFT: u8 = 6;

/// 16-bit frame used by the 8/10/12/14-bit parts.
///
/// Lower resolutions are left-justified inside the 14-bit data field and padded
/// with trailing zeros.
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortFrame {
    // Left-justified DAC code (bits 13:0).
    pub data: B14,
    // Operating mode (bits 15:14).
    pub mode: OperatingMode,
}

impl From<u16> for ShortFrame {
    fn from(value: u16) -> Self {
        Self::from_bytes(value.to_le_bytes())
    }
}

impl From<ShortFrame> for u16 {
    fn from(value: ShortFrame) -> Self {
        u16::from_le_bytes(value.into_bytes())
    }
}

/// 24-bit frame used by the 16-bit DAC8411.
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongFrame {
    #[skip]
    __: B6,
    // DAC code (bits 21:6).
    pub data: B16,
    // Operating mode (bits 23:22).
    pub mode: OperatingMode,
}

impl From<u32> for LongFrame {
    fn from(value: u32) -> Self {
        let [b0, b1, b2, _] = value.to_le_bytes();
        Self::from_bytes([b0, b1, b2])
    }
}

impl From<LongFrame> for u32 {
    fn from(value: LongFrame) -> Self {
        let [b0, b1, b2] = value.into_bytes();
        u32::from_le_bytes([b0, b1, b2, 0])
    }
}

/// Wire image of a command frame, most-significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    bytes: [u8; 3],
    len: usize,
}

impl Frame {
    /// Bytes to clock out, in transmission order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Numeric value of the whole frame.
    pub fn value(&self) -> u32 {
        self.as_bytes()
            .iter()
            .fold(0, |acc, &byte| (acc << 8) | u32::from(byte))
    }

    /// Frame width in bits.
    pub fn bit_width(&self) -> usize {
        self.len * 8
    }
}

impl From<ShortFrame> for Frame {
    fn from(frame: ShortFrame) -> Self {
        let [msb, lsb] = u16::from(frame).to_be_bytes();
        Self {
            bytes: [msb, lsb, 0],
            len: 2,
        }
    }
}

impl From<LongFrame> for Frame {
    fn from(frame: LongFrame) -> Self {
        let [_, b2, b1, b0] = u32::from(frame).to_be_bytes();
        Self {
            bytes: [b2, b1, b0],
            len: 3,
        }
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mode bits sit above the 14-bit data field.
    #[test]
    fn short_frame_layout() {
        let frame = ShortFrame::new()
            .with_data(0x3FC0)
            .with_mode(OperatingMode::Pulldown100k);

        assert_eq!(u16::from(frame), 0b10_11_1111_1100_0000);
        let decoded = ShortFrame::from(u16::from(frame));
        assert_eq!(decoded.data(), 0x3FC0);
        assert_eq!(decoded.mode(), OperatingMode::Pulldown100k);
    }

    #[test]
    fn long_frame_layout() {
        let frame = LongFrame::new()
            .with_data(0xFFFF)
            .with_mode(OperatingMode::Normal);

        assert_eq!(u32::from(frame), 0x003F_FFC0);

        let power_down = LongFrame::new().with_mode(OperatingMode::HighImpedance);
        assert_eq!(u32::from(power_down), 0x00C0_0000);
    }

    #[test]
    fn wire_image_is_msb_first() {
        let short = Frame::from(ShortFrame::from(0x1234));
        assert_eq!(short.as_bytes(), &[0x12, 0x34]);
        assert_eq!(short.value(), 0x1234);
        assert_eq!(short.bit_width(), 16);

        let long = Frame::from(LongFrame::from(0x00AB_CDC0));
        assert_eq!(long.as_bytes(), &[0xAB, 0xCD, 0xC0]);
        assert_eq!(long.value(), 0x00AB_CDC0);
        assert_eq!(long.bit_width(), 24);
    }
}
