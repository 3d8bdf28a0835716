//! Resolution-normalized command encoding.
//!
//! Every part of the family shares the same input register: a 14-bit data
//! field in a 16-bit frame, or a 16-bit field at bits 21:6 of a 24-bit frame for
//! the DAC8411. Codes narrower than the field are left-justified.

use crate::frame::{Frame, LongFrame, ShortFrame, SHORT_DATA_BITS};
use crate::params::{OperatingMode, PowerDownMode};

/// Reasons an encoding request can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Ratio outside `[0.0, 1.0]` (or NaN).
    InvalidArgument,
    /// Bit count is not one of 8, 10, 12, 14 or 16.
    UnsupportedResolution,
}

/// Returns `true` when `ratio` lies in `[0.0, 1.0]`.
#[inline]
pub fn ratio_in_range(ratio: f32) -> bool {
    (0.0..=1.0).contains(&ratio)
}

/// Scales the full-scale code of `resolution_bits` by `ratio`.
///
/// The product is truncated toward zero, never rounded, so the output matches
/// existing hardware installations bit for bit.
pub fn scale_code(ratio: f32, resolution_bits: u8) -> Result<u32, EncodeError> {
    if !ratio_in_range(ratio) {
        return Err(EncodeError::InvalidArgument);
    }
    if !is_supported(resolution_bits) {
        return Err(EncodeError::UnsupportedResolution);
    }

    let full_scale = (1u32 << resolution_bits) - 1;
    Ok((full_scale as f32 * ratio) as u32)
}

/// Encodes an output request expressed as a fraction of the reference voltage.
pub fn encode_ratio(ratio: f32, resolution_bits: u8) -> Result<Frame, EncodeError> {
    let code = scale_code(ratio, resolution_bits)?;
    frame_for(resolution_bits, code, OperatingMode::Normal)
}

/// Encodes a power-down command; the data field is left at zero.
pub fn encode_power_down(mode: PowerDownMode, resolution_bits: u8) -> Result<Frame, EncodeError> {
    frame_for(resolution_bits, 0, OperatingMode::from(mode))
}

fn is_supported(resolution_bits: u8) -> bool {
    matches!(resolution_bits, 8 | 10 | 12 | 14 | 16)
}

fn frame_for(resolution_bits: u8, code: u32, mode: OperatingMode) -> Result<Frame, EncodeError> {
    match resolution_bits {
        8 | 10 | 12 | 14 => {
            let data = (code as u16) << (SHORT_DATA_BITS - resolution_bits);
            Ok(ShortFrame::new().with_data(data).with_mode(mode).into())
        }
        16 => Ok(LongFrame::new().with_data(code as u16).with_mode(mode).into()),
        _ => Err(EncodeError::UnsupportedResolution),
    }
}
