#![no_std]

#[macro_use]
mod log;

mod error;

pub mod config;
pub mod device;
pub mod encoder;
pub mod frame;
pub mod interface;
pub mod params;

pub use crate::device::Dacxx11;
pub use crate::error::{status_code, Error, Result};
pub use crate::params::{Part, PowerDownMode, Resolution};
