//! High-level DACxx11 device driver implementation.

use crate::config::{reference_voltage_valid, BusConfig};
use crate::encoder::{encode_power_down, encode_ratio, ratio_in_range};
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::interface::spi::SpiInterface;
use crate::interface::Dacxx11Interface;
use crate::params::{Part, PowerDownMode, Resolution, UnsupportedResolution};
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Synchronous driver for one DACxx11 chip.
///
/// The session starts unconfigured; [`setup`](Self::setup) binds the transport
/// and bus settings. Output and power-down requests before that fail with
/// [`Error::NotConfigured`] without touching the bus.
pub struct Dacxx11<IFACE> {
    resolution: Resolution,
    reference_voltage: f32,
    interface: Option<IFACE>,
    bus: Option<BusConfig>,
}

impl<IFACE> Dacxx11<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates an unconfigured session for the given resolution.
    pub const fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            reference_voltage: 0.0,
            interface: None,
            bus: None,
        }
    }

    /// Creates an unconfigured session for the given part.
    pub const fn for_part(part: Part) -> Self {
        Self::new(part.resolution())
    }

    /// 8-bit DAC5311.
    pub const fn dac5311() -> Self {
        Self::for_part(Part::Dac5311)
    }

    /// 10-bit DAC6311.
    pub const fn dac6311() -> Self {
        Self::for_part(Part::Dac6311)
    }

    /// 12-bit DAC7311.
    pub const fn dac7311() -> Self {
        Self::for_part(Part::Dac7311)
    }

    /// 14-bit DAC8311.
    pub const fn dac8311() -> Self {
        Self::for_part(Part::Dac8311)
    }

    /// 16-bit DAC8411.
    pub const fn dac8411() -> Self {
        Self::for_part(Part::Dac8411)
    }

    /// Consumes the driver and returns the bound interface, if any.
    pub fn release(self) -> Option<IFACE> {
        self.interface
    }

    /// Provides mutable access to the bound interface.
    pub fn interface_mut(&mut self) -> Option<&mut IFACE> {
        self.interface.as_mut()
    }

    // ==================================================================
    // == Session State =================================================
    // ==================================================================
    /// Native resolution of the session.
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Stored reference voltage in volts; `0.0` until configured.
    pub const fn reference_voltage(&self) -> f32 {
        self.reference_voltage
    }

    /// Bus settings committed by the last successful `setup`.
    pub fn bus_config(&self) -> Option<&BusConfig> {
        self.bus.as_ref()
    }

    /// Returns `true` once a transport has been bound.
    pub fn is_configured(&self) -> bool {
        self.interface.is_some()
    }
}

impl<SPI, CS> Dacxx11<SpiInterface<SPI, CS>>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    // ==================================================================
    // == SPI Convenience Setup =========================================
    // ==================================================================
    /// Binds an SPI bus and chip-select pin; see [`setup`](Self::setup).
    pub fn setup_spi(
        &mut self,
        spi: SPI,
        cs: CS,
        clock_rate_hz: u32,
        reference_voltage: f32,
    ) -> Result<(), <SpiInterface<SPI, CS> as Dacxx11Interface>::Error> {
        self.setup(SpiInterface::new(spi, cs), clock_rate_hz, reference_voltage)
    }

    /// Releases the driver, returning the SPI bus and chip-select pin if bound.
    pub fn release_spi(self) -> Option<(SPI, CS)> {
        self.release().map(SpiInterface::release)
    }
}

impl<IFACE, CommE> Dacxx11<IFACE>
where
    IFACE: Dacxx11Interface<Error = CommE>,
{
    // ==================================================================
    // == Construction From Raw Parameters ==============================
    // ==================================================================
    /// Creates an unconfigured session from a raw bit count.
    pub fn with_bits(bits: u8) -> Result<Self, CommE> {
        Resolution::try_from(bits)
            .map(Self::new)
            .map_err(|UnsupportedResolution(bits)| {
                warn!("unsupported resolution: {} bits", bits);
                Error::UnsupportedResolution
            })
    }

    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Binds `interface`, the SCLK rate and the reference voltage to this session.
    ///
    /// Either all parameters are committed or none are: a rejected clock rate
    /// or voltage, or a failure idling chip-select, leaves any earlier
    /// configuration in place. Calling it again replaces the previous binding.
    pub fn setup(
        &mut self,
        mut interface: IFACE,
        clock_rate_hz: u32,
        reference_voltage: f32,
    ) -> Result<(), CommE> {
        let bus = BusConfig::new().clock_rate_hz(clock_rate_hz).build();
        if bus.validate().is_err() {
            warn!("clock rate rejected: {} Hz", clock_rate_hz);
            return Err(Error::InvalidArgument);
        }
        if !reference_voltage_valid(reference_voltage) {
            warn!("reference voltage rejected: {} V", reference_voltage);
            return Err(Error::InvalidArgument);
        }

        interface.init(&bus).map_err(Error::Interface)?;

        self.interface = Some(interface);
        self.bus = Some(bus);
        self.reference_voltage = reference_voltage;
        debug!(
            "setup: {} bits, {} Hz, vref {} V",
            self.resolution.bits(),
            clock_rate_hz,
            reference_voltage
        );
        Ok(())
    }

    /// Updates the stored reference voltage; no bus traffic.
    pub fn reference_voltage_set(&mut self, voltage: f32) -> Result<(), CommE> {
        if !reference_voltage_valid(voltage) {
            warn!("reference voltage rejected: {} V", voltage);
            return Err(Error::InvalidArgument);
        }

        self.reference_voltage = voltage;
        Ok(())
    }

    // ==================================================================
    // == Output ========================================================
    // ==================================================================
    /// Sets the output to `ratio` of the reference voltage.
    ///
    /// `ratio` must lie in `[0.0, 1.0]`; the code is truncated, not rounded.
    pub fn output_ratio_set(&mut self, ratio: f32) -> Result<(), CommE> {
        if !ratio_in_range(ratio) {
            warn!("ratio rejected: {}", ratio);
            return Err(Error::InvalidArgument);
        }
        if self.interface.is_none() {
            return Err(Error::NotConfigured);
        }

        let frame = encode_ratio(ratio, self.resolution.bits())?;
        self.transmit(&frame)
    }

    /// Sets the output to an absolute voltage relative to the stored reference.
    ///
    /// Requests above the reference exceed a ratio of 1 and are rejected.
    pub fn output_voltage_set(&mut self, voltage: f32) -> Result<(), CommE> {
        if self.reference_voltage <= 0.0 {
            warn!("reference voltage not set");
            return Err(Error::InvalidArgument);
        }

        self.output_ratio_set(voltage / self.reference_voltage)
    }

    // ==================================================================
    // == Power Management ==============================================
    // ==================================================================
    /// Powers the output stage down into `mode`.
    ///
    /// The device stays powered down until the next output request.
    pub fn power_down(&mut self, mode: PowerDownMode) -> Result<(), CommE> {
        if self.interface.is_none() {
            return Err(Error::NotConfigured);
        }

        let frame = encode_power_down(mode, self.resolution.bits())?;
        self.transmit(&frame)
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================
    fn transmit(&mut self, frame: &Frame) -> Result<(), CommE> {
        let interface = self.interface.as_mut().ok_or(Error::NotConfigured)?;
        trace!("frame {:#x}", frame.as_bytes());
        interface.write_frame(frame.as_bytes()).map_err(Error::Interface)
    }
}
