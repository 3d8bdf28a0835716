//! SPI interface implementation built on top of `embedded-hal` `SpiBus` and `OutputPin`.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use super::Dacxx11Interface;
use crate::config::BusConfig;

/// Errors reported by [`SpiInterface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiInterfaceError<SpiE, PinE> {
    /// The SPI bus failed to shift out the frame.
    Spi(SpiE),
    /// The chip-select pin could not be driven.
    Pin(PinE),
}

/// SPI-based interface with a driver-controlled chip-select line.
///
/// The bus must already run in mode 0, MSB first, at or below the rate
/// passed to `setup`; `embedded-hal` buses are configured when they are built.
/// The `clock_rate_hz` handed to [`init`](Dacxx11Interface::init) is advisory:
/// this interface only logs it and never reconfigures SCLK.
/// `SpiBus` and `OutputPin` are implemented for `&mut T`, so both handles may
/// be borrowed instead of moved in.
pub struct SpiInterface<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiInterface<SPI, CS> {
    /// Creates a new interface from the SPI bus and chip-select pin.
    pub const fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Consumes the interface and returns the bus and chip-select pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Dacxx11Interface for SpiInterface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = SpiInterfaceError<SPI::Error, CS::Error>;

    fn init(&mut self, bus: &BusConfig) -> core::result::Result<(), Self::Error> {
        trace!("spi init at {} Hz", bus.clock_rate_hz);
        self.cs.set_high().map_err(SpiInterfaceError::Pin)
    }

    fn write_frame(&mut self, frame: &[u8]) -> core::result::Result<(), Self::Error> {
        if frame.is_empty() {
            return Ok(());
        }

        self.cs.set_low().map_err(SpiInterfaceError::Pin)?;
        let written = self
            .spi
            .write(frame)
            .and_then(|()| self.spi.flush())
            .map_err(SpiInterfaceError::Spi);
        let released = self.cs.set_high().map_err(SpiInterfaceError::Pin);

        written.and(released)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{SpiInterface, SpiInterfaceError};
    use crate::config::BusConfig;
    use crate::interface::Dacxx11Interface;
    use embedded_hal::spi::{ErrorKind, ErrorType, SpiBus};
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock,
        State as PinState,
        Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
    use embedded_hal_mock::eh1::MockError;
    use std::io::ErrorKind as IoErrorKind;
    use std::vec;

    struct FailingBus;

    impl ErrorType for FailingBus {
        type Error = ErrorKind;
    }

    impl SpiBus for FailingBus {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Overrun)
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn init_idles_chip_select_high() {
        let mut spi = SpiMock::<u8>::new(&[]);
        let mut cs = PinMock::new(&[PinTransaction::set(PinState::High)]);

        let mut interface = SpiInterface::new(&mut spi, &mut cs);
        interface.init(&BusConfig::default()).unwrap();

        spi.done();
        cs.done();
    }

    #[test]
    fn write_frame_is_framed_by_chip_select() {
        let mut spi = SpiMock::new(&[
            SpiTransaction::write_vec(vec![0x3F, 0xFF, 0xC0]),
            SpiTransaction::flush(),
        ]);
        let mut cs = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        let mut interface = SpiInterface::new(&mut spi, &mut cs);
        interface.write_frame(&[0x3F, 0xFF, 0xC0]).unwrap();

        spi.done();
        cs.done();
    }

    #[test]
    fn write_frame_ignores_empty_payload() {
        let mut spi = SpiMock::<u8>::new(&[]);
        let mut cs = PinMock::new(&[]);

        let mut interface = SpiInterface::new(&mut spi, &mut cs);
        interface.write_frame(&[]).unwrap();

        spi.done();
        cs.done();
    }

    #[test]
    fn chip_select_released_when_bus_fails() {
        let mut cs = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        let mut interface = SpiInterface::new(FailingBus, &mut cs);
        let result = interface.write_frame(&[0x12, 0x34]);
        assert!(matches!(
            result,
            Err(SpiInterfaceError::Spi(ErrorKind::Overrun))
        ));

        cs.done();
    }

    #[test]
    fn chip_select_release_failure_is_reported() {
        let mut spi = SpiMock::new(&[
            SpiTransaction::write_vec(vec![0x12, 0x34]),
            SpiTransaction::flush(),
        ]);
        let mut cs = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High)
                .with_error(MockError::Io(IoErrorKind::NotConnected)),
        ]);

        let mut interface = SpiInterface::new(&mut spi, &mut cs);
        let result = interface.write_frame(&[0x12, 0x34]);
        assert!(matches!(result, Err(SpiInterfaceError::Pin(_))));

        spi.done();
        cs.done();
    }

    #[test]
    fn release_returns_handles() {
        let mut spi = SpiMock::<u8>::new(&[]);
        let mut cs = PinMock::new(&[]);

        let interface = SpiInterface::new(&mut spi, &mut cs);
        let (_spi, _cs) = interface.release();

        spi.done();
        cs.done();
    }
}
