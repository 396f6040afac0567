//! Adapters wiring `embedded-hal` 1.0 peripherals to the driver's traits.

use core::convert::Infallible;

use arrayvec::ArrayVec;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;

use crate::hal_traits::{Tmf8805Bus, Tmf8805Delay, Tmf8805EnablePin};
use crate::registers::CALIBRATION_DATA_LEN;

// Largest register-write payload the driver ever issues (a calibration
// block); the frame buffer adds one byte for the register offset.
const MAX_WRITE_LEN: usize = CALIBRATION_DATA_LEN;

/// Wraps an [`embedded_hal::i2c::I2c`] as a register-addressed transport.
///
/// Reads are a write of the register offset followed by a read in one
/// transaction; writes prepend the offset to the payload.
pub struct I2cBus<I2C>(pub I2C);

impl<I2C: I2c> Tmf8805Bus for I2cBus<I2C> {
    type Error = I2C::Error;

    fn read_registers(&mut self, address: u8, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.write_read(address, &[reg], buf)
    }

    fn write_registers(&mut self, address: u8, reg: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        // Capacity covers every write the driver issues.
        let mut frame: ArrayVec<u8, { MAX_WRITE_LEN + 1 }> = ArrayVec::new();
        frame.push(reg);
        frame.extend(bytes.iter().copied());
        self.0.write(address, &frame)
    }
}

/// Wraps an infallible [`OutputPin`] as the sensor's enable line.
pub struct EnablePin<P>(pub P);

impl<P: OutputPin<Error = Infallible>> Tmf8805EnablePin for EnablePin<P> {
    fn set_high(&mut self) {
        match self.0.set_high() {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }

    fn set_low(&mut self) {
        match self.0.set_low() {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }
}

/// Wraps a [`DelayNs`] as the driver's millisecond delay source.
pub struct Delay<D>(pub D);

impl<D: DelayNs> Tmf8805Delay for Delay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn i2c_bus_frames_register_reads() {
        let i2c = I2cMock::new(&[I2cTransaction::write_read(
            0x41,
            vec![0xE3],
            vec![0x07],
        )]);
        let mut bus = I2cBus(i2c);

        let mut buf = [0u8; 1];
        bus.read_registers(0x41, 0xE3, &mut buf).unwrap();
        assert_eq!(buf, [0x07]);

        bus.0.done();
    }

    #[test]
    fn i2c_bus_frames_register_writes() {
        let i2c = I2cMock::new(&[I2cTransaction::write(0x41, vec![0x10, 0x02])]);
        let mut bus = I2cBus(i2c);

        bus.write_registers(0x41, 0x10, &[0x02]).unwrap();

        bus.0.done();
    }

    #[test]
    fn i2c_bus_frames_block_writes() {
        let block = [0xAA; CALIBRATION_DATA_LEN];
        let mut expected = vec![0x20];
        expected.extend_from_slice(&block);
        let i2c = I2cMock::new(&[I2cTransaction::write(0x41, expected)]);
        let mut bus = I2cBus(i2c);

        bus.write_registers(0x41, 0x20, &block).unwrap();

        bus.0.done();
    }

    #[test]
    fn enable_pin_tracks_levels() {
        struct RecordedPin {
            high: bool,
        }
        impl embedded_hal::digital::ErrorType for RecordedPin {
            type Error = Infallible;
        }
        impl OutputPin for RecordedPin {
            fn set_low(&mut self) -> Result<(), Infallible> {
                self.high = false;
                Ok(())
            }
            fn set_high(&mut self) -> Result<(), Infallible> {
                self.high = true;
                Ok(())
            }
        }

        let mut pin = EnablePin(RecordedPin { high: false });
        pin.set_high();
        assert!(pin.0.high);
        pin.set_low();
        assert!(!pin.0.high);
    }
}
