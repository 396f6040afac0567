//! Abstractions over the platform pieces the driver needs.
//!
//! The driver is written against these three traits rather than a concrete
//! HAL so the protocol state machine can be tested with injected fakes.
//! Adapters for `embedded-hal` 1.0 peripherals are provided in
//! [`crate::hal`].

use core::fmt::Debug;

/// A register-addressed two-wire bus transport.
///
/// Every operation blocks the calling context until it completes or the
/// transport gives up; the driver never overlaps transactions.
pub trait Tmf8805Bus {
    /// Transport-level error (no-ack, timeout).
    type Error: Debug;

    /// Reads `buf.len()` bytes starting at register `reg` of the device at
    /// the given 7-bit `address`.
    fn read_registers(&mut self, address: u8, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes `bytes` starting at register `reg` of the device at the given
    /// 7-bit `address`.
    fn write_registers(&mut self, address: u8, reg: u8, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// The digital output driving the sensor's enable line.
pub trait Tmf8805EnablePin {
    /// Drives the enable line high, powering the sensor.
    fn set_high(&mut self);

    /// Drives the enable line low, powering the sensor down.
    fn set_low(&mut self);
}

/// Blocking millisecond delay used between polls and after power-up.
pub trait Tmf8805Delay {
    /// Blocks the calling context for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}
