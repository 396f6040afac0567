//! # TMF8805 Time-of-Flight Distance Sensor Driver
//!
//! A platform-agnostic, blocking, `no_std` driver for the ams OSRAM TMF8805
//! time-of-flight distance sensor, built around the device's bring-up and
//! measurement protocol: power-up handshake, measurement-application load,
//! readiness polling, measurement trigger and result-block decoding.
//!
//! The driver consumes its platform through three narrow traits, a
//! register-addressed bus transport, the enable line and a millisecond delay
//! ([`Tmf8805Bus`], [`Tmf8805EnablePin`], [`Tmf8805Delay`]), so the protocol
//! state machine can be exercised against injected fakes. Adapters for
//! `embedded-hal` 1.0 peripherals live in the [`hal`] module.
//!
//! ## Basic usage
//!
//! ```rust,no_run
//! use tmf8805::hal::{Delay, I2cBus};
//! use tmf8805::{Config, Tmf8805, Tmf8805EnablePin};
//!
//! // Whatever drives the sensor's EN line on your board.
//! struct Enable;
//! impl Tmf8805EnablePin for Enable {
//!     fn set_high(&mut self) {}
//!     fn set_low(&mut self) {}
//! }
//!
//! let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! let delay = embedded_hal_mock::eh1::delay::NoopDelay;
//!
//! let config = Config::new().bus_frequency_hz(400_000);
//! let mut sensor = Tmf8805::new(I2cBus(i2c), Enable, Delay(delay), config).unwrap();
//!
//! sensor.initialize().unwrap();
//! let measurement = sensor.get_measurement().unwrap();
//! let _distance_mm = measurement.distance_mm;
//! ```
//!
//! A handle exclusively owns its bus, enable pin and delay source. It holds
//! no locking of its own: sharing one across contexts requires external
//! mutual exclusion.

#![no_std]
#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate std;

mod fmt; // must be first: exports the logging macros to the rest of the crate

pub mod config;
pub mod diag;
pub mod driver;
pub mod error;
pub mod hal;
pub mod hal_traits;
pub mod measurement;
pub mod registers;
pub mod timing;

// Re-export key types for convenience
pub use config::{CalibrationData, Config, ConfigError};
pub use diag::{DiagnosticObserver, NoOpObserver};
pub use driver::{AppVersion, DeviceStatus, State, Tmf8805};
pub use error::Error;
pub use hal_traits::{Tmf8805Bus, Tmf8805Delay, Tmf8805EnablePin};
pub use measurement::Measurement;
pub use registers::Register;
