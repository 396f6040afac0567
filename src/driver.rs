//! Bring-up and measurement sequencing for the TMF8805.

use crate::config::{CalibrationData, Config, ConfigError};
use crate::diag::{DiagnosticObserver, NoOpObserver};
use crate::error::Error;
use crate::hal_traits::{Tmf8805Bus, Tmf8805Delay, Tmf8805EnablePin};
use crate::measurement::Measurement;
use crate::registers::{
    Command, Register, ALGO_STATE, APP_MEASUREMENT, CALIBRATION_DATA_LEN, CHIP_ID,
    CONTENT_CALIBRATION, CONTENT_RESULT, ENABLE_CPU_ON, ENABLE_CPU_READY, INT_RESULT_MASK,
    RESULT_BLOCK_LEN, STATUS_MISSING_FACTORY_CALIBRATION,
};
use crate::timing;

/// Bring-up progress of a [`Tmf8805`] handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// `initialize()` has not completed.
    Uninitialized,
    /// Bring-up completed; measurements may be taken.
    Ready,
    /// The last bring-up attempt failed; a fresh `initialize()` is required.
    Faulted,
}

/// Measurement application revision as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppVersion {
    /// Major revision.
    pub major: u8,
    /// Minor revision.
    pub minor: u8,
    /// Patch level.
    pub patch: u8,
}

/// Decoded device status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceStatus {
    /// No (or no valid) factory calibration on the device; it falls back to
    /// default values.
    MissingFactoryCalibration,
    /// Any other status code, surfaced raw.
    Other(u8),
}

/// Driver for the TMF8805 time-of-flight distance sensor.
///
/// A handle exclusively owns its bus transport, enable pin and delay source
/// for its lifetime. It is a synchronous call/poll sequence driven by the
/// host loop: every wait is a bounded busy-wait with a fixed inter-poll
/// delay (see [`crate::timing`]), and no call can be cancelled mid-poll.
/// Calling a handle from multiple contexts requires external mutual
/// exclusion; none is enforced internally.
pub struct Tmf8805<BUS, EN, D, OBS = NoOpObserver> {
    bus: BUS,
    enable: EN,
    delay: D,
    config: Config,
    state: State,
    observer: OBS,
}

impl<BUS, EN, D> Tmf8805<BUS, EN, D, NoOpObserver>
where
    BUS: Tmf8805Bus,
    EN: Tmf8805EnablePin,
    D: Tmf8805Delay,
{
    /// Creates a handle with no diagnostic observer attached.
    ///
    /// Fails immediately if `config` holds values the device cannot support;
    /// no bus traffic happens until [`initialize`](Self::initialize).
    pub fn new(bus: BUS, enable: EN, delay: D, config: Config) -> Result<Self, ConfigError> {
        Self::with_observer(bus, enable, delay, config, NoOpObserver)
    }
}

impl<BUS, EN, D, OBS> Tmf8805<BUS, EN, D, OBS>
where
    BUS: Tmf8805Bus,
    EN: Tmf8805EnablePin,
    D: Tmf8805Delay,
    OBS: DiagnosticObserver,
{
    /// Creates a handle that surfaces raw register traffic through
    /// `observer` whenever [`Config::debug`] is set.
    pub fn with_observer(
        bus: BUS,
        enable: EN,
        delay: D,
        config: Config,
        observer: OBS,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Tmf8805 {
            bus,
            enable,
            delay,
            config,
            state: State::Uninitialized,
            observer,
        })
    }

    /// Current bring-up state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Releases the owned platform resources, consuming the handle.
    pub fn release(self) -> (BUS, EN, D) {
        (self.bus, self.enable, self.delay)
    }

    /// Runs the full bring-up sequence: power the sensor, wait for its CPU,
    /// load the measurement application and wait for it to start, then apply
    /// the configured calibration block if one was supplied.
    ///
    /// Idempotent: calling it again simply re-runs the sequence. On failure
    /// the handle is `Faulted` and the specific cause is returned; the
    /// driver never retries bring-up on its own.
    pub fn initialize(&mut self) -> Result<(), Error<BUS::Error>> {
        self.state = State::Uninitialized;
        match self.bring_up() {
            Ok(()) => {
                self.state = State::Ready;
                debug!("tmf8805: measurement application running");
                Ok(())
            }
            Err(e) => {
                self.state = State::Faulted;
                Err(e)
            }
        }
    }

    fn bring_up(&mut self) -> Result<(), Error<BUS::Error>> {
        self.enable.set_high();
        self.delay.delay_ms(timing::POWER_ON_DELAY_MS);

        let id = self.read_register(Register::Id)?;
        if id != CHIP_ID {
            return Err(Error::WrongChipId {
                found: id,
                expected: CHIP_ID,
            });
        }

        self.write_register(Register::Enable, ENABLE_CPU_ON)?;
        self.poll_register(
            Register::Enable,
            timing::CPU_READY_RETRIES,
            timing::CPU_READY_POLL_INTERVAL_MS,
            |v| v & ENABLE_CPU_READY != 0,
        )?
        .ok_or(Error::CpuReadyTimeout)?;

        self.write_register(Register::AppReqId, APP_MEASUREMENT)?;
        self.poll_register(
            Register::AppId,
            timing::APP_READY_RETRIES,
            timing::APP_READY_POLL_INTERVAL_MS,
            |v| v == APP_MEASUREMENT,
        )?
        .ok_or(Error::AppStartTimeout)?;

        // Arm the result-ready interrupt line. Result polling works either
        // way; the INT pin tracks REGISTER_CONTENTS only when enabled.
        self.write_register(Register::IntEnab, INT_RESULT_MASK)?;

        if let Some(calibration) = self.config.calibration {
            self.apply_calibration(&calibration)?;
        }

        Ok(())
    }

    /// Triggers a single measurement, waits for the result and decodes it.
    ///
    /// Requires a prior successful [`initialize`](Self::initialize);
    /// otherwise fails with [`Error::NotInitialized`] before any bus
    /// traffic. A failed reading (timeout or device-rejected result) leaves
    /// the handle `Ready`, so the caller may simply try again.
    pub fn get_measurement(&mut self) -> Result<Measurement, Error<BUS::Error>> {
        if self.state != State::Ready {
            return Err(Error::NotInitialized);
        }

        self.write_register(Register::Command, Command::Measure as u8)?;

        self.poll_register(
            Register::RegisterContents,
            timing::RESULT_READY_RETRIES,
            timing::RESULT_POLL_INTERVAL_MS,
            |v| v == CONTENT_RESULT,
        )?
        .ok_or(Error::ResultTimeout)?;

        let mut block = [0u8; RESULT_BLOCK_LEN];
        self.read_registers(Register::ResultNumber, &mut block)?;

        // Acknowledge before decoding so a rejected reading cannot wedge the
        // result-ready indication for the next trigger.
        self.clear_interrupt()?;

        match Measurement::decode(&block) {
            Ok(m) => {
                trace!(
                    "tmf8805: distance {} mm (reliability {})",
                    m.distance_mm,
                    m.reliability
                );
                Ok(m)
            }
            Err(status) => Err(Error::InvalidMeasurement { status }),
        }
    }

    /// Reads the device status register.
    pub fn device_status(&mut self) -> Result<DeviceStatus, Error<BUS::Error>> {
        let raw = self.read_register(Register::Status)?;
        Ok(match raw {
            STATUS_MISSING_FACTORY_CALIBRATION => DeviceStatus::MissingFactoryCalibration,
            other => DeviceStatus::Other(other),
        })
    }

    /// Reads the measurement application revision.
    ///
    /// Requires `Ready`: the revision registers belong to the measurement
    /// application, not the bootloader.
    pub fn app_version(&mut self) -> Result<AppVersion, Error<BUS::Error>> {
        if self.state != State::Ready {
            return Err(Error::NotInitialized);
        }
        Ok(AppVersion {
            major: self.read_register(Register::AppRevMajor)?,
            minor: self.read_register(Register::AppRevMinor)?,
            patch: self.read_register(Register::AppRevPatch)?,
        })
    }

    /// Reads the factory calibration block currently on the device.
    pub fn calibration(&mut self) -> Result<CalibrationData, Error<BUS::Error>> {
        if self.state != State::Ready {
            return Err(Error::NotInitialized);
        }
        let mut data = [0u8; CALIBRATION_DATA_LEN];
        // The calibration block shares the 0x20 register window with the
        // result block.
        self.read_registers(Register::ResultNumber, &mut data)?;
        Ok(CalibrationData(data))
    }

    /// Runs the device's factory calibration cycle and returns the new
    /// block.
    ///
    /// Needs a clean optical setup (40 mm+ of clearance, clean cover glass)
    /// and can take tens of seconds; see
    /// [`timing::FACTORY_CALIBRATION_RETRIES`].
    pub fn factory_calibration(&mut self) -> Result<CalibrationData, Error<BUS::Error>> {
        if self.state != State::Ready {
            return Err(Error::NotInitialized);
        }

        self.write_register(Register::Command, Command::FactoryCalibration as u8)?;
        self.poll_register(
            Register::RegisterContents,
            timing::FACTORY_CALIBRATION_RETRIES,
            timing::FACTORY_CALIBRATION_POLL_INTERVAL_MS,
            |v| v == CONTENT_CALIBRATION,
        )?
        .ok_or(Error::CalibrationTimeout)?;

        self.delay.delay_ms(timing::CALIBRATION_READ_DELAY_MS);
        self.calibration()
    }

    /// Writes a previously captured calibration block, plus the algorithm
    /// state the device expects alongside it.
    pub fn set_calibration(
        &mut self,
        calibration: &CalibrationData,
    ) -> Result<(), Error<BUS::Error>> {
        if self.state != State::Ready {
            return Err(Error::NotInitialized);
        }
        self.apply_calibration(calibration)
    }

    fn apply_calibration(
        &mut self,
        calibration: &CalibrationData,
    ) -> Result<(), Error<BUS::Error>> {
        self.write_register(Register::Command, Command::WriteCalibration as u8)?;
        self.write_registers(Register::ResultNumber, &calibration.0)?;
        self.write_registers(Register::StateDataWr0, &ALGO_STATE)
    }

    /// Acknowledges the result-ready indication. No-op if already clear.
    pub fn clear_interrupt(&mut self) -> Result<(), Error<BUS::Error>> {
        let status = self.read_register(Register::IntStatus)?;
        self.write_register(Register::IntStatus, status | INT_RESULT_MASK)
    }

    /// Stops any in-flight measurement activity on the device.
    pub fn stop(&mut self) -> Result<(), Error<BUS::Error>> {
        self.write_register(Register::Command, Command::Stop as u8)
    }

    /// Drops the enable line, powering the sensor down. The handle returns
    /// to `Uninitialized` and must be re-initialized before the next
    /// measurement.
    pub fn power_down(&mut self) {
        self.enable.set_low();
        self.state = State::Uninitialized;
    }

    // --- Register access helpers ---

    fn read_register(&mut self, reg: Register) -> Result<u8, Error<BUS::Error>> {
        let mut buf = [0u8; 1];
        self.read_registers(reg, &mut buf)?;
        Ok(buf[0])
    }

    fn read_registers(&mut self, reg: Register, buf: &mut [u8]) -> Result<(), Error<BUS::Error>> {
        self.bus
            .read_registers(self.config.address, reg as u8, buf)
            .map_err(Error::Bus)?;
        if self.config.debug {
            self.observer.register_read(reg, buf);
        }
        Ok(())
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<BUS::Error>> {
        self.write_registers(reg, &[value])
    }

    fn write_registers(&mut self, reg: Register, bytes: &[u8]) -> Result<(), Error<BUS::Error>> {
        self.bus
            .write_registers(self.config.address, reg as u8, bytes)
            .map_err(Error::Bus)?;
        if self.config.debug {
            self.observer.register_write(reg, bytes);
        }
        Ok(())
    }

    /// Polls `reg` until `accept` passes, performing at most `retries` reads
    /// spaced `interval_ms` apart. `Ok(None)` means the poll budget was
    /// exhausted without the register reaching the expected value.
    fn poll_register<F>(
        &mut self,
        reg: Register,
        retries: u32,
        interval_ms: u32,
        mut accept: F,
    ) -> Result<Option<u8>, Error<BUS::Error>>
    where
        F: FnMut(u8) -> bool,
    {
        for attempt in 0..retries {
            let value = self.read_register(reg)?;
            if accept(value) {
                return Ok(Some(value));
            }
            if attempt + 1 < retries {
                self.delay.delay_ms(interval_ms);
            }
        }
        warn!("tmf8805: poll budget exhausted (reg {})", reg as u8);
        Ok(None)
    }
}
