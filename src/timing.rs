//! Poll budgets and fixed delays used by the bring-up and measurement
//! sequences.
//!
//! Every wait in the driver is a bounded retry count times a fixed
//! inter-poll delay. The constants are public so embedding applications can
//! size their own watchdogs, and so tests can drive the timeout paths
//! deterministically.

/// Settle time after driving the enable line high, before the first bus
/// access. The datasheet requires 1.6 ms minimum from power-up to I2C-ready;
/// this leaves comfortable margin.
pub const POWER_ON_DELAY_MS: u32 = 10;

/// Maximum number of ENABLE-register polls while waiting for the CPU-ready
/// bit after power-up.
pub const CPU_READY_RETRIES: u32 = 200;
/// Delay between CPU-ready polls. Worst case the CPU wait is
/// `CPU_READY_RETRIES` × this, i.e. 20 s.
pub const CPU_READY_POLL_INTERVAL_MS: u32 = 100;

/// Maximum number of APPID polls while waiting for the measurement
/// application to start after the load command.
pub const APP_READY_RETRIES: u32 = 500;
/// Delay between application-ready polls.
pub const APP_READY_POLL_INTERVAL_MS: u32 = 100;

/// Maximum number of REGISTER_CONTENTS polls while waiting for a triggered
/// measurement to complete.
pub const RESULT_READY_RETRIES: u32 = 500;
/// Delay between result-ready polls, sized to the device's measurement
/// cycle time (a few ms to tens of ms depending on conditions).
pub const RESULT_POLL_INTERVAL_MS: u32 = 10;

/// Maximum number of REGISTER_CONTENTS polls during a factory calibration
/// cycle. Calibration can take tens of seconds; the budget is
/// `FACTORY_CALIBRATION_RETRIES` × `FACTORY_CALIBRATION_POLL_INTERVAL_MS`,
/// i.e. 30 s.
pub const FACTORY_CALIBRATION_RETRIES: u32 = 600;
/// Delay between calibration-ready polls.
pub const FACTORY_CALIBRATION_POLL_INTERVAL_MS: u32 = 50;

/// Settle time between the calibration-ready announcement and reading the
/// calibration block.
pub const CALIBRATION_READ_DELAY_MS: u32 = 10;
