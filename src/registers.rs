//! Register map, command codes and firmware sentinel values for the TMF8805.
//!
//! Addresses and sentinels are fixed by the device's firmware contract; see
//! the TMF8805 datasheet and application note AN000597.

/// Factory-default 7-bit bus address. The device is hardwired to it.
pub const DEFAULT_ADDRESS: u8 = 0x41;

/// Value the ID register reports for a TMF8805.
pub const CHIP_ID: u8 = 0x07;

/// APPID value while the bootloader is running.
pub const APP_BOOTLOADER: u8 = 0x80;
/// APPID value once the measurement application is running.
pub const APP_MEASUREMENT: u8 = 0xC0;

/// ENABLE register value that wakes the device CPU.
pub const ENABLE_CPU_ON: u8 = 0x01;
/// ENABLE register bit set once the CPU has come out of reset.
pub const ENABLE_CPU_READY: u8 = 1 << 6;

/// REGISTER_CONTENTS value published when a measurement result is available.
pub const CONTENT_RESULT: u8 = 0x55;
/// REGISTER_CONTENTS value published when factory calibration data is ready.
pub const CONTENT_CALIBRATION: u8 = 0x0A;

/// Result-ready bit in the INT_STATUS / INT_ENAB registers.
pub const INT_RESULT_MASK: u8 = 0x01;

/// STATUS register code: no (or no valid) factory calibration on the device.
pub const STATUS_MISSING_FACTORY_CALIBRATION: u8 = 39;

/// Longest distance the device can report, in millimetres.
pub const MAX_DISTANCE_MM: f32 = 2500.0;

/// Number of bytes in a factory calibration block.
pub const CALIBRATION_DATA_LEN: usize = 14;

/// Number of bytes in the result block read back after a measurement:
/// result number, result info, distance LSB, distance MSB.
pub const RESULT_BLOCK_LEN: usize = 4;

/// Algorithm state written alongside a calibration block (AN000597, p. 22).
pub const ALGO_STATE: [u8; 11] = [
    0xB1, 0xA9, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Register addresses of the TMF8805.
///
/// The factory calibration block shares the `0x20` window with
/// [`Register::ResultNumber`]; its meaning depends on the command last
/// written to [`Register::Command`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Currently running application (bootloader or measurement app).
    AppId = 0x00,
    /// Application revision, major field.
    AppRevMajor = 0x01,
    /// Requested application; writing 0xC0 loads the measurement app.
    AppReqId = 0x02,
    /// Command register of the measurement application.
    Command = 0x10,
    /// Previously executed command.
    Previous = 0x11,
    /// Application revision, minor field.
    AppRevMinor = 0x12,
    /// Application revision, patch field.
    AppRevPatch = 0x13,
    /// Device status code.
    Status = 0x1D,
    /// Announces what the 0x20 register window currently holds.
    RegisterContents = 0x1E,
    /// Rolling result counter; start of the result / calibration window.
    ResultNumber = 0x20,
    /// Reliability (bits 0-5) and measurement status (bits 6-7).
    ResultInfo = 0x21,
    /// Distance to the detected peak, LSB.
    DistancePeak0 = 0x22,
    /// Distance to the detected peak, MSB.
    DistancePeak1 = 0x23,
    /// Start of the writable algorithm-state block.
    StateDataWr0 = 0x2E,
    /// CPU enable / ready handshake register.
    Enable = 0xE0,
    /// Interrupt status flags.
    IntStatus = 0xE1,
    /// Interrupt enable mask.
    IntEnab = 0xE2,
    /// Chip identification.
    Id = 0xE3,
    /// Silicon revision.
    RevId = 0xE4,
}

/// Commands accepted by [`Register::Command`] while the measurement
/// application is running.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Trigger a single distance measurement.
    Measure = 0x02,
    /// Run the factory calibration cycle.
    FactoryCalibration = 0x0A,
    /// Announce a calibration block write.
    WriteCalibration = 0x0B,
    /// Stop any in-flight activity.
    Stop = 0xFF,
}
