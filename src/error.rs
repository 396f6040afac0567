//! Failure kinds surfaced by the driver.

/// Errors returned by [`Tmf8805`](crate::Tmf8805) operations.
///
/// `E` is the bus transport's own error type. Every failure is surfaced as a
/// distinguishable variant; the driver never converts one into a sentinel
/// return value and never retries beyond the bounded poll loops documented
/// in [`crate::timing`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying transport error (no-ack, bus timeout). Always propagated,
    /// never retried internally.
    #[error("bus error: {0:?}")]
    Bus(E),

    /// The ID register did not report a TMF8805. Bring-up is aborted before
    /// any further register traffic.
    #[error("unexpected chip id {found:#04x}, expected {expected:#04x}")]
    WrongChipId {
        /// Value the ID register actually reported.
        found: u8,
        /// Value a TMF8805 reports.
        expected: u8,
    },

    /// The device CPU never signalled ready after power-up; the device is
    /// not responding. Terminal for this `initialize()` call.
    #[error("device CPU not ready after power-up")]
    CpuReadyTimeout,

    /// The measurement application never reported running after the load
    /// command. Terminal for this `initialize()` call.
    #[error("measurement application failed to start")]
    AppStartTimeout,

    /// Factory calibration never produced data within its poll budget.
    #[error("factory calibration timed out")]
    CalibrationTimeout,

    /// A measurement was requested before a successful `initialize()`.
    /// No bus traffic is performed.
    #[error("controller not initialized")]
    NotInitialized,

    /// The result never became ready within the poll budget. The handle
    /// stays `Ready`; the caller may retry the whole call.
    #[error("measurement result not ready within the poll budget")]
    ResultTimeout,

    /// The device completed a measurement but flagged it invalid (no target,
    /// saturation, out of range). The handle stays `Ready`.
    #[error("device reported an invalid measurement (status {status:#04x})")]
    InvalidMeasurement {
        /// Raw status code from the result info byte.
        status: u8,
    },
}

// Allow mapping from the underlying transport error with `?`.
impl<E: core::fmt::Debug> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Bus(e)
    }
}
