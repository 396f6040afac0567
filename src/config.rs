//! Construction-time configuration, validated before the first bus access.

use crate::registers::{CALIBRATION_DATA_LEN, DEFAULT_ADDRESS};

/// Highest two-wire clock rate the device supports.
pub const MAX_BUS_FREQUENCY_HZ: u32 = 400_000;

/// A configuration value rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The requested bus clock exceeds what the device supports.
    #[error("bus frequency {requested} Hz exceeds the device maximum of {max} Hz")]
    BusFrequencyTooHigh {
        /// Frequency asked for.
        requested: u32,
        /// [`MAX_BUS_FREQUENCY_HZ`].
        max: u32,
    },

    /// A zero bus clock can never produce a transfer.
    #[error("bus frequency must be non-zero")]
    BusFrequencyZero,

    /// The address does not fit in 7 bits.
    #[error("{0:#04x} is not a valid 7-bit bus address")]
    InvalidAddress(u8),
}

/// Factory calibration block as stored on (and read back from) the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationData(pub [u8; CALIBRATION_DATA_LEN]);

/// Wiring and behaviour options for a [`Tmf8805`](crate::Tmf8805) handle.
///
/// Built once, validated by the constructor, and fixed for the lifetime of
/// the handle. The bus frequency is validated here but applied by whatever
/// configures the transport; the driver only checks it is one the device
/// can follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 7-bit bus address of the device.
    pub address: u8,
    /// Two-wire clock rate the transport runs at, in Hz.
    pub bus_frequency_hz: u32,
    /// Surface raw register traffic through the diagnostic observer.
    /// No effect on protocol behaviour.
    pub debug: bool,
    /// Calibration block to load during bring-up, if any.
    pub calibration: Option<CalibrationData>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address: DEFAULT_ADDRESS,
            bus_frequency_hz: 100_000,
            debug: false,
            calibration: None,
        }
    }
}

impl Config {
    /// A configuration with the factory-default address, a 100 kHz bus,
    /// diagnostics off and no calibration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the 7-bit bus address.
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Sets the two-wire clock rate in Hz.
    pub fn bus_frequency_hz(mut self, hz: u32) -> Self {
        self.bus_frequency_hz = hz;
        self
    }

    /// Enables or disables diagnostic register-traffic events.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Supplies a calibration block to load during bring-up.
    pub fn calibration(mut self, data: CalibrationData) -> Self {
        self.calibration = Some(data);
        self
    }

    /// Checks the configuration against the device's documented limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address > 0x7F {
            return Err(ConfigError::InvalidAddress(self.address));
        }
        if self.bus_frequency_hz == 0 {
            return Err(ConfigError::BusFrequencyZero);
        }
        if self.bus_frequency_hz > MAX_BUS_FREQUENCY_HZ {
            return Err(ConfigError::BusFrequencyTooHigh {
                requested: self.bus_frequency_hz,
                max: MAX_BUS_FREQUENCY_HZ,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
        assert_eq!(Config::new().address, DEFAULT_ADDRESS);
    }

    #[test]
    fn rejects_frequency_above_device_maximum() {
        let config = Config::new().bus_frequency_hz(1_000_000);
        assert_eq!(
            config.validate(),
            Err(ConfigError::BusFrequencyTooHigh {
                requested: 1_000_000,
                max: MAX_BUS_FREQUENCY_HZ,
            })
        );
    }

    #[test]
    fn rejects_zero_frequency() {
        let config = Config::new().bus_frequency_hz(0);
        assert_eq!(config.validate(), Err(ConfigError::BusFrequencyZero));
    }

    #[test]
    fn rejects_address_wider_than_seven_bits() {
        let config = Config::new().address(0x80);
        assert_eq!(config.validate(), Err(ConfigError::InvalidAddress(0x80)));
    }

    #[test]
    fn fastest_supported_bus_is_accepted() {
        let config = Config::new().bus_frequency_hz(MAX_BUS_FREQUENCY_HZ);
        assert_eq!(config.validate(), Ok(()));
    }
}
