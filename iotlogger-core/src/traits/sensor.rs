//! Ambient light and temperature sensor traits

/// Errors that can occur while reading a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transaction failed or device did not acknowledge
    NotResponding,
    /// Reading out of expected range
    OutOfRange,
    /// Sensor has been disabled by the application
    Disabled,
}

/// Sensors the application can switch on and off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorKind {
    Temperature,
    Light,
}

impl SensorKind {
    pub const fn name(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Light => "light",
        }
    }
}

/// Analog ambient light sensor
pub trait LightSource {
    /// Raw light level, 0 is dark and `u16::MAX` is saturated
    fn sample(&mut self) -> u16;
}

/// Temperature sensor
///
/// Implementations handle the specific part (ADT7410 over I2C on the
/// reference board).
pub trait TemperatureSensor {
    /// Current temperature in degrees Celsius
    fn read_celsius(&mut self) -> Result<f32, SensorError>;
}
