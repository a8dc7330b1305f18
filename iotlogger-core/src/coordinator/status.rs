//! Status line catalog and log formatting

use core::fmt::Write;

use heapless::String;

use crate::config::TemperatureUnit;
use crate::registry::AreaText;

/// Messages shown on the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusMessage {
    Connect,
    Upload,
    Disconnect,
    Wait,
    Process,
    InitWifi,
    InitFeeds,
    Error,
}

impl StatusMessage {
    pub const fn text(&self) -> &'static str {
        match self {
            StatusMessage::Connect => "Connecting ...",
            StatusMessage::Upload => "Uploading data ...",
            StatusMessage::Disconnect => "Disconnecting ...",
            StatusMessage::Wait => "Waiting ...",
            StatusMessage::Process => "Processing ...",
            StatusMessage::InitWifi => "Initializing wifi ...",
            StatusMessage::InitFeeds => "Initializing feeds ...",
            StatusMessage::Error => "- ERROR -",
        }
    }
}

/// One set of sensor readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// Temperature in degrees Celsius, `None` if unavailable
    pub celsius: Option<f32>,
    /// Raw light level, `None` if unavailable
    pub light: Option<u16>,
}

/// Format a number with comma thousands separators
pub fn group_thousands(value: u16) -> String<8> {
    let mut digits: String<8> = String::new();
    let _ = write!(digits, "{}", value);
    let mut out = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            let _ = out.push(',');
        }
        let _ = out.push(c);
    }
    out
}

/// Log area text for a set of readings
///
/// Missing readings are shown as `--`.
pub fn format_log(readings: &Readings, unit: TemperatureUnit) -> AreaText {
    let mut text = AreaText::new();
    let _ = match readings.celsius {
        Some(c) => write!(
            text,
            "Temperature: {:.2}{}",
            unit.from_celsius(c),
            unit.symbol()
        ),
        None => write!(text, "Temperature: --"),
    };
    let _ = match readings.light {
        Some(light) => write!(text, "\nLight data:  {} lum", group_thousands(light)),
        None => write!(text, "\nLight data:  --"),
    };
    text
}
