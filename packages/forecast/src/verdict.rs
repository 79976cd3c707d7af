use serde::{Deserialize, Serialize};

const TEMPERATURE: (i64, i64) = (13, 24);
const HUMIDITY: (i64, i64) = (30, 60);
const WIND_SPEED: (i64, i64) = (5, 15);

/// Current weather at a location, in metric units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// Air temperature two metres above ground, in °C.
    pub temperature: f64,
    /// Relative humidity two metres above ground, in %.
    pub relative_humidity: f64,
    /// Wind speed ten metres above ground, in km/h.
    pub wind_speed: f64,
    /// Wind gusts ten metres above ground, in km/h.
    pub wind_gusts: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub conditions: Conditions,
    pub is_wokky: bool,
    pub reasons: Vec<String>,
}

impl Verdict {
    pub fn new(conditions: Conditions) -> Self {
        let reasons = wokky_reasons(&conditions);
        Self {
            conditions,
            is_wokky: reasons.is_empty(),
            reasons,
        }
    }
}

/// Every reason `conditions` are unfit for wokking, empty if they are fine.
///
/// Readings are truncated to whole numbers before they are compared, and the
/// bounds are inclusive. Gusts are reported but never disqualify.
pub fn wokky_reasons(conditions: &Conditions) -> Vec<String> {
    let temperature = conditions.temperature as i64;
    let humidity = conditions.relative_humidity as i64;
    let wind_speed = conditions.wind_speed as i64;

    let mut reasons = Vec::new();

    if let Some(direction) = out_of(TEMPERATURE, temperature) {
        reasons.push(format!("{temperature}°C temperature too {direction}"));
    }
    if let Some(direction) = out_of(HUMIDITY, humidity) {
        reasons.push(format!("{humidity} % humidity too {direction}"));
    }
    if let Some(direction) = out_of(WIND_SPEED, wind_speed) {
        reasons.push(format!("{wind_speed} km/h wind speed too {direction}"));
    }

    reasons
}

fn out_of((low, high): (i64, i64), value: i64) -> Option<&'static str> {
    if value > high {
        Some("high")
    } else if value < low {
        Some("low")
    } else {
        None
    }
}
