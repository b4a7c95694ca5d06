use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// A single validated climate measurement for a location.
///
/// `sea_level` uses arbitrary positive units where 0 means "not applicable".
/// Rainfall covers the provider's last measurement window, in millimetres;
/// `None` means no measurement, which is not the same as a dry window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateObservation {
    pub temperature: f64,
    pub humidity: f64,
    #[serde(default)]
    pub rainfall: Option<f64>,
    pub sea_level: f64,
    #[serde(alias = "extremeEvents")]
    pub extreme_event_count: u32,
    #[serde(alias = "airQuality")]
    pub air_quality_index: u32,
}

impl ClimateObservation {
    pub fn new(temperature: f64, humidity: f64, rainfall: f64) -> Self {
        Self {
            temperature,
            humidity,
            rainfall: Some(rainfall),
            sea_level: 0.0,
            extreme_event_count: 0,
            air_quality_index: 0,
        }
    }

    pub fn without_rainfall(mut self) -> Self {
        self.rainfall = None;
        self
    }

    pub fn with_sea_level(mut self, sea_level: f64) -> Self {
        self.sea_level = sea_level;
        self
    }

    pub fn with_extreme_events(mut self, count: u32) -> Self {
        self.extreme_event_count = count;
        self
    }

    pub fn with_air_quality(mut self, index: u32) -> Self {
        self.air_quality_index = index;
        self
    }
}

/// Raw reading as delivered by a weather provider or loaded from storage.
///
/// Missing rainfall stays missing and scores nothing. A missing sea level,
/// event count or air quality index defaults to zero. Temperature and
/// humidity are always required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObservationInput {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
    pub sea_level: Option<f64>,
    #[serde(alias = "extremeEvents")]
    pub extreme_event_count: Option<i64>,
    #[serde(alias = "airQuality")]
    pub air_quality_index: Option<i64>,
}

impl ObservationInput {
    /// Validate the reading and turn it into something the scoring core accepts.
    pub fn into_observation(self) -> ValidationResult<ClimateObservation> {
        let temperature = finite("temperature", required("temperature", self.temperature)?)?;
        let humidity = within("humidity", required("humidity", self.humidity)?, 0.0, 100.0)?;
        let rainfall = self
            .rainfall
            .map(|value| non_negative("rainfall", value))
            .transpose()?;
        let sea_level = non_negative("seaLevel", self.sea_level.unwrap_or(0.0))?;
        let extreme_event_count = count("extremeEventCount", self.extreme_event_count.unwrap_or(0))?;
        let air_quality_index = count("airQualityIndex", self.air_quality_index.unwrap_or(0))?;

        Ok(ClimateObservation {
            temperature,
            humidity,
            rainfall,
            sea_level,
            extreme_event_count,
            air_quality_index,
        })
    }
}

impl TryFrom<ObservationInput> for ClimateObservation {
    type Error = ValidationError;

    fn try_from(input: ObservationInput) -> Result<Self, Self::Error> {
        input.into_observation()
    }
}

fn required(field: &str, value: Option<f64>) -> ValidationResult<f64> {
    value.ok_or_else(|| ValidationError::MissingField(field.to_string()))
}

fn finite(field: &str, value: f64) -> ValidationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite {
            field: field.to_string(),
            value,
        })
    }
}

fn within(field: &str, value: f64, min: f64, max: f64) -> ValidationResult<f64> {
    let value = finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::InvalidRange {
            field: field.to_string(),
            min,
            max,
            value,
        });
    }
    Ok(value)
}

fn non_negative(field: &str, value: f64) -> ValidationResult<f64> {
    within(field, value, 0.0, f64::MAX)
}

fn count(field: &str, value: i64) -> ValidationResult<u32> {
    u32::try_from(value).map_err(|_| ValidationError::InvalidRange {
        field: field.to_string(),
        min: 0.0,
        max: u32::MAX as f64,
        value: value as f64,
    })
}
