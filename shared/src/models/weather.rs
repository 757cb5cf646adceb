//! Weather and evapotranspiration readings handed over by the provider

use serde::{Deserialize, Deserializer, Serialize};

use crate::validation::parse_measurement;

/// Readings needed to plan irrigation for one plot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    /// Today's measured ET in mm/day; `None` when the provider had nothing
    #[serde(default, deserialize_with = "lenient_optional_measurement")]
    pub et_today: Option<f64>,
    #[serde(default, deserialize_with = "lenient_measurement")]
    pub rainfall_today: f64,
    /// Forecast days starting tomorrow
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
}

impl WeatherReading {
    /// Forecast rainfall for days 1..=6, padded with 0.0 where missing
    pub fn forecast_rainfall(&self, days: usize) -> Vec<f64> {
        (0..days)
            .map(|i| self.forecast.get(i).map(|d| d.rainfall_mm).unwrap_or(0.0))
            .collect()
    }
}

/// One forecast day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    #[serde(default, alias = "precip_mm", alias = "precipitation", deserialize_with = "lenient_measurement")]
    pub rainfall_mm: f64,
}

/// Untyped provider value: number, numeric string, string with unit, or null
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMeasurement {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl RawMeasurement {
    fn value(self) -> Option<f64> {
        match self {
            RawMeasurement::Number(n) => Some(n),
            RawMeasurement::Text(s) => parse_measurement(&s),
            RawMeasurement::Other(_) => None,
        }
    }
}

/// Accepts 12.3, "12.3" or "12.3 mm"; anything else reads as 0.0
pub fn lenient_measurement<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawMeasurement>::deserialize(deserializer)?;
    Ok(raw.and_then(RawMeasurement::value).unwrap_or(0.0))
}

fn lenient_optional_measurement<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawMeasurement>::deserialize(deserializer)?;
    Ok(raw.and_then(RawMeasurement::value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_parses_unit_strings() {
        let reading: WeatherReading = serde_json::from_str(
            r#"{
                "et_today": "4.2 mm",
                "rainfall_today": "12.3 mm",
                "forecast": [{"rainfall_mm": 1.5}, {"precip_mm": "0.0 mm"}, {"precipitation": "n/a"}]
            }"#,
        )
        .unwrap();

        assert_eq!(reading.et_today, Some(4.2));
        assert_eq!(reading.rainfall_today, 12.3);
        assert_eq!(reading.forecast_rainfall(6), vec![1.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_missing_values_default() {
        let reading: WeatherReading =
            serde_json::from_str(r#"{"et_today": null, "rainfall_today": {"weird": true}}"#).unwrap();
        assert_eq!(reading.et_today, None);
        assert_eq!(reading.rainfall_today, 0.0);
        assert!(reading.forecast.is_empty());
    }
}
