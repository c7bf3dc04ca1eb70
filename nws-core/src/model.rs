//! Wire types for the three NWS endpoints we touch, plus the text
//! formatting applied before anything is shown to a caller.

use serde::Deserialize;

/// Separator between formatted alert/period blocks.
pub(crate) const BLOCK_SEPARATOR: &str = "\n---\n";

fn unknown(value: Option<&str>) -> &str {
    value.unwrap_or("Unknown")
}

/// Response of `GET /alerts/active/area/{region}`.
#[derive(Debug, Deserialize)]
pub struct AlertCollection {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

/// Alert payload. The NWS feed omits fields freely, so everything we
/// read is optional and rendered as "Unknown" when absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertProperties {
    pub event: Option<String>,
    pub area_desc: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
}

impl AlertFeature {
    /// One human-readable block per alert.
    pub fn format(&self) -> String {
        let props = &self.properties;
        format!(
            "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
            unknown(props.event.as_deref()),
            unknown(props.area_desc.as_deref()),
            unknown(props.severity.as_deref()),
            unknown(props.description.as_deref()),
            unknown(props.instruction.as_deref()),
        )
    }
}

/// Response of `GET /points/{lat},{lon}`. Only the forecast URL matters.
#[derive(Debug, Deserialize)]
pub struct GridPoint {
    pub properties: GridPointProperties,
}

#[derive(Debug, Deserialize)]
pub struct GridPointProperties {
    pub forecast: Option<String>,
}

/// Response of the forecast URL resolved from a grid point.
#[derive(Debug, Deserialize)]
pub struct Forecast {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub name: String,
    pub temperature: f64,
    pub temperature_unit: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub short_forecast: String,
}

impl ForecastPeriod {
    /// One human-readable block per forecast period.
    pub fn format(&self) -> String {
        format!(
            "{}:\nTemperature: {}°{}\nWind: {} {}\nForecast: {}",
            self.name,
            self.temperature,
            self.temperature_unit,
            self.wind_speed,
            self.wind_direction,
            self.short_forecast,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(props: AlertProperties) -> AlertFeature {
        AlertFeature { properties: props }
    }

    #[test]
    fn alert_block_lists_all_fields() {
        let block = feature(AlertProperties {
            event: Some("Flood Warning".into()),
            area_desc: Some("Coastal".into()),
            severity: Some("Severe".into()),
            description: Some("Heavy rain".into()),
            instruction: Some("Move to higher ground".into()),
        })
        .format();

        assert_eq!(
            block,
            "Event: Flood Warning\n\
             Area: Coastal\n\
             Severity: Severe\n\
             Description: Heavy rain\n\
             Instructions: Move to higher ground"
        );
    }

    #[test]
    fn missing_alert_fields_become_unknown() {
        let block = feature(AlertProperties::default()).format();

        assert_eq!(block.matches("Unknown").count(), 5);
    }

    #[test]
    fn alert_properties_deserialize_from_camel_case() {
        let props: AlertProperties = serde_json::from_str(
            r#"{"event": "Flood Warning", "areaDesc": "Coastal", "instruction": null}"#,
        )
        .expect("alert properties must parse");

        assert_eq!(props.event.as_deref(), Some("Flood Warning"));
        assert_eq!(props.area_desc.as_deref(), Some("Coastal"));
        assert!(props.instruction.is_none());
        assert!(props.severity.is_none());
    }

    #[test]
    fn period_block_formats_temperature_and_wind() {
        let period = ForecastPeriod {
            name: "Tonight".into(),
            temperature: 55.0,
            temperature_unit: "F".into(),
            wind_speed: "5 mph".into(),
            wind_direction: "NW".into(),
            short_forecast: "Clear".into(),
        };

        let block = period.format();
        assert!(block.starts_with("Tonight:"));
        assert!(block.contains("Temperature: 55°F"));
        assert!(block.contains("Wind: 5 mph NW"));
        assert!(block.contains("Forecast: Clear"));
    }
}
