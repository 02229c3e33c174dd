use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The end goal a visitor is converting towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionType {
    Signup,
    DemoRequest,
    Waitlist,
}

impl ConversionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConversionType::Signup => "signup",
            ConversionType::DemoRequest => "demo_request",
            ConversionType::Waitlist => "waitlist",
        }
    }
}

impl fmt::Display for ConversionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signup" => Ok(ConversionType::Signup),
            "demo_request" => Ok(ConversionType::DemoRequest),
            "waitlist" => Ok(ConversionType::Waitlist),
            other => Err(format!("unknown conversion type: {}", other)),
        }
    }
}

/// One reportable user action.
///
/// Only `event_name` and `properties` reach the analytics payload; the other
/// fields are context a caller may carry along for its own bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub event_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub user_agent: String,
}

impl AnalyticsEvent {
    pub fn named(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            ..Self::default()
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionEvent {
    #[serde(flatten)]
    pub event: AnalyticsEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_type: Option<ConversionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, rename = "funnel_step", skip_serializing_if = "Option::is_none")]
    pub funnel_step: Option<String>,
}

impl ConversionEvent {
    pub fn new(conversion_type: ConversionType) -> Self {
        Self {
            conversion_type: Some(conversion_type),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_type_round_trips_through_its_label() {
        for ct in [ConversionType::Signup, ConversionType::DemoRequest, ConversionType::Waitlist] {
            assert_eq!(ct.as_str().parse::<ConversionType>(), Ok(ct));
        }
        assert!("newsletter".parse::<ConversionType>().is_err());
    }

    #[test]
    fn conversion_type_serializes_as_snake_case() {
        let json = serde_json::to_value(ConversionType::DemoRequest).unwrap();
        assert_eq!(json, serde_json::json!("demo_request"));
    }
}
