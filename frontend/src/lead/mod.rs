//! Lead capture: the pricing-section form, its validation and submission.

mod controller;
mod submit;
mod validation;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analytics::ConversionType;

pub use controller::{FormStatus, FunnelStage, LeadFormController, SubmitOutcome, SubmitRejected};
pub use submit::{LeadSubmitter, SimulatedSubmitter, SubmitError};
pub use validation::{is_valid_email, Field, ValidationErrors};

/// Contact details handed to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub email: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub interests: Vec<String>,
}

/// The offer the pricing section is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SignupMode {
    #[default]
    FreeTrial,
    BetaAccess,
    Waitlist,
}

impl SignupMode {
    pub fn conversion_type(self) -> ConversionType {
        match self {
            SignupMode::FreeTrial => ConversionType::Signup,
            SignupMode::BetaAccess => ConversionType::DemoRequest,
            SignupMode::Waitlist => ConversionType::Waitlist,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignupMode::FreeTrial => "free-trial",
            SignupMode::BetaAccess => "beta-access",
            SignupMode::Waitlist => "waitlist",
        }
    }
}

impl fmt::Display for SignupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free-trial" => Ok(SignupMode::FreeTrial),
            "beta-access" => Ok(SignupMode::BetaAccess),
            "waitlist" => Ok(SignupMode::Waitlist),
            other => Err(format!("unknown signup mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_maps_to_conversion_type() {
        assert_eq!(SignupMode::FreeTrial.conversion_type(), ConversionType::Signup);
        assert_eq!(SignupMode::BetaAccess.conversion_type(), ConversionType::DemoRequest);
        assert_eq!(SignupMode::Waitlist.conversion_type(), ConversionType::Waitlist);
    }

    #[test]
    fn mode_parses_from_its_slug() {
        assert_eq!("beta-access".parse::<SignupMode>(), Ok(SignupMode::BetaAccess));
        assert!("enterprise".parse::<SignupMode>().is_err());
        assert_eq!(SignupMode::default(), SignupMode::FreeTrial);
    }

    #[test]
    fn record_serializes_camel_case_without_missing_interests() {
        let record = LeadRecord {
            email: "jane@example.com".into(),
            first_name: "Jane".into(),
            last_name: String::new(),
            interests: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "jane@example.com", "firstName": "Jane", "lastName": ""})
        );
    }
}
