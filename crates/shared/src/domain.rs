use serde::{Deserialize, Serialize};

use crate::error::ApiException;

/// Dropdown value that stands for "no site filter".
pub const ALL_SITES_VALUE: &str = "ALL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    pub fn as_u8(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, OutcomeClass::Success)
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = ApiException;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(ApiException::validation(format!(
                "outcome class must be 0 or 1, got {other}"
            ))),
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(value: OutcomeClass) -> Self {
        value.as_u8()
    }
}

/// One launch attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub class: OutcomeClass,
    pub booster_version_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_VALUE,
            SiteSelection::Site(site) => site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES_VALUE.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

/// Closed payload interval `[low, high]` in kilograms. On the wire it is the
/// two-element array a range slider emits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, ApiException> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ApiException::validation(
                "payload range bounds must be finite",
            ));
        }
        if low > high {
            return Err(ApiException::validation(format!(
                "payload range is inverted: [{low}, {high}]"
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = ApiException;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(value: PayloadRange) -> Self {
        [value.low, value.high]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_selection_uses_all_sentinel_on_the_wire() {
        let all: SiteSelection = serde_json::from_str("\"ALL\"").expect("json");
        assert_eq!(all, SiteSelection::All);

        let site: SiteSelection = serde_json::from_str("\"KSC LC-39A\"").expect("json");
        assert_eq!(site, SiteSelection::Site("KSC LC-39A".into()));
        assert_eq!(serde_json::to_string(&site).expect("json"), "\"KSC LC-39A\"");
    }

    #[test]
    fn payload_range_is_inclusive_on_both_ends() {
        let range = PayloadRange::new(1000.0, 5000.0).expect("range");
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(5000.1));
    }

    #[test]
    fn payload_range_rejects_inverted_bounds() {
        assert!(PayloadRange::new(10.0, 1.0).is_err());
        assert!(PayloadRange::new(f64::NAN, 1.0).is_err());
        assert!(serde_json::from_str::<PayloadRange>("[5000, 100]").is_err());

        let range: PayloadRange = serde_json::from_str("[0, 10000]").expect("json");
        assert_eq!(range.high(), 10000.0);
    }

    #[test]
    fn outcome_class_accepts_only_binary_values() {
        assert_eq!(OutcomeClass::try_from(1).expect("class"), OutcomeClass::Success);
        assert!(OutcomeClass::try_from(2).is_err());
    }
}
