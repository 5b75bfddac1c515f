use std::fmt;

use serde::{Deserialize, Serialize};

/// How often a user says an income source pays out.
///
/// Parsing never fails. Tokens outside the known set are kept verbatim in
/// [`Frequency::Unrecognized`] so the calculator can apply its explicit
/// fallback branches to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    Weekly,
    BiWeekly,
    #[default]
    Monthly,
    Quarterly,
    Irregular,
    Unrecognized(String),
}

impl Frequency {
    /// Stand-in for a record that never stated a frequency. Calculations
    /// treat it like any other unrecognized token.
    pub fn unspecified() -> Self {
        Frequency::Unrecognized(String::new())
    }

    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "weekly" => Frequency::Weekly,
            "bi-weekly" | "biweekly" => Frequency::BiWeekly,
            "monthly" => Frequency::Monthly,
            "quarterly" => Frequency::Quarterly,
            "irregular" => Frequency::Irregular,
            _ => Frequency::Unrecognized(token.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Irregular => "irregular",
            Frequency::Unrecognized(token) => token,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Frequency::Unrecognized(_))
    }
}

impl From<String> for Frequency {
    fn from(value: String) -> Self {
        Frequency::parse(&value)
    }
}

impl From<&str> for Frequency {
    fn from(value: &str) -> Self {
        Frequency::parse(value)
    }
}

impl From<Frequency> for String {
    fn from(value: Frequency) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
