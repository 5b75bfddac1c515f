//! Catalog of supported payment structures.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::IncomeError;

/// Cardinality/timing family of an income source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStructureType {
    Monthly,
    BiMonthly,
    BiWeekly,
    Weekly,
    Quarterly,
    Irregular,
}

impl PaymentStructureType {
    pub const ALL: [PaymentStructureType; 6] = [
        PaymentStructureType::Monthly,
        PaymentStructureType::BiMonthly,
        PaymentStructureType::BiWeekly,
        PaymentStructureType::Weekly,
        PaymentStructureType::Quarterly,
        PaymentStructureType::Irregular,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStructureType::Monthly => "monthly",
            PaymentStructureType::BiMonthly => "bi-monthly",
            PaymentStructureType::BiWeekly => "bi-weekly",
            PaymentStructureType::Weekly => "weekly",
            PaymentStructureType::Quarterly => "quarterly",
            PaymentStructureType::Irregular => "irregular",
        }
    }
}

impl fmt::Display for PaymentStructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStructureType {
    type Err = IncomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        PaymentStructureType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| IncomeError::UnknownStructure(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPeriod {
    Month,
    Year,
}

impl PaymentPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentPeriod::Month => "month",
            PaymentPeriod::Year => "year",
        }
    }
}

/// Immutable catalog entry describing how many payments land in a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStructure {
    #[serde(rename = "type")]
    pub kind: PaymentStructureType,
    pub payments_per_period: u32,
    pub period: PaymentPeriod,
    pub description: String,
}

impl PaymentStructure {
    fn entry(
        kind: PaymentStructureType,
        payments_per_period: u32,
        period: PaymentPeriod,
        description: &str,
    ) -> Self {
        Self {
            kind,
            payments_per_period,
            period,
            description: description.to_string(),
        }
    }

    /// Nominal number of payments across a calendar year.
    pub fn payments_per_year(&self) -> u32 {
        match self.period {
            PaymentPeriod::Month => self.payments_per_period * 12,
            PaymentPeriod::Year => self.payments_per_period,
        }
    }
}

static STRUCTURES: Lazy<Vec<PaymentStructure>> = Lazy::new(|| {
    use PaymentPeriod::{Month, Year};
    use PaymentStructureType::*;
    vec![
        PaymentStructure::entry(Monthly, 1, Month, "Once a month"),
        PaymentStructure::entry(BiMonthly, 2, Month, "Twice a month"),
        PaymentStructure::entry(BiWeekly, 26, Year, "Every two weeks"),
        PaymentStructure::entry(Weekly, 52, Year, "Every week"),
        PaymentStructure::entry(Quarterly, 4, Year, "Every three months"),
        PaymentStructure::entry(Irregular, 12, Year, "Varies by project"),
    ]
});

/// All selectable payment structures, in display order.
pub fn structure_options() -> &'static [PaymentStructure] {
    &STRUCTURES
}

/// Catalog entry for `kind`. Selection copies this value.
pub fn structure_for(kind: PaymentStructureType) -> PaymentStructure {
    // The catalog lists every type exactly once, in declaration order.
    STRUCTURES[kind as usize].clone()
}
