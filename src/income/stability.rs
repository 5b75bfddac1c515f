//! Converts reported income ranges into conservative single figures.
//!
//! Two derivations coexist and must stay distinct:
//! [`conservative_base`] produces the figure stored on the income record,
//! while [`average_low`] feeds the live preview shown while the user is still
//! editing the range. Their seasonal weightings differ.

use serde::{Deserialize, Serialize};

use super::locale::Locale;

const SEASONAL_LOW_WEIGHT: f64 = 0.6;
const SEASONAL_HIGH_WEIGHT: f64 = 0.4;
const PREVIEW_SEASONAL_WEIGHT: f64 = 0.4;

/// Predictability classification of an income source.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StabilityPattern {
    #[default]
    Consistent,
    Seasonal,
    Variable,
}

impl StabilityPattern {
    /// Narrows to the patterns that are reported as a range.
    pub fn range_stability(self) -> Option<RangeStability> {
        match self {
            StabilityPattern::Consistent => None,
            StabilityPattern::Seasonal => Some(RangeStability::Seasonal),
            StabilityPattern::Variable => Some(RangeStability::Variable),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RangeStability {
    Seasonal,
    Variable,
}

impl From<RangeStability> for StabilityPattern {
    fn from(value: RangeStability) -> Self {
        match value {
            RangeStability::Seasonal => StabilityPattern::Seasonal,
            RangeStability::Variable => StabilityPattern::Variable,
        }
    }
}

/// Low/high monthly income bounds reported by the user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRange {
    #[serde(default)]
    pub lowest: f64,
    #[serde(default)]
    pub highest: f64,
    /// Derived from the bounds; see [`IncomeRange::refresh_average`].
    #[serde(default)]
    pub average_low: f64,
}

impl IncomeRange {
    pub fn new(lowest: f64, highest: f64) -> Self {
        Self {
            lowest,
            highest,
            average_low: 0.0,
        }
    }

    pub fn has_both_bounds(&self) -> bool {
        self.lowest > 0.0 && self.highest > 0.0
    }

    /// Re-derives `average_low` after an edit. Stays at zero until both bounds
    /// are positive.
    pub fn refresh_average(&mut self, stability: RangeStability) {
        self.average_low = if self.has_both_bounds() {
            average_low(self, stability)
        } else {
            0.0
        };
    }

    pub fn with_derived_average(mut self, stability: RangeStability) -> Self {
        self.refresh_average(stability);
        self
    }
}

/// Figure persisted as the record's base amount.
pub fn conservative_base(range: &IncomeRange, stability: RangeStability) -> f64 {
    match stability {
        RangeStability::Seasonal => {
            range.lowest * SEASONAL_LOW_WEIGHT + range.highest * SEASONAL_HIGH_WEIGHT
        }
        RangeStability::Variable => range.lowest,
    }
}

/// Live-editing preview figure.
pub fn average_low(range: &IncomeRange, stability: RangeStability) -> f64 {
    match stability {
        RangeStability::Seasonal => (range.lowest + range.highest) * PREVIEW_SEASONAL_WEIGHT,
        RangeStability::Variable => range.lowest,
    }
}

/// Returns advisory errors in display order; empty means acceptable.
pub fn validate_income_range(range: &IncomeRange) -> Vec<String> {
    validate_income_range_localized(range, Locale::default())
}

pub fn validate_income_range_localized(range: &IncomeRange, locale: Locale) -> Vec<String> {
    let mut errors = Vec::new();
    // `!(x > 0.0)` also rejects NaN.
    if !(range.lowest > 0.0) {
        errors.push(locale.lowest_required().to_string());
    }
    if !(range.highest > 0.0) {
        errors.push(locale.highest_required().to_string());
    }
    if range.has_both_bounds() && range.highest <= range.lowest {
        errors.push(locale.highest_not_above_lowest().to_string());
    }
    errors
}
