//! Calendar-placement rules offered for each payment structure.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::structure::{PaymentStructure, PaymentStructureType};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleType {
    FixedDates,
    DayPattern,
    Custom,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DayPattern {
    FirstFriday,
    LastFriday,
    EveryFriday,
    BiWeeklyFriday,
}

/// A selected (never computed) calendar rule realizing a structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentSchedule {
    #[serde(rename = "type")]
    pub kind: ScheduleType,
    /// Days of month in `1..=31`, ascending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<DayPattern>,
    pub description: String,
}

impl PaymentSchedule {
    pub fn fixed_dates(dates: &[u8], description: impl Into<String>) -> Self {
        let mut dates: Vec<u8> = dates
            .iter()
            .copied()
            .filter(|day| (1..=31).contains(day))
            .collect();
        dates.sort_unstable();
        dates.dedup();
        Self {
            kind: ScheduleType::FixedDates,
            dates: Some(dates),
            pattern: None,
            description: description.into(),
        }
    }

    pub fn day_pattern(pattern: DayPattern, description: impl Into<String>) -> Self {
        Self {
            kind: ScheduleType::DayPattern,
            dates: None,
            pattern: Some(pattern),
            description: description.into(),
        }
    }

    pub fn custom() -> Self {
        Self {
            kind: ScheduleType::Custom,
            dates: None,
            pattern: None,
            description: "Custom schedule".into(),
        }
    }
}

static SCHEDULES: Lazy<HashMap<PaymentStructureType, Vec<PaymentSchedule>>> = Lazy::new(|| {
    use PaymentStructureType::*;
    let mut table = HashMap::new();
    table.insert(
        Monthly,
        vec![
            PaymentSchedule::fixed_dates(&[1], "1st of each month"),
            PaymentSchedule::fixed_dates(&[15], "15th of each month"),
            PaymentSchedule::fixed_dates(&[31], "Last day of each month"),
            PaymentSchedule::day_pattern(DayPattern::FirstFriday, "First Friday of each month"),
            PaymentSchedule::day_pattern(DayPattern::LastFriday, "Last Friday of each month"),
            PaymentSchedule::custom(),
        ],
    );
    table.insert(
        BiMonthly,
        vec![
            PaymentSchedule::fixed_dates(&[1, 15], "1st and 15th"),
            PaymentSchedule::fixed_dates(&[15, 31], "15th and last day"),
            PaymentSchedule::custom(),
        ],
    );
    table.insert(
        BiWeekly,
        vec![
            PaymentSchedule::day_pattern(DayPattern::BiWeeklyFriday, "Every other Friday"),
            PaymentSchedule::custom(),
        ],
    );
    table.insert(
        Weekly,
        vec![
            PaymentSchedule::day_pattern(DayPattern::EveryFriday, "Every Friday"),
            PaymentSchedule::custom(),
        ],
    );
    table.insert(
        Quarterly,
        vec![
            PaymentSchedule::fixed_dates(&[1], "First day of each quarter"),
            PaymentSchedule::custom(),
        ],
    );
    table.insert(Irregular, vec![PaymentSchedule::custom()]);
    table
});

/// Schedules offered for the given structure. Any structure offers at least
/// the custom option.
pub fn schedule_options_for(structure: &PaymentStructure) -> &'static [PaymentSchedule] {
    SCHEDULES
        .get(&structure.kind)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
