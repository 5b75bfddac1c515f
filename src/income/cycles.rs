//! User-entered payment cycles: structural validation and list editing.

use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::{frequency::Frequency, locale::Locale};
use crate::errors::IncomeError;

const DEFAULT_CYCLE_LIMIT: usize = 4;

/// One payment entry within a period, e.g. "first half of month".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentCycle {
    /// Unique within the owning list. Generated ids are v4 UUIDs; ids coming
    /// from stored records are kept as-is.
    #[serde(default = "new_cycle_id")]
    pub id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

fn new_cycle_id() -> String {
    Uuid::new_v4().to_string()
}

impl PaymentCycle {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            id: new_cycle_id(),
            amount,
            description: description.into(),
        }
    }
}

/// Upper bound on the number of cycles a user may enter for `frequency`.
pub fn max_cycles_for_frequency(frequency: &Frequency) -> usize {
    match frequency {
        Frequency::Weekly => 4,
        Frequency::BiWeekly => 2,
        Frequency::Monthly => 4,
        Frequency::Quarterly => 3,
        Frequency::Irregular => 6,
        Frequency::Unrecognized(_) => DEFAULT_CYCLE_LIMIT,
    }
}

pub fn cycle_total(cycles: &[PaymentCycle]) -> f64 {
    cycles.iter().map(|cycle| cycle.amount).sum()
}

/// Returns advisory errors in display order; empty means valid.
pub fn validate_cycles(cycles: &[PaymentCycle], frequency: &Frequency) -> Vec<String> {
    validate_cycles_localized(cycles, frequency, Locale::default())
}

pub fn validate_cycles_localized(
    cycles: &[PaymentCycle],
    frequency: &Frequency,
    locale: Locale,
) -> Vec<String> {
    if cycles.is_empty() {
        return vec![locale.no_cycles().to_string()];
    }

    let mut errors = Vec::new();
    let limit = max_cycles_for_frequency(frequency);
    if cycles.len() > limit {
        errors.push(locale.too_many_cycles(limit, frequency));
    }

    for (index, cycle) in cycles.iter().enumerate() {
        let position = index + 1;
        if !(cycle.amount > 0.0) {
            errors.push(locale.cycle_amount_required(position));
        }
        if cycle.description.trim().is_empty() {
            errors.push(locale.cycle_description_required(position));
        }
    }
    errors
}

/// Starter cycles for a freshly selected frequency, each pre-filled with
/// `base_amount`.
pub fn default_cycles(frequency: &Frequency, base_amount: f64) -> Vec<PaymentCycle> {
    default_cycles_localized(frequency, base_amount, Locale::default())
}

pub fn default_cycles_localized(
    frequency: &Frequency,
    base_amount: f64,
    locale: Locale,
) -> Vec<PaymentCycle> {
    match frequency {
        Frequency::Weekly => (1..=4)
            .map(|n| PaymentCycle::new(base_amount, locale.week_label(n)))
            .collect(),
        Frequency::BiWeekly => (1..=2)
            .map(|n| PaymentCycle::new(base_amount, locale.payment_label(n)))
            .collect(),
        Frequency::Monthly => vec![PaymentCycle::new(base_amount, locale.monthly_payment())],
        _ => vec![PaymentCycle::new(base_amount, locale.generic_payment())],
    }
}

/// An editable cycle list bound to a frequency.
///
/// The list never shrinks below one entry and never grows past the
/// frequency's limit. Identifiers are unique within the list. Decoding goes
/// through the same checks as [`CycleSet::from_cycles`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CycleSet {
    frequency: Frequency,
    cycles: Vec<PaymentCycle>,
    locale: Locale,
}

#[derive(Deserialize)]
struct StoredCycleSet {
    frequency: Frequency,
    #[serde(default)]
    cycles: Vec<PaymentCycle>,
    #[serde(default)]
    locale: Locale,
}

impl<'de> Deserialize<'de> for CycleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = StoredCycleSet::deserialize(deserializer)?;
        CycleSet::restore(stored.frequency, stored.cycles, stored.locale)
            .map_err(de::Error::custom)
    }
}

impl CycleSet {
    pub fn new(frequency: Frequency, base_amount: f64) -> Self {
        Self::localized(frequency, base_amount, Locale::default())
    }

    pub fn localized(frequency: Frequency, base_amount: f64, locale: Locale) -> Self {
        let cycles = default_cycles_localized(&frequency, base_amount, locale);
        Self {
            frequency,
            cycles,
            locale,
        }
    }

    /// Wraps cycles loaded from a stored record. An empty list becomes the
    /// starter list, blank or repeated ids are replaced, and more cycles than
    /// the frequency allows is an error.
    pub fn from_cycles(
        frequency: Frequency,
        cycles: Vec<PaymentCycle>,
    ) -> Result<Self, IncomeError> {
        Self::restore(frequency, cycles, Locale::default())
    }

    fn restore(
        frequency: Frequency,
        cycles: Vec<PaymentCycle>,
        locale: Locale,
    ) -> Result<Self, IncomeError> {
        if cycles.is_empty() {
            return Ok(Self::localized(frequency, 0.0, locale));
        }
        let limit = max_cycles_for_frequency(&frequency);
        if cycles.len() > limit {
            return Err(IncomeError::CycleLimit {
                limit,
                frequency: frequency.to_string(),
            });
        }

        let mut set = Self {
            frequency,
            cycles: Vec::with_capacity(cycles.len()),
            locale,
        };
        for mut cycle in cycles {
            if cycle.id.trim().is_empty() || set.has_id(&cycle.id) {
                cycle.id = set.fresh_id();
            }
            set.cycles.push(cycle);
        }
        Ok(set)
    }

    fn has_id(&self, id: &str) -> bool {
        self.cycles.iter().any(|cycle| cycle.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = new_cycle_id();
            if !self.has_id(&id) {
                return id;
            }
        }
    }

    pub fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    pub fn cycles(&self) -> &[PaymentCycle] {
        &self.cycles
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn total(&self) -> f64 {
        cycle_total(&self.cycles)
    }

    pub fn add(
        &mut self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<String, IncomeError> {
        let limit = max_cycles_for_frequency(&self.frequency);
        if self.cycles.len() >= limit {
            return Err(IncomeError::CycleLimit {
                limit,
                frequency: self.frequency.to_string(),
            });
        }
        let id = self.fresh_id();
        self.cycles.push(PaymentCycle {
            id: id.clone(),
            amount,
            description: description.into(),
        });
        Ok(id)
    }

    pub fn update(
        &mut self,
        index: usize,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<(), IncomeError> {
        let cycle = self
            .cycles
            .get_mut(index)
            .ok_or(IncomeError::CycleIndex(index))?;
        cycle.amount = amount;
        cycle.description = description.into();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<PaymentCycle, IncomeError> {
        if index >= self.cycles.len() {
            return Err(IncomeError::CycleIndex(index));
        }
        if self.cycles.len() == 1 {
            return Err(IncomeError::LastCycle);
        }
        Ok(self.cycles.remove(index))
    }

    pub fn validate(&self) -> Vec<String> {
        validate_cycles_localized(&self.cycles, &self.frequency, self.locale)
    }

    pub fn into_cycles(self) -> Vec<PaymentCycle> {
        self.cycles
    }
}
