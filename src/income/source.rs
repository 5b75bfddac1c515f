//! Income records as reported by onboarding, and their resolved form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    cycles::{cycle_total, CycleSet, PaymentCycle},
    frequency::Frequency,
    schedule::PaymentSchedule,
    stability::{conservative_base, IncomeRange, RangeStability, StabilityPattern},
    structure::PaymentStructure,
};

/// Single recurring amount vs. an explicit list of differing cycle amounts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPattern {
    #[default]
    Simple,
    Complex,
}

/// Loosely-typed income record in the shape the onboarding flow emits.
///
/// Every field is optional. [`IncomeSource::from_record`] decides once which
/// calculation strategy applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct IncomeRecord {
    pub name: String,
    #[serde(default = "Frequency::unspecified")]
    pub frequency: Frequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_structure: Option<PaymentStructure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_schedule: Option<PaymentSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_pattern: Option<PaymentPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycles: Option<Vec<PaymentCycle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stability_pattern: Option<StabilityPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_range: Option<IncomeRange>,
    pub is_active: bool,
    pub is_primary: bool,
    pub is_foundational: bool,
}

impl Default for IncomeRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            frequency: Frequency::unspecified(),
            payment_structure: None,
            payment_schedule: None,
            amount: None,
            base_amount: None,
            payment_pattern: None,
            cycles: None,
            stability_pattern: None,
            income_range: None,
            is_active: true,
            is_primary: false,
            is_foundational: false,
        }
    }
}

impl IncomeRecord {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn cycle_list(&self) -> Option<&[PaymentCycle]> {
        self.cycles.as_deref().filter(|cycles| !cycles.is_empty())
    }
}

/// Where a structured income's per-period total comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum PeriodSource {
    Cycles(Vec<PaymentCycle>),
    BaseAmount(f64),
    Amount(f64),
}

impl PeriodSource {
    pub fn period_total(&self) -> f64 {
        match self {
            PeriodSource::Cycles(cycles) => cycle_total(cycles),
            PeriodSource::BaseAmount(value) | PeriodSource::Amount(value) => *value,
        }
    }
}

/// The calculation strategy an income source resolved to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum IncomeBasis {
    Structured {
        structure: PaymentStructure,
        source: PeriodSource,
    },
    StabilityBase {
        base_amount: f64,
        stability: StabilityPattern,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<IncomeRange>,
    },
    SimpleAmount {
        amount: f64,
    },
    /// Never empty.
    CycleList {
        cycles: Vec<PaymentCycle>,
    },
}

impl IncomeBasis {
    pub fn pattern(&self) -> PaymentPattern {
        match self {
            IncomeBasis::CycleList { .. }
            | IncomeBasis::Structured {
                source: PeriodSource::Cycles(_),
                ..
            } => PaymentPattern::Complex,
            _ => PaymentPattern::Simple,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncomeBasis::Structured { .. } => "structured",
            IncomeBasis::StabilityBase { .. } => "stability-base",
            IncomeBasis::SimpleAmount { .. } => "simple-amount",
            IncomeBasis::CycleList { .. } => "cycle-list",
        }
    }

    /// Per-payment amounts to lay out on a calendar preview.
    pub fn preview_amounts(&self) -> Vec<f64> {
        match self {
            IncomeBasis::Structured {
                source: PeriodSource::Cycles(cycles),
                ..
            }
            | IncomeBasis::CycleList { cycles } => cycles.iter().map(|c| c.amount).collect(),
            IncomeBasis::Structured {
                source: PeriodSource::BaseAmount(value) | PeriodSource::Amount(value),
                ..
            } => vec![*value],
            IncomeBasis::StabilityBase { base_amount, .. } => vec![*base_amount],
            IncomeBasis::SimpleAmount { amount } => vec![*amount],
        }
    }

    fn into_period_source(self) -> PeriodSource {
        match self {
            IncomeBasis::Structured { source, .. } => source,
            IncomeBasis::StabilityBase { base_amount, .. } => PeriodSource::BaseAmount(base_amount),
            IncomeBasis::SimpleAmount { amount } => PeriodSource::Amount(amount),
            IncomeBasis::CycleList { cycles } => PeriodSource::Cycles(cycles),
        }
    }
}

/// An income source with its calculation strategy made explicit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeSource {
    pub id: Uuid,
    pub name: String,
    pub frequency: Frequency,
    pub basis: IncomeBasis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<PaymentSchedule>,
    pub is_active: bool,
    pub is_primary: bool,
    pub is_foundational: bool,
}

impl IncomeSource {
    fn with_basis(name: impl Into<String>, frequency: Frequency, basis: IncomeBasis) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            frequency,
            basis,
            schedule: None,
            is_active: true,
            is_primary: false,
            is_foundational: false,
        }
    }

    /// Entry path: one recurring amount.
    pub fn single_amount(name: impl Into<String>, frequency: Frequency, amount: f64) -> Self {
        Self::with_basis(name, frequency, IncomeBasis::SimpleAmount { amount })
    }

    /// Entry path: a low/high range plus its stability classification. The
    /// conservative base becomes the record's base amount.
    pub fn from_range(
        name: impl Into<String>,
        frequency: Frequency,
        range: IncomeRange,
        stability: RangeStability,
    ) -> Self {
        let base_amount = conservative_base(&range, stability);
        Self::with_basis(
            name,
            frequency,
            IncomeBasis::StabilityBase {
                base_amount,
                stability: stability.into(),
                range: Some(range.with_derived_average(stability)),
            },
        )
    }

    /// Entry path: an explicit cycle list. An empty list degrades to a zero
    /// simple amount.
    pub fn from_cycles(name: impl Into<String>, frequency: Frequency, cycles: CycleSet) -> Self {
        let cycles = cycles.into_cycles();
        let basis = if cycles.is_empty() {
            IncomeBasis::SimpleAmount { amount: 0.0 }
        } else {
            IncomeBasis::CycleList { cycles }
        };
        Self::with_basis(name, frequency, basis)
    }

    /// Resolves a loose record into a strategy, first match wins:
    /// structure, then base amount with stability, then simple amount, then
    /// cycle list. Zero and NaN amounts count as absent.
    pub fn from_record(record: IncomeRecord) -> Self {
        let base_amount = present(record.base_amount);
        let amount = present(record.amount);
        let has_cycles = record.cycle_list().is_some();
        let complex = record.payment_pattern == Some(PaymentPattern::Complex);

        let basis = if let Some(structure) = record.payment_structure {
            let source = match (complex, record.cycles) {
                (true, Some(cycles)) if !cycles.is_empty() => PeriodSource::Cycles(cycles),
                _ => match base_amount {
                    Some(value) => PeriodSource::BaseAmount(value),
                    None => PeriodSource::Amount(amount.unwrap_or(0.0)),
                },
            };
            IncomeBasis::Structured { structure, source }
        } else if let (Some(base_amount), Some(stability)) = (base_amount, record.stability_pattern)
        {
            // average_low always follows the bounds, whatever was stored.
            let range = record.income_range.map(|range| match stability.range_stability() {
                Some(range_stability) => range.with_derived_average(range_stability),
                None => range,
            });
            IncomeBasis::StabilityBase {
                base_amount,
                stability,
                range,
            }
        } else if record.payment_pattern == Some(PaymentPattern::Simple) || !has_cycles {
            IncomeBasis::SimpleAmount {
                amount: record.amount.unwrap_or(0.0),
            }
        } else {
            IncomeBasis::CycleList {
                cycles: record.cycles.unwrap_or_default(),
            }
        };

        Self {
            id: Uuid::new_v4(),
            name: record.name,
            frequency: record.frequency,
            basis,
            schedule: record.payment_schedule,
            is_active: record.is_active,
            is_primary: record.is_primary,
            is_foundational: record.is_foundational,
        }
    }

    /// Attaches a structure; the current figures become its period source.
    pub fn with_structure(mut self, structure: PaymentStructure) -> Self {
        let source = self.basis.into_period_source();
        self.basis = IncomeBasis::Structured { structure, source };
        self
    }

    pub fn with_schedule(mut self, schedule: PaymentSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    pub fn foundational(mut self) -> Self {
        self.is_foundational = true;
        self
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    pub fn structure(&self) -> Option<&PaymentStructure> {
        match &self.basis {
            IncomeBasis::Structured { structure, .. } => Some(structure),
            _ => None,
        }
    }

    pub fn pattern(&self) -> PaymentPattern {
        self.basis.pattern()
    }
}

impl From<IncomeRecord> for IncomeSource {
    fn from(record: IncomeRecord) -> Self {
        IncomeSource::from_record(record)
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::income::structure::{structure_for, PaymentStructureType};

    fn cycles(amounts: &[f64]) -> Vec<PaymentCycle> {
        amounts
            .iter()
            .map(|amount| PaymentCycle::new(*amount, "cycle"))
            .collect()
    }

    #[test]
    fn structure_wins_over_cycles() {
        let record = IncomeRecord {
            frequency: Frequency::Weekly,
            payment_structure: Some(structure_for(PaymentStructureType::Monthly)),
            payment_pattern: Some(PaymentPattern::Complex),
            cycles: Some(cycles(&[100.0, 200.0])),
            base_amount: Some(999.0),
            ..IncomeRecord::default()
        };
        let source = IncomeSource::from_record(record);
        match source.basis {
            IncomeBasis::Structured {
                source: PeriodSource::Cycles(c),
                ..
            } => assert_eq!(c.len(), 2),
            other => panic!("unexpected basis {other:?}"),
        }
    }

    #[test]
    fn structure_without_complex_cycles_prefers_base_amount() {
        let record = IncomeRecord {
            payment_structure: Some(structure_for(PaymentStructureType::BiWeekly)),
            cycles: Some(cycles(&[100.0])),
            base_amount: Some(1000.0),
            amount: Some(50.0),
            ..IncomeRecord::default()
        };
        let source = IncomeSource::from_record(record);
        assert!(matches!(
            source.basis,
            IncomeBasis::Structured {
                source: PeriodSource::BaseAmount(v),
                ..
            } if v == 1000.0
        ));
    }

    #[test]
    fn zero_base_amount_falls_through_to_amount() {
        let record = IncomeRecord {
            payment_structure: Some(structure_for(PaymentStructureType::Monthly)),
            base_amount: Some(0.0),
            amount: Some(700.0),
            ..IncomeRecord::default()
        };
        let source = IncomeSource::from_record(record);
        assert!(matches!(
            source.basis,
            IncomeBasis::Structured {
                source: PeriodSource::Amount(v),
                ..
            } if v == 700.0
        ));
    }

    #[test]
    fn base_amount_needs_stability_to_win() {
        let without = IncomeSource::from_record(IncomeRecord {
            base_amount: Some(1800.0),
            amount: Some(2000.0),
            ..IncomeRecord::default()
        });
        assert_eq!(without.basis, IncomeBasis::SimpleAmount { amount: 2000.0 });

        let with = IncomeSource::from_record(IncomeRecord {
            base_amount: Some(1800.0),
            amount: Some(2000.0),
            stability_pattern: Some(StabilityPattern::Seasonal),
            ..IncomeRecord::default()
        });
        assert!(matches!(with.basis, IncomeBasis::StabilityBase { base_amount, .. } if base_amount == 1800.0));
    }

    #[test]
    fn complex_pattern_with_cycles_uses_cycle_list() {
        let source = IncomeSource::from_record(IncomeRecord {
            payment_pattern: Some(PaymentPattern::Complex),
            cycles: Some(cycles(&[300.0, 400.0])),
            amount: Some(10.0),
            ..IncomeRecord::default()
        });
        assert_eq!(source.pattern(), PaymentPattern::Complex);
        assert!(matches!(source.basis, IncomeBasis::CycleList { ref cycles } if cycles.len() == 2));
    }

    #[test]
    fn simple_pattern_ignores_cycles() {
        let source = IncomeSource::from_record(IncomeRecord {
            payment_pattern: Some(PaymentPattern::Simple),
            cycles: Some(cycles(&[300.0])),
            amount: Some(10.0),
            ..IncomeRecord::default()
        });
        assert_eq!(source.basis, IncomeBasis::SimpleAmount { amount: 10.0 });
    }

    #[test]
    fn range_entry_path_stores_conservative_base() {
        let source = IncomeSource::from_range(
            "Tutoring",
            Frequency::Monthly,
            IncomeRange::new(1000.0, 3000.0),
            RangeStability::Seasonal,
        );
        match source.basis {
            IncomeBasis::StabilityBase {
                base_amount,
                stability,
                range,
            } => {
                assert_eq!(base_amount, 1800.0);
                assert_eq!(stability, StabilityPattern::Seasonal);
                assert_eq!(range.map(|r| r.average_low), Some(1600.0));
            }
            other => panic!("unexpected basis {other:?}"),
        }
    }

    #[test]
    fn with_structure_keeps_figures() {
        let source = IncomeSource::single_amount("Salary", Frequency::Monthly, 3000.0)
            .with_structure(structure_for(PaymentStructureType::BiMonthly));
        assert_eq!(
            source.structure().map(|s| s.kind),
            Some(PaymentStructureType::BiMonthly)
        );
        assert!(matches!(
            source.basis,
            IncomeBasis::Structured {
                source: PeriodSource::Amount(v),
                ..
            } if v == 3000.0
        ));
    }

    #[test]
    fn missing_frequency_decodes_as_unrecognized() {
        let record = IncomeRecord::from_json(r#"{"amount": 500}"#).expect("valid record");
        assert_eq!(record.frequency, Frequency::unspecified());
        assert_eq!(
            record,
            IncomeRecord {
                amount: Some(500.0),
                ..IncomeRecord::default()
            }
        );
        assert_eq!(
            IncomeSource::from_record(record).basis,
            IncomeBasis::SimpleAmount { amount: 500.0 }
        );
    }

    #[test]
    fn one_sided_range_decodes_with_zero_bound() {
        let record = IncomeRecord::from_json(
            r#"{"frequency": "monthly", "incomeRange": {"lowest": 1000}}"#,
        )
        .expect("valid record");
        let range = record.income_range.expect("range present");
        assert_eq!(range.lowest, 1000.0);
        assert_eq!(range.highest, 0.0);
    }

    #[test]
    fn stored_average_is_rederived_from_bounds() {
        let record = IncomeRecord::from_json(
            r#"{
                "frequency": "monthly",
                "baseAmount": 1800,
                "stabilityPattern": "seasonal",
                "incomeRange": {"lowest": 1000, "highest": 3000, "averageLow": 99999}
            }"#,
        )
        .expect("valid record");
        let source = IncomeSource::from_record(record);
        match source.basis {
            IncomeBasis::StabilityBase { range, .. } => {
                assert_eq!(range.map(|r| r.average_low), Some(1600.0));
            }
            other => panic!("unexpected basis {other:?}"),
        }

        let variable = IncomeSource::from_record(IncomeRecord {
            base_amount: Some(1000.0),
            stability_pattern: Some(StabilityPattern::Variable),
            income_range: Some(IncomeRange {
                lowest: 1000.0,
                highest: 3000.0,
                average_low: 5.0,
            }),
            ..IncomeRecord::default()
        });
        assert!(matches!(
            variable.basis,
            IncomeBasis::StabilityBase { range: Some(r), .. } if r.average_low == 1000.0
        ));
    }

    #[test]
    fn decodes_camel_case_records() {
        let record = IncomeRecord::from_json(
            r#"{
                "name": "Design work",
                "frequency": "bi-weekly",
                "paymentStructure": {
                    "type": "bi-weekly",
                    "paymentsPerPeriod": 26,
                    "period": "year",
                    "description": "Every two weeks"
                },
                "baseAmount": 1000,
                "paymentPattern": "simple",
                "isPrimary": true
            }"#,
        )
        .expect("valid record");
        assert!(record.is_active);
        assert!(record.is_primary);
        assert_eq!(record.frequency, Frequency::BiWeekly);
        let source = IncomeSource::from(record);
        assert_eq!(
            source.structure().map(|s| s.kind),
            Some(PaymentStructureType::BiWeekly)
        );
    }
}
