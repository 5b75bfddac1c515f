//! Converts any resolved income source into one monthly figure.
//!
//! The strategy is fixed when the [`IncomeSource`] is built, so the
//! calculation is a single exhaustive match. All paths are pure and never
//! fail: unknown frequencies fall through to the documented defaults.

use tracing::{debug, warn};

use super::{
    cycles::cycle_total,
    frequency::Frequency,
    source::{IncomeBasis, IncomeRecord, IncomeSource},
    structure::PaymentStructureType,
};

const WEEKS_PER_MONTH: f64 = 4.33;
const BI_WEEKLY_PERIODS_PER_MONTH: f64 = 2.17;
const MONTHS_PER_QUARTER: f64 = 3.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Monthly estimate for `income`.
pub fn monthly_income(income: &IncomeSource) -> f64 {
    match &income.basis {
        IncomeBasis::Structured { structure, source } => {
            let period_total = source.period_total();
            debug!(
                income = %income.name,
                structure = %structure.kind,
                period_total,
                "structure-based monthly income"
            );
            structured_monthly(structure.kind, period_total)
        }
        IncomeBasis::StabilityBase {
            base_amount,
            stability,
            ..
        } => {
            debug!(
                income = %income.name,
                ?stability,
                base_amount,
                "stability-based monthly income"
            );
            simple_monthly(*base_amount, &income.frequency)
        }
        IncomeBasis::SimpleAmount { amount } => {
            debug!(income = %income.name, amount, "simple monthly income");
            simple_monthly(*amount, &income.frequency)
        }
        IncomeBasis::CycleList { cycles } => {
            let total = cycle_total(cycles);
            debug!(
                income = %income.name,
                cycles = cycles.len(),
                total,
                "cycle-based monthly income"
            );
            cycle_monthly(total, &income.frequency)
        }
    }
}

/// Always `monthly_income(income) * 12`.
pub fn annual_income(income: &IncomeSource) -> f64 {
    monthly_income(income) * MONTHS_PER_YEAR
}

/// Resolves a loose record and computes its monthly estimate.
pub fn monthly_income_for_record(record: &IncomeRecord) -> f64 {
    monthly_income(&IncomeSource::from_record(record.clone()))
}

/// Scales one period's total by the structure's cadence.
pub fn structured_monthly(kind: PaymentStructureType, period_total: f64) -> f64 {
    match kind {
        // The period total already covers the whole month for these.
        PaymentStructureType::Monthly
        | PaymentStructureType::BiMonthly
        | PaymentStructureType::Irregular => period_total,
        PaymentStructureType::BiWeekly => period_total * 26.0 / 12.0,
        PaymentStructureType::Weekly => period_total * 52.0 / 12.0,
        PaymentStructureType::Quarterly => period_total * 4.0 / 12.0,
    }
}

/// Converts a summed cycle list. Weekly cycles span four weeks, bi-weekly
/// cycles span two periods.
pub fn cycle_monthly(cycle_total: f64, frequency: &Frequency) -> f64 {
    match frequency {
        Frequency::Weekly => cycle_total * (52.0 / 12.0) / 4.0,
        Frequency::BiWeekly => cycle_total * (26.0 / 12.0) / 2.0,
        Frequency::Quarterly => cycle_total / MONTHS_PER_QUARTER,
        Frequency::Monthly | Frequency::Irregular | Frequency::Unrecognized(_) => cycle_total,
    }
}

/// Applies the frequency multiplier to a single amount. Unknown
/// frequencies yield zero rather than the raw amount.
pub fn simple_monthly(amount: f64, frequency: &Frequency) -> f64 {
    match frequency {
        Frequency::Weekly => amount * WEEKS_PER_MONTH,
        Frequency::BiWeekly => amount * BI_WEEKLY_PERIODS_PER_MONTH,
        Frequency::Monthly | Frequency::Irregular => amount,
        Frequency::Quarterly => amount / MONTHS_PER_QUARTER,
        Frequency::Unrecognized(token) => {
            warn!(frequency = %token, "no multiplier for frequency; estimating zero");
            0.0
        }
    }
}
