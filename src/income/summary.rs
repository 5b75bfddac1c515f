//! Totals across every income source a user has entered.

use serde::{Deserialize, Serialize};

use super::{calculator::monthly_income, source::IncomeSource};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IncomeSummary {
    pub monthly: f64,
    pub annual: f64,
    /// Active sources flagged as the budgeting foundation.
    pub foundational_monthly: f64,
    pub primary: Option<String>,
    pub active_sources: usize,
}

/// Sums active sources. Inactive ones contribute nothing.
pub fn summarize_incomes(incomes: &[IncomeSource]) -> IncomeSummary {
    let mut summary = IncomeSummary::default();
    for income in incomes.iter().filter(|income| income.is_active) {
        let monthly = monthly_income(income);
        summary.monthly += monthly;
        if income.is_foundational {
            summary.foundational_monthly += monthly;
        }
        if income.is_primary && summary.primary.is_none() {
            summary.primary = Some(income.name.clone());
        }
        summary.active_sources += 1;
    }
    summary.annual = summary.monthly * 12.0;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::income::frequency::Frequency;

    #[test]
    fn skips_inactive_sources() {
        let salary = IncomeSource::single_amount("Salary", Frequency::Monthly, 3000.0)
            .primary()
            .foundational();
        let mut gig = IncomeSource::single_amount("Gig", Frequency::Weekly, 100.0);
        gig.set_active(false);
        let resale = IncomeSource::single_amount("Resale", Frequency::Quarterly, 600.0);

        let summary = summarize_incomes(&[salary, gig, resale]);
        assert_eq!(summary.active_sources, 2);
        assert_eq!(summary.monthly, 3200.0);
        assert_eq!(summary.annual, 38400.0);
        assert_eq!(summary.foundational_monthly, 3000.0);
        assert_eq!(summary.primary.as_deref(), Some("Salary"));
    }

    #[test]
    fn empty_portfolio_is_zero() {
        assert_eq!(summarize_incomes(&[]), IncomeSummary::default());
    }
}
