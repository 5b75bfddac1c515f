//! Illustrative three-month payment calendar.
//!
//! The window is always January to March of a generic year and is not tied
//! to today's date. Bi-weekly and weekly layouts show the occasional extra
//! payday that calendar drift produces.

use chrono::Month;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::structure::{PaymentStructure, PaymentStructureType};

const PREVIEW_MONTHS: [Month; 3] = [Month::January, Month::February, Month::March];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewPayment {
    pub amount: f64,
    pub date: String,
    /// Set on the drift payday that only some months receive.
    #[serde(default)]
    pub extra: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthPreview {
    pub month: String,
    pub payments: Vec<PreviewPayment>,
    pub total: f64,
}

impl MonthPreview {
    fn new(month: Month, payments: Vec<PreviewPayment>) -> Self {
        let total = payments.iter().map(|payment| payment.amount).sum();
        Self {
            month: month.name().to_string(),
            payments,
            total,
        }
    }
}

fn payment(amount: f64, date: impl Into<String>) -> PreviewPayment {
    PreviewPayment {
        amount,
        date: date.into(),
        extra: false,
    }
}

fn extra_payment(amount: f64, date: impl Into<String>) -> PreviewPayment {
    PreviewPayment {
        extra: true,
        ..payment(amount, date)
    }
}

/// Projects exactly three months of payments for `structure`.
///
/// Quarterly and irregular structures have no calendar layout and yield
/// empty months. Callers skip the call when every amount is zero; an empty
/// `amounts` slice is treated as zero.
pub fn schedule_preview(structure: &PaymentStructure, amounts: &[f64]) -> Vec<MonthPreview> {
    if amounts.is_empty() {
        warn!(structure = %structure.kind, "schedule preview requested without amounts");
    }
    let first = amounts.first().copied().unwrap_or(0.0);
    let second = amounts.get(1).copied().unwrap_or(first);

    let preview: Vec<MonthPreview> = PREVIEW_MONTHS
        .into_iter()
        .enumerate()
        .map(|(index, month)| {
            let payments = match structure.kind {
                PaymentStructureType::Monthly => vec![payment(first, "End of month")],
                PaymentStructureType::BiMonthly => {
                    vec![payment(first, "1st"), payment(second, "15th")]
                }
                PaymentStructureType::BiWeekly => {
                    let mut payments = vec![payment(first, "Week 1"), payment(first, "Week 3")];
                    if index == 1 {
                        payments.push(extra_payment(first, "Week 5"));
                    }
                    payments
                }
                PaymentStructureType::Weekly => {
                    let mut payments: Vec<PreviewPayment> = (1..=4)
                        .map(|week| payment(first, format!("Week {week}")))
                        .collect();
                    if index == 0 || index == 2 {
                        payments.push(extra_payment(first, "Week 5"));
                    }
                    payments
                }
                PaymentStructureType::Quarterly | PaymentStructureType::Irregular => Vec::new(),
            };
            MonthPreview::new(month, payments)
        })
        .collect();

    debug!(
        structure = %structure.kind,
        payments = preview.iter().map(|m| m.payments.len()).sum::<usize>(),
        "projected schedule preview"
    );
    preview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::income::structure::structure_for;

    fn preview(kind: PaymentStructureType, amounts: &[f64]) -> Vec<MonthPreview> {
        schedule_preview(&structure_for(kind), amounts)
    }

    #[test]
    fn monthly_pays_once_at_end_of_month() {
        let months = preview(PaymentStructureType::Monthly, &[1500.0]);
        assert_eq!(months.len(), 3);
        for month in &months {
            assert_eq!(month.payments.len(), 1);
            assert_eq!(month.payments[0].date, "End of month");
            assert_eq!(month.total, 1500.0);
        }
        assert_eq!(months[0].month, "January");
        assert_eq!(months[2].month, "March");
    }

    #[test]
    fn bi_monthly_reuses_first_amount_when_second_missing() {
        let months = preview(PaymentStructureType::BiMonthly, &[900.0]);
        assert_eq!(months[0].payments[1].amount, 900.0);
        let months = preview(PaymentStructureType::BiMonthly, &[900.0, 1100.0]);
        assert_eq!(months[1].payments[0].date, "1st");
        assert_eq!(months[1].payments[1].date, "15th");
        assert_eq!(months[1].total, 2000.0);
    }

    #[test]
    fn bi_weekly_second_month_gets_extra_payday() {
        let months = preview(PaymentStructureType::BiWeekly, &[1000.0]);
        let counts: Vec<usize> = months.iter().map(|m| m.payments.len()).collect();
        assert_eq!(counts, vec![2, 3, 2]);
        assert!(months[1].payments[2].extra);
        assert_eq!(months[1].total, 3000.0);
    }

    #[test]
    fn weekly_first_and_third_months_get_fifth_payday() {
        let months = preview(PaymentStructureType::Weekly, &[100.0]);
        let totals: Vec<f64> = months.iter().map(|m| m.total).collect();
        assert_eq!(totals, vec![500.0, 400.0, 500.0]);
        assert_eq!(months[0].payments.len(), 5);
        assert_eq!(months[1].payments.len(), 4);
    }

    #[test]
    fn quarterly_and_irregular_have_no_layout() {
        for kind in [PaymentStructureType::Quarterly, PaymentStructureType::Irregular] {
            let months = preview(kind, &[1200.0]);
            assert_eq!(months.len(), 3);
            assert!(months.iter().all(|m| m.payments.is_empty() && m.total == 0.0));
        }
    }

    #[test]
    fn empty_amounts_project_zero_payments() {
        let months = preview(PaymentStructureType::Monthly, &[]);
        assert_eq!(months[0].payments[0].amount, 0.0);
    }
}
