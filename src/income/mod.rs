//! Income normalization engine: payment catalogs, validation, monthly
//! estimation, and calendar preview.

pub mod calculator;
pub mod cycles;
pub mod frequency;
pub mod locale;
pub mod preview;
pub mod schedule;
pub mod source;
pub mod stability;
pub mod structure;
pub mod summary;

pub use calculator::{annual_income, monthly_income, monthly_income_for_record};
pub use cycles::{
    default_cycles, default_cycles_localized, max_cycles_for_frequency, validate_cycles,
    validate_cycles_localized, CycleSet, PaymentCycle,
};
pub use frequency::Frequency;
pub use locale::Locale;
pub use preview::{schedule_preview, MonthPreview, PreviewPayment};
pub use schedule::{schedule_options_for, DayPattern, PaymentSchedule, ScheduleType};
pub use source::{IncomeBasis, IncomeRecord, IncomeSource, PaymentPattern, PeriodSource};
pub use stability::{
    average_low, conservative_base, validate_income_range, validate_income_range_localized,
    IncomeRange, RangeStability, StabilityPattern,
};
pub use structure::{
    structure_for, structure_options, PaymentPeriod, PaymentStructure, PaymentStructureType,
};
pub use summary::{summarize_incomes, IncomeSummary};
