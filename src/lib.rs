#![doc(test(attr(deny(warnings))))]

//! Income Core normalizes user-reported income structures (salaries, bi-weekly
//! pay, seasonal ranges, irregular project work) into one conservative monthly
//! figure for budget planning.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod income;
pub mod utils;

pub use errors::IncomeError;
pub use income::{annual_income, monthly_income, IncomeRecord, IncomeSource};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Income Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
