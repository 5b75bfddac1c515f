//! Script-friendly command dispatcher behind `income_core_cli`.

use std::{fs, io::Write, path::PathBuf};

use crate::{
    config::Config,
    currency::{format_amount, CurrencyCode, NumberStyle},
    errors::IncomeError,
    income::{
        annual_income, default_cycles_localized, monthly_income, schedule_options_for,
        schedule_preview, structure_for, structure_options, validate_cycles_localized,
        validate_income_range_localized, Frequency, IncomeBasis, IncomeRecord, IncomeSource,
        Locale, PaymentStructureType,
    },
};

const USAGE: &str = "Usage: income_core_cli <command>\n\
Commands:\n  \
estimate <record.json>\n  \
structures\n  \
schedules <structure-type>\n  \
defaults <frequency> <amount>\n  \
version\n  \
help";

/// Build metadata embedded by the build script.
pub fn version_info() -> String {
    format!(
        "Income Core {} ({} {}, built {} for {} [{}], {})",
        env!("CARGO_PKG_VERSION"),
        env!("INCOME_CORE_BUILD_HASH"),
        env!("INCOME_CORE_BUILD_STATUS"),
        env!("INCOME_CORE_BUILD_TIMESTAMP"),
        env!("INCOME_CORE_BUILD_TARGET"),
        env!("INCOME_CORE_BUILD_PROFILE"),
        env!("INCOME_CORE_BUILD_RUSTC"),
    )
}

struct Formatter {
    locale: Locale,
    currency: CurrencyCode,
    style: NumberStyle,
}

impl Formatter {
    fn new(config: &Config) -> Self {
        let locale = config.locale();
        Self {
            locale,
            currency: config.currency_code(),
            style: NumberStyle::for_locale(locale),
        }
    }

    fn money(&self, amount: f64) -> String {
        format_amount(amount, &self.currency, self.style)
    }
}

/// Runs one command, writing its report to `out`.
pub fn run<I, S>(args: I, config: &Config, out: &mut dyn Write) -> Result<(), IncomeError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let command = args.next().ok_or_else(usage)?;
    let fmt = Formatter::new(config);

    match command.as_str() {
        "estimate" => {
            let path = args.next().map(PathBuf::from).ok_or_else(usage)?;
            let record = IncomeRecord::from_json(&fs::read_to_string(&path)?)?;
            let mut problems = Vec::new();
            if let Some(cycles) = record.cycles.as_deref() {
                problems.extend(validate_cycles_localized(
                    cycles,
                    &record.frequency,
                    fmt.locale,
                ));
            }
            if let Some(range) = record.income_range.as_ref() {
                problems.extend(validate_income_range_localized(range, fmt.locale));
            }
            let income = IncomeSource::from_record(record);
            print_estimate(out, &fmt, &income, &problems)?;
        }
        "structures" => {
            for structure in structure_options() {
                writeln!(
                    out,
                    "{:<11} {:>2} per {:<5} {}",
                    structure.kind.as_str(),
                    structure.payments_per_period,
                    structure.period.as_str(),
                    structure.description
                )?;
            }
        }
        "schedules" => {
            let token = args.next().ok_or_else(usage)?;
            let kind: PaymentStructureType = token.parse()?;
            for schedule in schedule_options_for(&structure_for(kind)) {
                writeln!(out, "{}", schedule.description)?;
            }
        }
        "defaults" => {
            let frequency = Frequency::parse(&args.next().ok_or_else(usage)?);
            let amount: f64 = args
                .next()
                .ok_or_else(usage)?
                .parse()
                .map_err(|_| IncomeError::Usage("amount must be a number".into()))?;
            for cycle in default_cycles_localized(&frequency, amount, fmt.locale) {
                writeln!(out, "{}: {}", cycle.description, fmt.money(cycle.amount))?;
            }
        }
        "version" => writeln!(out, "{}", version_info())?,
        "help" => writeln!(out, "{USAGE}")?,
        other => {
            return Err(IncomeError::Usage(format!(
                "unknown command `{other}`\n{USAGE}"
            )))
        }
    }

    Ok(())
}

fn usage() -> IncomeError {
    IncomeError::Usage(USAGE.to_string())
}

fn print_estimate(
    out: &mut dyn Write,
    fmt: &Formatter,
    income: &IncomeSource,
    problems: &[String],
) -> Result<(), IncomeError> {
    let name = if income.name.is_empty() {
        "(unnamed)"
    } else {
        income.name.as_str()
    };
    let frequency = match income.frequency.as_str() {
        "" => "unspecified",
        token => token,
    };
    writeln!(out, "Income: {} ({})", name, frequency)?;
    writeln!(out, "Strategy: {}", income.basis.label())?;
    writeln!(out, "Monthly estimate: {}", fmt.money(monthly_income(income)))?;
    writeln!(out, "Annual estimate: {}", fmt.money(annual_income(income)))?;

    if problems.is_empty() {
        writeln!(out, "Validation: ok")?;
    } else {
        writeln!(out, "Validation:")?;
        for problem in problems {
            writeln!(out, "  - {problem}")?;
        }
    }

    if let IncomeBasis::Structured { structure, .. } = &income.basis {
        let amounts = income.basis.preview_amounts();
        if amounts.iter().any(|amount| *amount != 0.0) {
            writeln!(out, "Preview:")?;
            for month in schedule_preview(structure, &amounts) {
                writeln!(out, "  {}: {}", month.month, fmt.money(month.total))?;
                for payment in &month.payments {
                    let marker = if payment.extra { " (extra)" } else { "" };
                    writeln!(
                        out,
                        "    {:<12} {}{}",
                        payment.date,
                        fmt.money(payment.amount),
                        marker
                    )?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str]) -> Result<String, IncomeError> {
        let mut out = Vec::new();
        run(args.iter().copied(), &Config::default(), &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn lists_structures() {
        let output = run_to_string(&["structures"]).unwrap();
        assert_eq!(output.lines().count(), 6);
        assert!(output.contains("bi-weekly"));
    }

    #[test]
    fn lists_schedules_for_type() {
        let output = run_to_string(&["schedules", "bi-monthly"]).unwrap();
        assert!(output.contains("1st and 15th"));
        assert!(matches!(
            run_to_string(&["schedules", "daily"]),
            Err(IncomeError::UnknownStructure(_))
        ));
    }

    #[test]
    fn prints_default_cycles() {
        let output = run_to_string(&["defaults", "bi-weekly", "1250"]).unwrap();
        assert_eq!(output, "1st payment: $1,250.00\n2nd payment: $1,250.00\n");
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(matches!(
            run_to_string(&["frobnicate"]),
            Err(IncomeError::Usage(_))
        ));
        assert!(matches!(run_to_string(&[]), Err(IncomeError::Usage(_))));
    }
}
