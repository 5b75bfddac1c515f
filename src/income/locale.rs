//! User-facing copy for validation messages and starter cycles.

use serde::{Deserialize, Serialize};

use super::frequency::Frequency;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    /// Resolves a language tag such as `en-US` or `es-MX`. Unknown tags fall
    /// back to English.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "es" => Locale::Spanish,
            _ => Locale::English,
        }
    }

    pub(crate) fn ordinal(self, position: usize) -> String {
        match self {
            Locale::English => {
                let suffix = match (position % 10, position % 100) {
                    (_, 11..=13) => "th",
                    (1, _) => "st",
                    (2, _) => "nd",
                    (3, _) => "rd",
                    _ => "th",
                };
                format!("{position}{suffix}")
            }
            Locale::Spanish => format!("{position}º"),
        }
    }

    pub(crate) fn week_label(self, position: usize) -> String {
        match self {
            Locale::English => format!("{} week", self.ordinal(position)),
            Locale::Spanish => format!("Semana {position}"),
        }
    }

    pub(crate) fn payment_label(self, position: usize) -> String {
        match self {
            Locale::English => format!("{} payment", self.ordinal(position)),
            Locale::Spanish => format!("{} pago", self.ordinal(position)),
        }
    }

    pub(crate) fn monthly_payment(self) -> &'static str {
        match self {
            Locale::English => "Monthly payment",
            Locale::Spanish => "Pago mensual",
        }
    }

    pub(crate) fn generic_payment(self) -> &'static str {
        match self {
            Locale::English => "Payment",
            Locale::Spanish => "Pago",
        }
    }

    pub(crate) fn no_cycles(self) -> &'static str {
        match self {
            Locale::English => "Add at least one payment",
            Locale::Spanish => "Agrega al menos un pago",
        }
    }

    pub(crate) fn too_many_cycles(self, limit: usize, frequency: &Frequency) -> String {
        match self {
            Locale::English => {
                format!("You can add at most {limit} payments for {frequency} income")
            }
            Locale::Spanish => {
                format!("Puedes agregar como máximo {limit} pagos para ingresos {frequency}")
            }
        }
    }

    pub(crate) fn cycle_amount_required(self, position: usize) -> String {
        match self {
            Locale::English => format!("Payment {position}: amount must be greater than zero"),
            Locale::Spanish => format!("Pago {position}: el monto debe ser mayor que cero"),
        }
    }

    pub(crate) fn cycle_description_required(self, position: usize) -> String {
        match self {
            Locale::English => format!("Payment {position}: description is required"),
            Locale::Spanish => format!("Pago {position}: la descripción es obligatoria"),
        }
    }

    pub(crate) fn lowest_required(self) -> &'static str {
        match self {
            Locale::English => "Enter your lowest monthly income",
            Locale::Spanish => "Ingresa tu ingreso mensual más bajo",
        }
    }

    pub(crate) fn highest_required(self) -> &'static str {
        match self {
            Locale::English => "Enter your highest monthly income",
            Locale::Spanish => "Ingresa tu ingreso mensual más alto",
        }
    }

    pub(crate) fn highest_not_above_lowest(self) -> &'static str {
        match self {
            Locale::English => "Highest income must be greater than lowest income",
            Locale::Spanish => "El ingreso más alto debe ser mayor que el más bajo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_language_tags() {
        assert_eq!(Locale::from_tag("en-US"), Locale::English);
        assert_eq!(Locale::from_tag("es_MX"), Locale::Spanish);
        assert_eq!(Locale::from_tag("fr-FR"), Locale::English);
        assert_eq!(Locale::from_tag(""), Locale::English);
    }

    #[test]
    fn english_ordinals() {
        let labels: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22]
            .into_iter()
            .map(|n| Locale::English.ordinal(n))
            .collect();
        assert_eq!(
            labels,
            ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd"]
        );
    }
}
