//! Supported currencies and amount formatting
//!
//! The currency set is closed; unsupported codes cannot reach the snippet.
//! Labels have a default (ISO code) form and an Arabic-script form used when
//! the host prefers Arabic currency labels in RTL layouts.

use crate::types::Lang;
use serde::{Deserialize, Serialize};

/// Currencies the checkout SDK supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    AED,
    SAR,
    QAR,
    KWD,
    BHD,
    EGP,
}

impl Currency {
    /// ISO 4217 code, as sent in URLs and analytics payloads
    pub fn code(self) -> &'static str {
        match self {
            Currency::AED => "AED",
            Currency::SAR => "SAR",
            Currency::QAR => "QAR",
            Currency::KWD => "KWD",
            Currency::BHD => "BHD",
            Currency::EGP => "EGP",
        }
    }

    /// Display label, optionally in Arabic script
    ///
    /// `None` returns the default (ISO code) form.
    pub fn label(self, script: Option<Lang>) -> &'static str {
        match script {
            Some(Lang::Ar) => match self {
                Currency::AED => "د.إ",
                Currency::SAR => "ر.س",
                Currency::QAR => "ر.ق",
                Currency::KWD => "د.ك",
                Currency::BHD => "د.ب",
                Currency::EGP => "ج.م",
            },
            _ => self.code(),
        }
    }
}

/// Format a monetary amount for display: two decimals, thousands grouping
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{frac_part}")
}
