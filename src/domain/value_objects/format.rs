//! # Output Formatting
//!
//! Locale-pinned rendering of money amounts and due dates.
//!
//! Formatting never consults the process locale: a [`FormatConfig`] is
//! chosen when the rental service is built and every receipt it produces
//! is rendered with it.
//!
//! # Examples
//!
//! ```
//! use car_rental::domain::value_objects::format::{Currency, FormatConfig, Locale};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let format = FormatConfig::new(Locale::PtBr, Currency::Brl);
//! assert_eq!(format.format_currency(Decimal::new(2444, 1)), "R$\u{a0}244,40");
//!
//! let due = NaiveDate::from_ymd_opt(2020, 11, 10).unwrap();
//! assert_eq!(format.format_long_date(due), "10 de novembro de 2020");
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::arithmetic::{CENT_SCALE, round_to_cents};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Non-breaking space placed between a currency symbol and the digits.
const NBSP: char = '\u{a0}';

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const EN_US_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Supported output locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese.
    #[default]
    #[serde(rename = "pt-BR", alias = "pt-br")]
    PtBr,
    /// United States English.
    #[serde(rename = "en-US", alias = "en-us")]
    EnUs,
}

impl Locale {
    /// Returns the BCP 47 tag.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }

    /// Thousands and decimal separators.
    const fn separators(&self) -> (char, char) {
        match self {
            Self::PtBr => ('.', ','),
            Self::EnUs => (',', '.'),
        }
    }

    fn month_name(&self, month0: u32) -> &'static str {
        let names = match self {
            Self::PtBr => &PT_BR_MONTHS,
            Self::EnUs => &EN_US_MONTHS,
        };
        names.get(month0 as usize).copied().unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" => Ok(Self::PtBr),
            "en-us" => Ok(Self::EnUs),
            _ => Err(DomainError::UnsupportedLocale(s.to_string())),
        }
    }
}

/// Supported ISO 4217 currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Brazilian real.
    #[default]
    Brl,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
}

impl Currency {
    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Brl => "BRL",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BRL" => Ok(Self::Brl),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(DomainError::UnsupportedCurrency(s.to_string())),
        }
    }
}

/// Locale and currency used to render receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Output locale.
    #[serde(default)]
    pub locale: Locale,
    /// Currency of every amount.
    #[serde(default)]
    pub currency: Currency,
}

impl FormatConfig {
    /// Creates a format configuration.
    #[must_use]
    pub const fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }

    /// Symbol as the locale writes it, plus whether a space follows it.
    const fn symbol(&self) -> (&'static str, bool) {
        match (self.locale, self.currency) {
            (Locale::PtBr, Currency::Brl) => ("R$", true),
            (Locale::PtBr, Currency::Usd) => ("US$", true),
            (Locale::PtBr, Currency::Eur) => ("€", true),
            (Locale::EnUs, Currency::Brl) => ("R$", false),
            (Locale::EnUs, Currency::Usd) => ("$", false),
            (Locale::EnUs, Currency::Eur) => ("€", false),
        }
    }

    /// Renders `amount` with two fraction digits, grouped thousands and
    /// the currency symbol.
    ///
    /// Rounding is half away from zero.
    #[must_use]
    pub fn format_currency(&self, amount: Decimal) -> String {
        let rounded = round_to_cents(amount);
        let digits = rounded.abs().to_string();
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let (group_sep, decimal_sep) = self.locale.separators();

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(group_sep);
            }
            grouped.push(ch);
        }

        let (symbol, spaced) = self.symbol();
        let mut out = String::with_capacity(grouped.len() + symbol.len() + 6);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push_str(symbol);
        if spaced {
            out.push(NBSP);
        }
        out.push_str(&grouped);
        out.push(decimal_sep);
        out.push_str(frac_part);
        for _ in frac_part.len()..CENT_SCALE as usize {
            out.push('0');
        }
        out
    }

    /// Renders `date` in the locale's long form (day, month name, year).
    #[must_use]
    pub fn format_long_date(&self, date: NaiveDate) -> String {
        let month = self.locale.month_name(date.month0());
        match self.locale {
            Locale::PtBr => format!("{} de {} de {}", date.day(), month, date.year()),
            Locale::EnUs => format!("{} {}, {}", month, date.day(), date.year()),
        }
    }
}

impl fmt::Display for FormatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.locale, self.currency)
    }
}
