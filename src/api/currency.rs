use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    #[serde(alias = "usd")]
    Usd,
    #[serde(alias = "eur")]
    Eur,
    #[serde(alias = "gbp")]
    Gbp,
    #[serde(alias = "jpy")]
    Jpy,
    #[serde(alias = "cad")]
    Cad,
    #[serde(alias = "aud")]
    Aud,
    #[serde(alias = "chf")]
    Chf,
    #[serde(alias = "cny")]
    Cny,
    #[serde(alias = "inr")]
    Inr,
}

pub const ALL_CURRENCIES: [Currency; 9] = [
    Currency::Usd,
    Currency::Eur,
    Currency::Gbp,
    Currency::Jpy,
    Currency::Cad,
    Currency::Aud,
    Currency::Chf,
    Currency::Cny,
    Currency::Inr,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Chf => "CHF",
            Currency::Cny => "CNY",
            Currency::Inr => "INR",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy | Currency::Cny => "¥",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
            Currency::Chf => "CHF",
            Currency::Inr => "₹",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Jpy => "Japanese Yen",
            Currency::Cad => "Canadian Dollar",
            Currency::Aud => "Australian Dollar",
            Currency::Chf => "Swiss Franc",
            Currency::Cny => "Chinese Yuan",
            Currency::Inr => "Indian Rupee",
        }
    }

    pub fn info(self) -> CurrencyInfo {
        CurrencyInfo {
            code: self.code(),
            symbol: self.symbol(),
            name: self.name(),
        }
    }

    pub fn format_amount(self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}{value}", self.symbol());
        }
        let rounded = value.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        let digits = group_thousands(&format!("{:.0}", rounded.abs()));
        let symbol = self.symbol();
        let separator = if symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            " "
        } else {
            ""
        };
        format!("{sign}{symbol}{separator}{digits}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
