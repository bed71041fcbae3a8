use super::rounding::round_currency;
use super::types::{SavingsParams, SavingsSnapshot};

// Reported interest comes from `balance = deposits - fees + interest`, so it
// is gross of fees.
pub fn project_savings(params: &SavingsParams) -> Vec<SavingsSnapshot> {
    let monthly_rate = params.annual_rate_percent / 100.0 / 12.0;
    let monthly_fee = params.annual_fee / 12.0;
    let mut balance = params.initial_deposit;
    let mut rows = Vec::with_capacity(params.years as usize + 1);

    for year in 0..=params.years {
        rows.push(savings_snapshot(params, year, balance));
        if year < params.years {
            for _ in 0..12 {
                balance = (balance - monthly_fee) * (1.0 + monthly_rate) + params.monthly_deposit;
            }
        }
    }
    rows
}

fn savings_snapshot(params: &SavingsParams, year: u32, balance: f64) -> SavingsSnapshot {
    let total_deposits = params.initial_deposit + params.monthly_deposit * 12.0 * year as f64;
    let fees_paid = params.annual_fee * year as f64;
    let gross_interest = balance - total_deposits + fees_paid;
    let taxes = if gross_interest > 0.0 {
        gross_interest * (params.tax_rate_percent / 100.0)
    } else {
        0.0
    };

    SavingsSnapshot {
        year,
        balance: round_currency(balance - taxes),
        deposits: round_currency(total_deposits),
        interest: round_currency(gross_interest),
        fees: round_currency(fees_paid),
        taxes: round_currency(taxes),
    }
}
