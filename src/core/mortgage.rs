use super::rounding::round_currency;
use super::types::{AmortizationResult, MortgageParams, MortgageSnapshot};

pub fn amortize_mortgage(params: &MortgageParams) -> AmortizationResult {
    let monthly_rate = params.annual_rate_percent / 100.0 / 12.0;
    let monthly_payment = monthly_payment(params.loan_amount, monthly_rate, params.years * 12);
    let total_monthly_payment = monthly_payment
        + params.property_tax_annual / 12.0
        + params.insurance_annual / 12.0
        + params.hoa_monthly;
    let annual_expenses =
        params.property_tax_annual + params.insurance_annual + params.hoa_monthly * 12.0;

    let mut remaining_balance = params.loan_amount;
    let mut total_interest = 0.0;
    let mut years = Vec::with_capacity(params.years as usize + 1);

    for year in 0..=params.years {
        years.push(MortgageSnapshot {
            year,
            principal_paid: round_currency(params.loan_amount - remaining_balance),
            interest: round_currency(total_interest),
            balance: round_currency(remaining_balance),
            expenses: round_currency(annual_expenses * year as f64),
        });

        if year < params.years {
            for _ in 0..12 {
                let interest_payment = remaining_balance * monthly_rate;
                total_interest += interest_payment;
                // Not clamped at zero; float drift near the end is carried as-is.
                remaining_balance -= monthly_payment - interest_payment;
            }
        }
    }

    AmortizationResult {
        years,
        monthly_payment,
        total_monthly_payment,
    }
}

pub fn monthly_payment(loan_amount: f64, monthly_rate: f64, payments: u32) -> f64 {
    if monthly_rate == 0.0 {
        return loan_amount / payments as f64;
    }
    let growth = (1.0 + monthly_rate).powf(payments as f64);
    loan_amount * (monthly_rate * growth) / (growth - 1.0)
}
