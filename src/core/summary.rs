use serde::Serialize;

use super::types::{
    AmortizationResult, InvestmentSnapshot, PayoffResult, PayoffSnapshot, SavingsSnapshot,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSummary {
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_earnings: f64,
    pub total_taxes: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageSummary {
    pub monthly_payment: f64,
    pub total_monthly_payment: f64,
    pub total_interest: f64,
    pub total_expenses: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummary {
    pub final_balance: f64,
    pub total_deposits: f64,
    pub total_interest: f64,
    pub total_costs: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffSummary {
    pub months: u32,
    pub paid_off: bool,
    pub total_interest: f64,
    pub total_fees: f64,
    pub total_paid: f64,
}

pub fn summarize_investment(rows: &[InvestmentSnapshot]) -> InvestmentSummary {
    rows.last()
        .map(|last| InvestmentSummary {
            final_balance: last.balance,
            total_contributions: last.contributions,
            total_earnings: last.earnings,
            total_taxes: last.taxes,
        })
        .unwrap_or_default()
}

pub fn summarize_mortgage(result: &AmortizationResult) -> MortgageSummary {
    let (total_interest, total_expenses) = result
        .years
        .last()
        .map(|last| (last.interest, last.expenses))
        .unwrap_or_default();
    MortgageSummary {
        monthly_payment: result.monthly_payment,
        total_monthly_payment: result.total_monthly_payment,
        total_interest,
        total_expenses,
    }
}

pub fn summarize_savings(rows: &[SavingsSnapshot]) -> SavingsSummary {
    rows.last()
        .map(|last| SavingsSummary {
            final_balance: last.balance,
            total_deposits: last.deposits,
            total_interest: last.interest,
            total_costs: last.taxes + last.fees,
        })
        .unwrap_or_default()
}

pub fn summarize_payoff(result: &PayoffResult) -> PayoffSummary {
    let last = result.years.last().copied().unwrap_or(PayoffSnapshot {
        year: 0.0,
        balance: 0.0,
        total_paid: 0.0,
        interest: 0.0,
        fees: 0.0,
    });
    PayoffSummary {
        months: result.months,
        paid_off: result.paid_off,
        total_interest: last.interest,
        total_fees: last.fees,
        total_paid: last.total_paid,
    }
}
