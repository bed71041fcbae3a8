use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentParams {
    pub principal: f64,
    pub monthly_contribution: f64,
    pub annual_return_percent: f64,
    pub fee_percent: f64,
    pub tax_rate_percent: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageParams {
    pub loan_amount: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
    pub property_tax_annual: f64,
    pub insurance_annual: f64,
    pub hoa_monthly: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsParams {
    pub initial_deposit: f64,
    pub monthly_deposit: f64,
    pub annual_rate_percent: f64,
    pub annual_fee: f64,
    pub tax_rate_percent: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditCardParams {
    pub balance: f64,
    pub apr_percent: f64,
    pub monthly_payment: f64,
    pub annual_fee: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSnapshot {
    pub year: u32,
    pub balance: f64,
    pub contributions: f64,
    pub earnings: f64,
    pub taxes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageSnapshot {
    pub year: u32,
    pub principal_paid: f64,
    pub interest: f64,
    pub balance: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSnapshot {
    pub year: u32,
    pub balance: f64,
    pub deposits: f64,
    pub interest: f64,
    pub fees: f64,
    pub taxes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffSnapshot {
    pub year: f64,
    pub balance: f64,
    pub total_paid: f64,
    pub interest: f64,
    pub fees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationResult {
    pub years: Vec<MortgageSnapshot>,
    pub monthly_payment: f64,
    pub total_monthly_payment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffResult {
    pub years: Vec<PayoffSnapshot>,
    /// Month counter at loop exit. Above the cap when the card was not paid off.
    pub months: u32,
    pub paid_off: bool,
}
