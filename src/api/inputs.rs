use clap::Args;
use serde::Deserialize;
use thiserror::Error;

use super::currency::Currency;
use crate::core::{CreditCardParams, InvestmentParams, MortgageParams, SavingsParams};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} must be > 0")]
    NotPositive { field: &'static str },
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

fn check_years(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), ValidationError> {
    check_range(field, f64::from(value), f64::from(min), f64::from(max))
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct InvestmentArgs {
    #[arg(long, default_value_t = 10_000.0, help = "Initial investment")]
    pub principal: f64,
    #[arg(long, default_value_t = 500.0)]
    pub monthly_contribution: f64,
    #[arg(long, default_value_t = 7.0, help = "Expected annual return in percent")]
    pub annual_return: f64,
    #[arg(long, default_value_t = 20)]
    pub years: u32,
    #[arg(
        long,
        default_value_t = 0.5,
        help = "Annual fund fees in percent, deducted from the return"
    )]
    pub fees: f64,
    #[arg(
        long,
        default_value_t = 15.0,
        help = "Capital gains tax rate in percent, applied to gains only"
    )]
    pub tax_rate: f64,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct MortgageArgs {
    #[arg(long, default_value_t = 300_000.0)]
    pub loan_amount: f64,
    #[arg(long, default_value_t = 4.5, help = "Annual interest rate in percent")]
    pub interest_rate: f64,
    #[arg(long, default_value_t = 30, help = "Loan term in years")]
    pub loan_years: u32,
    #[arg(long, default_value_t = 3_000.0, help = "Annual property tax")]
    pub property_tax: f64,
    #[arg(long, default_value_t = 1_200.0, help = "Annual home insurance")]
    pub home_insurance: f64,
    #[arg(long, default_value_t = 0.0, help = "Monthly HOA fees")]
    pub hoa_fees: f64,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SavingsArgs {
    #[arg(long, default_value_t = 5_000.0)]
    pub initial_deposit: f64,
    #[arg(long, default_value_t = 200.0)]
    pub monthly_deposit: f64,
    #[arg(long, default_value_t = 3.0, help = "Annual interest rate in percent")]
    pub interest_rate: f64,
    #[arg(long, default_value_t = 10)]
    pub years: u32,
    #[arg(long, default_value_t = 0.0, help = "Flat annual account fee")]
    pub annual_fees: f64,
    #[arg(
        long,
        default_value_t = 20.0,
        help = "Tax rate on interest in percent"
    )]
    pub tax_rate: f64,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CreditCardArgs {
    #[arg(long, default_value_t = 5_000.0, help = "Current card balance")]
    pub balance: f64,
    #[arg(long, default_value_t = 18.0, help = "Annual percentage rate")]
    pub apr: f64,
    #[arg(long, default_value_t = 150.0)]
    pub monthly_payment: f64,
    #[arg(long, default_value_t = 0.0)]
    pub annual_fee: f64,
}

pub fn default_investment_args() -> InvestmentArgs {
    InvestmentArgs {
        principal: 10_000.0,
        monthly_contribution: 500.0,
        annual_return: 7.0,
        years: 20,
        fees: 0.5,
        tax_rate: 15.0,
    }
}

pub fn default_mortgage_args() -> MortgageArgs {
    MortgageArgs {
        loan_amount: 300_000.0,
        interest_rate: 4.5,
        loan_years: 30,
        property_tax: 3_000.0,
        home_insurance: 1_200.0,
        hoa_fees: 0.0,
    }
}

pub fn default_savings_args() -> SavingsArgs {
    SavingsArgs {
        initial_deposit: 5_000.0,
        monthly_deposit: 200.0,
        interest_rate: 3.0,
        years: 10,
        annual_fees: 0.0,
        tax_rate: 20.0,
    }
}

pub fn default_credit_card_args() -> CreditCardArgs {
    CreditCardArgs {
        balance: 5_000.0,
        apr: 18.0,
        monthly_payment: 150.0,
        annual_fee: 0.0,
    }
}

pub fn build_investment_params(args: &InvestmentArgs) -> Result<InvestmentParams, ValidationError> {
    check_range("principal", args.principal, 0.0, 1_000_000.0)?;
    check_range("monthlyContribution", args.monthly_contribution, 0.0, 10_000.0)?;
    check_range("annualReturn", args.annual_return, 0.0, 30.0)?;
    check_years("years", args.years, 0, 50)?;
    check_range("fees", args.fees, 0.0, 5.0)?;
    check_range("taxRate", args.tax_rate, 0.0, 50.0)?;

    Ok(InvestmentParams {
        principal: args.principal,
        monthly_contribution: args.monthly_contribution,
        annual_return_percent: args.annual_return,
        fee_percent: args.fees,
        tax_rate_percent: args.tax_rate,
        years: args.years,
    })
}

pub fn build_mortgage_params(args: &MortgageArgs) -> Result<MortgageParams, ValidationError> {
    check_range("loanAmount", args.loan_amount, 0.0, 5_000_000.0)?;
    check_range("interestRate", args.interest_rate, 0.0, 20.0)?;
    // A zero-year term has no payment schedule.
    check_years("loanYears", args.loan_years, 1, 40)?;
    check_range("propertyTax", args.property_tax, 0.0, 50_000.0)?;
    check_range("homeInsurance", args.home_insurance, 0.0, 10_000.0)?;
    check_range("hoaFees", args.hoa_fees, 0.0, 1_000.0)?;

    Ok(MortgageParams {
        loan_amount: args.loan_amount,
        annual_rate_percent: args.interest_rate,
        years: args.loan_years,
        property_tax_annual: args.property_tax,
        insurance_annual: args.home_insurance,
        hoa_monthly: args.hoa_fees,
    })
}

pub fn build_savings_params(args: &SavingsArgs) -> Result<SavingsParams, ValidationError> {
    check_range("initialDeposit", args.initial_deposit, 0.0, 500_000.0)?;
    check_range("monthlyDeposit", args.monthly_deposit, 0.0, 10_000.0)?;
    check_range("interestRate", args.interest_rate, 0.0, 20.0)?;
    check_years("years", args.years, 0, 50)?;
    check_range("annualFees", args.annual_fees, 0.0, 500.0)?;
    check_range("taxRate", args.tax_rate, 0.0, 50.0)?;

    Ok(SavingsParams {
        initial_deposit: args.initial_deposit,
        monthly_deposit: args.monthly_deposit,
        annual_rate_percent: args.interest_rate,
        annual_fee: args.annual_fees,
        tax_rate_percent: args.tax_rate,
        years: args.years,
    })
}

pub fn build_credit_card_params(args: &CreditCardArgs) -> Result<CreditCardParams, ValidationError> {
    check_range("balance", args.balance, 0.0, 100_000.0)?;
    check_range("apr", args.apr, 0.0, 40.0)?;
    check_range("monthlyPayment", args.monthly_payment, 0.0, 10_000.0)?;
    if args.monthly_payment <= 0.0 {
        return Err(ValidationError::NotPositive {
            field: "monthlyPayment",
        });
    }
    check_range("annualFee", args.annual_fee, 0.0, 1_000.0)?;

    Ok(CreditCardParams {
        balance: args.balance,
        apr_percent: args.apr,
        monthly_payment: args.monthly_payment,
        annual_fee: args.annual_fee,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvestmentPayload {
    pub currency: Option<Currency>,
    pub principal: Option<f64>,
    pub monthly_contribution: Option<f64>,
    pub annual_return: Option<f64>,
    pub years: Option<u32>,
    pub fees: Option<f64>,
    pub tax_rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MortgagePayload {
    pub currency: Option<Currency>,
    pub loan_amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub loan_years: Option<u32>,
    pub property_tax: Option<f64>,
    pub home_insurance: Option<f64>,
    pub hoa_fees: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SavingsPayload {
    pub currency: Option<Currency>,
    pub initial_deposit: Option<f64>,
    pub monthly_deposit: Option<f64>,
    pub interest_rate: Option<f64>,
    pub years: Option<u32>,
    pub annual_fees: Option<f64>,
    pub tax_rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditCardPayload {
    pub currency: Option<Currency>,
    pub balance: Option<f64>,
    pub apr: Option<f64>,
    pub monthly_payment: Option<f64>,
    pub annual_fee: Option<f64>,
}

impl InvestmentPayload {
    pub fn into_args(self) -> InvestmentArgs {
        let mut args = default_investment_args();
        if let Some(v) = self.principal {
            args.principal = v;
        }
        if let Some(v) = self.monthly_contribution {
            args.monthly_contribution = v;
        }
        if let Some(v) = self.annual_return {
            args.annual_return = v;
        }
        if let Some(v) = self.years {
            args.years = v;
        }
        if let Some(v) = self.fees {
            args.fees = v;
        }
        if let Some(v) = self.tax_rate {
            args.tax_rate = v;
        }
        args
    }
}

impl MortgagePayload {
    pub fn into_args(self) -> MortgageArgs {
        let mut args = default_mortgage_args();
        if let Some(v) = self.loan_amount {
            args.loan_amount = v;
        }
        if let Some(v) = self.interest_rate {
            args.interest_rate = v;
        }
        if let Some(v) = self.loan_years {
            args.loan_years = v;
        }
        if let Some(v) = self.property_tax {
            args.property_tax = v;
        }
        if let Some(v) = self.home_insurance {
            args.home_insurance = v;
        }
        if let Some(v) = self.hoa_fees {
            args.hoa_fees = v;
        }
        args
    }
}

impl SavingsPayload {
    pub fn into_args(self) -> SavingsArgs {
        let mut args = default_savings_args();
        if let Some(v) = self.initial_deposit {
            args.initial_deposit = v;
        }
        if let Some(v) = self.monthly_deposit {
            args.monthly_deposit = v;
        }
        if let Some(v) = self.interest_rate {
            args.interest_rate = v;
        }
        if let Some(v) = self.years {
            args.years = v;
        }
        if let Some(v) = self.annual_fees {
            args.annual_fees = v;
        }
        if let Some(v) = self.tax_rate {
            args.tax_rate = v;
        }
        args
    }
}

impl CreditCardPayload {
    pub fn into_args(self) -> CreditCardArgs {
        let mut args = default_credit_card_args();
        if let Some(v) = self.balance {
            args.balance = v;
        }
        if let Some(v) = self.apr {
            args.apr = v;
        }
        if let Some(v) = self.monthly_payment {
            args.monthly_payment = v;
        }
        if let Some(v) = self.annual_fee {
            args.annual_fee = v;
        }
        args
    }
}
