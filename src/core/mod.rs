mod credit_card;
mod investment;
mod mortgage;
mod rounding;
mod savings;
mod summary;
mod types;

pub use credit_card::{PAYOFF_MONTH_CAP, simulate_payoff};
pub use investment::project_investment;
pub use mortgage::{amortize_mortgage, monthly_payment};
pub use rounding::round_currency;
pub use savings::project_savings;
pub use summary::{
    InvestmentSummary, MortgageSummary, PayoffSummary, SavingsSummary, summarize_investment,
    summarize_mortgage, summarize_payoff, summarize_savings,
};
pub use types::{
    AmortizationResult, CreditCardParams, InvestmentParams, InvestmentSnapshot, MortgageParams,
    MortgageSnapshot, PayoffResult, PayoffSnapshot, SavingsParams, SavingsSnapshot,
};
