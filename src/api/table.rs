use tabled::{Table, builder::Builder};

use super::currency::Currency;
use super::{CreditCardResponse, InvestmentResponse, MortgageResponse, SavingsResponse};

fn field_table(rows: &[(&str, String)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (field, value) in rows {
        builder.push_record([field.to_string(), value.clone()]);
    }
    Table::from(builder).to_string()
}

fn years_table(header: &[&str], rows: impl IntoIterator<Item = Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }
    Table::from(builder).to_string()
}

pub fn render_investment(response: &InvestmentResponse, currency: Currency) -> String {
    let fmt = |v: f64| currency.format_amount(v);
    let summary = field_table(&[
        ("Final Balance (after tax)", fmt(response.summary.final_balance)),
        ("Total Contributions", fmt(response.summary.total_contributions)),
        ("Total Earnings", fmt(response.summary.total_earnings)),
        ("Taxes Owed", fmt(response.summary.total_taxes)),
    ]);
    let years = years_table(
        &["Year", "Net Balance", "Contributions", "Earnings", "Taxes"],
        response.years.iter().map(|row| {
            vec![
                row.year.to_string(),
                fmt(row.balance),
                fmt(row.contributions),
                fmt(row.earnings),
                fmt(row.taxes),
            ]
        }),
    );
    format!("{summary}\n{years}")
}

pub fn render_mortgage(response: &MortgageResponse, currency: Currency) -> String {
    let fmt = |v: f64| currency.format_amount(v);
    let summary = field_table(&[
        ("Monthly Payment (P&I)", fmt(response.summary.monthly_payment)),
        ("Total Monthly Payment", fmt(response.summary.total_monthly_payment)),
        ("Total Interest", fmt(response.summary.total_interest)),
        ("Total Expenses", fmt(response.summary.total_expenses)),
    ]);
    let years = years_table(
        &["Year", "Principal Paid", "Interest Paid", "Remaining Balance", "Expenses"],
        response.years.iter().map(|row| {
            vec![
                row.year.to_string(),
                fmt(row.principal_paid),
                fmt(row.interest),
                fmt(row.balance),
                fmt(row.expenses),
            ]
        }),
    );
    format!("{summary}\n{years}")
}

pub fn render_savings(response: &SavingsResponse, currency: Currency) -> String {
    let fmt = |v: f64| currency.format_amount(v);
    let summary = field_table(&[
        ("Final Balance (after tax)", fmt(response.summary.final_balance)),
        ("Total Deposits", fmt(response.summary.total_deposits)),
        ("Interest Earned", fmt(response.summary.total_interest)),
        ("Taxes & Fees", fmt(response.summary.total_costs)),
    ]);
    let years = years_table(
        &["Year", "Net Balance", "Deposits", "Interest", "Fees", "Taxes"],
        response.years.iter().map(|row| {
            vec![
                row.year.to_string(),
                fmt(row.balance),
                fmt(row.deposits),
                fmt(row.interest),
                fmt(row.fees),
                fmt(row.taxes),
            ]
        }),
    );
    format!("{summary}\n{years}")
}

pub fn render_credit_card(response: &CreditCardResponse, currency: Currency) -> String {
    let fmt = |v: f64| currency.format_amount(v);
    let months = if response.summary.paid_off {
        format!("{} months", response.summary.months)
    } else {
        format!("not paid off within {} months", crate::core::PAYOFF_MONTH_CAP)
    };
    let summary = field_table(&[
        ("Time to Pay Off", months),
        ("Total Interest", fmt(response.summary.total_interest)),
        ("Total Fees", fmt(response.summary.total_fees)),
        ("Total Paid", fmt(response.summary.total_paid)),
    ]);
    let years = years_table(
        &["Year", "Remaining Balance", "Total Paid", "Interest Paid", "Fees"],
        response.years.iter().map(|row| {
            vec![
                format!("{:.2}", row.year),
                fmt(row.balance),
                fmt(row.total_paid),
                fmt(row.interest),
                fmt(row.fees),
            ]
        }),
    );
    format!("{summary}\n{years}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::inputs::{CreditCardPayload, InvestmentPayload};
    use crate::api::{credit_card_response, investment_response};

    #[test]
    fn investment_table_shows_formatted_summary_and_every_year() {
        let payload = InvestmentPayload {
            years: Some(3),
            ..InvestmentPayload::default()
        };
        let response = investment_response(payload).expect("valid payload");

        let rendered = render_investment(&response, Currency::Gbp);
        assert!(rendered.contains("Final Balance (after tax)"));
        assert!(rendered.contains("£10,000"));
        assert!(rendered.contains("£16,000"));
        assert!(rendered.contains("£28,000"));
    }

    #[test]
    fn capped_card_is_reported_as_not_paid_off() {
        let payload = CreditCardPayload {
            apr: Some(24.0),
            monthly_payment: Some(50.0),
            ..CreditCardPayload::default()
        };
        let response = credit_card_response(payload).expect("valid payload");

        let rendered = render_credit_card(&response, Currency::Usd);
        assert!(rendered.contains("not paid off within 120 months"));
        assert!(rendered.contains("$29,413"));
    }
}
