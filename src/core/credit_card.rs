use super::rounding::round_currency;
use super::types::{CreditCardParams, PayoffResult, PayoffSnapshot};

/// Longest payoff the simulation will run, in months.
pub const PAYOFF_MONTH_CAP: u32 = 120;

/// Simulates paying down a card with a fixed monthly payment.
///
/// A row is recorded at every 12-month boundary from the state before that
/// month's charges. The annual fee is added to the balance right after the
/// boundary row, so a row's `balance` never includes the fee it reports in
/// `fees`. When the balance is cleared a closing row with zero balance is
/// appended at the (possibly fractional) exit year. If the cap is reached
/// first, no closing row is added and `paid_off` is false.
pub fn simulate_payoff(params: &CreditCardParams) -> PayoffResult {
    let monthly_rate = params.apr_percent / 100.0 / 12.0;
    let mut balance = params.balance;
    let mut total_interest = 0.0;
    let mut month: u32 = 0;
    let mut years = Vec::new();

    while balance > 0.0 && month <= PAYOFF_MONTH_CAP {
        if month % 12 == 0 {
            years.push(PayoffSnapshot {
                year: f64::from(month) / 12.0,
                balance: round_currency(balance),
                total_paid: round_currency(params.monthly_payment * f64::from(month)),
                interest: round_currency(total_interest),
                fees: round_currency(fees_accrued(params, month)),
            });
            if month > 0 {
                balance += params.annual_fee;
            }
        }

        let interest_charge = balance * monthly_rate;
        total_interest += interest_charge;
        balance = balance + interest_charge - params.monthly_payment;
        month += 1;
    }

    let paid_off = balance <= 0.0;
    if paid_off {
        years.push(PayoffSnapshot {
            year: f64::from(month) / 12.0,
            balance: 0.0,
            total_paid: round_currency(params.monthly_payment * f64::from(month)),
            interest: round_currency(total_interest),
            fees: round_currency(fees_accrued(params, month)),
        });
    }

    PayoffResult {
        years,
        months: month,
        paid_off,
    }
}

fn fees_accrued(params: &CreditCardParams, month: u32) -> f64 {
    f64::from(month / 12) * params.annual_fee
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn snapshot(year: f64, balance: f64, total_paid: f64, interest: f64, fees: f64) -> PayoffSnapshot {
        PayoffSnapshot {
            year,
            balance,
            total_paid,
            interest,
            fees,
        }
    }

    #[test]
    fn pays_off_before_the_cap() {
        let params = CreditCardParams {
            balance: 5_000.0,
            apr_percent: 18.0,
            monthly_payment: 150.0,
            annual_fee: 0.0,
        };

        let result = simulate_payoff(&params);
        assert!(result.paid_off);
        assert_eq!(result.months, 47);
        assert_eq!(result.years.len(), 5);
        assert_eq!(result.years[0], snapshot(0.0, 5_000.0, 0.0, 0.0, 0.0));
        assert_eq!(result.years[1], snapshot(1.0, 4_022.0, 1_800.0, 822.0, 0.0));
        assert_eq!(result.years[3], snapshot(3.0, 1_454.0, 5_400.0, 1_854.0, 0.0));

        let last = result.years[4];
        assert!((last.year - 47.0 / 12.0).abs() < 1e-12);
        assert_eq!(last.balance, 0.0);
        assert_eq!(last.total_paid, 7_050.0);
        assert_eq!(last.interest, 1_984.0);
    }

    #[test]
    fn payment_below_interest_hits_the_cap() {
        let params = CreditCardParams {
            balance: 5_000.0,
            apr_percent: 24.0,
            monthly_payment: 50.0,
            annual_fee: 0.0,
        };

        let result = simulate_payoff(&params);
        assert!(!result.paid_off);
        assert_eq!(result.months, PAYOFF_MONTH_CAP + 1);
        // Boundary rows at months 0, 12, ..., 120 and no closing row.
        assert_eq!(result.years.len(), 11);
        let last = result.years[10];
        assert_eq!(last.year, 10.0);
        assert_eq!(last.balance, 29_413.0);
        assert_eq!(last.total_paid, 6_000.0);
        assert_eq!(last.interest, 30_413.0);
    }

    #[test]
    fn annual_fee_lands_after_the_boundary_row() {
        let params = CreditCardParams {
            balance: 3_000.0,
            apr_percent: 15.0,
            monthly_payment: 100.0,
            annual_fee: 95.0,
        };

        let result = simulate_payoff(&params);
        assert!(result.paid_off);
        assert_eq!(result.months, 42);
        assert_eq!(result.years[1], snapshot(1.0, 2_196.0, 1_200.0, 396.0, 95.0));
        assert_eq!(result.years[2], snapshot(2.0, 1_374.0, 2_400.0, 679.0, 190.0));
        assert_eq!(result.years[3], snapshot(3.0, 419.0, 3_600.0, 829.0, 285.0));
        assert_eq!(result.years[4], snapshot(3.5, 0.0, 4_200.0, 849.0, 285.0));
    }

    #[test]
    fn exact_payoff_on_a_year_boundary_skips_the_boundary_row() {
        let params = CreditCardParams {
            balance: 1_200.0,
            apr_percent: 0.0,
            monthly_payment: 100.0,
            annual_fee: 0.0,
        };

        let result = simulate_payoff(&params);
        assert_eq!(result.months, 12);
        assert_eq!(
            result.years,
            vec![
                snapshot(0.0, 1_200.0, 0.0, 0.0, 0.0),
                snapshot(1.0, 0.0, 1_200.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn zero_balance_yields_only_the_closing_row() {
        let params = CreditCardParams {
            balance: 0.0,
            apr_percent: 18.0,
            monthly_payment: 150.0,
            annual_fee: 0.0,
        };

        let result = simulate_payoff(&params);
        assert!(result.paid_off);
        assert_eq!(result.months, 0);
        assert_eq!(result.years, vec![snapshot(0.0, 0.0, 0.0, 0.0, 0.0)]);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_terminates_within_cap_and_reports_payoff_consistently(
            balance in 0u32..100_000,
            apr_bp in 0u32..4000,
            payment in 1u32..10_000,
            fee in 0u32..1000
        ) {
            let params = CreditCardParams {
                balance: balance as f64,
                apr_percent: apr_bp as f64 / 100.0,
                monthly_payment: payment as f64,
                annual_fee: fee as f64,
            };

            let result = simulate_payoff(&params);
            prop_assert!(result.months <= PAYOFF_MONTH_CAP + 1);
            prop_assert!(!result.years.is_empty());
            prop_assert!(result.years.len() <= 12);

            let last = result.years[result.years.len() - 1];
            if result.paid_off {
                prop_assert_eq!(last.balance, 0.0);
                prop_assert_eq!(last.year, f64::from(result.months) / 12.0);
            } else {
                prop_assert_eq!(result.months, PAYOFF_MONTH_CAP + 1);
                prop_assert_eq!(last.year, 10.0);
            }
            for pair in result.years.windows(2) {
                prop_assert!(pair[0].year < pair[1].year);
            }
            prop_assert_eq!(result, simulate_payoff(&params));
        }
    }
}
