use super::rounding::round_currency;
use super::types::{InvestmentParams, InvestmentSnapshot};

pub fn project_investment(params: &InvestmentParams) -> Vec<InvestmentSnapshot> {
    let monthly_rate = (params.annual_return_percent - params.fee_percent) / 100.0 / 12.0;
    let mut balance = params.principal;
    let mut rows = Vec::with_capacity(params.years as usize + 1);

    for year in 0..=params.years {
        rows.push(investment_snapshot(params, year, balance));
        if year < params.years {
            for _ in 0..12 {
                balance = balance * (1.0 + monthly_rate) + params.monthly_contribution;
            }
        }
    }
    rows
}

fn investment_snapshot(params: &InvestmentParams, year: u32, balance: f64) -> InvestmentSnapshot {
    let total_contributions = params.principal + params.monthly_contribution * 12.0 * year as f64;
    let gross_earnings = balance - total_contributions;
    let taxes = if gross_earnings > 0.0 {
        gross_earnings * (params.tax_rate_percent / 100.0)
    } else {
        0.0
    };

    InvestmentSnapshot {
        year,
        balance: round_currency(balance - taxes),
        contributions: round_currency(total_contributions),
        earnings: round_currency(gross_earnings),
        taxes: round_currency(taxes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn sample_params() -> InvestmentParams {
        InvestmentParams {
            principal: 10_000.0,
            monthly_contribution: 500.0,
            annual_return_percent: 7.0,
            fee_percent: 0.0,
            tax_rate_percent: 15.0,
            years: 1,
        }
    }

    #[test]
    fn first_year_matches_hand_calculation() {
        let rows = project_investment(&sample_params());
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            InvestmentSnapshot {
                year: 0,
                balance: 10_000.0,
                contributions: 10_000.0,
                earnings: 0.0,
                taxes: 0.0,
            }
        );

        // 12 steps of b = b * (1 + 7/1200) + 500 from 10_000 gives ~16_918.6;
        // 15% of the ~918.6 gain is withheld from the reported balance.
        assert_eq!(rows[1].contributions, 16_000.0);
        assert_eq!(rows[1].earnings, 919.0);
        assert_eq!(rows[1].taxes, 138.0);
        assert_eq!(rows[1].balance, 16_781.0);
    }

    #[test]
    fn fees_reduce_the_compounding_rate() {
        let mut params = sample_params();
        params.fee_percent = 0.5;
        params.years = 20;

        let last = project_investment(&params)[20];
        assert_eq!(last.contributions, 130_000.0);
        assert_eq!(last.earnings, 151_775.0);
        assert_eq!(last.taxes, 22_766.0);
        assert_eq!(last.balance, 259_009.0);
    }

    #[test]
    fn zero_years_reports_the_principal_only() {
        let params = InvestmentParams {
            principal: 2_500.0,
            monthly_contribution: 0.0,
            annual_return_percent: 7.0,
            fee_percent: 0.0,
            tax_rate_percent: 15.0,
            years: 0,
        };

        let rows = project_investment(&params);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].balance, 2_500.0);
        assert_eq!(rows[0].earnings, 0.0);
    }

    #[test]
    fn losses_are_reported_but_never_taxed() {
        let params = InvestmentParams {
            principal: 1_000.0,
            monthly_contribution: 0.0,
            annual_return_percent: -10.0,
            fee_percent: 0.0,
            tax_rate_percent: 15.0,
            years: 2,
        };

        let rows = project_investment(&params);
        assert_eq!(rows[1].earnings, -96.0);
        assert_eq!(rows[1].taxes, 0.0);
        assert_eq!(rows[1].balance, 904.0);
        assert_eq!(rows[2].earnings, -182.0);
        assert_eq!(rows[2].balance, 818.0);
    }

    #[test]
    fn tax_is_not_removed_from_the_compounding_balance() {
        let mut taxed = sample_params();
        taxed.years = 10;
        let mut untaxed = taxed;
        untaxed.tax_rate_percent = 0.0;

        let taxed_rows = project_investment(&taxed);
        let untaxed_rows = project_investment(&untaxed);
        for (a, b) in taxed_rows.iter().zip(&untaxed_rows) {
            assert_eq!(a.earnings, b.earnings);
            assert_eq!(a.contributions, b.contributions);
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_one_row_per_year_in_order(
            principal in 0u32..1_000_000,
            contribution in 0u32..10_000,
            return_bp in -500i32..3000,
            fee_bp in 0u32..500,
            tax_bp in 0u32..5000,
            years in 0u32..51
        ) {
            let params = InvestmentParams {
                principal: principal as f64,
                monthly_contribution: contribution as f64,
                annual_return_percent: return_bp as f64 / 100.0,
                fee_percent: fee_bp as f64 / 100.0,
                tax_rate_percent: tax_bp as f64 / 100.0,
                years,
            };

            let rows = project_investment(&params);
            prop_assert_eq!(rows.len(), years as usize + 1);
            for (i, row) in rows.iter().enumerate() {
                prop_assert_eq!(row.year as usize, i);
                prop_assert!(row.taxes >= 0.0);
                prop_assert!(row.balance.fract() == 0.0);
            }
            prop_assert_eq!(rows, project_investment(&params));
        }
    }
}
