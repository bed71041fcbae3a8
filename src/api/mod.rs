use axum::{
    Router,
    extract::{Json, Query},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

mod currency;
mod inputs;
mod table;

pub use currency::{ALL_CURRENCIES, Currency, CurrencyInfo};
pub use inputs::{
    CreditCardArgs, CreditCardPayload, InvestmentArgs, InvestmentPayload, MortgageArgs,
    MortgagePayload, SavingsArgs, SavingsPayload, ValidationError, build_credit_card_params,
    build_investment_params, build_mortgage_params, build_savings_params,
};

use crate::core::{
    InvestmentSnapshot, InvestmentSummary, MortgageSnapshot, MortgageSummary, PayoffSnapshot,
    PayoffSummary, SavingsSnapshot, SavingsSummary, amortize_mortgage, project_investment,
    project_savings, simulate_payoff, summarize_investment, summarize_mortgage, summarize_payoff,
    summarize_savings,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Parser, Debug)]
#[command(
    name = "fincalc",
    about = "Year-by-year projections for investments, mortgages, savings and credit card payoff"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = Currency::Usd,
        help = "Display currency; amounts are not converted"
    )]
    currency: Currency,
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Json)]
    output: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Compound a principal with monthly contributions
    Investment(InvestmentArgs),
    /// Amortize a fixed-rate mortgage
    Mortgage(MortgageArgs),
    /// Grow a savings balance with deposits and fees
    Savings(SavingsArgs),
    /// Pay down a credit card balance
    CreditCard(CreditCardArgs),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResponse {
    currency: CurrencyInfo,
    summary: InvestmentSummary,
    years: Vec<InvestmentSnapshot>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageResponse {
    currency: CurrencyInfo,
    summary: MortgageSummary,
    years: Vec<MortgageSnapshot>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsResponse {
    currency: CurrencyInfo,
    summary: SavingsSummary,
    years: Vec<SavingsSnapshot>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardResponse {
    currency: CurrencyInfo,
    summary: PayoffSummary,
    years: Vec<PayoffSnapshot>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionsResponse {
    investment: InvestmentResponse,
    mortgage: MortgageResponse,
    savings: SavingsResponse,
    credit_card: CreditCardResponse,
}

/// All four calculators at once. A top-level `currency` applies to any
/// section that does not name its own.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectionsPayload {
    currency: Option<Currency>,
    investment: InvestmentPayload,
    mortgage: MortgagePayload,
    savings: SavingsPayload,
    credit_card: CreditCardPayload,
}

// GET /api/projections only carries flat query fields, so sections keep
// their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectionsQuery {
    currency: Option<Currency>,
}

impl From<ProjectionsQuery> for ProjectionsPayload {
    fn from(query: ProjectionsQuery) -> Self {
        Self {
            currency: query.currency,
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn investment_response(payload: InvestmentPayload) -> Result<InvestmentResponse, ValidationError> {
    let currency = payload.currency.unwrap_or_default();
    let params = build_investment_params(&payload.into_args())?;
    let years = project_investment(&params);
    log::debug!("investment projection: {params:?} -> {} rows", years.len());
    Ok(InvestmentResponse {
        currency: currency.info(),
        summary: summarize_investment(&years),
        years,
    })
}

pub fn mortgage_response(payload: MortgagePayload) -> Result<MortgageResponse, ValidationError> {
    let currency = payload.currency.unwrap_or_default();
    let params = build_mortgage_params(&payload.into_args())?;
    let result = amortize_mortgage(&params);
    log::debug!(
        "mortgage amortization: {params:?} -> payment {:.2}",
        result.monthly_payment
    );
    Ok(MortgageResponse {
        currency: currency.info(),
        summary: summarize_mortgage(&result),
        years: result.years,
    })
}

pub fn savings_response(payload: SavingsPayload) -> Result<SavingsResponse, ValidationError> {
    let currency = payload.currency.unwrap_or_default();
    let params = build_savings_params(&payload.into_args())?;
    let years = project_savings(&params);
    log::debug!("savings projection: {params:?} -> {} rows", years.len());
    Ok(SavingsResponse {
        currency: currency.info(),
        summary: summarize_savings(&years),
        years,
    })
}

pub fn credit_card_response(payload: CreditCardPayload) -> Result<CreditCardResponse, ValidationError> {
    let currency = payload.currency.unwrap_or_default();
    let params = build_credit_card_params(&payload.into_args())?;
    let result = simulate_payoff(&params);
    log::debug!(
        "credit card payoff: {params:?} -> {} months, paid off: {}",
        result.months,
        result.paid_off
    );
    Ok(CreditCardResponse {
        currency: currency.info(),
        summary: summarize_payoff(&result),
        years: result.years,
    })
}

fn projections_response(mut payload: ProjectionsPayload) -> Result<ProjectionsResponse, ValidationError> {
    payload.investment.currency = payload.investment.currency.or(payload.currency);
    payload.mortgage.currency = payload.mortgage.currency.or(payload.currency);
    payload.savings.currency = payload.savings.currency.or(payload.currency);
    payload.credit_card.currency = payload.credit_card.currency.or(payload.currency);

    Ok(ProjectionsResponse {
        investment: investment_response(payload.investment)?,
        mortgage: mortgage_response(payload.mortgage)?,
        savings: savings_response(payload.savings)?,
        credit_card: credit_card_response(payload.credit_card)?,
    })
}

pub async fn run(cli: Cli) -> Result<(), Error> {
    let currency = Some(cli.currency);
    let rendered = match cli.command {
        Command::Serve { port } => return Ok(run_http_server(port).await?),
        Command::Investment(args) => {
            let response = investment_response(InvestmentPayload {
                currency,
                ..InvestmentPayload::from(args)
            })?;
            render(cli.output, &response, |r| table::render_investment(r, cli.currency))?
        }
        Command::Mortgage(args) => {
            let response = mortgage_response(MortgagePayload {
                currency,
                ..MortgagePayload::from(args)
            })?;
            render(cli.output, &response, |r| table::render_mortgage(r, cli.currency))?
        }
        Command::Savings(args) => {
            let response = savings_response(SavingsPayload {
                currency,
                ..SavingsPayload::from(args)
            })?;
            render(cli.output, &response, |r| table::render_savings(r, cli.currency))?
        }
        Command::CreditCard(args) => {
            let response = credit_card_response(CreditCardPayload {
                currency,
                ..CreditCardPayload::from(args)
            })?;
            render(cli.output, &response, |r| {
                table::render_credit_card(r, cli.currency)
            })?
        }
    };
    println!("{rendered}");
    Ok(())
}

fn render<T: Serialize>(
    output: OutputFormat,
    response: &T,
    as_table: impl FnOnce(&T) -> String,
) -> Result<String, serde_json::Error> {
    match output {
        OutputFormat::Json => serde_json::to_string_pretty(response),
        OutputFormat::Table => Ok(as_table(response)),
    }
}

// CLI arguments become fully-populated payloads so both surfaces share one
// validation path.
impl From<InvestmentArgs> for InvestmentPayload {
    fn from(args: InvestmentArgs) -> Self {
        Self {
            currency: None,
            principal: Some(args.principal),
            monthly_contribution: Some(args.monthly_contribution),
            annual_return: Some(args.annual_return),
            years: Some(args.years),
            fees: Some(args.fees),
            tax_rate: Some(args.tax_rate),
        }
    }
}

impl From<MortgageArgs> for MortgagePayload {
    fn from(args: MortgageArgs) -> Self {
        Self {
            currency: None,
            loan_amount: Some(args.loan_amount),
            interest_rate: Some(args.interest_rate),
            loan_years: Some(args.loan_years),
            property_tax: Some(args.property_tax),
            home_insurance: Some(args.home_insurance),
            hoa_fees: Some(args.hoa_fees),
        }
    }
}

impl From<SavingsArgs> for SavingsPayload {
    fn from(args: SavingsArgs) -> Self {
        Self {
            currency: None,
            initial_deposit: Some(args.initial_deposit),
            monthly_deposit: Some(args.monthly_deposit),
            interest_rate: Some(args.interest_rate),
            years: Some(args.years),
            annual_fees: Some(args.annual_fees),
            tax_rate: Some(args.tax_rate),
        }
    }
}

impl From<CreditCardArgs> for CreditCardPayload {
    fn from(args: CreditCardArgs) -> Self {
        Self {
            currency: None,
            balance: Some(args.balance),
            apr: Some(args.apr),
            monthly_payment: Some(args.monthly_payment),
            annual_fee: Some(args.annual_fee),
        }
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/currencies", get(currencies_handler))
        .route(
            "/api/investment",
            get(investment_get_handler).post(investment_post_handler),
        )
        .route(
            "/api/mortgage",
            get(mortgage_get_handler).post(mortgage_post_handler),
        )
        .route(
            "/api/savings",
            get(savings_get_handler).post(savings_post_handler),
        )
        .route(
            "/api/credit-card",
            get(credit_card_get_handler).post(credit_card_post_handler),
        )
        .route(
            "/api/projections",
            get(projections_get_handler).post(projections_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    log::info!("fincalc HTTP API listening on http://{addr}");
    log::info!("Local access: http://127.0.0.1:{port}/api/projections");

    axum::serve(listener, app).await
}

async fn currencies_handler() -> Response {
    let currencies: Vec<CurrencyInfo> = ALL_CURRENCIES.iter().map(|c| c.info()).collect();
    json_response(StatusCode::OK, currencies)
}

async fn investment_get_handler(Query(payload): Query<InvestmentPayload>) -> Response {
    respond(investment_response(payload))
}

async fn investment_post_handler(Json(payload): Json<InvestmentPayload>) -> Response {
    respond(investment_response(payload))
}

async fn mortgage_get_handler(Query(payload): Query<MortgagePayload>) -> Response {
    respond(mortgage_response(payload))
}

async fn mortgage_post_handler(Json(payload): Json<MortgagePayload>) -> Response {
    respond(mortgage_response(payload))
}

async fn savings_get_handler(Query(payload): Query<SavingsPayload>) -> Response {
    respond(savings_response(payload))
}

async fn savings_post_handler(Json(payload): Json<SavingsPayload>) -> Response {
    respond(savings_response(payload))
}

async fn credit_card_get_handler(Query(payload): Query<CreditCardPayload>) -> Response {
    respond(credit_card_response(payload))
}

async fn credit_card_post_handler(Json(payload): Json<CreditCardPayload>) -> Response {
    respond(credit_card_response(payload))
}

async fn projections_get_handler(Query(query): Query<ProjectionsQuery>) -> Response {
    respond(projections_response(ProjectionsPayload::from(query)))
}

async fn projections_post_handler(Json(payload): Json<ProjectionsPayload>) -> Response {
    respond(projections_response(payload))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn respond<T: Serialize>(result: Result<T, ValidationError>) -> Response {
    match result {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => {
            log::warn!("rejected request: {err}");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
