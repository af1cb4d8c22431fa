//! # Equipment Investment Calculation
//!
//! Compares the yearly cost of owning a piece of equipment with renting it
//! for the same number of shoot days, and recommends buying or renting.
//!
//! ## Cost Model
//!
//! - Depreciation: straight-line over 5 years (20% of price per year)
//! - Maintenance: 20% of price over the equipment's life, spread evenly
//! - Insurance: the annual premium as entered
//! - Rental: daily rate × uses per year
//!
//! Break-even is the number of rental days whose cost equals the full
//! 5-year cost of ownership.
//!
//! ## Recommendation
//!
//! BUY when the break-even point is at most 12 months away. Past that,
//! RENT only if renting is cheaper per year; otherwise BUY.
//!
//! ## Example
//!
//! ```rust
//! use photo_core::calculations::investment::{calculate, InvestmentInput, Recommendation};
//!
//! let input = InvestmentInput::new(3000.0, 75.0, 2, 0.0);
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.annual_ownership_cost, 720.0);
//! assert_eq!(result.annual_rental_cost, 1800.0);
//! assert_eq!(result.break_even_months, 24);
//! assert_eq!(result.recommendation, Recommendation::Buy);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Currency;
use crate::errors::{CalcError, CalcResult};
use crate::format::{format_currency, number_format};

/// Straight-line depreciation period
pub const DEPRECIATION_YEARS: u32 = 5;

/// Share of the purchase price written off each year
pub const ANNUAL_DEPRECIATION_RATE: f64 = 1.0 / DEPRECIATION_YEARS as f64;

/// Lifetime maintenance as a share of the purchase price
pub const MAINTENANCE_RATE: f64 = 0.20;

/// Payback window that makes buying an automatic recommendation
pub const BREAK_EVEN_THRESHOLD_MONTHS: u32 = 12;

/// Buy-or-rent comparison input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub purchase_price: f64,
    pub daily_rental_rate: f64,
    /// Days the equipment is used per month
    pub uses_per_month: u32,
    #[serde(default)]
    pub annual_insurance: f64,
}

impl InvestmentInput {
    pub fn new(purchase_price: f64, daily_rental_rate: f64, uses_per_month: u32, annual_insurance: f64) -> Self {
        InvestmentInput {
            purchase_price,
            daily_rental_rate,
            uses_per_month,
            annual_insurance,
        }
    }

    /// Validate input parameters, reporting every bad field at once
    pub fn validate(&self) -> CalcResult<()> {
        let mut errors = Vec::new();

        if !(self.purchase_price > 0.0) {
            errors.push(CalcError::invalid_input(
                "purchase_price",
                self.purchase_price.to_string(),
                "Purchase price must be greater than zero",
            ));
        }
        if !(self.daily_rental_rate > 0.0) {
            errors.push(CalcError::invalid_input(
                "daily_rental_rate",
                self.daily_rental_rate.to_string(),
                "Daily rental rate must be greater than zero",
            ));
        }
        if self.uses_per_month == 0 {
            errors.push(CalcError::invalid_input(
                "usage_per_month",
                "0",
                "Usage per month must be greater than zero",
            ));
        }
        if !(self.annual_insurance >= 0.0) {
            errors.push(CalcError::invalid_input(
                "insurance_annual",
                self.annual_insurance.to_string(),
                "Annual insurance cannot be negative",
            ));
        }

        match CalcError::from_many(errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Rent,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Buy => "BUY",
            Recommendation::Rent => "RENT",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full cost comparison.
///
/// ## JSON Example
///
/// ```json
/// {
///   "purchase_price": 3000.0,
///   "daily_rental_rate": 75.0,
///   "uses_per_month": 2,
///   "annual_uses": 24,
///   "annual_ownership_cost": 720.0,
///   "annual_rental_cost": 1800.0,
///   "break_even_uses": 48,
///   "break_even_months": 24,
///   "annual_savings": 1080.0,
///   "recommendation": "BUY",
///   "recommendation_reason": "While payback takes 24 months, ..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentResult {
    pub purchase_price: f64,
    pub daily_rental_rate: f64,
    pub uses_per_month: u32,
    pub annual_uses: u64,
    pub annual_insurance: f64,

    pub annual_depreciation: f64,
    pub annual_maintenance_cost: f64,
    pub lifetime_maintenance_cost: f64,
    pub annual_ownership_cost: f64,

    pub five_year_depreciation: f64,
    pub five_year_maintenance: f64,
    pub five_year_insurance: f64,
    pub five_year_ownership_cost: f64,

    pub annual_rental_cost: f64,
    pub five_year_rental_cost: f64,

    pub break_even_uses: u64,
    pub break_even_months: u64,
    pub pays_for_itself_in_one_year: bool,

    pub cost_per_use_ownership: f64,
    pub cost_per_use_rental: f64,
    /// Rental minus ownership; negative when renting is cheaper
    pub annual_savings: f64,
    pub monthly_savings: f64,
    pub five_year_savings: f64,

    pub recommendation: Recommendation,
    pub recommendation_reason: String,
}

/// Buy-or-rent recommendation from payback time and yearly savings
pub fn recommend(break_even_months: u64, annual_savings: f64) -> Recommendation {
    if break_even_months <= u64::from(BREAK_EVEN_THRESHOLD_MONTHS) {
        Recommendation::Buy
    } else if annual_savings < 0.0 {
        Recommendation::Rent
    } else {
        Recommendation::Buy
    }
}

fn recommendation_reason(recommendation: Recommendation, break_even_months: u64, annual_savings: f64) -> String {
    let savings = number_format(annual_savings.abs(), 2);
    match recommendation {
        Recommendation::Buy if break_even_months <= u64::from(BREAK_EVEN_THRESHOLD_MONTHS) => {
            format!("This equipment will pay for itself within {} months of usage.", break_even_months)
        }
        Recommendation::Buy => format!(
            "While payback takes {} months, you'll save money long-term with annual savings of {}.",
            break_even_months, savings
        ),
        Recommendation::Rent => format!(
            "Renting will save you {} annually based on your usage pattern.",
            savings
        ),
    }
}

/// Rental days whose cost covers the 5-year cost of ownership.
///
/// Fails when the count does not fit in a `u64`.
fn break_even_uses(five_year_ownership_cost: f64, daily_rental_rate: f64) -> CalcResult<u64> {
    let uses = (five_year_ownership_cost / daily_rental_rate).ceil();
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    if !(uses >= 0.0 && uses < u64::MAX as f64) {
        return Err(CalcError::invalid_input(
            "purchase_price",
            five_year_ownership_cost.to_string(),
            "Purchase price is too large for the daily rental rate",
        ));
    }
    Ok(uses as u64)
}

/// Compare owning against renting.
pub fn calculate(input: &InvestmentInput) -> CalcResult<InvestmentResult> {
    input.validate()?;

    let price = input.purchase_price;
    let rate = input.daily_rental_rate;
    let years = f64::from(DEPRECIATION_YEARS);
    let annual_uses = u64::from(input.uses_per_month) * 12;

    let annual_depreciation = price * ANNUAL_DEPRECIATION_RATE;
    let lifetime_maintenance_cost = price * MAINTENANCE_RATE;
    let annual_maintenance_cost = lifetime_maintenance_cost / years;
    let annual_ownership_cost = annual_depreciation + annual_maintenance_cost + input.annual_insurance;

    let five_year_insurance = input.annual_insurance * years;
    let five_year_ownership_cost = price + lifetime_maintenance_cost + five_year_insurance;

    let annual_rental_cost = rate * annual_uses as f64;
    let five_year_rental_cost = annual_rental_cost * years;

    let break_even_uses = break_even_uses(five_year_ownership_cost, rate)?;
    let break_even_months = break_even_uses.div_ceil(u64::from(input.uses_per_month));

    let annual_savings = annual_rental_cost - annual_ownership_cost;
    let recommendation = recommend(break_even_months, annual_savings);

    Ok(InvestmentResult {
        purchase_price: price,
        daily_rental_rate: rate,
        uses_per_month: input.uses_per_month,
        annual_uses,
        annual_insurance: input.annual_insurance,
        annual_depreciation,
        annual_maintenance_cost,
        lifetime_maintenance_cost,
        annual_ownership_cost,
        five_year_depreciation: price,
        five_year_maintenance: lifetime_maintenance_cost,
        five_year_insurance,
        five_year_ownership_cost,
        annual_rental_cost,
        five_year_rental_cost,
        break_even_uses,
        break_even_months,
        pays_for_itself_in_one_year: break_even_months <= u64::from(BREAK_EVEN_THRESHOLD_MONTHS),
        cost_per_use_ownership: annual_ownership_cost / annual_uses as f64,
        cost_per_use_rental: rate,
        annual_savings,
        monthly_savings: annual_savings / 12.0,
        five_year_savings: five_year_rental_cost - five_year_ownership_cost,
        recommendation,
        recommendation_reason: recommendation_reason(recommendation, break_even_months, annual_savings),
    })
}

/// Convenience wrapper over [`calculate`] taking loose parameters
pub fn compute_investment(
    purchase_price: f64,
    daily_rental_rate: f64,
    uses_per_month: u32,
    annual_insurance: f64,
) -> CalcResult<InvestmentResult> {
    calculate(&InvestmentInput::new(
        purchase_price,
        daily_rental_rate,
        uses_per_month,
        annual_insurance,
    ))
}

/// Money fields rendered in the chosen currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedInvestment {
    pub purchase_price: String,
    pub daily_rental_rate: String,
    pub annual_insurance: String,
    pub annual_depreciation: String,
    pub annual_maintenance_cost: String,
    pub annual_ownership_cost: String,
    pub five_year_ownership_cost: String,
    pub annual_rental_cost: String,
    pub five_year_rental_cost: String,
    pub cost_per_use_ownership: String,
    pub cost_per_use_rental: String,
    pub annual_savings: String,
    pub monthly_savings: String,
    pub five_year_savings: String,
}

impl FormattedInvestment {
    pub fn new(r: &InvestmentResult, currency: Currency) -> Self {
        let fmt = |amount: f64| format_currency(amount, currency);
        FormattedInvestment {
            purchase_price: fmt(r.purchase_price),
            daily_rental_rate: fmt(r.daily_rental_rate),
            annual_insurance: fmt(r.annual_insurance),
            annual_depreciation: fmt(r.annual_depreciation),
            annual_maintenance_cost: fmt(r.annual_maintenance_cost),
            annual_ownership_cost: fmt(r.annual_ownership_cost),
            five_year_ownership_cost: fmt(r.five_year_ownership_cost),
            annual_rental_cost: fmt(r.annual_rental_cost),
            five_year_rental_cost: fmt(r.five_year_rental_cost),
            cost_per_use_ownership: fmt(r.cost_per_use_ownership),
            cost_per_use_rental: fmt(r.cost_per_use_rental),
            annual_savings: fmt(r.annual_savings),
            monthly_savings: fmt(r.monthly_savings),
            five_year_savings: fmt(r.five_year_savings),
        }
    }
}

/// Investment result with its currency and formatted amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReport {
    #[serde(flatten)]
    pub result: InvestmentResult,
    pub currency: Currency,
    pub currency_symbol: String,
    pub formatted: FormattedInvestment,
}

impl InvestmentReport {
    pub fn new(result: InvestmentResult, currency: Currency) -> Self {
        let formatted = FormattedInvestment::new(&result, currency);
        InvestmentReport {
            result,
            currency,
            currency_symbol: currency.symbol().to_string(),
            formatted,
        }
    }
}
