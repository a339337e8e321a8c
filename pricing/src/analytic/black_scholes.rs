use crate::common::models::{DerivativeParameter, OptionType};
use crate::error::PricingError;
use probability::distribution::{Distribution, Gaussian};
use tracing::trace;

/// Standard normal cumulative distribution function, P(Z <= d).
pub fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    /// The standardized moneyness terms (d1, d2).
    pub fn d1_d2(dp: &DerivativeParameter) -> (f64, f64) {
        let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr + 0.5 * dp.vola.powi(2)) * dp.time_to_expiration)
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        trace!(d1, d2, "black-scholes standardized terms");
        (d1, d2)
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> f64 {
        let (d1, d2) = Self::d1_d2(dp);
        dp.asset_price * cdf(d1) - dp.strike * dp.discount_factor() * cdf(d2)
    }

    fn put(dp: &DerivativeParameter) -> f64 {
        let (d1, d2) = Self::d1_d2(dp);
        dp.strike * dp.discount_factor() * cdf(-d2) - dp.asset_price * cdf(-d1)
    }
}

/// Price of a European option of the given type.
pub fn black_scholes_price(dp: &DerivativeParameter, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Call => BlackScholesMerton::call(dp),
        OptionType::Put => BlackScholesMerton::put(dp),
    }
}

/// Same as [`black_scholes_price`] with the option type given by name ("call" or "put").
/// The name is checked before any arithmetic happens.
pub fn black_scholes_price_str(
    asset_price: f64,
    strike: f64,
    time_to_expiration: f64,
    rfr: f64,
    vola: f64,
    option_type: &str,
) -> Result<f64, PricingError> {
    let option_type: OptionType = option_type.parse()?;
    let dp = DerivativeParameter::new(asset_price, strike, time_to_expiration, rfr, vola);
    Ok(black_scholes_price(&dp, option_type))
}

/// Closed form of call - put: S - K exp(-r T).
pub fn put_call_parity(dp: &DerivativeParameter) -> f64 {
    dp.asset_price - dp.strike * dp.discount_factor()
}
