use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// Right granted by a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Only the exact lowercase names are accepted, "CALL" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(PricingError::InvalidOptionType(other.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Market inputs of a single European option.
/// Nothing is validated: a non-positive expiry or vola yields NaN/Inf prices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivativeParameter {
    /// spot S
    pub asset_price: f64,
    /// strike K
    pub strike: f64,
    /// time to maturity T in years
    pub time_to_expiration: f64,
    /// continuously compounded risk-free rate r, may be negative
    pub rfr: f64,
    /// annualized volatility sigma
    pub vola: f64,
}

impl DerivativeParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }

    /// Strike pinned to the current asset price.
    pub fn at_the_money(asset_price: f64, time_to_expiration: f64, rfr: f64, vola: f64) -> Self {
        Self::new(asset_price, asset_price, time_to_expiration, rfr, vola)
    }

    /// exp(-r T)
    pub fn discount_factor(&self) -> f64 {
        (-self.rfr * self.time_to_expiration).exp()
    }
}
