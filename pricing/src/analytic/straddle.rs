use crate::analytic::black_scholes::{BlackScholesMerton, OptionPrice};
use crate::common::models::DerivativeParameter;
use tracing::debug;

/// Both legs of a long straddle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StraddlePrice {
    pub call: f64,
    pub put: f64,
}

impl StraddlePrice {
    pub fn total(&self) -> f64 {
        self.call + self.put
    }
}

/// Call and put struck at the current asset price.
///
/// The strike is the spot `S`, not the forward `S exp(r T)`, so the position is
/// only approximately at-the-money-forward when `r T` is small.
pub fn atmf_straddle(asset_price: f64, time_to_expiration: f64, rfr: f64, vola: f64) -> StraddlePrice {
    let dp = DerivativeParameter::at_the_money(asset_price, time_to_expiration, rfr, vola);
    let straddle = StraddlePrice {
        call: BlackScholesMerton::call(&dp),
        put: BlackScholesMerton::put(&dp),
    };
    debug!(call = straddle.call, put = straddle.put, "priced straddle legs");
    straddle
}

/// Premium of the straddle, see [`atmf_straddle`].
pub fn atmf_straddle_price(asset_price: f64, time_to_expiration: f64, rfr: f64, vola: f64) -> f64 {
    atmf_straddle(asset_price, time_to_expiration, rfr, vola).total()
}
