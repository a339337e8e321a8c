//! Closed-form pricing of European options under Black-Scholes-Merton.

pub mod analytic;
pub mod common;
pub mod error;

pub use analytic::black_scholes::{
    black_scholes_price, black_scholes_price_str, put_call_parity, BlackScholesMerton, OptionPrice,
};
pub use analytic::straddle::{atmf_straddle, atmf_straddle_price, StraddlePrice};
pub use common::models::{DerivativeParameter, OptionType};
pub use error::PricingError;
