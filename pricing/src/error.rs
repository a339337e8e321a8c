use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("invalid option type '{0}', use 'call' or 'put'")]
    InvalidOptionType(String),
}
