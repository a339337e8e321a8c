use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    #[error("division by 0: {0} is zero or below the threshold")]
    ZeroDivision(&'static str),
}
