//! Risk figures computed from accounting data.

pub mod altman;
pub mod error;
pub mod numeric;

pub use altman::{
    calculate_altman_z_score, checked_altman_z_score, AltmanInputs, AltmanRatios, ZScoreZone,
};
pub use error::RiskError;
pub use numeric::PseudoField;
