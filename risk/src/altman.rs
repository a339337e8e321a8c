use crate::error::RiskError;
use crate::numeric::PseudoField;
use std::fmt;
use tracing::trace;

const WORKING_CAPITAL_WEIGHT: f64 = 1.2;
const RETAINED_EARNINGS_WEIGHT: f64 = 1.4;
const EBIT_WEIGHT: f64 = 3.3;
const EQUITY_WEIGHT: f64 = 0.6;
const SALES_WEIGHT: f64 = 1.0;

const SAFE_ZONE_FLOOR: f64 = 2.99;
const DISTRESS_ZONE_CEILING: f64 = 1.81;

/// Accounting figures feeding the Altman Z-Score.
/// See https://en.wikipedia.org/wiki/Altman_Z-score
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AltmanInputs<Numeric = f64> {
    pub working_capital: Numeric,
    pub total_assets: Numeric,
    pub retained_earnings: Numeric,
    pub ebit: Numeric,
    pub market_value_of_equity: Numeric,
    pub total_liabilities: Numeric,
    pub sales: Numeric,
}

/// The five ratios X1..X5 of the Z-Score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltmanRatios<Numeric = f64> {
    /// working capital / total assets
    pub x1: Numeric,
    /// retained earnings / total assets
    pub x2: Numeric,
    /// EBIT / total assets
    pub x3: Numeric,
    /// market value of equity / total liabilities
    pub x4: Numeric,
    /// sales / total assets
    pub x5: Numeric,
}

impl<Numeric> AltmanRatios<Numeric>
where
    Numeric: PseudoField,
{
    pub fn z_score(&self) -> Numeric {
        Numeric::from_f64(WORKING_CAPITAL_WEIGHT) * self.x1
            + Numeric::from_f64(RETAINED_EARNINGS_WEIGHT) * self.x2
            + Numeric::from_f64(EBIT_WEIGHT) * self.x3
            + Numeric::from_f64(EQUITY_WEIGHT) * self.x4
            + Numeric::from_f64(SALES_WEIGHT) * self.x5
    }
}

impl<Numeric> AltmanInputs<Numeric>
where
    Numeric: PseudoField,
{
    /// Zero total assets or liabilities give Inf/NaN ratios.
    pub fn ratios(&self) -> AltmanRatios<Numeric> {
        AltmanRatios {
            x1: self.working_capital / self.total_assets,
            x2: self.retained_earnings / self.total_assets,
            x3: self.ebit / self.total_assets,
            x4: self.market_value_of_equity / self.total_liabilities,
            x5: self.sales / self.total_assets,
        }
    }

    pub fn z_score(&self) -> Numeric {
        self.ratios().z_score()
    }
}

/// Weighted sum of the five Altman ratios.
///
/// Divisors are not checked: zero total assets or liabilities propagate as
/// Inf/NaN. Use [`checked_altman_z_score`] to reject them instead.
pub fn calculate_altman_z_score<Numeric>(
    working_capital: Numeric,
    total_assets: Numeric,
    retained_earnings: Numeric,
    ebit: Numeric,
    market_value_of_equity: Numeric,
    total_liabilities: Numeric,
    sales: Numeric,
) -> Numeric
where
    Numeric: PseudoField,
{
    AltmanInputs {
        working_capital,
        total_assets,
        retained_earnings,
        ebit,
        market_value_of_equity,
        total_liabilities,
        sales,
    }
    .z_score()
}

/// Z-Score that fails when total assets or total liabilities are not divisible.
/// Use the threshold to reject near-zero divisors as well.
pub fn checked_altman_z_score<Numeric>(
    inputs: &AltmanInputs<Numeric>,
    threshold: Option<Numeric>,
) -> Result<Numeric, RiskError>
where
    Numeric: PseudoField,
{
    if !(inputs.total_assets.is_divisible(threshold)) {
        return Err(RiskError::ZeroDivision("total assets"));
    }
    if !(inputs.total_liabilities.is_divisible(threshold)) {
        return Err(RiskError::ZeroDivision("total liabilities"));
    }
    Ok(inputs.z_score())
}

/// Conventional reading of a Z-Score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZScoreZone {
    /// Z > 2.99
    Safe,
    /// 1.81 <= Z <= 2.99
    Grey,
    /// Z < 1.81
    Distress,
}

impl ZScoreZone {
    /// `None` for an undefined (NaN or infinite) score, e.g. after a zero divisor.
    pub fn classify<Numeric>(z_score: Numeric) -> Option<Self>
    where
        Numeric: PseudoField + PartialOrd,
    {
        if !z_score.is_finite() {
            trace!("z-score undefined, no zone");
            return None;
        }
        let zone = if z_score > Numeric::from_f64(SAFE_ZONE_FLOOR) {
            ZScoreZone::Safe
        } else if z_score >= Numeric::from_f64(DISTRESS_ZONE_CEILING) {
            ZScoreZone::Grey
        } else {
            ZScoreZone::Distress
        };
        trace!(?zone, "classified z-score");
        Some(zone)
    }
}

impl fmt::Display for ZScoreZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZScoreZone::Safe => write!(f, "safe"),
            ZScoreZone::Grey => write!(f, "grey"),
            ZScoreZone::Distress => write!(f, "distress"),
        }
    }
}
