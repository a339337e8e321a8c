use anyhow::{Context, Result};
use risk::AltmanInputs;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Market inputs of the demo straddle.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StraddleConfig {
    /// current stock price
    pub spot: f64,
    /// time to maturity in years
    pub time_to_expiration: f64,
    /// annualized risk-free rate
    pub rfr: f64,
    /// annualized volatility
    pub vola: f64,
}

impl Default for StraddleConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            time_to_expiration: 0.5,
            rfr: 0.05,
            vola: 0.2,
        }
    }
}

/// Inputs of the report printed when no subcommand is given.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub straddle: StraddleConfig,
    pub altman: AltmanInputs,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            straddle: StraddleConfig::default(),
            altman: AltmanInputs {
                working_capital: 500_000.0,
                total_assets: 2_000_000.0,
                retained_earnings: 300_000.0,
                ebit: 400_000.0,
                market_value_of_equity: 1_500_000.0,
                total_liabilities: 800_000.0,
                sales: 2_500_000.0,
            },
        }
    }
}

impl DemoConfig {
    /// Built-in inputs unless a TOML file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                let config = Self::from_toml(&raw)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?;
                info!(path = %path.display(), "loaded demo config");
                Ok(config)
            }
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_keeps_defaults() {
        assert_eq!(DemoConfig::from_toml("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn partial_straddle_table() {
        let config = DemoConfig::from_toml("[straddle]\nspot = 250.0\nvola = 0.35\n").unwrap();
        assert_eq!(config.straddle.spot, 250.0);
        assert_eq!(config.straddle.vola, 0.35);
        assert_eq!(config.straddle.time_to_expiration, 0.5);
        assert_eq!(config.altman, DemoConfig::default().altman);
    }

    #[test]
    fn altman_table_needs_every_field() {
        let raw = "[altman]\nworking_capital = 1.0\n";
        assert!(DemoConfig::from_toml(raw).is_err());

        let raw = r#"
            [altman]
            working_capital = 10.0
            total_assets = 100.0
            retained_earnings = 20.0
            ebit = 5.0
            market_value_of_equity = 60.0
            total_liabilities = 40.0
            sales = 90.0
        "#;
        let config = DemoConfig::from_toml(raw).unwrap();
        assert_eq!(config.altman.total_liabilities, 40.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = DemoConfig::load(Some(Path::new("/nonexistent/math-finance.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(DemoConfig::load(None).unwrap(), DemoConfig::default());
    }
}
