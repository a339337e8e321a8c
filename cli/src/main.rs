//! # math-finance
//!
//! Prices an at-the-money straddle and computes an Altman Z-Score.
//! Without a subcommand it prints the two-line demo report.

mod config;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::DemoConfig;
use pricing::{
    atmf_straddle, atmf_straddle_price, black_scholes_price, DerivativeParameter, OptionType,
};
use risk::{AltmanInputs, ZScoreZone};
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "math-finance")]
#[command(about = "Black-Scholes straddle pricing and Altman Z-Score", long_about = None)]
struct Cli {
    /// TOML file overriding the demo inputs
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single European option
    Price {
        #[arg(long)]
        spot: f64,
        #[arg(long)]
        strike: f64,
        /// Time to maturity in years
        #[arg(long)]
        maturity: f64,
        /// Annualized risk-free rate
        #[arg(long, allow_hyphen_values = true)]
        rate: f64,
        /// Annualized volatility
        #[arg(long)]
        vola: f64,
        /// "call" or "put"
        #[arg(long, default_value = "call")]
        option_type: String,
    },

    /// Price a straddle struck at the spot
    Straddle {
        #[arg(long)]
        spot: f64,
        /// Time to maturity in years
        #[arg(long)]
        maturity: f64,
        /// Annualized risk-free rate
        #[arg(long, allow_hyphen_values = true)]
        rate: f64,
        /// Annualized volatility
        #[arg(long)]
        vola: f64,
        /// Print the call and put legs as well
        #[arg(long)]
        breakdown: bool,
    },

    /// Compute the Altman Z-Score from accounting figures
    ZScore {
        #[arg(long, allow_hyphen_values = true)]
        working_capital: f64,
        #[arg(long, allow_hyphen_values = true)]
        total_assets: f64,
        #[arg(long, allow_hyphen_values = true)]
        retained_earnings: f64,
        #[arg(long, allow_hyphen_values = true)]
        ebit: f64,
        #[arg(long, allow_hyphen_values = true)]
        market_value_of_equity: f64,
        #[arg(long, allow_hyphen_values = true)]
        total_liabilities: f64,
        #[arg(long, allow_hyphen_values = true)]
        sales: f64,
        /// Print the conventional safe/grey/distress reading as well
        #[arg(long)]
        zone: bool,
    },
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries only the report
    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => {
            let config = DemoConfig::load(cli.config.as_deref())?;
            debug!(?config, "running demo report");

            let s = &config.straddle;
            let straddle_price = atmf_straddle_price(s.spot, s.time_to_expiration, s.rfr, s.vola);
            println!("{}", report::straddle_line(straddle_price));

            println!("{}", report::z_score_line(config.altman.z_score()));
        }
        Some(Commands::Price {
            spot,
            strike,
            maturity,
            rate,
            vola,
            option_type,
        }) => {
            let option_type: OptionType = option_type.parse()?;
            let dp = DerivativeParameter::new(spot, strike, maturity, rate, vola);
            let price = black_scholes_price(&dp, option_type);
            println!("{}", report::option_line(option_type, price));
        }
        Some(Commands::Straddle {
            spot,
            maturity,
            rate,
            vola,
            breakdown,
        }) => {
            let straddle = atmf_straddle(spot, maturity, rate, vola);
            if breakdown {
                for line in report::straddle_breakdown_lines(&straddle) {
                    println!("{}", line);
                }
            } else {
                println!("{}", report::straddle_line(straddle.total()));
            }
        }
        Some(Commands::ZScore {
            working_capital,
            total_assets,
            retained_earnings,
            ebit,
            market_value_of_equity,
            total_liabilities,
            sales,
            zone,
        }) => {
            let inputs = AltmanInputs {
                working_capital,
                total_assets,
                retained_earnings,
                ebit,
                market_value_of_equity,
                total_liabilities,
                sales,
            };
            let z_score = inputs.z_score();
            debug!(?inputs, ratios = ?inputs.ratios(), "computed z-score");
            println!("{}", report::z_score_line(z_score));
            if zone {
                println!("{}", report::zone_line(ZScoreZone::classify(z_score)));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_runs_demo() {
        let cli = Cli::try_parse_from(["math-finance"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn price_subcommand() {
        let cli = Cli::try_parse_from([
            "math-finance", "price", "--spot", "100", "--strike", "95", "--maturity", "0.5",
            "--rate", "-0.01", "--vola", "0.2", "--option-type", "put",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Price { strike, rate, option_type, .. }) => {
                assert_eq!(strike, 95.0);
                assert_eq!(rate, -0.01);
                assert_eq!(option_type, "put");
            }
            _ => panic!("expected price subcommand"),
        }
    }

    #[test]
    fn z_score_subcommand_with_zone() {
        let cli = Cli::try_parse_from([
            "math-finance", "-vv", "z-score", "--working-capital", "1", "--total-assets", "2",
            "--retained-earnings", "3", "--ebit", "4", "--market-value-of-equity", "5",
            "--total-liabilities", "6", "--sales", "7", "--zone",
        ])
        .unwrap();
        assert_eq!(log_level(cli.verbose), Level::DEBUG);
        assert!(matches!(cli.command, Some(Commands::ZScore { zone: true, .. })));
    }

    #[test]
    fn log_levels() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(7), Level::TRACE);
    }
}
