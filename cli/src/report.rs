//! Lines printed to stdout, two decimals each.

use pricing::{OptionType, StraddlePrice};
use risk::ZScoreZone;

pub fn straddle_line(price: f64) -> String {
    format!("The approximate price of the ATMF straddle is: {:.2}", price)
}

pub fn straddle_breakdown_lines(straddle: &StraddlePrice) -> Vec<String> {
    vec![
        format!("Call leg: {:.2}", straddle.call),
        format!("Put leg: {:.2}", straddle.put),
        straddle_line(straddle.total()),
    ]
}

pub fn option_line(option_type: OptionType, price: f64) -> String {
    format!("The Black-Scholes price of the {} is: {:.2}", option_type, price)
}

pub fn z_score_line(z_score: f64) -> String {
    format!("The Altman Z-Score is: {:.2}", z_score)
}

/// An undefined score gets no zone.
pub fn zone_line(zone: Option<ZScoreZone>) -> String {
    match zone {
        Some(zone) => format!("The Altman zone is: {}", zone),
        None => "The Altman zone is: undefined".to_string(),
    }
}
