use clap::Parser;

use crate::models::range::Range;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch and display daily stock price data for a symbol")]
pub struct Cli {
    /// Stock symbol (e.g. SAVE, AAPL, SAP.DE)
    #[arg(default_value = "SAVE")]
    pub symbol: String,

    /// History window
    #[arg(value_enum, default_value_t = Range::FiveDays)]
    pub duration: Range,
}
