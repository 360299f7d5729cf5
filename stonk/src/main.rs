use std::{
    io::{self, Write},
    process::ExitCode,
};

use chrono::Utc;
use clap::Parser;
use stonk::{
    cli::commands::Cli,
    logging,
    models::request_params::ChartRequest,
    render::{self, session::MarketClock},
};
use tracing::{debug, error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("logging disabled: {e}");
    }

    let request = ChartRequest::new(cli.symbol, cli.duration);
    debug!(?request, "parsed arguments");

    let chart = match stonk::fetch_chart(&request).await {
        Ok(chart) => chart,
        Err(e) => {
            error!(error = %e, "fetch failed");
            println!("Error fetching data: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = io::stdout().lock();
    match render::write_report(
        &mut out,
        &request.symbol,
        chart,
        &MarketClock::default(),
        Utc::now(),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Err(write_err) = writeln!(out, "Error: {e}") {
                debug!(error = %write_err, "could not write error line to stdout");
            }
            if e.is_fatal() {
                error!(error = %e, "report failed");
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
