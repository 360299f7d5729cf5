//! Terminal output: the summary line and the OHLCV table.

pub mod session;
pub mod table;
pub mod trend;

use std::io;

use chrono::{DateTime, Utc};

use crate::{
    errors::Error,
    models::bar::Chart,
    render::{session::MarketClock, table::Table},
};

/// `Stock Symbol: X | Current Price: ¤ P.PP`
pub fn summary_line(symbol: &str, current_price: Option<f64>, glyph: &str) -> String {
    let price = match current_price {
        Some(p) => format!("{glyph} {p:.2}"),
        None => "N/A".to_string(),
    };
    format!(
        "Stock Symbol: {} | Current Price: {price}",
        symbol.to_uppercase()
    )
}

/// Writes the summary line, then the table.
///
/// The summary is written before the bars are inspected, so on
/// [`Error::IncompleteData`] it is already on `out`.
pub fn write_report<W: io::Write>(
    out: &mut W,
    symbol: &str,
    chart: Chart,
    clock: &MarketClock,
    now: DateTime<Utc>,
) -> Result<(), Error> {
    let glyph = crate::models::currency::symbol_for(chart.meta.currency.as_deref()).to_string();
    writeln!(out, "{}", summary_line(symbol, chart.meta.current_price, &glyph))?;

    let series = chart.into_series()?;
    Table::build(&series, &glyph, clock, now).write_to(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bar::{DailyBar, QuoteMeta};
    use chrono::{NaiveDate, TimeZone};

    fn chart(currency: Option<&str>, bars: Option<Vec<DailyBar>>) -> Chart {
        Chart {
            meta: QuoteMeta {
                symbol: "SAVE".into(),
                currency: currency.map(str::to_string),
                current_price: Some(4.5),
            },
            bars,
        }
    }

    fn sunday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn summary_formats_price_and_uppercases_symbol() {
        assert_eq!(
            summary_line("save", Some(4.5), "$"),
            "Stock Symbol: SAVE | Current Price: $ 4.50"
        );
        assert_eq!(
            summary_line("sap.de", None, "€"),
            "Stock Symbol: SAP.DE | Current Price: N/A"
        );
    }

    #[test]
    fn incomplete_chart_leaves_summary_only() {
        let mut out = Vec::new();
        let err = write_report(&mut out, "save", chart(Some("USD"), None), &MarketClock::default(), sunday())
            .unwrap_err();
        assert!(matches!(err, Error::IncompleteData));
        assert!(!err.is_fatal());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Stock Symbol: SAVE | Current Price: $ 4.50\n"
        );
    }

    #[test]
    fn unknown_currency_is_shown_as_code() {
        let bars = vec![DailyBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
            volume: 1,
        }];
        let mut out = Vec::new();
        write_report(&mut out, "save", chart(Some("XXX"), Some(bars)), &MarketClock::default(), sunday())
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Stock Symbol: SAVE | Current Price: XXX 4.50\n"));
        assert!(text.contains("| XXX 1.00 "));
        assert_eq!(text.lines().count(), 1 + 5);
    }
}
