use chrono::{DateTime, TimeZone, Utc};
use stonk::{
    errors::Error,
    models::bar::Chart,
    providers::yahoo::response::parse_chart,
    render::{session::MarketClock, table::OPEN_SESSION_LABEL, trend::Trend, write_report},
};

const FIXTURE: &[u8] = include_bytes!("fixtures/chart_save_5d.json");

fn fixture_chart() -> Chart {
    parse_chart(FIXTURE, "save").expect("fixture parses")
}

fn report(now: DateTime<Utc>) -> String {
    let mut out = Vec::new();
    write_report(&mut out, "save", fixture_chart(), &MarketClock::default(), now)
        .expect("report renders");
    String::from_utf8(out).unwrap()
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, c) => out.push(c),
        }
    }
    out
}

/// Saturday after the fixture week; nothing is trading.
fn weekend() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, 15, 0, 0).unwrap()
}

#[test]
fn full_report_after_the_close() {
    let text = strip_ansi(&report(weekend()));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Stock Symbol: SAVE | Current Price: $ 6.01");
    assert_eq!(lines.len(), 1 + 3 + 5 + 1);

    let dates: Vec<&str> = lines[4..9].iter().map(|l| &l[2..12]).collect();
    assert_eq!(
        dates,
        vec!["2024-03-08", "2024-03-07", "2024-03-06", "2024-03-05", "2024-03-04"]
    );
    assert_eq!(
        lines[4],
        "| 2024-03-08    | $ 6.08        | $ 6.12        | $ 5.94        | $ 6.01        | 2264918       |"
    );
}

#[test]
fn colors_follow_previous_day() {
    let text = report(weekend());
    let lines: Vec<&str> = text.lines().collect();

    // 03-05 close 6.22 > 6.14, volume 3571300 < 4836700
    let row_0305 = lines[7];
    assert!(row_0305.contains(&Trend::Up.paint("$ 6.22")));
    assert!(row_0305.contains(&Trend::Down.paint("3571300")));

    // 03-06 open equals 03-05 open, volume unchanged
    let row_0306 = lines[6];
    assert!(row_0306.contains(&Trend::Flat.paint("$ 6.19")));
    assert!(row_0306.contains(&Trend::Flat.paint("3571300")));

    // earliest row carries no escapes at all
    assert!(!lines[8].contains('\x1b'));
}

#[test]
fn still_open_session_is_marked() {
    // Fri 2024-03-08 11:00 at UTC-5
    let now = Utc.with_ymd_and_hms(2024, 3, 8, 16, 0, 0).unwrap();
    let text = report(now);
    let newest = text.lines().nth(4).unwrap();
    assert!(newest.contains(&Trend::InProgress.paint(OPEN_SESSION_LABEL)));
    assert!(!strip_ansi(newest).contains("$ 6.01"));

    let previous = text.lines().nth(5).unwrap();
    assert!(strip_ansi(previous).contains("$ 6.06"));
}

#[test]
fn result_without_quotes_prints_summary_only() {
    let body = br#"{"chart": {"result": [{"meta": {"currency": "GBP", "symbol": "VOD.L", "regularMarketPrice": 70.1}}], "error": null}}"#;
    let chart = parse_chart(body, "vod.l").unwrap();

    let mut out = Vec::new();
    let err = write_report(&mut out, "vod.l", chart, &MarketClock::default(), weekend()).unwrap_err();

    assert!(matches!(err, Error::IncompleteData));
    assert_eq!(err.to_string(), "No stock data available.");
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Stock Symbol: VOD.L | Current Price: £ 70.10\n"
    );
}
