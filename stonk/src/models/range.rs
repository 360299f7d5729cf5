//! History window accepted by the chart endpoint.
//!
//! A [`Range`] is one of the fixed lookback codes the endpoint understands
//! (`"1d"`, `"5d"`, `"1mo"`, ... `"max"`). Anything else is rejected while
//! parsing arguments, before a request is built.
//!
//! ```
//! use stonk::models::range::Range;
//!
//! let r: Range = "3mo".parse().unwrap();
//! assert_eq!(r, Range::ThreeMonths);
//! assert_eq!(r.to_string(), "3mo");
//! assert!("7d".parse::<Range>().is_err());
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid range {input:?}: expected one of 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max")]
pub struct RangeError {
    pub input: String,
}

/// Lookback window for daily bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Range {
    #[cfg_attr(feature = "cli", value(name = "1d"))]
    OneDay,
    #[default]
    #[cfg_attr(feature = "cli", value(name = "5d"))]
    FiveDays,
    #[cfg_attr(feature = "cli", value(name = "1mo"))]
    OneMonth,
    #[cfg_attr(feature = "cli", value(name = "3mo"))]
    ThreeMonths,
    #[cfg_attr(feature = "cli", value(name = "6mo"))]
    SixMonths,
    #[cfg_attr(feature = "cli", value(name = "1y"))]
    OneYear,
    #[cfg_attr(feature = "cli", value(name = "2y"))]
    TwoYears,
    #[cfg_attr(feature = "cli", value(name = "5y"))]
    FiveYears,
    #[cfg_attr(feature = "cli", value(name = "10y"))]
    TenYears,
    #[cfg_attr(feature = "cli", value(name = "ytd"))]
    YearToDate,
    #[cfg_attr(feature = "cli", value(name = "max"))]
    Max,
}

impl Range {
    pub const ALL: [Range; 11] = [
        Range::OneDay,
        Range::FiveDays,
        Range::OneMonth,
        Range::ThreeMonths,
        Range::SixMonths,
        Range::OneYear,
        Range::TwoYears,
        Range::FiveYears,
        Range::TenYears,
        Range::YearToDate,
        Range::Max,
    ];

    /// The wire code sent as the `range` query parameter.
    pub const fn code(self) -> &'static str {
        match self {
            Range::OneDay => "1d",
            Range::FiveDays => "5d",
            Range::OneMonth => "1mo",
            Range::ThreeMonths => "3mo",
            Range::SixMonths => "6mo",
            Range::OneYear => "1y",
            Range::TwoYears => "2y",
            Range::FiveYears => "5y",
            Range::TenYears => "10y",
            Range::YearToDate => "ytd",
            Range::Max => "max",
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| RangeError {
                input: s.to_string(),
            })
    }
}
