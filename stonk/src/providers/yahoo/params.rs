use serde::Serialize;

use crate::models::range::Range;

/// Only daily bars are ever requested.
pub const DAILY_INTERVAL: &str = "1d";

/// Query string for a chart request.
#[derive(Clone, Debug, Serialize)]
pub struct ChartParams {
    pub interval: &'static str,
    pub range: &'static str,
}

impl ChartParams {
    pub fn daily(range: Range) -> Self {
        Self {
            interval: DAILY_INTERVAL,
            range: range.code(),
        }
    }
}
