use serde::{Deserialize, Serialize};

use crate::models::range::Range;

/// Vendor-agnostic parameters for one daily-history request.
///
/// Used as the standard input for all
/// [`DataProvider`](crate::providers::DataProvider) implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Ticker to request, as typed by the user (e.g. `"save"`, `"^GSPC"`).
    pub symbol: String,

    /// Lookback window. Bars are always daily.
    #[serde(with = "range_code")]
    pub range: Range,
}

impl ChartRequest {
    pub fn new(symbol: impl Into<String>, range: Range) -> Self {
        Self {
            symbol: symbol.into(),
            range,
        }
    }
}

mod range_code {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use crate::models::range::Range;

    pub fn serialize<S: Serializer>(range: &Range, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(range.code())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Range, D::Error> {
        let code = String::deserialize(d)?;
        code.parse().map_err(D::Error::custom)
    }
}
