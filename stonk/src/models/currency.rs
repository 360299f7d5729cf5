//! ISO 4217 currency code → display glyph.

/// Glyph used when the quote does not report a currency.
pub const DEFAULT_SYMBOL: &str = "$";

/// Sorted by code so lookups can binary search.
static SYMBOLS: &[(&str, &str)] = &[
    ("AED", "د.إ"),
    ("AFN", "؋"),
    ("ALL", "L"),
    ("AMD", "֏"),
    ("ANG", "ƒ"),
    ("AOA", "Kz"),
    ("ARS", "$"),
    ("AUD", "$"),
    ("AWG", "ƒ"),
    ("AZN", "₼"),
    ("BAM", "KM"),
    ("BBD", "$"),
    ("BDT", "৳"),
    ("BGN", "лв"),
    ("BHD", "ب.د"),
    ("BIF", "FBu"),
    ("BMD", "$"),
    ("BND", "$"),
    ("BOB", "Bs."),
    ("BRL", "R$"),
    ("BSD", "$"),
    ("BTN", "Nu."),
    ("BWP", "P"),
    ("BYN", "Br"),
    ("BYR", "Br"),
    ("BZD", "$"),
    ("CAD", "$"),
    ("CDF", "FC"),
    ("CHF", "CHF"),
    ("CLP", "$"),
    ("CNY", "¥"),
    ("COP", "$"),
    ("CRC", "₡"),
    ("CUP", "₱"),
    ("CVE", "Esc"),
    ("CZK", "Kč"),
    ("DJF", "Fdj"),
    ("DKK", "kr"),
    ("DOP", "RD$"),
    ("DZD", "دج"),
    ("EGP", "E£"),
    ("ERN", "Nfk"),
    ("ETB", "Br"),
    ("EUR", "€"),
    ("FJD", "$"),
    ("FKP", "£"),
    ("FOK", "kr"),
    ("GBP", "£"),
    ("GEL", "₾"),
    ("GGP", "£"),
    ("GHS", "₵"),
    ("GIP", "£"),
    ("GMD", "D"),
    ("GNF", "FG"),
    ("GTQ", "Q"),
    ("GYD", "$"),
    ("HKD", "HK$"),
    ("HNL", "L"),
    ("HRK", "kn"),
    ("HTG", "G"),
    ("HUF", "Ft"),
    ("IDR", "Rp"),
    ("ILS", "₪"),
    ("IMP", "£"),
    ("INR", "₹"),
    ("IQD", "ع.د"),
    ("IRR", "﷼"),
    ("ISK", "kr"),
    ("JEP", "£"),
    ("JMD", "J$"),
    ("JOD", "د.ا"),
    ("JPY", "¥"),
    ("KES", "KSh"),
    ("KGS", "лв"),
    ("KHR", "៛"),
    ("KID", "$"),
    ("KMF", "CF"),
    ("KRW", "₩"),
    ("KWD", "د.ك"),
    ("KYD", "$"),
    ("KZT", "₸"),
    ("LAK", "₭"),
    ("LBP", "ل.ل"),
    ("LKR", "Rs"),
    ("LRD", "$"),
    ("LSL", "M"),
    ("LYD", "ل.د"),
    ("MAD", "د.م."),
    ("MDL", "L"),
    ("MGA", "Ar"),
    ("MKD", "ден"),
    ("MMK", "K"),
    ("MNT", "₮"),
    ("MOP", "MOP$"),
    ("MRU", "UM"),
    ("MUR", "Rs"),
    ("MVR", "Rf"),
    ("MWK", "MK"),
    ("MXN", "$"),
    ("MYR", "RM"),
    ("MZN", "MT"),
    ("NAD", "$"),
    ("NGN", "₦"),
    ("NIO", "C$"),
    ("NOK", "kr"),
    ("NPR", "नेरू"),
    ("NZD", "$"),
    ("OMR", "ر.ع."),
    ("PAB", "B/."),
    ("PEN", "S/."),
    ("PGK", "K"),
    ("PHP", "₱"),
    ("PKR", "₨"),
    ("PLN", "zł"),
    ("PRB", "р."),
    ("PYG", "₲"),
    ("QAR", "ر.ق"),
    ("RON", "lei"),
    ("RSD", "дин"),
    ("RUB", "₽"),
    ("RWF", "FRw"),
    ("SAR", "ر.س"),
    ("SBD", "$"),
    ("SCR", "Rs"),
    ("SDG", "ج.س."),
    ("SEK", "kr"),
    ("SGD", "$"),
    ("SHP", "£"),
    ("SLL", "Le"),
    ("SOS", "Sh."),
    ("SRD", "$"),
    ("SSP", "£"),
    ("STN", "Db"),
    ("SYP", "£"),
    ("SZL", "E"),
    ("THB", "฿"),
    ("TJS", "ЅМ"),
    ("TMT", "T"),
    ("TND", "د.ت"),
    ("TOP", "T$"),
    ("TRY", "₺"),
    ("TTD", "TT$"),
    ("TVD", "$"),
    ("TWD", "NT$"),
    ("TZS", "Sh"),
    ("UAH", "₴"),
    ("UGX", "USh"),
    ("USD", "$"),
    ("UYU", "$U"),
    ("UZS", "soʻm"),
    ("VES", "Bs."),
    ("VND", "₫"),
    ("VUV", "VT"),
    ("WST", "T"),
    ("XAF", "FCFA"),
    ("XCD", "$"),
    ("XDR", "SDR"),
    ("XOF", "CFA"),
    ("XPF", "₣"),
    ("YER", "﷼"),
    ("ZAR", "R"),
    ("ZMW", "ZK"),
];

/// Resolves the glyph shown in front of prices.
///
/// Unmapped codes are shown as-is; a missing code falls back to
/// [`DEFAULT_SYMBOL`].
pub fn symbol_for(code: Option<&str>) -> &str {
    let Some(code) = code else {
        return DEFAULT_SYMBOL;
    };
    SYMBOLS
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .map(|idx| SYMBOLS[idx].1)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(SYMBOLS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn known_codes_map_to_glyphs() {
        assert_eq!(symbol_for(Some("USD")), "$");
        assert_eq!(symbol_for(Some("EUR")), "€");
        assert_eq!(symbol_for(Some("GBP")), "£");
        assert_eq!(symbol_for(Some("JPY")), "¥");
        assert_eq!(symbol_for(Some("HKD")), "HK$");
        assert_eq!(symbol_for(Some("AED")), "د.إ");
        assert_eq!(symbol_for(Some("ZMW")), "ZK");
    }

    #[test]
    fn unknown_code_is_shown_verbatim() {
        assert_eq!(symbol_for(Some("XXX")), "XXX");
        assert_eq!(symbol_for(Some("GBp")), "GBp");
    }

    #[test]
    fn missing_code_uses_dollar() {
        assert_eq!(symbol_for(None), DEFAULT_SYMBOL);
    }
}
