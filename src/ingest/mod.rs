//! Turns raw CSV bytes into typed reference records.

pub mod csv;
pub mod decode;
pub mod repair;

use lazy_static::lazy_static;
use regex::Regex;

pub use self::csv::{parse_csv, parse_table, CsvRecord, CsvRow, RowError};
pub use self::decode::decode_text;
pub use self::repair::fix_encoding;

/// Parses the integer prefix of `text` after trimming, the way a lenient
/// form field would ("12 years" -> 12). Returns `None` when there is no
/// leading digit.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    lazy_static! {
        static ref LEADING_INT_RE: Regex = Regex::new(r"^[+-]?\d+").unwrap();
    }
    LEADING_INT_RE
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<i64>().ok())
}
