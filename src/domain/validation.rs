//! Pure input predicates guarding the order aggregate.
//!
//! None of these functions fail; malformed input simply yields `false`.

/// Parses `s` as a signed 64-bit integer, accepting an optional leading sign.
pub fn parse_numeric(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

pub fn is_numeric_string(s: &str) -> bool {
    parse_numeric(s).is_some()
}

pub fn is_empty(s: &str) -> bool {
    s.is_empty()
}

/// Shape check for an EAN-13 product code: thirteen characters that parse as
/// an integer. The check digit is not verified.
pub fn is_ean13(s: &str) -> bool {
    is_numeric_string(s) && s.len() == 13
}
