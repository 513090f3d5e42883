//! Phone number format check applied before a record is ranked.

use once_cell::sync::Lazy;
use regex::Regex;

// The regex crate has no backreferences, so each separator gets its own branch.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]{3}-[0-9]{3}-[0-9]{4}|[0-9]{3} [0-9]{3} [0-9]{4})$")
        .expect("phone pattern is valid")
});

/// True for `DDD-DDD-DDDD` or `DDD DDD DDDD` (same separator both times).
pub fn is_valid(number: &str) -> bool {
    PHONE_PATTERN.is_match(number)
}
