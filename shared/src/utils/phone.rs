//! Phone number utilities
//!
//! Receivers arrive in whatever shape the calling application collected
//! them in; providers expect internationally prefixed numbers. The
//! normalization here is deliberately shallow: it prefixes national
//! numbers and strips formatting, but never validates. Whether a number
//! is deliverable is the provider's verdict, reported back through the
//! valid/invalid receiver lists.

use once_cell::sync::Lazy;
use regex::Regex;

/// Country prefix applied to bare national numbers
const DEFAULT_COUNTRY_PREFIX: &str = "+33";

// Formatting characters callers commonly leave in phone numbers
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s.\-()]+").unwrap());

// National format: leading zero followed by nine digits
static NATIONAL_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[1-9]\d{8}$").unwrap());

// International format written with a double-zero prefix
static DOUBLE_ZERO_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^00\d+$").unwrap());

/// Normalize a receiver into the prefixed form providers expect
///
/// - Strips spaces, dots, dashes and parentheses
/// - Rewrites a `00` international prefix to `+`
/// - Prefixes a national number (leading zero) with the default
///   country prefix
/// - Leaves anything else untouched, including already-prefixed
///   numbers, so normalization is idempotent
pub fn format_phone(raw: &str) -> String {
    let cleaned = SEPARATORS.replace_all(raw.trim(), "");

    if DOUBLE_ZERO_FORMAT.is_match(&cleaned) {
        return format!("+{}", &cleaned[2..]);
    }
    if NATIONAL_FORMAT.is_match(&cleaned) {
        return format!("{}{}", DEFAULT_COUNTRY_PREFIX, &cleaned[1..]);
    }
    cleaned.into_owned()
}

/// Mask a phone number for log output (e.g. `+33****5678`)
pub fn mask_phone_number(phone: &str) -> String {
    if phone.len() >= 7 {
        format!("{}****{}", &phone[0..3], &phone[phone.len() - 4..])
    } else {
        "****".to_string()
    }
}
