//! Credential validation rules.
//!
//! Every rule returns a [`SecretProblem`] instead of failing fast so the
//! loader can report all bad keys in one pass.

use crate::config::{
    MAX_PASSPHRASE_LEN, MAX_SSID_BYTES, MIN_PASSPHRASE_LEN, PLACEHOLDER_VALUES, RAW_PSK_HEX_LEN,
};
use crate::error_handling::SecretProblem;

use super::{AccountSid, PhoneNumber, Secret, SecretKey};

/// Returns true if `value` is a template value left unchanged.
///
/// Matches [`PLACEHOLDER_VALUES`] case-insensitively after trimming, and
/// anything of the form `<...>`.
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('<') && trimmed.ends_with('>') {
        return true;
    }
    PLACEHOLDER_VALUES
        .iter()
        .any(|p| trimmed.eq_ignore_ascii_case(p))
}

/// Rejects empty, whitespace-only and placeholder values.
pub fn require_value(value: &str) -> Result<(), SecretProblem> {
    if value.trim().is_empty() {
        return Err(SecretProblem::Empty);
    }
    if is_placeholder(value) {
        return Err(SecretProblem::Placeholder);
    }
    Ok(())
}

/// Validates an SSID (at most 32 bytes). The value is kept verbatim.
pub fn validate_ssid(ssid: &str) -> Result<(), SecretProblem> {
    if ssid.len() > MAX_SSID_BYTES {
        return Err(SecretProblem::SsidTooLong(ssid.len()));
    }
    Ok(())
}

/// Validates a WPA2-PSK passphrase.
///
/// Accepts 8-63 printable ASCII characters, or exactly 64 hex digits (a raw PSK).
pub fn validate_wifi_passphrase(passphrase: &str) -> Result<(), SecretProblem> {
    let len = passphrase.chars().count();
    if len == RAW_PSK_HEX_LEN {
        if passphrase.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(());
        }
        return Err(SecretProblem::InvalidPassphrase(
            "a 64-character key must be hexadecimal",
        ));
    }
    if len < MIN_PASSPHRASE_LEN {
        return Err(SecretProblem::InvalidPassphrase(
            "shorter than 8 characters",
        ));
    }
    if len > MAX_PASSPHRASE_LEN {
        return Err(SecretProblem::InvalidPassphrase(
            "longer than 63 characters",
        ));
    }
    if !passphrase.chars().all(|c| (' '..='~').contains(&c)) {
        return Err(SecretProblem::InvalidPassphrase(
            "contains non-printable or non-ASCII characters",
        ));
    }
    Ok(())
}

/// Reads one raw value through `parse`, recording any problem under `key`.
///
/// A `None` input means the variable was never set.
pub(crate) fn field<T>(
    problems: &mut Vec<(SecretKey, SecretProblem)>,
    key: SecretKey,
    raw: Option<String>,
    parse: fn(String) -> Result<T, SecretProblem>,
) -> Option<T> {
    let result = match raw {
        None => Err(SecretProblem::Missing),
        Some(value) => require_value(&value).and_then(|()| parse(value)),
    };
    match result {
        Ok(parsed) => Some(parsed),
        Err(problem) => {
            problems.push((key, problem));
            None
        }
    }
}

pub(crate) fn parse_ssid(value: String) -> Result<String, SecretProblem> {
    validate_ssid(&value)?;
    Ok(value)
}

pub(crate) fn parse_passphrase(value: String) -> Result<Secret, SecretProblem> {
    validate_wifi_passphrase(&value)?;
    Ok(Secret::new(value))
}

pub(crate) fn parse_account_sid(value: String) -> Result<AccountSid, SecretProblem> {
    AccountSid::parse(&value)
}

pub(crate) fn parse_auth_token(value: String) -> Result<Secret, SecretProblem> {
    Ok(Secret::new(value.trim()))
}

pub(crate) fn parse_phone_number(value: String) -> Result<PhoneNumber, SecretProblem> {
    PhoneNumber::parse(&value)
}
