//! E.164 phone numbers and Twilio account SIDs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{ACCOUNT_SID_HEX_LEN, ACCOUNT_SID_PREFIX, E164_PATTERN, SID_VISIBLE_PREFIX};
use crate::error_handling::SecretProblem;

static E164: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(E164_PATTERN).expect("E.164 pattern is a valid regex"));

/// A phone number in E.164 form, e.g. `+15551234567`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses a phone number, tolerating common visual separators.
    ///
    /// Spaces, dashes, dots and parentheses are removed before matching, so
    /// `+1 (555) 123-4567` parses as `+15551234567`.
    ///
    /// ```
    /// use sms_notify::PhoneNumber;
    ///
    /// let n = PhoneNumber::parse("+1 (555) 123-4567").unwrap();
    /// assert_eq!(n.as_str(), "+15551234567");
    /// assert!(PhoneNumber::parse("5551234567").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, SecretProblem> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
            .collect();
        if E164.is_match(&normalized) {
            Ok(PhoneNumber(normalized))
        } else {
            Err(SecretProblem::InvalidPhoneNumber(input.trim().to_string()))
        }
    }

    /// The normalized number, e.g. `+15551234567`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = SecretProblem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhoneNumber::parse(s)
    }
}

/// A Twilio account SID: `AC` followed by 32 hex digits.
///
/// Not secret on its own (it appears in API URLs), but only a prefix is
/// shown in summaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountSid(String);

impl AccountSid {
    /// Parses a trimmed account SID.
    pub fn parse(input: &str) -> Result<Self, SecretProblem> {
        let sid = input.trim();
        let valid = sid.len() == ACCOUNT_SID_PREFIX.len() + ACCOUNT_SID_HEX_LEN
            && sid.starts_with(ACCOUNT_SID_PREFIX)
            && sid[ACCOUNT_SID_PREFIX.len()..]
                .chars()
                .all(|c| c.is_ascii_hexdigit());
        if valid {
            Ok(AccountSid(sid.to_string()))
        } else {
            Err(SecretProblem::InvalidAccountSid)
        }
    }

    /// The full SID.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First characters followed by an ellipsis, for summaries.
    pub fn abbreviated(&self) -> String {
        format!("{}…", &self.0[..SID_VISIBLE_PREFIX])
    }
}

impl fmt::Display for AccountSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
