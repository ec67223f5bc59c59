//! Redacting wrapper for sensitive strings.

use std::fmt;

use crate::config::REDACTED;

/// A sensitive string that never shows up in `Debug` or `Display` output.
///
/// The only way to read the value is [`Secret::expose`], which makes every
/// use site easy to audit.
///
/// ```
/// use sms_notify::Secret;
///
/// let token = Secret::new("s3cr3t");
/// assert_eq!(format!("{token:?}"), "Secret([REDACTED])");
/// assert_eq!(token.expose(), "s3cr3t");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wraps a value. No validation happens here.
    pub fn new(value: impl Into<String>) -> Self {
        Secret(value.into())
    }

    /// Returns the raw value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Length in characters, safe to print.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({REDACTED})")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
