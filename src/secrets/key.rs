//! The six credential names.

use std::fmt;

use strum_macros::EnumIter;

use crate::config::{
    ENV_TWILIO_ACCOUNT_SID, ENV_TWILIO_AUTH_TOKEN, ENV_TWILIO_FROM_NUMBER, ENV_TWILIO_TO_NUMBER,
    ENV_WIFI_PASSWORD, ENV_WIFI_SSID,
};

/// Identifies one credential.
///
/// Iterate with `strum::IntoEnumIterator` to visit all six in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum SecretKey {
    /// `WIFI_SSID`
    WifiSsid,
    /// `WIFI_PASSWORD`
    WifiPassword,
    /// `TWILIO_ACCOUNT_SID`
    TwilioAccountSid,
    /// `TWILIO_AUTH_TOKEN`
    TwilioAuthToken,
    /// `TWILIO_FROM_NUMBER`
    TwilioFromNumber,
    /// `TWILIO_TO_NUMBER`
    TwilioToNumber,
}

impl SecretKey {
    /// Environment variable (and `.env` key) holding this credential.
    pub fn env_var(self) -> &'static str {
        match self {
            SecretKey::WifiSsid => ENV_WIFI_SSID,
            SecretKey::WifiPassword => ENV_WIFI_PASSWORD,
            SecretKey::TwilioAccountSid => ENV_TWILIO_ACCOUNT_SID,
            SecretKey::TwilioAuthToken => ENV_TWILIO_AUTH_TOKEN,
            SecretKey::TwilioFromNumber => ENV_TWILIO_FROM_NUMBER,
            SecretKey::TwilioToNumber => ENV_TWILIO_TO_NUMBER,
        }
    }

    /// Short human-readable description.
    pub fn label(self) -> &'static str {
        match self {
            SecretKey::WifiSsid => "WiFi network name",
            SecretKey::WifiPassword => "WiFi password",
            SecretKey::TwilioAccountSid => "Twilio account SID",
            SecretKey::TwilioAuthToken => "Twilio auth token",
            SecretKey::TwilioFromNumber => "Sender phone number",
            SecretKey::TwilioToNumber => "Recipient phone number",
        }
    }

    /// Sensitive values are never printed, logged, or included in errors.
    pub fn is_sensitive(self) -> bool {
        matches!(self, SecretKey::WifiPassword | SecretKey::TwilioAuthToken)
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_six_distinct_names() {
        let names: HashSet<&str> = SecretKey::iter().map(SecretKey::env_var).collect();
        assert_eq!(names.len(), 6);
        for expected in [
            "WIFI_SSID",
            "WIFI_PASSWORD",
            "TWILIO_ACCOUNT_SID",
            "TWILIO_AUTH_TOKEN",
            "TWILIO_FROM_NUMBER",
            "TWILIO_TO_NUMBER",
        ] {
            assert!(names.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_only_password_and_token_are_sensitive() {
        let sensitive: Vec<SecretKey> = SecretKey::iter().filter(|k| k.is_sensitive()).collect();
        assert_eq!(
            sensitive,
            vec![SecretKey::WifiPassword, SecretKey::TwilioAuthToken]
        );
    }

    #[test]
    fn test_display_is_env_var() {
        assert_eq!(SecretKey::TwilioToNumber.to_string(), "TWILIO_TO_NUMBER");
    }
}
