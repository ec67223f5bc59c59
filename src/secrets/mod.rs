//! Credentials for the WiFi uplink and the Twilio messaging API.
//!
//! The six values are loaded once at startup into an immutable [`Secrets`]
//! object, validated together, and then handed explicitly to whatever needs
//! them. Sources, in order of preference:
//! - a `.env`-style file (read without touching the process environment)
//! - the process environment
//! - literals in code, via [`WifiCredentials::new`] and [`TwilioCredentials::new`]
//!
//! Sensitive values are wrapped in [`Secret`] and never appear in `Debug`
//! output, summaries, logs, or error messages.

mod key;
mod phone;
mod secret;
mod template;
mod validate;

use std::collections::HashMap;
use std::path::Path;

use strum::IntoEnumIterator;

use crate::config::REDACTED;
use crate::error_handling::{SecretProblem, SecretProblems, SecretsError};

pub use key::SecretKey;
pub use phone::{AccountSid, PhoneNumber};
pub use secret::Secret;
pub use template::env_template;
pub use validate::{is_placeholder, validate_ssid, validate_wifi_passphrase};

type Problems = Vec<(SecretKey, SecretProblem)>;

fn finish<T>(value: Option<T>, problems: Problems) -> Result<T, SecretsError> {
    match value {
        Some(value) if problems.is_empty() => Ok(value),
        _ => Err(SecretsError::Invalid(SecretProblems(problems))),
    }
}

/// WiFi network credentials.
///
/// This crate never joins a network itself; the values are validated here
/// and handed to the network code of the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    ssid: String,
    password: Secret,
}

impl WifiCredentials {
    /// Validates and wraps an SSID and WPA2 passphrase.
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Result<Self, SecretsError> {
        let mut problems = Vec::new();
        let creds = Self::collect(Some(ssid.into()), Some(password.into()), &mut problems);
        finish(creds, problems)
    }

    fn collect(ssid: Option<String>, password: Option<String>, problems: &mut Problems) -> Option<Self> {
        let ssid = validate::field(problems, SecretKey::WifiSsid, ssid, validate::parse_ssid);
        let password = validate::field(
            problems,
            SecretKey::WifiPassword,
            password,
            validate::parse_passphrase,
        );
        Some(Self {
            ssid: ssid?,
            password: password?,
        })
    }

    /// Network name, exactly as configured.
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// WPA2 passphrase or raw hex PSK.
    pub fn password(&self) -> &Secret {
        &self.password
    }
}

/// Twilio account credentials and the default sender/recipient pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwilioCredentials {
    account_sid: AccountSid,
    auth_token: Secret,
    from_number: PhoneNumber,
    to_number: PhoneNumber,
}

impl TwilioCredentials {
    /// Validates and wraps the account SID, auth token and phone numbers.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
        to_number: impl Into<String>,
    ) -> Result<Self, SecretsError> {
        let mut problems = Vec::new();
        let creds = Self::collect(
            Some(account_sid.into()),
            Some(auth_token.into()),
            Some(from_number.into()),
            Some(to_number.into()),
            &mut problems,
        );
        finish(creds, problems)
    }

    fn collect(
        account_sid: Option<String>,
        auth_token: Option<String>,
        from_number: Option<String>,
        to_number: Option<String>,
        problems: &mut Problems,
    ) -> Option<Self> {
        let account_sid = validate::field(
            problems,
            SecretKey::TwilioAccountSid,
            account_sid,
            validate::parse_account_sid,
        );
        let auth_token = validate::field(
            problems,
            SecretKey::TwilioAuthToken,
            auth_token,
            validate::parse_auth_token,
        );
        let from_number = validate::field(
            problems,
            SecretKey::TwilioFromNumber,
            from_number,
            validate::parse_phone_number,
        );
        let to_number = validate::field(
            problems,
            SecretKey::TwilioToNumber,
            to_number,
            validate::parse_phone_number,
        );
        Some(Self {
            account_sid: account_sid?,
            auth_token: auth_token?,
            from_number: from_number?,
            to_number: to_number?,
        })
    }

    /// Account SID, also the Basic auth username.
    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Auth token, the Basic auth password.
    pub fn auth_token(&self) -> &Secret {
        &self.auth_token
    }

    /// Sender number owned by the account.
    pub fn from_number(&self) -> &PhoneNumber {
        &self.from_number
    }

    /// Default recipient.
    pub fn to_number(&self) -> &PhoneNumber {
        &self.to_number
    }
}

/// The full, validated credential set.
///
/// Immutable after construction: there are no setters, and each value lives
/// in its own field. Share it by reference or `Arc`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use sms_notify::Secrets;
///
/// let vars: HashMap<&str, &str> = HashMap::from([
///     ("WIFI_SSID", "HomeNetwork"),
///     ("WIFI_PASSWORD", "correct horse battery"),
///     ("TWILIO_ACCOUNT_SID", "AC0123456789abcdef0123456789abcdef"),
///     ("TWILIO_AUTH_TOKEN", "0123456789abcdef0123456789abcdef"),
///     ("TWILIO_FROM_NUMBER", "+15005550006"),
///     ("TWILIO_TO_NUMBER", "+15551234567"),
/// ]);
/// let secrets = Secrets::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap();
/// assert_eq!(secrets.wifi().ssid(), "HomeNetwork");
/// assert!(!format!("{secrets:?}").contains("correct horse"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secrets {
    wifi: WifiCredentials,
    twilio: TwilioCredentials,
}

impl Secrets {
    /// Combines already validated halves, e.g. values compiled into the consumer.
    pub fn new(wifi: WifiCredentials, twilio: TwilioCredentials) -> Self {
        Self { wifi, twilio }
    }

    /// Loads all six credentials through `lookup` (variable name -> value).
    ///
    /// # Errors
    ///
    /// Returns `SecretsError::Invalid` listing every missing, empty,
    /// placeholder or malformed value, not just the first one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SecretsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: SecretKey| lookup(key.env_var());
        let mut problems = Vec::new();
        let wifi = WifiCredentials::collect(
            get(SecretKey::WifiSsid),
            get(SecretKey::WifiPassword),
            &mut problems,
        );
        let twilio = TwilioCredentials::collect(
            get(SecretKey::TwilioAccountSid),
            get(SecretKey::TwilioAuthToken),
            get(SecretKey::TwilioFromNumber),
            get(SecretKey::TwilioToNumber),
            &mut problems,
        );
        let secrets = wifi.zip(twilio).map(|(wifi, twilio)| Self { wifi, twilio });
        let secrets = finish(secrets, problems)?;
        log::debug!("Loaded {} credentials", SecretKey::iter().count());
        Ok(secrets)
    }

    /// Loads credentials from the process environment.
    pub fn from_env() -> Result<Self, SecretsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads credentials from a dotenv file.
    ///
    /// The file is parsed without modifying the process environment. Keys
    /// the file does not define fall back to the environment.
    ///
    /// # Errors
    ///
    /// Returns `SecretsError::EnvFile` if the file is missing or malformed.
    pub fn from_env_file(path: &Path) -> Result<Self, SecretsError> {
        let file_error = |source: dotenvy::Error| SecretsError::EnvFile {
            path: path.to_path_buf(),
            source,
        };
        let vars = dotenvy::from_path_iter(path)
            .map_err(file_error)?
            .collect::<Result<HashMap<String, String>, _>>()
            .map_err(file_error)?;
        log::debug!("Read {} entries from {}", vars.len(), path.display());
        Self::from_lookup(|name| {
            vars.get(name)
                .cloned()
                .or_else(|| std::env::var(name).ok())
        })
    }

    /// Loads from `env_file` when given, otherwise from the environment.
    pub fn load(env_file: Option<&Path>) -> Result<Self, SecretsError> {
        match env_file {
            Some(path) => Self::from_env_file(path),
            None => Self::from_env(),
        }
    }

    /// WiFi half of the set.
    pub fn wifi(&self) -> &WifiCredentials {
        &self.wifi
    }

    /// Twilio half of the set.
    pub fn twilio(&self) -> &TwilioCredentials {
        &self.twilio
    }

    /// Returns a printable `(key, value)` list with secrets masked.
    ///
    /// SSID and phone numbers are shown in full, the account SID is
    /// abbreviated, and sensitive values only show their length.
    pub fn redacted_summary(&self) -> Vec<(SecretKey, String)> {
        SecretKey::iter()
            .map(|key| {
                let shown = match key {
                    SecretKey::WifiSsid => self.wifi.ssid.clone(),
                    SecretKey::WifiPassword => masked(&self.wifi.password),
                    SecretKey::TwilioAccountSid => self.twilio.account_sid.abbreviated(),
                    SecretKey::TwilioAuthToken => masked(&self.twilio.auth_token),
                    SecretKey::TwilioFromNumber => self.twilio.from_number.to_string(),
                    SecretKey::TwilioToNumber => self.twilio.to_number.to_string(),
                };
                (key, shown)
            })
            .collect()
    }
}

fn masked(secret: &Secret) -> String {
    format!("{REDACTED} ({} chars)", secret.char_len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SID: &str = "AC0123456789abcdef0123456789abcdef";
    const TOKEN: &str = "fedcba9876543210fedcba9876543210";

    fn valid_vars() -> HashMap<String, String> {
        [
            ("WIFI_SSID", "HomeNetwork"),
            ("WIFI_PASSWORD", "correct horse battery"),
            ("TWILIO_ACCOUNT_SID", SID),
            ("TWILIO_AUTH_TOKEN", TOKEN),
            ("TWILIO_FROM_NUMBER", "+15005550006"),
            ("TWILIO_TO_NUMBER", "+1 (555) 123-4567"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_from_lookup_valid() {
        let vars = valid_vars();
        let secrets = Secrets::from_lookup(|name| vars.get(name).cloned()).unwrap();
        assert_eq!(secrets.wifi().ssid(), "HomeNetwork");
        assert_eq!(secrets.wifi().password().expose(), "correct horse battery");
        assert_eq!(secrets.twilio().account_sid().as_str(), SID);
        assert_eq!(secrets.twilio().auth_token().expose(), TOKEN);
        assert_eq!(secrets.twilio().from_number().as_str(), "+15005550006");
        assert_eq!(secrets.twilio().to_number().as_str(), "+15551234567");
    }

    #[test]
    fn test_from_lookup_reports_all_problems() {
        let mut vars = valid_vars();
        vars.remove("WIFI_SSID");
        vars.insert("WIFI_PASSWORD".into(), "".into());
        vars.insert("TWILIO_AUTH_TOKEN".into(), "enter".into());
        vars.insert("TWILIO_TO_NUMBER".into(), "+enter".into());

        let err = Secrets::from_lookup(|name| vars.get(name).cloned()).unwrap_err();
        let problems = err.problems().expect("validation error");
        assert_eq!(
            problems.0,
            vec![
                (SecretKey::WifiSsid, SecretProblem::Missing),
                (SecretKey::WifiPassword, SecretProblem::Empty),
                (SecretKey::TwilioAuthToken, SecretProblem::Placeholder),
                (SecretKey::TwilioToNumber, SecretProblem::Placeholder),
            ]
        );
    }

    #[test]
    fn test_original_template_values_are_all_rejected() {
        let template: HashMap<&str, &str> = HashMap::from([
            ("WIFI_SSID", "Wifi name"),
            ("WIFI_PASSWORD", "wifi code"),
            ("TWILIO_ACCOUNT_SID", "enter"),
            ("TWILIO_AUTH_TOKEN", "enter"),
            ("TWILIO_FROM_NUMBER", "+enter"),
            ("TWILIO_TO_NUMBER", "+enter"),
        ]);
        let err = Secrets::from_lookup(|name| template.get(name).map(|v| v.to_string()))
            .unwrap_err();
        let problems = err.problems().unwrap();
        assert_eq!(problems.len(), 6);
        assert!(problems.0.iter().all(|(_, p)| *p == SecretProblem::Placeholder));
    }

    #[test]
    fn test_errors_never_contain_secret_values() {
        let mut vars = valid_vars();
        vars.insert("WIFI_PASSWORD".into(), "tiny".into());
        vars.insert("TWILIO_ACCOUNT_SID".into(), "bogus".into());
        let err = Secrets::from_lookup(|name| vars.get(name).cloned()).unwrap_err();
        let msg = format!("{err} {err:?}");
        assert!(!msg.contains("tiny"));
        assert!(!msg.contains(TOKEN));
    }

    #[test]
    fn test_debug_and_summary_redact_secrets() {
        let vars = valid_vars();
        let secrets = Secrets::from_lookup(|name| vars.get(name).cloned()).unwrap();
        let debug = format!("{secrets:?}");
        assert!(!debug.contains("correct horse battery"));
        assert!(!debug.contains(TOKEN));

        let summary = secrets.redacted_summary();
        assert_eq!(summary.len(), 6);
        let rendered: String = summary.iter().map(|(_, v)| v.as_str()).collect();
        assert!(!rendered.contains(TOKEN));
        assert!(!rendered.contains("correct horse battery"));
        assert!(rendered.contains("HomeNetwork"));
        assert!(summary.contains(&(SecretKey::TwilioAccountSid, "AC0123…".to_string())));
        assert!(summary.contains(&(SecretKey::TwilioAuthToken, "[REDACTED] (32 chars)".to_string())));
    }

    #[test]
    fn test_values_do_not_alias() {
        let vars = valid_vars();
        let secrets = Secrets::from_lookup(|name| vars.get(name).cloned()).unwrap();
        let ptrs = [
            secrets.wifi().ssid().as_ptr(),
            secrets.wifi().password().expose().as_ptr(),
            secrets.twilio().account_sid().as_str().as_ptr(),
            secrets.twilio().auth_token().expose().as_ptr(),
            secrets.twilio().from_number().as_str().as_ptr(),
            secrets.twilio().to_number().as_str().as_ptr(),
        ];
        for (i, a) in ptrs.iter().enumerate() {
            for b in &ptrs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_typed_constructors() {
        let wifi = WifiCredentials::new("HomeNetwork", "correct horse battery").unwrap();
        let twilio =
            TwilioCredentials::new(SID, TOKEN, "+15005550006", "+15551234567").unwrap();
        let secrets = Secrets::new(wifi, twilio);
        assert_eq!(secrets.twilio().to_number().as_str(), "+15551234567");

        let err = TwilioCredentials::new(SID, "", "12345", "+15551234567").unwrap_err();
        assert_eq!(err.problems().unwrap().len(), 2);
    }
}
