//! Configuration constants.
//!
//! This module defines the credential variable names, the placeholder values
//! that ship in credential templates, and the operational parameters of the
//! Twilio client (timeouts, limits, retry strategy).

// Credential variable names.
// These six names are the external contract: consumers look the values up by
// exactly these names, whether they come from the environment or a `.env` file.
/// WiFi network name
pub const ENV_WIFI_SSID: &str = "WIFI_SSID";
/// WiFi WPA2 passphrase
pub const ENV_WIFI_PASSWORD: &str = "WIFI_PASSWORD";
/// Twilio account SID
pub const ENV_TWILIO_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
/// Twilio auth token
pub const ENV_TWILIO_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
/// Sender phone number (E.164)
pub const ENV_TWILIO_FROM_NUMBER: &str = "TWILIO_FROM_NUMBER";
/// Default recipient phone number (E.164)
pub const ENV_TWILIO_TO_NUMBER: &str = "TWILIO_TO_NUMBER";

/// Default credentials file, looked up in the working directory and then next
/// to the executable.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Template values that mean "the user never filled this in".
///
/// Compared case-insensitively after trimming. Values wrapped in `<...>`
/// are also treated as placeholders (see `secrets::validate`).
pub const PLACEHOLDER_VALUES: &[&str] = &[
    "enter",
    "+enter",
    "wifi name",
    "wifi code",
    "your_wifi_ssid",
    "your_wifi_password",
    "changeme",
    "change_me",
    "xxx",
    "todo",
];

// WiFi limits (IEEE 802.11 / WPA2-PSK)
/// Maximum SSID length in bytes
pub const MAX_SSID_BYTES: usize = 32;
/// Minimum WPA2 passphrase length in characters
pub const MIN_PASSPHRASE_LEN: usize = 8;
/// Maximum WPA2 passphrase length in characters (a 64-char value must be a raw hex PSK)
pub const MAX_PASSPHRASE_LEN: usize = 63;
/// Length of a raw pre-shared key written as hex
pub const RAW_PSK_HEX_LEN: usize = 64;

// Twilio
/// Twilio REST API base URL
pub const TWILIO_API_BASE_URL: &str = "https://api.twilio.com";
/// Twilio REST API version segment
pub const TWILIO_API_VERSION: &str = "2010-04-01";
/// Account SID prefix
pub const ACCOUNT_SID_PREFIX: &str = "AC";
/// Number of hex digits following the account SID prefix
pub const ACCOUNT_SID_HEX_LEN: usize = 32;
/// Maximum SMS body length in characters
/// Twilio concatenates longer bodies into segments and rejects anything above 1600
pub const MAX_SMS_BODY_CHARS: usize = 1600;
/// Characters of the account SID shown in redacted summaries
pub const SID_VISIBLE_PREFIX: usize = 6;
/// Text substituted for secret values in logs and summaries
pub const REDACTED: &str = "[REDACTED]";

/// E.164: `+`, a non-zero leading digit, at most 15 digits total.
pub const E164_PATTERN: &str = r"^\+[1-9]\d{1,14}$";

// HTTP client
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// User-Agent sent to the messaging API
pub const DEFAULT_USER_AGENT: &str = concat!("sms_notify/", env!("CARGO_PKG_VERSION"));

// Retry strategy
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 8;
/// Maximum number of retries after the initial attempt
/// Kept low: a duplicated SMS is worse than a failed one
pub const RETRY_MAX_ATTEMPTS: usize = 2;

/// Maximum length of an error body kept in `SmsError::UnexpectedResponse`
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

// HTTP status codes
/// Rate limited by the messaging API; retried with backoff
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
