//! `.env` template generation.

use std::fmt::Write;

use strum::IntoEnumIterator;

use super::SecretKey;

fn template_value(key: SecretKey) -> &'static str {
    match key {
        SecretKey::WifiSsid => "Wifi name",
        SecretKey::WifiPassword => "wifi code",
        SecretKey::TwilioAccountSid | SecretKey::TwilioAuthToken => "enter",
        SecretKey::TwilioFromNumber | SecretKey::TwilioToNumber => "+enter",
    }
}

/// Returns a `.env` template with every credential set to a placeholder.
///
/// The placeholders are rejected by the loader, so an unedited template
/// fails `check` instead of silently reaching the network.
pub fn env_template() -> String {
    let mut out = String::new();
    out.push_str("# sms_notify credentials\n");
    out.push_str("# Keep this file out of version control (add it to .gitignore).\n");
    let mut section = "";
    for key in SecretKey::iter() {
        let heading = if key.env_var().starts_with("WIFI_") {
            "WiFi credentials"
        } else {
            "Twilio account settings"
        };
        if heading != section {
            let _ = write!(out, "\n# {heading}\n");
            section = heading;
        }
        let _ = writeln!(out, "# {}", key.label());
        let _ = writeln!(out, "{}=\"{}\"", key.env_var(), template_value(key));
    }
    out
}
