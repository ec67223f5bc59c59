//! Utilities for sanitizing error messages.
//!
//! Removes control characters, masks secret values and truncates long
//! messages before they are logged or returned to the caller.

use crate::config::{MAX_ERROR_MESSAGE_LENGTH, REDACTED};

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) are
/// removed; non-ASCII text is preserved.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Replaces every occurrence of each non-empty secret in `message`.
pub fn redact(message: &str, secrets: &[&str]) -> String {
    secrets
        .iter()
        .filter(|s| !s.is_empty())
        .fold(message.to_string(), |acc, secret| acc.replace(secret, REDACTED))
}

/// Sanitizes, redacts and truncates an error message.
///
/// This function:
/// 1. Sanitizes the message by removing control characters
/// 2. Replaces any of `secrets` with `[REDACTED]`
/// 3. Truncates to `MAX_ERROR_MESSAGE_LENGTH` characters, noting the original length
pub fn sanitize_and_truncate_error_message(message: &str, secrets: &[&str]) -> String {
    let sanitized = redact(&sanitize_error_message(message), secrets);
    let char_count = sanitized.chars().count();

    if char_count > MAX_ERROR_MESSAGE_LENGTH {
        // Leave room for the truncation note
        let keep = MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
        let truncated: String = sanitized.chars().take(keep).collect();
        format!(
            "{}... (truncated, original length: {} chars)",
            truncated, char_count
        )
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_error_message_removes_control_chars() {
        let input = "Error\x00message\x01with\x02control\x03chars";
        assert_eq!(sanitize_error_message(input), "Errormessagewithcontrolchars");
    }

    #[test]
    fn test_sanitize_error_message_preserves_whitespace() {
        let input = "Error\nmessage\twith\r\nwhitespace";
        assert_eq!(sanitize_error_message(input), input);
    }

    #[test]
    fn test_sanitize_error_message_preserves_unicode() {
        let input = "Error message with unicode: 测试 🚀";
        assert_eq!(sanitize_error_message(input), input);
    }

    #[test]
    fn test_redact_replaces_all_occurrences() {
        let out = redact("token=abc123 again abc123", &["abc123"]);
        assert_eq!(out, "token=[REDACTED] again [REDACTED]");
    }

    #[test]
    fn test_redact_ignores_empty_secrets() {
        assert_eq!(redact("unchanged", &[""]), "unchanged");
    }

    #[test]
    fn test_truncation() {
        let long = "x".repeat(MAX_ERROR_MESSAGE_LENGTH + 100);
        let out = sanitize_and_truncate_error_message(&long, &[]);
        assert!(out.contains("truncated, original length: 600 chars"));
        assert!(out.chars().count() < MAX_ERROR_MESSAGE_LENGTH + 100);
    }

    #[test]
    fn test_short_message_untouched() {
        assert_eq!(sanitize_and_truncate_error_message("short", &[]), "short");
    }
}
