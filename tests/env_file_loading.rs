//! Tests for loading credentials from dotenv files.

mod helpers;

use helpers::{valid_env_contents, write_env_file, FROM, SID, TO, TOKEN};
use sms_notify::{check_credentials, SecretKey, SecretProblem, Secrets, SecretsError};
use std::path::Path;

#[test]
fn test_load_valid_env_file() {
    let file = write_env_file(&valid_env_contents());
    let secrets = Secrets::from_env_file(file.path()).expect("Should load");

    assert_eq!(secrets.wifi().ssid(), "Home Network");
    assert_eq!(secrets.wifi().password().expose(), "correct horse battery");
    assert_eq!(secrets.twilio().account_sid().as_str(), SID);
    assert_eq!(secrets.twilio().auth_token().expose(), TOKEN);
    assert_eq!(secrets.twilio().from_number().as_str(), FROM);
    assert_eq!(secrets.twilio().to_number().as_str(), TO);
}

#[test]
fn test_load_via_check_credentials() {
    let file = write_env_file(&valid_env_contents());
    let secrets = check_credentials(Some(file.path())).expect("Should load");
    assert_eq!(secrets.twilio().to_number().as_str(), TO);
}

#[test]
fn test_unedited_template_fails_with_every_key() {
    let file = write_env_file(&sms_notify::secrets::env_template());
    let err = Secrets::from_env_file(file.path()).unwrap_err();
    let problems = err.problems().expect("validation error");
    assert_eq!(problems.len(), 6);
    for (_, problem) in &problems.0 {
        assert_eq!(*problem, SecretProblem::Placeholder);
    }
}

#[test]
fn test_malformed_number_is_reported() {
    let contents = valid_env_contents().replace(TO, "555-1234");
    let file = write_env_file(&contents);
    let err = Secrets::from_env_file(file.path()).unwrap_err();
    let problems = err.problems().unwrap();
    assert_eq!(
        problems.for_key(SecretKey::TwilioToNumber).collect::<Vec<_>>(),
        vec![&SecretProblem::InvalidPhoneNumber("555-1234".to_string())]
    );
}

#[test]
fn test_missing_file_is_file_error() {
    let err = Secrets::from_env_file(Path::new("/nonexistent/dir/.env")).unwrap_err();
    assert!(matches!(err, SecretsError::EnvFile { .. }));
    assert!(err.to_string().contains("/nonexistent/dir/.env"));
}

#[test]
fn test_loading_file_does_not_modify_environment() {
    let contents = valid_env_contents().replace(
        "WIFI_SSID=\"Home Network\"",
        "WIFI_SSID=\"Isolated Network\"",
    );
    let file = write_env_file(&contents);
    let secrets = Secrets::from_env_file(file.path()).unwrap();
    assert_eq!(secrets.wifi().ssid(), "Isolated Network");
    assert_ne!(
        std::env::var("WIFI_SSID").ok().as_deref(),
        Some("Isolated Network")
    );
}

#[test]
fn test_error_message_never_contains_token() {
    // Valid token, broken everything else
    let contents = format!("TWILIO_AUTH_TOKEN={TOKEN}\nTWILIO_ACCOUNT_SID=bogus\n");
    let file = write_env_file(&contents);
    // Missing keys may fall back to the environment; the token must not leak either way
    let err = Secrets::from_env_file(file.path()).unwrap_err();
    assert!(!format!("{err} {err:?}").contains(TOKEN));
}
