use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;
use t212_client::config::{Config, Credentials};
use t212_client::error::AppError;
use t212_client::utils::config::{get_env_or_default, get_env_or_none};

// Env mutation is process-global; serialize the tests that touch the
// T212_* variables.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("TEST_T212_STRING", "test_value");
        let result: String = get_env_or_default("TEST_T212_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("TEST_T212_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("TEST_T212_MISSING");
    }
    let result: String = get_env_or_default("TEST_T212_MISSING", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("TEST_T212_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("TEST_T212_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("TEST_T212_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("TEST_T212_OPTION", "123");
        let result: Option<u32> = get_env_or_none("TEST_T212_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("TEST_T212_OPTION");
    }
    let result: Option<u32> = get_env_or_none("TEST_T212_OPTION");
    assert_eq!(result, None);
}

#[test]
fn missing_credentials_are_a_fatal_config_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        env::remove_var("T212_API_KEY_ID");
        env::remove_var("T212_API_KEY_SECRET");
        env::remove_var("T212_BASE_URL");
    }

    match Config::from_env() {
        Err(AppError::Config(msg)) => assert!(msg.contains("T212_API_KEY_ID")),
        other => panic!("expected a config error, got {other:?}"),
    }
}

#[test]
fn from_env_builds_a_complete_config() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        env::set_var("T212_API_KEY_ID", "key-id");
        env::set_var("T212_API_KEY_SECRET", "key-secret");
        env::set_var("T212_BASE_URL", "https://demo.example.com/api/v0/");
    }

    let config = Config::from_env().expect("config should load");
    // Trailing slash is normalized away
    assert_eq!(config.rest_api.base_url, "https://demo.example.com/api/v0");
    assert_eq!(config.credentials.api_key_id, "key-id");
    assert!(config.retry.max_attempts >= 1);
    assert!(config.rate_limiter.max_requests >= 1);

    unsafe {
        env::remove_var("T212_API_KEY_ID");
        env::remove_var("T212_API_KEY_SECRET");
        env::remove_var("T212_BASE_URL");
    }
}

#[test]
fn credentials_debug_never_prints_the_secret() {
    let credentials = Credentials::new("my-key-id", "super-secret-value");
    let printed = format!("{credentials:?}");
    assert!(printed.contains("my-key-id"));
    assert!(!printed.contains("super-secret-value"));
}

#[test]
fn basic_token_encodes_the_pair() {
    let credentials = Credentials::new("id", "secret");
    // base64("id:secret")
    assert_eq!(credentials.basic_token(), "Basic aWQ6c2VjcmV0");
}
