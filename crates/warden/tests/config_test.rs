//! Configuration loading tests.

use std::io::Write;
use warden::{Identity, WardenConfig, WardenErrorKind};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_from_file() {
    let file = write_config(
        r#"
owner_id = 123456789

[force_subscribe]
enabled = true
channels = [-1001111111111]
request_channels = [-1002222222222]
invite_expire_minutes = 10

[cache]
enabled = true
max_entries = 500
"#,
    );

    let config = WardenConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.owner_id(), Identity::new(123456789));
    let fsub = config.force_subscribe();
    assert_eq!(fsub.channels(), &vec![Identity::new(-1001111111111)]);
    assert!(fsub.is_request_channel(Identity::new(-1002222222222)));
    assert_eq!(
        fsub.join_request_ttl(),
        Some(std::time::Duration::from_secs(600))
    );
    assert_eq!(*config.cache().max_entries(), 500);
    assert!(config.validate().is_empty());
}

#[test]
fn test_missing_file_is_config_error() {
    let err = WardenConfig::from_file("/nonexistent/warden.toml").unwrap_err();
    assert!(matches!(err.kind(), WardenErrorKind::Config(_)));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let file = write_config("owner_id = \"not a number\"");
    let err = WardenConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind(), WardenErrorKind::Config(_)));
}

#[test]
fn test_missing_owner_is_rejected() {
    let file = write_config("[force_subscribe]\nchannels = [-1]");
    assert!(WardenConfig::from_file(file.path()).is_err());
}

#[test]
fn test_validation_warnings() {
    let config = WardenConfig::from_toml_str(
        r#"
owner_id = 1

[force_subscribe]
channels = [5, -7]
request_channels = [-7]
invite_expire_minutes = 0
"#,
    )
    .unwrap();

    let warnings = config.validate();
    assert!(warnings.iter().any(|w| w.contains("5 is a user id")));
    assert!(warnings.iter().any(|w| w.contains("-7 is listed both")));
    assert!(warnings.iter().any(|w| w.contains("never expire")));
}

#[test]
fn test_enabled_without_channels_warns() {
    let config = WardenConfig::from_toml_str("owner_id = 1").unwrap();
    assert_eq!(config.validate().len(), 1);
}
