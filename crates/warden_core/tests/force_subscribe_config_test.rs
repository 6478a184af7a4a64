//! Tests for force-subscribe configuration.

use warden_core::{ForceSubscribeConfig, Identity, MAX_INVITE_EXPIRE_MINUTES};

#[test]
fn test_defaults() {
    let config = ForceSubscribeConfig::default();
    assert!(*config.enabled());
    assert!(config.channels().is_empty());
    assert_eq!(*config.invite_expire_minutes(), 5);
    assert!(!config.has_channels());
}

#[test]
fn test_builder() {
    let config = ForceSubscribeConfig::builder()
        .channels(vec![Identity::new(-100)])
        .request_channels(vec![Identity::new(-200)])
        .invite_expire_minutes(10)
        .build();

    assert!(config.has_channels());
    assert!(config.is_request_channel(Identity::new(-200)));
    assert!(!config.is_request_channel(Identity::new(-100)));
    assert_eq!(
        config.join_request_ttl(),
        Some(std::time::Duration::from_secs(600))
    );
}

#[test]
fn test_zero_expiry_disables_ttl() {
    let config = ForceSubscribeConfig::builder().invite_expire_minutes(0).build();
    assert!(config.invite_lifetime().is_none());
    assert!(config.join_request_ttl().is_none());
}

#[test]
fn test_deserialize_partial_table() {
    let config: ForceSubscribeConfig = toml::from_str("channels = [-1001, -1002]").unwrap();
    assert!(*config.enabled());
    assert_eq!(config.channels().len(), 2);
    assert!(config.request_channels().is_empty());
}

#[test]
fn test_unrepresentable_expiry_means_no_expiry() {
    let config = ForceSubscribeConfig::builder()
        .invite_expire_minutes(u64::MAX)
        .build();
    assert!(!config.expiry_in_range());
    assert!(config.invite_lifetime().is_none());
    assert!(config.join_request_ttl().is_none());

    let config = ForceSubscribeConfig::builder()
        .invite_expire_minutes(MAX_INVITE_EXPIRE_MINUTES)
        .build();
    assert!(config.expiry_in_range());
    assert!(config.invite_lifetime().is_some());
}
