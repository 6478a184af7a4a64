//! Service configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use typed_builder::TypedBuilder;
use warden_cache::UserCacheConfig;
use warden_core::{ForceSubscribeConfig, Identity, MAX_INVITE_EXPIRE_MINUTES};
use warden_error::{ConfigError, WardenResult};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "WARDEN_CONFIG";
/// Environment variable overriding the owner identity.
pub const OWNER_ENV: &str = "WARDEN_OWNER_ID";

/// Top-level Warden configuration.
///
/// # Example
///
/// ```toml
/// owner_id = 123456789
///
/// [force_subscribe]
/// channels = [-1001111111111]
/// request_channels = [-1002222222222]
/// invite_expire_minutes = 5
///
/// [cache]
/// max_entries = 10000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct WardenConfig {
    /// The privileged administrator
    owner_id: Identity,

    /// Force-subscribe settings
    #[serde(default)]
    #[builder(default)]
    force_subscribe: ForceSubscribeConfig,

    /// User cache settings
    #[serde(default)]
    #[builder(default)]
    cache: UserCacheConfig,
}

impl WardenConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, is not valid
    /// TOML, names a non-positive owner, or sets `invite_expire_minutes`
    /// above [`MAX_INVITE_EXPIRE_MINUTES`].
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> WardenResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from file");

        let contents = fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> WardenResult<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.check_owner()?;
        config.check_invite_expiry()?;

        tracing::info!(
            owner = %config.owner_id,
            channels = config.force_subscribe.channels().len(),
            request_channels = config.force_subscribe.request_channels().len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve configuration from a path, `WARDEN_CONFIG`, and
    /// `WARDEN_OWNER_ID`, in that order of precedence for the file.
    ///
    /// Without any file, `WARDEN_OWNER_ID` alone yields a default
    /// configuration for that owner.
    pub fn load(path: Option<PathBuf>) -> WardenResult<Self> {
        let path = path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        let owner = std::env::var(OWNER_ENV).ok();

        match path {
            Some(path) => Self::from_file(path)?.with_owner_override(owner.as_deref()),
            None => {
                let owner = owner.ok_or_else(|| {
                    ConfigError::new(format!(
                        "No configuration: pass --config, or set {} or {}",
                        CONFIG_ENV, OWNER_ENV
                    ))
                })?;
                Self::builder()
                    .owner_id(parse_owner(&owner)?)
                    .build()
                    .with_owner_override(None)
            }
        }
    }

    /// Replace the owner with an override value, if given.
    pub fn with_owner_override(mut self, owner: Option<&str>) -> WardenResult<Self> {
        if let Some(owner) = owner {
            self.owner_id = parse_owner(owner)?;
            tracing::debug!(owner = %self.owner_id, "Owner overridden from environment");
        }
        self.check_owner()?;
        Ok(self)
    }

    fn check_owner(&self) -> WardenResult<()> {
        if !self.owner_id.is_user() {
            return Err(ConfigError::new(format!(
                "owner_id must be a positive user id, got {}",
                self.owner_id
            ))
            .into());
        }
        Ok(())
    }

    fn check_invite_expiry(&self) -> WardenResult<()> {
        if !self.force_subscribe.expiry_in_range() {
            return Err(ConfigError::new(format!(
                "invite_expire_minutes must be at most {}, got {}",
                MAX_INVITE_EXPIRE_MINUTES,
                self.force_subscribe.invite_expire_minutes()
            ))
            .into());
        }
        Ok(())
    }

    /// Validate configuration.
    ///
    /// # Returns
    ///
    /// List of validation warnings (empty if valid).
    #[tracing::instrument(skip(self))]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let fsub = &self.force_subscribe;

        if *fsub.enabled() && !fsub.has_channels() {
            warnings.push("force_subscribe is enabled but no channels are configured".to_string());
        }

        for channel in fsub.channels().iter().chain(fsub.request_channels()) {
            if channel.is_user() {
                warnings.push(format!(
                    "force-subscribe channel {} is a user id, channels are negative",
                    channel
                ));
            }
        }

        for channel in fsub.channels() {
            if fsub.is_request_channel(*channel) {
                warnings.push(format!(
                    "channel {} is listed both as direct and join-request channel",
                    channel
                ));
            }
        }

        if *fsub.invite_expire_minutes() == 0 && !fsub.request_channels().is_empty() {
            warnings.push(
                "invite_expire_minutes is 0, join requests will never expire".to_string(),
            );
        }

        if *self.cache.enabled() && *self.cache.max_entries() == 0 {
            warnings.push("cache is enabled with max_entries = 0".to_string());
        }

        for warning in &warnings {
            tracing::warn!(%warning, "Configuration warning");
        }
        warnings
    }
}

fn parse_owner(value: &str) -> WardenResult<Identity> {
    value
        .parse()
        .map_err(|e| ConfigError::new(format!("Invalid owner id '{}': {}", value, e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = WardenConfig::from_toml_str("owner_id = 42").unwrap();
        assert_eq!(*config.owner_id(), Identity::new(42));
        assert!(*config.force_subscribe().enabled());
        assert_eq!(*config.force_subscribe().invite_expire_minutes(), 5);
        assert_eq!(*config.cache().max_entries(), 10_000);
    }

    #[test]
    fn test_owner_override() {
        let config = WardenConfig::from_toml_str("owner_id = 42")
            .unwrap()
            .with_owner_override(Some("7"))
            .unwrap();
        assert_eq!(*config.owner_id(), Identity::new(7));

        let err = WardenConfig::from_toml_str("owner_id = 42")
            .unwrap()
            .with_owner_override(Some("seven"));
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_unbounded_invite_expiry() {
        let err = WardenConfig::from_toml_str(
            "owner_id = 42\n[force_subscribe]\nchannels = [-100]\ninvite_expire_minutes = 1000000000000",
        )
        .unwrap_err();
        assert!(err.to_string().contains("invite_expire_minutes must be at most"));

        let config = WardenConfig::from_toml_str(&format!(
            "owner_id = 42\n[force_subscribe]\ninvite_expire_minutes = {}",
            MAX_INVITE_EXPIRE_MINUTES
        ))
        .unwrap();
        assert_eq!(
            *config.force_subscribe().invite_expire_minutes(),
            MAX_INVITE_EXPIRE_MINUTES
        );
    }

    #[test]
    fn test_rejects_group_owner() {
        assert!(WardenConfig::from_toml_str("owner_id = -100").is_err());
    }
}
