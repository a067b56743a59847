pub mod schema;

use candid::Principal;
use derive_more::Display;
use schema::{ConfigSchemaError, Validate, validate_canister_id};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Errors related to configuration parsing and validation.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

///
/// WaitMode
/// How long an outgoing call may wait for the remote canister.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitMode {
    #[display("bounded")]
    Bounded,

    #[default]
    #[display("unbounded")]
    Unbounded,
}

///
/// NamingConfig
/// Canister ids of the three naming canisters plus call options.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    pub registrar: Principal,
    pub registry: Principal,
    pub resolver: Principal,

    #[serde(default)]
    pub wait: WaitMode,
}

impl NamingConfig {
    #[must_use]
    pub const fn new(registrar: Principal, registry: Principal, resolver: Principal) -> Self {
        Self {
            registrar,
            registry,
            resolver,
            wait: WaitMode::Unbounded,
        }
    }

    #[must_use]
    pub const fn with_wait(mut self, wait: WaitMode) -> Self {
        self.wait = wait;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Return the config as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::CannotParseToml(e.to_string()))
    }
}

impl Validate for NamingConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        validate_canister_id(&self.registrar, "registrar")?;
        validate_canister_id(&self.registry, "registry")?;
        validate_canister_id(&self.resolver, "resolver")?;

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::support::p;

    fn toml_for(registrar: Principal, registry: Principal, resolver: Principal) -> String {
        format!("registrar = \"{registrar}\"\nregistry = \"{registry}\"\nresolver = \"{resolver}\"\n")
    }

    #[test]
    fn parses_minimal_config_with_default_wait() {
        let cfg = NamingConfig::from_toml(&toml_for(p(1), p(2), p(3))).unwrap();

        assert_eq!(cfg.registrar, p(1));
        assert_eq!(cfg.registry, p(2));
        assert_eq!(cfg.resolver, p(3));
        assert_eq!(cfg.wait, WaitMode::Unbounded);
    }

    #[test]
    fn parses_bounded_wait() {
        let toml = format!("{}wait = \"bounded\"\n", toml_for(p(1), p(2), p(3)));
        let cfg = NamingConfig::from_toml(&toml).unwrap();

        assert_eq!(cfg.wait, WaitMode::Bounded);
    }

    #[test]
    fn rejects_unknown_fields() {
        let toml = format!("{}network = \"ic\"\n", toml_for(p(1), p(2), p(3)));
        let err = NamingConfig::from_toml(&toml).unwrap_err();

        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn rejects_missing_canister() {
        let toml = format!("registrar = \"{}\"\nregistry = \"{}\"\n", p(1), p(2));
        let err = NamingConfig::from_toml(&toml).unwrap_err();

        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn rejects_malformed_principal() {
        let toml = format!(
            "registrar = \"not-a-principal\"\nregistry = \"{}\"\nresolver = \"{}\"\n",
            p(2),
            p(3)
        );
        let err = NamingConfig::from_toml(&toml).unwrap_err();

        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn rejects_anonymous_canister() {
        let toml = toml_for(p(1), Principal::anonymous(), p(3));
        let err = NamingConfig::from_toml(&toml).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigSchema(_)));
        assert!(err.to_string().contains("registry"));
    }

    #[test]
    fn rejects_management_canister() {
        let toml = toml_for(p(1), p(2), Principal::management_canister());
        let err = NamingConfig::from_toml(&toml).unwrap_err();

        assert!(err.to_string().contains("resolver cannot be the management canister"));
    }

    #[test]
    fn to_toml_parses_back() {
        let cfg = NamingConfig::new(p(1), p(2), p(3)).with_wait(WaitMode::Bounded);
        let toml = cfg.to_toml().unwrap();

        assert!(toml.contains("wait = \"bounded\""));
        assert_eq!(NamingConfig::from_toml(&toml).unwrap(), cfg);
    }
}
