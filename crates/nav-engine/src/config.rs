//! Navigator configuration

use serde::{Deserialize, Serialize};

/// What a hierarchy navigator does with keys missing from the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownKeyPolicy {
    /// Accept the key; the view resolves to an empty listing
    #[default]
    FailSoft,
    /// Reject with `UnknownKey` and keep the cursor
    Strict,
}

/// Navigator configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Handling of unknown hierarchy keys
    pub unknown_key_policy: UnknownKeyPolicy,
}

impl NavigatorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict configuration
    #[inline]
    #[must_use]
    pub fn strict() -> Self {
        Self::new().with_unknown_key_policy(UnknownKeyPolicy::Strict)
    }

    /// With unknown key policy
    #[inline]
    #[must_use]
    pub fn with_unknown_key_policy(mut self, policy: UnknownKeyPolicy) -> Self {
        self.unknown_key_policy = policy;
        self
    }

    /// Check for strict key handling
    #[inline]
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.unknown_key_policy == UnknownKeyPolicy::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fail_soft() {
        assert_eq!(NavigatorConfig::new().unknown_key_policy, UnknownKeyPolicy::FailSoft);
        assert!(NavigatorConfig::strict().is_strict());
    }

    #[test]
    fn parses_from_toml() {
        let config: NavigatorConfig = toml::from_str(r#"unknown_key_policy = "strict""#).unwrap();
        assert!(config.is_strict());

        let config: NavigatorConfig = toml::from_str("").unwrap();
        assert!(!config.is_strict());
    }
}
