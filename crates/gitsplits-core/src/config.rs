//! Routing configuration

/// Configuration for the routing planner.
///
/// Replaces ambient environment lookups: callers build this once (usually
/// via [`RoutingConfig::from_env`]) and pass it into every routing call.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// Require the attested plane for high-risk (create/pay/approve) commands
    pub require_attestation_for_high_risk: bool,

    /// Allow high-risk commands to fall back to the unattested plane
    pub allow_high_risk_fallback: bool,

    /// Shared base URL used when a plane-specific one is absent
    pub base_url: Option<String>,

    /// Plane-specific base URL overrides
    pub hetzner_base_url: Option<String>,
    pub eigen_base_url: Option<String>,
}

impl RoutingConfig {
    pub fn new() -> Self {
        Self {
            require_attestation_for_high_risk: true,
            allow_high_risk_fallback: false,
            base_url: None,
            hetzner_base_url: None,
            eigen_base_url: None,
        }
    }

    /// Build from process environment variables.
    ///
    /// Boolean flags only honor the literal strings `true`/`false`; any
    /// other value falls back to the documented default.
    pub fn from_env() -> Self {
        Self {
            require_attestation_for_high_risk: bool_from_env(
                std::env::var("AGENT_REQUIRE_EIGEN_FOR_CREATE_PAY").ok(),
                true,
            ),
            allow_high_risk_fallback: bool_from_env(
                std::env::var("AGENT_ALLOW_HETZNER_EXEC_FALLBACK").ok(),
                false,
            ),
            base_url: non_empty(std::env::var("AGENT_BASE_URL").ok()),
            hetzner_base_url: non_empty(std::env::var("AGENT_HETZNER_BASE_URL").ok()),
            eigen_base_url: non_empty(std::env::var("AGENT_EIGEN_BASE_URL").ok()),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn bool_from_env(value: Option<String>, default: bool) -> bool {
    match value.as_deref() {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RoutingConfig::new();
        assert!(config.require_attestation_for_high_risk);
        assert!(!config.allow_high_risk_fallback);
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn test_bool_from_env_only_literal_overrides() {
        assert!(bool_from_env(Some("true".to_string()), false));
        assert!(!bool_from_env(Some("false".to_string()), true));
        // Non-literal values fall back to the default
        assert!(bool_from_env(Some("yes".to_string()), true));
        assert!(!bool_from_env(Some("1".to_string()), false));
        assert!(bool_from_env(None, true));
    }

    #[test]
    fn test_non_empty_filters_blank() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(
            non_empty(Some("api.example.com".to_string())),
            Some("api.example.com".to_string())
        );
    }
}
