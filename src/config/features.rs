//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Emit focus requests for the UI layer to act on
    #[serde(default = "default_true")]
    pub emit_focus_requests: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            emit_focus_requests: true,
            verbose_errors: false,
            enable_tracing: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.emit_focus_requests);
        assert!(!flags.verbose_errors);
        assert!(flags.enable_tracing);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "emit_focus_requests": false,
            "verbose_errors": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.emit_focus_requests);
        assert!(flags.verbose_errors);
        assert!(flags.enable_tracing);
    }
}
