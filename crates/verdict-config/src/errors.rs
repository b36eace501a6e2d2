use serde::Deserialize;

/// Error response configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Attach stack traces to responses; defaults to development mode
    #[serde(default)]
    pub include_stack: Option<bool>,
    /// Log every failure before it is classified
    #[serde(default = "default_log_failures")]
    pub log_failures: bool,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            include_stack: None,
            log_failures: true,
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_log_failures() -> bool {
    true
}
