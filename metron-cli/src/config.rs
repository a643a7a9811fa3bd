//! Startup configuration read from the environment

use metron_core::{Culture, MetronError, MetronResult};
use std::env;

pub const CULTURE_VAR: &str = "METRON_CULTURE";
pub const LOG_VAR: &str = "RUST_LOG";
const DEFAULT_LOG: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Culture used when a request does not name one
    pub culture: &'static Culture,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl CliConfig {
    pub fn from_env() -> MetronResult<Self> {
        Self::from_vars(env::var(CULTURE_VAR).ok(), env::var(LOG_VAR).ok())
    }

    fn from_vars(culture: Option<String>, log_filter: Option<String>) -> MetronResult<Self> {
        let culture = match culture {
            Some(name) => Culture::by_name(&name).ok_or(MetronError::UnknownCulture(name))?,
            None => &Culture::INVARIANT,
        };
        Ok(CliConfig {
            culture,
            log_filter: log_filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG.to_string()),
        })
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            culture: &Culture::INVARIANT,
            log_filter: DEFAULT_LOG.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_vars(None, None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_culture_from_env() {
        let config = CliConfig::from_vars(Some("de-DE".to_string()), Some("debug".to_string())).unwrap();
        assert_eq!(config.culture, &Culture::DE_DE);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_unknown_culture() {
        let err = CliConfig::from_vars(Some("xx-YY".to_string()), None).unwrap_err();
        assert_eq!(err, MetronError::UnknownCulture("xx-YY".to_string()));
    }
}
