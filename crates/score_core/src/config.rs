//! # Engine Configuration
//!
//! Query sizing shared by every engine operation.
//!
//! ```rust
//! use score_core::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.facet_limit, 20);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::source::Scope;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Groups requested per facet and per navigation level (default: 20)
    pub facet_limit: usize,
    /// Minimum count for winner facets and navigation levels (default: 1)
    pub min_count: u64,
    /// Document cap of a full scan; a scope reaching it is rejected (default: 1000)
    pub page_size: usize,
    /// Scope used when the caller does not name one
    pub default_scope: Scope,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            facet_limit: 20,
            min_count: 1,
            page_size: 1000,
            default_scope: Scope::league("Angleterre", "Premier League"),
        }
    }
}

impl EngineConfig {
    /// Large limits for offline runs over a whole corpus.
    pub fn exhaustive() -> Self {
        Self {
            facet_limit: 10_000,
            page_size: 1_000_000,
            default_scope: Scope::all(),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| StatsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| StatsError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.facet_limit == 0 {
            return Err(StatsError::InvalidConfig("facet_limit must be at least 1".into()));
        }
        if self.min_count == 0 {
            return Err(StatsError::InvalidConfig("min_count must be at least 1".into()));
        }
        if self.page_size == 0 {
            return Err(StatsError::InvalidConfig("page_size must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.facet_limit, 20);
        assert_eq!(cfg.min_count, 1);
        assert_eq!(cfg.page_size, 1000);
        assert_eq!(cfg.default_scope, Scope::league("Angleterre", "Premier League"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_exhaustive_preset() {
        let cfg = EngineConfig::exhaustive();
        assert!(cfg.page_size > EngineConfig::default().page_size);
        assert!(cfg.default_scope.is_all());
        assert_eq!(cfg.min_count, 1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = EngineConfig::from_json_str(r#"{"page_size": 5000}"#).unwrap();
        assert_eq!(cfg.page_size, 5000);
        assert_eq!(cfg.facet_limit, 20);
    }

    #[test]
    fn test_scope_from_json() {
        let cfg = EngineConfig::from_json_str(
            r#"{"default_scope": {"country": "Espagne", "league": "Liga"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.default_scope, Scope::league("Espagne", "Liga"));
    }

    #[test]
    fn test_zero_limits_rejected() {
        assert!(EngineConfig::from_json_str(r#"{"page_size": 0}"#).is_err());
        assert!(EngineConfig::from_json_str(r#"{"facet_limit": 0}"#).is_err());
        assert!(EngineConfig::from_json_str(r#"{"min_count": 0}"#).is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"facet_limit": 50}"#).unwrap();

        let cfg = EngineConfig::from_path(file.path()).unwrap();
        assert_eq!(cfg.facet_limit, 50);

        let missing = EngineConfig::from_path(Path::new("/nonexistent/engine.json"));
        assert!(matches!(missing, Err(StatsError::InvalidConfig(_))));
    }
}
