//! Parser configuration.
//!
//! A deployment can restrict which hint types it honours, for example to
//! stop clients from forcing full scans:
//!
//! ```
//! use shardline_hint::{HintParser, HintType, ParserConfig};
//!
//! let parser = HintParser::new(ParserConfig::new().disable(HintType::FullScan));
//! assert!(parser.parse("MASTER()").is_ok());
//! assert!(parser.parse("FULLSCAN()").is_err());
//! ```
//!
//! The configuration deserializes with serde; missing fields take their
//! defaults:
//!
//! ```json
//! { "enabled_types": ["MASTER", "SLAVE", "TRACE"] }
//! ```

use serde::{Deserialize, Serialize};

use crate::hint::HintType;

/// Configuration for [`HintParser`](crate::HintParser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Hint types the parser accepts.
    /// Default: all types
    pub enabled_types: Vec<HintType>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { enabled_types: HintType::ALL.to_vec() }
    }
}

impl ParserConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that accepts no hint types.
    #[must_use]
    pub fn disabled_types() -> Self {
        Self { enabled_types: Vec::new() }
    }

    /// Accept the given hint type.
    #[must_use]
    pub fn enable(mut self, kind: HintType) -> Self {
        if !self.enabled_types.contains(&kind) {
            self.enabled_types.push(kind);
        }
        self
    }

    /// Reject the given hint type.
    #[must_use]
    pub fn disable(mut self, kind: HintType) -> Self {
        self.enabled_types.retain(|k| *k != kind);
        self
    }

    /// Returns true if the given hint type is accepted.
    #[must_use]
    pub fn is_enabled(&self, kind: HintType) -> bool {
        self.enabled_types.contains(&kind)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_everything() {
        let config = ParserConfig::default();
        assert!(HintType::ALL.iter().all(|k| config.is_enabled(*k)));
    }

    #[test]
    fn enable_and_disable() {
        let config = ParserConfig::disabled_types()
            .enable(HintType::Master)
            .enable(HintType::Master)
            .enable(HintType::Trace);
        assert_eq!(config.enabled_types, vec![HintType::Master, HintType::Trace]);

        let config = config.disable(HintType::Master);
        assert!(!config.is_enabled(HintType::Master));
        assert!(config.is_enabled(HintType::Trace));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: ParserConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ParserConfig::default());

        let config: ParserConfig =
            serde_json::from_str(r#"{ "enabled_types": ["SLAVE", "TRACE"] }"#).unwrap();
        assert!(config.is_enabled(HintType::Slave));
        assert!(!config.is_enabled(HintType::Master));
    }
}
