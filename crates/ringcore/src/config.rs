//! Ring configuration.
//!
//! Configuration is input only: it describes the hash function, virtual node
//! count and initial members of a ring. Nothing writes it back.

use crate::error::{Error, Result};
use crate::hasher::HashAlgorithm;
use crate::ring::{HashRing, RingBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Virtual nodes per member when none is given.
pub const DEFAULT_VIRTUAL_NODES: usize = 255;

/// Declarative description of a ring.
///
/// ```json
/// { "virtual_nodes": 128, "hash": "xxhash32", "members": ["a", "b"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingConfig {
    /// Virtual nodes per member; `None` selects [`DEFAULT_VIRTUAL_NODES`].
    pub virtual_nodes: Option<usize>,
    pub hash: HashAlgorithm,
    pub members: Vec<String>,
}

impl RingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RingConfig =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Reject an explicit zero vnode count and empty member ids.
    pub fn validate(&self) -> Result<()> {
        if self.virtual_nodes == Some(0) {
            return Err(Error::InvalidConfiguration(
                "virtual_nodes must be positive".into(),
            ));
        }
        if self.members.iter().any(|m| m.is_empty()) {
            return Err(Error::InvalidConfiguration(
                "member ids must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Build the configured ring with its initial members.
    pub fn into_ring(self) -> Result<HashRing<HashAlgorithm>> {
        self.validate()?;
        let mut builder = RingBuilder::new()
            .with_hasher(self.hash)
            .add_members(self.members);
        if let Some(vnodes) = self.virtual_nodes {
            builder = builder.with_vnodes(vnodes);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = RingConfig::from_json_str(
            r#"{ "virtual_nodes": 16, "hash": "siphash13", "members": ["a", "b"] }"#,
        )
        .unwrap();
        assert_eq!(config.virtual_nodes, Some(16));
        assert_eq!(config.hash, HashAlgorithm::SipHash13);

        let ring = config.into_ring().unwrap();
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.virtual_nodes_per_member(), 16);
        assert_eq!(ring.hasher_name(), "siphash13");
    }

    #[test]
    fn test_defaults() {
        let config = RingConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RingConfig::default());

        let ring = config.into_ring().unwrap();
        assert!(ring.is_empty());
        assert_eq!(ring.virtual_nodes_per_member(), DEFAULT_VIRTUAL_NODES);
        assert_eq!(ring.hasher_name(), "crc32");
    }

    #[test]
    fn test_rejects_zero_vnodes() {
        let err = RingConfig::from_json_str(r#"{ "virtual_nodes": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_empty_member() {
        let err = RingConfig::from_json_str(r#"{ "members": ["a", ""] }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = RingConfig::from_json_str(r#"{ "vnodes": 3 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RingConfig::load("/nonexistent/ring.json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
