//! Runtime-selectable hash function.

use crate::error::Error;
use crate::hasher::crc32::Crc32Hasher;
use crate::hasher::sip::SipHasher;
use crate::hasher::traits::RingHasher;
use crate::hasher::xxhash::XxHash32Hasher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hash function picked by name, typically from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Crc32,
    #[serde(alias = "xxhash")]
    XxHash32,
    #[serde(alias = "siphash")]
    SipHash13,
}

impl HashAlgorithm {
    /// All supported algorithms.
    pub const ALL: [HashAlgorithm; 3] = [
        HashAlgorithm::Crc32,
        HashAlgorithm::XxHash32,
        HashAlgorithm::SipHash13,
    ];
}

impl RingHasher for HashAlgorithm {
    fn hash(&self, data: &[u8]) -> u32 {
        match self {
            HashAlgorithm::Crc32 => Crc32Hasher.hash(data),
            HashAlgorithm::XxHash32 => XxHash32Hasher.hash(data),
            HashAlgorithm::SipHash13 => SipHasher.hash(data),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Crc32 => Crc32Hasher.name(),
            HashAlgorithm::XxHash32 => XxHash32Hasher.name(),
            HashAlgorithm::SipHash13 => SipHasher.name(),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "crc32" => Ok(HashAlgorithm::Crc32),
            "xxhash32" | "xxhash" => Ok(HashAlgorithm::XxHash32),
            "siphash13" | "siphash" => Ok(HashAlgorithm::SipHash13),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown hash algorithm `{}`",
                other
            ))),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
