//! Builder for hash rings.

use crate::config::DEFAULT_VIRTUAL_NODES;
use crate::error::{Error, Result};
use crate::hasher::{Crc32Hasher, RingHasher};
use crate::ring::HashRing;

/// Builds a [`HashRing`] with explicit parameters and initial members.
///
/// Unlike [`HashRing::new`], an explicit `with_vnodes(0)` is rejected rather
/// than replaced by the default.
///
/// ```
/// use ringcore::hasher::XxHash32Hasher;
/// use ringcore::RingBuilder;
///
/// let ring = RingBuilder::new()
///     .with_vnodes(64)
///     .with_hasher(XxHash32Hasher)
///     .add_member("a")
///     .add_member("b")
///     .build()
///     .unwrap();
/// assert_eq!(ring.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuilder<H = Crc32Hasher> {
    vnodes: Option<usize>,
    hasher: H,
    members: Vec<String>,
}

impl RingBuilder<Crc32Hasher> {
    pub fn new() -> Self {
        Self {
            vnodes: None,
            hasher: Crc32Hasher,
            members: Vec::new(),
        }
    }
}

impl Default for RingBuilder<Crc32Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: RingHasher> RingBuilder<H> {
    /// Virtual nodes per member. Must be positive.
    pub fn with_vnodes(mut self, vnodes: usize) -> Self {
        self.vnodes = Some(vnodes);
        self
    }

    /// Hash function for the ring.
    pub fn with_hasher<H2: RingHasher>(self, hasher: H2) -> RingBuilder<H2> {
        RingBuilder {
            vnodes: self.vnodes,
            hasher,
            members: self.members,
        }
    }

    pub fn add_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn add_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    /// Build the ring.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `with_vnodes(0)` was given.
    pub fn build(self) -> Result<HashRing<H>> {
        let vnodes = match self.vnodes {
            Some(0) => {
                return Err(Error::InvalidConfiguration(
                    "virtual node count must be positive".into(),
                ))
            }
            Some(n) => n,
            None => DEFAULT_VIRTUAL_NODES,
        };
        let ring = HashRing::with_hasher(vnodes, self.hasher);
        ring.swap_members(&self.members);
        Ok(ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default_vnodes() {
        let ring = RingBuilder::new().add_member("a").build().unwrap();
        assert_eq!(ring.virtual_nodes_per_member(), DEFAULT_VIRTUAL_NODES);
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn test_builder_rejects_explicit_zero() {
        let err = RingBuilder::new().with_vnodes(0).build().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_builder_members_deduplicated() {
        let ring = RingBuilder::new()
            .with_vnodes(8)
            .add_members(["a", "b"])
            .add_member("a")
            .build()
            .unwrap();
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.circle_len(), 16);
    }
}
