//! Immutable ring views.

use crate::error::Result;
use crate::hasher::RingHasher;
use crate::ring::state::RingState;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A frozen copy of the ring taken by [`HashRing::snapshot`](crate::HashRing::snapshot).
///
/// Lookups against a snapshot take no lock and keep answering from the
/// membership at the moment it was taken, which gives one consistent
/// routing decision for a batch of keys.
pub struct RingSnapshot<H> {
    state: Arc<RingState>,
    hasher: Arc<H>,
}

impl<H: RingHasher> RingSnapshot<H> {
    pub(crate) fn new(state: Arc<RingState>, hasher: Arc<H>) -> Self {
        Self { state, hasher }
    }

    /// Member owning `key` in this snapshot.
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Result<&str> {
        self.state.owner_of(self.hasher.hash(key.as_ref()))
    }

    /// Members in this snapshot, in no particular order.
    pub fn members(&self) -> Vec<String> {
        self.state.members()
    }

    pub fn contains(&self, member: &str) -> bool {
        self.state.contains(member)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.len() == 0
    }

    pub fn circle_len(&self) -> usize {
        self.state.circle_len()
    }

    /// How many of `keys` each member owns. Empty on an empty ring.
    pub fn distribution<I, K>(&self, keys: I) -> HashMap<String, usize>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for key in keys {
            if let Ok(owner) = self.get(key) {
                *counts.entry(owner.to_owned()).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl<H> Clone for RingSnapshot<H> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<H: RingHasher> fmt::Debug for RingSnapshot<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingSnapshot")
            .field("hasher", &self.hasher.name())
            .field("members", &self.state.len())
            .field("circle", &self.state.circle_len())
            .finish()
    }
}
