//! Thread-safe consistent hash ring.

use crate::config::DEFAULT_VIRTUAL_NODES;
use crate::error::Result;
use crate::hasher::{Crc32Hasher, RingHasher};
use crate::ring::snapshot::RingSnapshot;
use crate::ring::state::RingState;
use crate::vnode::VirtualNode;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Consistent hash ring mapping keys to a dynamic set of string members.
///
/// Every member is expanded into a fixed number of virtual nodes hashed
/// from `member|index`. A key belongs to the member owning the first
/// virtual node at or after the key's hash, wrapping past the top of the
/// ring.
///
/// # Concurrency
///
/// Circle, virtual map and member set sit behind one `RwLock`. Lookups take
/// the shared lock, `add`/`remove`/`swap_members` take it exclusively. The
/// state is held in an `Arc`, so [`snapshot`](Self::snapshot) is a pointer
/// copy and writers only clone the state while a snapshot is still alive.
///
/// # Example
///
/// ```
/// use ringcore::HashRing;
///
/// let ring = HashRing::new(0); // default vnode count
/// ring.add("cache-1");
/// ring.add("cache-2");
///
/// let owner = ring.get("user:42").unwrap();
/// assert!(owner == "cache-1" || owner == "cache-2");
/// ```
pub struct HashRing<H = Crc32Hasher> {
    hasher: Arc<H>,
    vnodes: usize,
    state: RwLock<Arc<RingState>>,
}

impl HashRing<Crc32Hasher> {
    /// Create an empty ring hashing with CRC-32.
    ///
    /// `virtual_nodes == 0` selects [`DEFAULT_VIRTUAL_NODES`].
    pub fn new(virtual_nodes: usize) -> Self {
        Self::with_hasher(virtual_nodes, Crc32Hasher)
    }
}

impl Default for HashRing<Crc32Hasher> {
    fn default() -> Self {
        Self::new(DEFAULT_VIRTUAL_NODES)
    }
}

impl<H: RingHasher> HashRing<H> {
    /// Create an empty ring with a custom hash function.
    ///
    /// `virtual_nodes == 0` selects [`DEFAULT_VIRTUAL_NODES`]. Use
    /// [`RingBuilder`](crate::ring::RingBuilder) to reject a zero count instead.
    pub fn with_hasher(virtual_nodes: usize, hasher: H) -> Self {
        let vnodes = if virtual_nodes == 0 {
            DEFAULT_VIRTUAL_NODES
        } else {
            virtual_nodes
        };
        Self {
            hasher: Arc::new(hasher),
            vnodes,
            state: RwLock::new(Arc::new(RingState::default())),
        }
    }

    /// Add a member. No-op if it is already present.
    pub fn add(&self, member: &str) {
        let mut guard = self.state.write();
        let state = Arc::make_mut(&mut *guard);
        if state.insert_member(member, self.vnodes, &*self.hasher) {
            state.rebuild_circle();
            debug!(member, circle = state.circle_len(), "added member to ring");
        }
    }

    /// Remove a member. No-op if it is absent.
    pub fn remove(&self, member: &str) {
        let mut guard = self.state.write();
        if !guard.contains(member) {
            return;
        }
        let state = Arc::make_mut(&mut *guard);
        if state.remove_member(member, self.vnodes, &*self.hasher) {
            state.rebuild_circle();
            debug!(member, circle = state.circle_len(), "removed member from ring");
        }
    }

    /// Reconcile membership to exactly `members`.
    ///
    /// Runs as a series of independent `remove` and `add` calls: concurrent
    /// readers may observe intermediate membership. Use
    /// [`swap_members`](Self::swap_members) when that matters.
    pub fn force_set<I, S>(&self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let target: Vec<String> = members.into_iter().map(|m| m.as_ref().to_owned()).collect();
        let wanted: HashSet<&str> = target.iter().map(String::as_str).collect();

        for current in self.members() {
            if !wanted.contains(current.as_str()) {
                self.remove(&current);
            }
        }
        for member in &target {
            if !self.contains(member) {
                self.add(member);
            }
        }
    }

    /// Replace the whole membership in one step.
    ///
    /// The new state is built without holding the lock and installed under a
    /// single exclusive lock, so readers see the old or the new membership
    /// and nothing in between.
    pub fn swap_members<I, S>(&self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = RingState::default();
        for member in members {
            next.insert_member(member.as_ref(), self.vnodes, &*self.hasher);
        }
        next.rebuild_circle();
        debug!(
            members = next.len(),
            circle = next.circle_len(),
            "swapped ring membership"
        );
        *self.state.write() = Arc::new(next);
    }

    /// Member owning `key` under the current ring.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRing`](crate::Error::EmptyRing) if the ring has no
    /// members. The ring stays usable; add members and retry.
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Result<String> {
        let hash = self.hasher.hash(key.as_ref());
        let state = self.state.read();
        let owner = state.owner_of(hash)?;
        trace!(hash, owner, "ring lookup");
        Ok(owner.to_owned())
    }

    /// Copy of the current member set, in no particular order.
    pub fn members(&self) -> Vec<String> {
        self.state.read().members()
    }

    /// Whether `member` is in the ring.
    pub fn contains(&self, member: &str) -> bool {
        self.state.read().contains(member)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    /// Whether the ring has no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Virtual nodes generated per member. Fixed for the ring's lifetime.
    pub fn virtual_nodes_per_member(&self) -> usize {
        self.vnodes
    }

    /// Number of positions on the circle.
    pub fn circle_len(&self) -> usize {
        self.state.read().circle_len()
    }

    /// All virtual nodes in circle order (for debugging).
    pub fn virtual_nodes(&self) -> Vec<VirtualNode> {
        self.state.read().virtual_nodes()
    }

    /// Name of the bound hash function.
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// Immutable view of the current ring that outlives later mutations.
    pub fn snapshot(&self) -> RingSnapshot<H> {
        let state = Arc::clone(&*self.state.read());
        RingSnapshot::new(state, Arc::clone(&self.hasher))
    }

    /// How many of `keys` each member owns, computed against one snapshot.
    pub fn distribution<I, K>(&self, keys: I) -> HashMap<String, usize>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        self.snapshot().distribution(keys)
    }
}

impl<H: RingHasher> fmt::Debug for HashRing<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("HashRing")
            .field("hasher", &self.hasher.name())
            .field("vnodes", &self.vnodes)
            .field("members", &state.len())
            .field("circle", &state.circle_len())
            .finish()
    }
}
