//! Ring state: the circle, its owners and the member set.
//!
//! The three structures always change together. `RingState` is plain data;
//! locking lives in [`HashRing`](crate::ring::HashRing).

use crate::error::{Error, Result};
use crate::hasher::RingHasher;
use crate::vnode::{vnode_key, VirtualNode};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::warn;

/// Circle, virtual map and member set of one ring version.
///
/// # Invariants
///
/// - `circle` is sorted ascending and equals the key set of `virtual_map`
/// - `circle.len() <= members.len() * vnodes` (less only on hash collision)
#[derive(Debug, Clone, Default)]
pub(crate) struct RingState {
    circle: Vec<u32>,
    virtual_map: HashMap<u32, Arc<str>>,
    members: HashSet<Arc<str>>,
}

impl RingState {
    pub(crate) fn contains(&self, member: &str) -> bool {
        self.members.contains(member)
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn circle_len(&self) -> usize {
        self.circle.len()
    }

    pub(crate) fn members(&self) -> Vec<String> {
        self.members.iter().map(|m| m.to_string()).collect()
    }

    /// Inserts `member` and its virtual nodes. Returns false if it was
    /// already present. The circle is not rebuilt.
    pub(crate) fn insert_member<H: RingHasher>(
        &mut self,
        member: &str,
        vnodes: usize,
        hasher: &H,
    ) -> bool {
        if self.members.contains(member) {
            return false;
        }
        let owner: Arc<str> = Arc::from(member);
        self.members.insert(Arc::clone(&owner));

        for index in 0..vnodes {
            let position = hasher.hash(vnode_key(member, index).as_bytes());
            if let Some(previous) = self.virtual_map.insert(position, Arc::clone(&owner)) {
                warn!(
                    position,
                    previous = %previous,
                    member,
                    "virtual node collision, position reassigned"
                );
            }
        }
        true
    }

    /// Removes `member` and every virtual node it still owns. Returns false if
    /// it was absent. The circle is not rebuilt.
    pub(crate) fn remove_member<H: RingHasher>(
        &mut self,
        member: &str,
        vnodes: usize,
        hasher: &H,
    ) -> bool {
        if !self.members.remove(member) {
            return false;
        }
        for index in 0..vnodes {
            let position = hasher.hash(vnode_key(member, index).as_bytes());
            // A later member may have taken this position over.
            if self.virtual_map.get(&position).map(|o| &**o) == Some(member) {
                self.virtual_map.remove(&position);
            }
        }
        true
    }

    /// Re-derives the sorted circle from the virtual map.
    pub(crate) fn rebuild_circle(&mut self) {
        let mut circle: Vec<u32> = self.virtual_map.keys().copied().collect();
        circle.sort_unstable();
        self.circle = circle;
    }

    /// Index of the first circle position `>= hash`, wrapping to 0 past the
    /// last one. `None` on an empty circle.
    pub(crate) fn search(&self, hash: u32) -> Option<usize> {
        if self.circle.is_empty() {
            return None;
        }
        let index = self.circle.partition_point(|&position| position < hash);
        Some(if index == self.circle.len() { 0 } else { index })
    }

    /// Owner of the ring position `hash` falls on.
    pub(crate) fn owner_of(&self, hash: u32) -> Result<&str> {
        self.search(hash)
            .and_then(|index| self.virtual_map.get(&self.circle[index]))
            .map(|owner| &**owner)
            .ok_or(Error::EmptyRing)
    }

    /// Every virtual node in circle order.
    pub(crate) fn virtual_nodes(&self) -> Vec<VirtualNode> {
        self.circle
            .iter()
            .filter_map(|position| {
                self.virtual_map
                    .get(position)
                    .map(|owner| VirtualNode::new(*position, &**owner))
            })
            .collect()
    }
}
