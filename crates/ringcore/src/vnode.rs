//! Virtual node abstractions.
//!
//! # Virtual Nodes
//!
//! Each member is expanded into a fixed number of virtual nodes, one ring
//! position per `member|index` key. Spreading a member over many positions
//! smooths the share of the key space it owns and means a join or leave only
//! moves the keys adjacent to that member's positions.
//!
//! - **Memory**: O(m * v) circle entries for m members, v vnodes per member
//! - **Lookup**: O(log(m * v)) binary search
//! - **Rebalancing**: roughly 1/(m+1) of keys move when a member joins

use std::fmt;

/// Separator between member id and vnode index in the hashed key.
pub const VNODE_SEPARATOR: char = '|';

/// Builds the key hashed for a member's `index`-th virtual node.
///
/// ```
/// assert_eq!(ringcore::vnode::vnode_key("cache-1", 7), "cache-1|7");
/// ```
pub fn vnode_key(member: &str, index: usize) -> String {
    format!("{}{}{}", member, VNODE_SEPARATOR, index)
}

/// A virtual node on the hash ring.
///
/// Represents a single circle position owned by a member. Ordering is by
/// position first, which is the order of the circle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualNode {
    /// Position on the ring.
    pub position: u32,

    /// The member that owns this position.
    pub member: String,
}

impl VirtualNode {
    /// Create a new virtual node.
    #[inline]
    pub fn new(position: u32, member: impl Into<String>) -> Self {
        Self {
            position,
            member: member.into(),
        }
    }

    /// Get the ring position.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Get the owning member.
    #[inline]
    pub fn member(&self) -> &str {
        &self.member
    }

    /// Clockwise distance from this virtual node to `other`, wrapping past
    /// `u32::MAX`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> u32 {
        other.position.wrapping_sub(self.position)
    }
}

impl fmt::Display for VirtualNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VNode(position={:08x}, member={})", self.position, self.member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vnode_key_format() {
        assert_eq!(vnode_key("A", 0), "A|0");
        assert_eq!(vnode_key("node-2", 254), "node-2|254");
    }

    #[test]
    fn test_vnode_distance() {
        let vnode1 = VirtualNode::new(100, "a");
        let vnode2 = VirtualNode::new(200, "b");

        assert_eq!(vnode1.distance_to(&vnode2), 100);
        // Wraps through zero going clockwise.
        assert_eq!(vnode2.distance_to(&vnode1), u32::MAX - 99);
    }

    #[test]
    fn test_vnode_ordering() {
        let vnode1 = VirtualNode::new(100, "z");
        let vnode2 = VirtualNode::new(200, "a");

        assert!(vnode1 < vnode2);
    }

    #[test]
    fn test_vnode_display() {
        let vnode = VirtualNode::new(0xab, "cache-1");
        assert_eq!(vnode.to_string(), "VNode(position=000000ab, member=cache-1)");
    }
}
