//! Consistent hash ring.
//!
//! This crate maps arbitrary keys to one of a dynamic set of named members
//! so that adding or removing a member only remaps a proportional share of
//! the keys:
//! - Hash function plumbing (CRC-32 by default, pluggable)
//! - Virtual node generation
//! - The thread-safe ring with lookup and membership changes
//! - Snapshots, builder and configuration

pub mod config;
pub mod error;
pub mod hasher;
pub mod ring;
pub mod vnode;

pub use config::{RingConfig, DEFAULT_VIRTUAL_NODES};
pub use error::{Error, Result};
pub use hasher::{HashAlgorithm, RingHasher};
pub use ring::{HashRing, RingBuilder, RingSnapshot};
pub use vnode::VirtualNode;
