//! Consistent hash ring implementation.
//!
//! The ring manages virtual-node positions and answers which member owns a
//! key.

pub mod builder;
pub mod ring;
pub mod snapshot;
mod state;

pub use builder::RingBuilder;
pub use ring::HashRing;
pub use snapshot::RingSnapshot;
