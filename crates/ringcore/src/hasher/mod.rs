//! Hash functions for placing members and keys on the ring.
//!
//! The ring only needs a deterministic mapping from bytes to a 32-bit
//! position. CRC-32 is the default; xxHash32 and SipHash-1-3 are available
//! when a better-mixed function is wanted, and any `Fn(&[u8]) -> u32` closure
//! can be plugged in directly.

pub mod algorithm;
pub mod crc32;
pub mod sip;
pub mod traits;
pub mod xxhash;

pub use algorithm::HashAlgorithm;
pub use crc32::Crc32Hasher;
pub use sip::SipHasher;
pub use traits::RingHasher;
pub use xxhash::XxHash32Hasher;
