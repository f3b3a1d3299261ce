//! CRC-32 hasher (IEEE polynomial).

use crate::hasher::traits::RingHasher;

/// CRC-32/IEEE checksum, the ring's default hash function.
#[derive(Clone, Copy, Debug, Default)]
pub struct Crc32Hasher;

impl RingHasher for Crc32Hasher {
    fn hash(&self, data: &[u8]) -> u32 {
        crc32fast::hash(data)
    }

    fn name(&self) -> &'static str {
        "crc32"
    }
}
