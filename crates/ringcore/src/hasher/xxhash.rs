//! xxHash32 hasher.

use crate::hasher::traits::RingHasher;
use xxhash_rust::xxh32::xxh32;

/// xxHash32 with seed 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct XxHash32Hasher;

impl RingHasher for XxHash32Hasher {
    fn hash(&self, data: &[u8]) -> u32 {
        xxh32(data, 0)
    }

    fn name(&self) -> &'static str {
        "xxhash32"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xxhash32_empty_input() {
        assert_eq!(XxHash32Hasher.hash(b""), 0x02CC_5D05);
    }
}
