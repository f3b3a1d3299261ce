//! Core hasher trait definitions.

/// Maps a byte sequence to a position on the 32-bit ring.
///
/// Hashers are stateless and shared by every reader of the ring, so they
/// must be thread-safe. Determinism is only required within a process: the
/// ring is rebuilt in memory on every run.
pub trait RingHasher: Send + Sync + 'static {
    /// Hashes `data` to a ring position.
    fn hash(&self, data: &[u8]) -> u32;

    /// Returns the name of this hasher.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> RingHasher for F
where
    F: Fn(&[u8]) -> u32 + Send + Sync + 'static,
{
    fn hash(&self, data: &[u8]) -> u32 {
        self(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_hasher() {
        let hasher = |data: &[u8]| data.len() as u32;
        assert_eq!(hasher.hash(b"abcd"), 4);
        assert_eq!(RingHasher::name(&hasher), "custom");
    }
}
