use super::Error;
use crate::types::Node;
use core::fmt::Write;

/// Configuration builder for customizing fingerprint generation.
///
/// By default only the identity of each link is hashed (kind and module, or
/// the type name of a foreign leaf), so every raise of the same templates in
/// the same chain shape groups together.
pub struct FingerprintConfig<'a> {
    pub(crate) error: &'a Error,
    pub(crate) include_tags: bool,
    pub(crate) include_message: bool,
    pub(crate) include_extra_keys: Option<&'a [&'a str]>,
}

impl<'a> FingerprintConfig<'a> {
    pub(crate) fn new(error: &'a Error) -> Self {
        Self { error, include_tags: false, include_message: false, include_extra_keys: None }
    }

    /// Whether to include every link's tags in the fingerprint (default: false).
    #[must_use]
    pub fn include_tags(mut self, include: bool) -> Self {
        self.include_tags = include;
        self
    }

    /// Whether to include every link's message in the fingerprint (default: false).
    #[must_use]
    pub fn include_message(mut self, include: bool) -> Self {
        self.include_message = include;
        self
    }

    /// Include the values of these extra keys in the fingerprint.
    #[must_use]
    pub fn include_extra_keys(mut self, keys: &'a [&'a str]) -> Self {
        self.include_extra_keys = Some(keys);
        self
    }

    /// Computes the fingerprint using the configured options.
    #[must_use]
    pub fn compute(&self) -> u64 {
        const FNV_OFFSET: u64 = 0xcbf29ce484222325;
        let mut hash = FNV_OFFSET;

        for node in self.error.chain() {
            match node {
                Node::Raised(error) => {
                    hash_bytes(&mut hash, b"kind:");
                    hash_bytes(&mut hash, error.kind.as_bytes());
                    hash_bytes(&mut hash, b"module:");
                    hash_bytes(&mut hash, error.module.as_bytes());

                    if self.include_message {
                        hash_bytes(&mut hash, b"msg:");
                        hash_bytes(&mut hash, error.message.as_bytes());
                    }

                    if self.include_tags {
                        for (key, value) in &error.tags {
                            hash_bytes(&mut hash, b"tag:");
                            hash_bytes(&mut hash, key.as_bytes());
                            hash_bytes(&mut hash, b"=");
                            hash_bytes(&mut hash, value.as_bytes());
                        }
                    }

                    if let Some(keys) = self.include_extra_keys {
                        for (key, value) in error.extra.iter().filter(|(key, _)| keys.contains(&key.as_str())) {
                            hash_bytes(&mut hash, b"extra:");
                            hash_bytes(&mut hash, key.as_bytes());
                            hash_bytes(&mut hash, b"=");
                            let mut hasher = DisplayHasher::new(&mut hash);
                            let _ = write!(hasher, "{}", value);
                        }
                    }
                },
                Node::Foreign(foreign) => {
                    hash_bytes(&mut hash, b"type:");
                    hash_bytes(&mut hash, foreign.type_name().as_bytes());

                    if self.include_message {
                        hash_bytes(&mut hash, b"msg:");
                        let mut hasher = DisplayHasher::new(&mut hash);
                        let _ = write!(hasher, "{}", foreign);
                    }
                },
            }
        }

        hash
    }

    /// Computes the fingerprint and returns it as a hex string.
    #[must_use]
    pub fn compute_hex(&self) -> String {
        let mut result = String::with_capacity(16);
        let _ = write!(result, "{:016x}", self.compute());
        result
    }
}

impl Error {
    /// Generates a grouping fingerprint for this error's chain.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint_config().compute()
    }

    /// Generates a hex string representation of the fingerprint.
    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        self.fingerprint_config().compute_hex()
    }

    /// Creates a fingerprint configuration for customizing fingerprint generation.
    #[must_use]
    pub fn fingerprint_config(&self) -> FingerprintConfig<'_> {
        FingerprintConfig::new(self)
    }
}

/// FNV-1a prime constant for 64-bit hash.
const FNV_PRIME: u64 = 0x100000001b3;

#[inline(always)]
fn hash_bytes(hash: &mut u64, bytes: &[u8]) {
    for &byte in bytes {
        *hash ^= byte as u64;
        *hash = hash.wrapping_mul(FNV_PRIME);
    }
}

struct DisplayHasher<'a> {
    hash: &'a mut u64,
}

impl<'a> DisplayHasher<'a> {
    #[inline(always)]
    fn new(hash: &'a mut u64) -> Self {
        Self { hash }
    }
}

impl Write for DisplayHasher<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        hash_bytes(self.hash, s.as_bytes());
        Ok(())
    }
}
