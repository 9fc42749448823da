//! Common utilities

use xxhash_rust::xxh3::xxh3_64;

/// Compute the xxh3 hash of bytes as 16 hex chars
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// `1 replacement`, `2 replacements`
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
