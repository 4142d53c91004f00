//! Hash map construction with a consistent, `DoS`-resistant hasher
//!
//! Both the style table and the font usage map key on attacker-controlled
//! strings from subtitle files, so they use ahash with random seeds rather
//! than the default `SipHash` state.

use ahash::RandomState;
use std::collections::HashMap;

/// Create a new `HashMap` keyed with the crate's preferred hasher
#[must_use]
pub fn create_hash_map<K, V>() -> HashMap<K, V, RandomState> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a new `HashMap` with pre-allocated capacity
///
/// Useful when the approximate entry count is known in advance, e.g. one
/// usage entry per declared style.
#[must_use]
pub fn create_hash_map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V, RandomState> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_hash_map_works() {
        let mut map = create_hash_map::<String, i32>();
        map.insert("Arial".to_owned(), 1);
        assert_eq!(map.get("Arial"), Some(&1));
    }

    #[test]
    fn capacity_is_reserved() {
        let map = create_hash_map_with_capacity::<String, i32>(32);
        assert!(map.capacity() >= 32);
    }
}
