//! Collections that a [`Counted`](crate::Counted) sequence can be materialised into.
//!
//! Because a [`Counted`](crate::Counted) sequence knows its exact length, it can ask the container to allocate exactly
//! once before any element is pushed. See [`Counted::collect_into`](crate::Counted::collect_into).

use alloc::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    string::String,
    vec::Vec,
};
use core::hash::{BuildHasher, Hash};
use hashbrown::{HashMap, HashSet};

/// A utility trait for types that can be constructed from a series of items.
pub trait Container<T>: Default {
    /// Create a container with room for exactly `n` items.
    ///
    /// Containers that cannot pre-allocate may ignore the size; it is a hint, not a limit.
    fn with_capacity(n: usize) -> Self {
        let _ = n;
        Self::default()
    }
    /// Add a value to the end of this container.
    fn push(&mut self, item: T);
}

/// Counts the items pushed instead of storing them.
impl<T> Container<T> for usize {
    fn push(&mut self, _: T) {
        *self += 1;
    }
}

impl<T> Container<T> for Vec<T> {
    fn with_capacity(n: usize) -> Self {
        Self::with_capacity(n)
    }
    fn push(&mut self, item: T) {
        (*self).push(item);
    }
}

impl<T> Container<T> for VecDeque<T> {
    fn with_capacity(n: usize) -> Self {
        Self::with_capacity(n)
    }
    fn push(&mut self, item: T) {
        self.push_back(item);
    }
}

impl Container<char> for String {
    // Reserves a byte per char; wider chars grow the string as they arrive.
    fn with_capacity(n: usize) -> Self {
        Self::with_capacity(n)
    }
    fn push(&mut self, item: char) {
        (*self).push(item)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> Container<(K, V)> for HashMap<K, V, S> {
    fn with_capacity(n: usize) -> Self {
        Self::with_capacity_and_hasher(n, S::default())
    }
    fn push(&mut self, (key, value): (K, V)) {
        (*self).insert(key, value);
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> Container<T> for HashSet<T, S> {
    fn with_capacity(n: usize) -> Self {
        Self::with_capacity_and_hasher(n, S::default())
    }
    fn push(&mut self, item: T) {
        (*self).insert(item);
    }
}

#[cfg(feature = "std")]
impl<K: Eq + Hash, V, S: BuildHasher + Default> Container<(K, V)> for std::collections::HashMap<K, V, S> {
    fn with_capacity(n: usize) -> Self {
        Self::with_capacity_and_hasher(n, S::default())
    }
    fn push(&mut self, (key, value): (K, V)) {
        (*self).insert(key, value);
    }
}

#[cfg(feature = "std")]
impl<T: Eq + Hash, S: BuildHasher + Default> Container<T> for std::collections::HashSet<T, S> {
    fn with_capacity(n: usize) -> Self {
        Self::with_capacity_and_hasher(n, S::default())
    }
    fn push(&mut self, item: T) {
        (*self).insert(item);
    }
}

impl<K: Ord, V> Container<(K, V)> for BTreeMap<K, V> {
    fn push(&mut self, (key, value): (K, V)) {
        (*self).insert(key, value);
    }
}

impl<T: Ord> Container<T> for BTreeSet<T> {
    fn push(&mut self, item: T) {
        (*self).insert(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn collect_into_various() {
        let xs = from_collection(&['c', 'a', 't']).map(|c| *c);
        assert_eq!(xs.clone().collect_into::<String>(), "cat");
        assert_eq!(xs.clone().collect_into::<usize>(), 3);
        assert_eq!(
            xs.clone().collect_into::<BTreeSet<_>>().into_iter().collect::<String>(),
            "act"
        );
        assert_eq!(xs.clone().collect_into::<VecDeque<_>>().pop_back(), Some('t'));
        assert_eq!(xs.collect_into::<HashSet<char>>().len(), 3);
    }

    #[test]
    fn collect_pairs_into_maps() {
        let pairs = from_collection(&[("b", 2), ("a", 1), ("b", 3)]).map(|p| *p);

        let tree = pairs.clone().collect_into::<BTreeMap<_, _>>();
        assert_eq!(tree.into_iter().collect::<Vec<_>>(), [("a", 1), ("b", 3)]);

        let hashed = pairs.clone().collect_into::<HashMap<_, _>>();
        assert_eq!(hashed.len(), 2);
        assert_eq!(hashed["b"], 3);

        #[cfg(feature = "std")]
        {
            let std_hashed = pairs.collect_into::<std::collections::HashMap<_, _>>();
            assert_eq!(std_hashed.len(), 2);
            assert_eq!(std_hashed["a"], 1);
        }
    }

    #[test]
    fn vec_is_sized_exactly() {
        let v: Vec<i64> = range(0, 17).unwrap().collect_into();
        assert_eq!(v.len(), 17);
        assert_eq!(v.capacity(), 17);
    }
}
