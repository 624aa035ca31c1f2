//! Terminal operations: materialising a sequence and querying it.
//!
//! Materialisers consume the sequence and allocate exactly once, sized to its count. Queries borrow it, run a fresh
//! iteration, and answer in O(1) whenever the count alone decides the result.

use super::*;
use alloc::{boxed::Box, vec::Vec};
use core::hash::{BuildHasher, Hash};
use hashbrown::{hash_map::Entry, HashMap};

impl<I: Iterator> Counted<I> {
    /// Collect this sequence into a [`Vec`] allocated with exactly [`Counted::len`] capacity.
    ///
    /// ```
    /// # use counted::prelude::*;
    /// let xs = range(0, 1000).unwrap().map(|x| x * x).to_list();
    /// assert_eq!(xs.len(), 1000);
    /// assert_eq!(xs.capacity(), 1000);
    /// ```
    pub fn to_list(self) -> Vec<I::Item> {
        self.collect_into()
    }

    /// Collect this sequence into a boxed slice of exactly [`Counted::len`] elements.
    pub fn to_array(self) -> Box<[I::Item]> {
        self.to_list().into_boxed_slice()
    }

    /// Collect this sequence into any [`Container`], pre-sized to [`Counted::len`].
    pub fn collect_into<C: Container<I::Item>>(self) -> C {
        trace_event!(capacity = self.count, "materialising sequence");
        let mut container = C::with_capacity(self.count);
        for item in self {
            container.push(item);
        }
        container
    }

    /// Collect this sequence into a map from `key(element)` to the element.
    ///
    /// Returns [`Error::DuplicateKey`] if two elements have equal keys; existing entries are never overwritten.
    ///
    /// Keys are compared with their own [`Eq`] and [`Hash`]; there is no overload taking a custom equality. To
    /// compare keys differently, have `key` return a normalised key (or a newtype with the equality you need).
    ///
    /// ```
    /// # use counted::prelude::*;
    /// let words = from_collection(&["apple", "banana", "cherry"]);
    /// let by_initial = words.clone().to_dictionary(|w| w.as_bytes()[0]).unwrap();
    /// assert_eq!(by_initial[&b'b'], &"banana");
    ///
    /// let by_len = words.to_dictionary(|w| w.len());
    /// assert_eq!(by_len.unwrap_err(), Error::DuplicateKey { index: 2 });
    /// ```
    pub fn to_dictionary<K, F>(self, key: F) -> Result<HashMap<K, I::Item>, Error>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        self.to_dictionary_with(key, |item| item)
    }

    /// Collect this sequence into a map from `key(element)` to `value(element)`.
    ///
    /// Returns [`Error::DuplicateKey`] if two elements have equal keys.
    pub fn to_dictionary_with<K, V, F, G>(self, key: F, value: G) -> Result<HashMap<K, V>, Error>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
        G: FnMut(I::Item) -> V,
    {
        let map = HashMap::with_capacity(self.count);
        self.fill_dictionary(map, key, value)
    }

    /// Collect this sequence into a map from `key(element)` to `value(element)`, hashing keys with `hasher`.
    ///
    /// The hasher only changes how keys are hashed, not when they are equal: equality is always that of `K`, as in
    /// [`Counted::to_dictionary`].
    ///
    /// Returns [`Error::DuplicateKey`] if two elements have equal keys.
    pub fn to_dictionary_with_hasher<K, V, S, F, G>(
        self,
        key: F,
        value: G,
        hasher: S,
    ) -> Result<HashMap<K, V, S>, Error>
    where
        K: Eq + Hash,
        S: BuildHasher,
        F: FnMut(&I::Item) -> K,
        G: FnMut(I::Item) -> V,
    {
        let map = HashMap::with_capacity_and_hasher(self.count, hasher);
        self.fill_dictionary(map, key, value)
    }

    fn fill_dictionary<K, V, S, F, G>(
        self,
        mut map: HashMap<K, V, S>,
        mut key: F,
        mut value: G,
    ) -> Result<HashMap<K, V, S>, Error>
    where
        K: Eq + Hash,
        S: BuildHasher,
        F: FnMut(&I::Item) -> K,
        G: FnMut(I::Item) -> V,
    {
        trace_event!(capacity = self.count, "materialising dictionary");
        for (index, item) in self.into_iter().enumerate() {
            match map.entry(key(&item)) {
                Entry::Occupied(_) => {
                    debug_event!(index, "duplicate key in dictionary");
                    return Err(Error::DuplicateKey { index });
                }
                Entry::Vacant(slot) => {
                    slot.insert(value(item));
                }
            }
        }
        Ok(map)
    }

    /// The number of elements in this sequence. O(1).
    pub fn count(&self) -> usize {
        self.count
    }

    /// The number of elements in this sequence, as a `u64`. O(1).
    pub fn long_count(&self) -> u64 {
        self.count as u64
    }

    /// Returns `true` if this sequence has any elements. O(1).
    pub fn any(&self) -> bool {
        self.count > 0
    }

    /// Returns `true` if any element satisfies `pred`, stopping at the first that does.
    pub fn any_by<F>(&self, pred: F) -> bool
    where
        I: Clone,
        F: FnMut(I::Item) -> bool,
    {
        if self.count == 0 {
            return false;
        }
        self.iter().any(pred)
    }

    /// Returns `true` if every element satisfies `pred`, stopping at the first that doesn't.
    ///
    /// An empty sequence satisfies any predicate.
    pub fn all<F>(&self, pred: F) -> bool
    where
        I: Clone,
        F: FnMut(I::Item) -> bool,
    {
        if self.count == 0 {
            return true;
        }
        self.iter().all(pred)
    }

    /// Returns `true` if any element is equal to `x`.
    pub fn contains<Q>(&self, x: &Q) -> bool
    where
        I: Clone,
        I::Item: PartialEq<Q>,
        Q: ?Sized,
    {
        self.contains_by(x, |item, x| item == x)
    }

    /// Returns `true` if any element is equal to `x` according to `eq`.
    pub fn contains_by<Q, F>(&self, x: &Q, mut eq: F) -> bool
    where
        I: Clone,
        Q: ?Sized,
        F: FnMut(&I::Item, &Q) -> bool,
    {
        if self.count == 0 {
            return false;
        }
        self.iter().any(|item| eq(&item, x))
    }

    /// Returns `true` if both sequences yield equal elements in the same order.
    ///
    /// Sequences of different lengths are never equal, and are rejected without iterating either.
    pub fn sequence_equal<J>(&self, other: &Counted<J>) -> bool
    where
        I: Clone,
        J: Iterator + Clone,
        I::Item: PartialEq<J::Item>,
    {
        self.sequence_equal_by(other, |a, b| a == b)
    }

    /// Returns `true` if both sequences yield pairwise equal elements according to `eq`.
    ///
    /// Sequences of different lengths are never equal, and are rejected without iterating either.
    pub fn sequence_equal_by<J, F>(&self, other: &Counted<J>, mut eq: F) -> bool
    where
        I: Clone,
        J: Iterator + Clone,
        F: FnMut(&I::Item, &J::Item) -> bool,
    {
        if self.count != other.count {
            return false;
        }
        let mut a = self.iter();
        let mut b = other.iter();
        loop {
            match (a.next(), b.next()) {
                (Some(x), Some(y)) => {
                    if !eq(&x, &y) {
                        return false;
                    }
                }
                (None, None) => return true,
                // One side came up short of the shared count.
                _ => return false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use alloc::{vec, vec::Vec};
    use core::cell::Cell;
    use std::collections::hash_map::RandomState;

    #[test]
    fn to_list_and_array_presized() {
        let xs = range(0, 10).unwrap().map(|x| x * 2);
        let list = xs.clone().to_list();
        assert_eq!(list.capacity(), 10);
        assert_eq!(list, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
        let array = xs.to_array();
        assert_eq!(array.len(), 10);
        assert_eq!(&*array, &list[..]);
    }

    #[test]
    fn empty_materialisation() {
        assert_eq!(empty::<u8>().to_list(), Vec::<u8>::new());
        assert_eq!(empty::<u8>().to_array().len(), 0);
        assert!(empty::<u8>().to_dictionary(|x| *x).unwrap().is_empty());
    }

    #[test]
    fn dictionary_with_values() {
        let pairs = [("one", 1), ("two", 2)];
        let map = from_collection(&pairs)
            .to_dictionary_with(|p| p.0, |p| p.1 * 10)
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["one"], 10);
        assert_eq!(map["two"], 20);
    }

    #[test]
    fn dictionary_rejects_duplicates_without_overwriting() {
        let values = Cell::new(0);
        let result = from_collection(&[1, 2, 1, 3]).to_dictionary_with(
            |x| **x,
            |x| {
                values.set(values.get() + 1);
                *x
            },
        );
        assert_eq!(result.unwrap_err(), Error::DuplicateKey { index: 2 });
        // The duplicate's value is never computed
        assert_eq!(values.get(), 2);
    }

    #[test]
    fn dictionary_with_custom_hasher() {
        let map = from_collection(&["a", "bb"])
            .to_dictionary_with_hasher(|s| s.len(), |s| *s, RandomState::new())
            .unwrap();
        assert_eq!(map[&2], "bb");
    }

    #[test]
    fn dictionary_equality_through_normalised_keys() {
        let words = from_collection(&["Rust", "rust", "Go"]);
        let result = words.clone().to_dictionary(|w| w.to_ascii_lowercase());
        assert_eq!(result.unwrap_err(), Error::DuplicateKey { index: 1 });
        assert_eq!(words.to_dictionary(|w| **w).unwrap().len(), 3);
    }

    #[test]
    fn queries() {
        let xs = from_collection(&[1, 2, 3]);
        assert_eq!(xs.count(), 3);
        assert_eq!(xs.long_count(), 3u64);
        assert!(xs.any());
        assert!(xs.any_by(|x| *x == 2));
        assert!(!xs.any_by(|x| *x > 3));
        assert!(xs.all(|x| *x > 0));
        assert!(!xs.all(|x| *x > 1));
        assert!(xs.contains(&&3));
        assert!(!xs.contains(&&4));
        assert!(xs.contains_by(&4, |x, y| **x + 1 == *y));
    }

    #[test]
    fn queries_on_empty_never_call_predicates() {
        let xs = empty::<i32>();
        assert!(!xs.any());
        assert!(!xs.any_by(|_| unreachable!()));
        assert!(xs.all(|_| unreachable!()));
        assert!(!xs.contains_by(&0, |_, _| unreachable!()));
    }

    #[test]
    fn sequence_equal_short_circuits_on_count() {
        let polled = Cell::new(false);
        let a = from_collection(&[1, 2, 3]).inspect(|_| polled.set(true));
        let b = from_collection(&[1, 2]).inspect(|_| polled.set(true));
        assert!(!a.sequence_equal(&b));
        assert!(!polled.get());
    }

    #[test]
    fn sequence_equal_pairwise() {
        let a = from_collection(&[1, 2, 3]);
        assert!(a.sequence_equal(&from_collection(&[1, 2, 3])));
        assert!(!a.sequence_equal(&from_collection(&[1, 2, 4])));
        assert!(a.sequence_equal_by(&from_collection(&["1", "2", "3"]), |x, s| {
            x.to_string() == **s
        }));
    }
}
