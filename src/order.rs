//! Stable ordering of [`Counted`] sequences by key.
//!
//! [`Counted::order_by`] and its variants produce an [`OrderedCounted`] sequence: a [`Counted`] wrapped around a
//! deferred, stable sort. Only ordered sequences can be refined with a secondary key via [`Counted::then_by`] and
//! friends. Applying any other combinator (`map`, `skip`, `take`, ...) yields a plain [`Counted`] again and the
//! ability to refine the ordering is lost, so all `then_by` chaining must come first.
//!
//! ```
//! # use counted::prelude::*;
//! let people = [("ada", 36), ("grace", 85), ("alan", 41), ("ada", 12)];
//! let sorted = from_collection(&people)
//!     .order_by(|p| p.0)
//!     .then_by_desc(|p| p.1)
//!     .map(|p| *p)
//!     .to_list();
//! assert_eq!(sorted, vec![("ada", 36), ("ada", 12), ("alan", 41), ("grace", 85)]);
//! ```

use super::*;
use alloc::vec::{self, Vec};
use core::{cmp::Ordering, iter::FusedIterator, marker::PhantomData};

/// A trait implemented by orderings over values of type `T`.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparer, as is [`Natural`].
pub trait Comparer<T: ?Sized> {
    /// Compare two values.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparer<T> for F {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural ordering of a type, as given by its [`Ord`] implementation.
///
/// This is the comparer used by the `order_by` and `then_by` family when no comparer is supplied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparer<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders values by comparing a key extracted from each of them.
///
/// See [`Counted::order_by_with`].
pub struct ByKey<F, K, C> {
    pub(crate) key: F,
    pub(crate) cmp: C,
    pub(crate) descending: bool,
    pub(crate) phantom: PhantomData<fn() -> K>,
}

impl<F, K, C> ByKey<F, K, C> {
    pub(crate) fn new(key: F, cmp: C, descending: bool) -> Self {
        Self {
            key,
            cmp,
            descending,
            phantom: PhantomData,
        }
    }
}

impl<F: Copy, K, C: Copy> Copy for ByKey<F, K, C> {}
impl<F: Clone, K, C: Clone> Clone for ByKey<F, K, C> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone(), self.cmp.clone(), self.descending)
    }
}

impl<T, F, K, C> Comparer<T> for ByKey<F, K, C>
where
    F: Fn(&T) -> K,
    C: Comparer<K>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let ord = self.cmp.compare(&(self.key)(a), &(self.key)(b));
        if self.descending {
            ord.reverse()
        } else {
            ord
        }
    }
}

/// Orders values by one comparer, breaking ties with a second.
///
/// See [`Counted::then_by`].
#[derive(Copy, Clone)]
pub struct ThenBy<A, B> {
    pub(crate) first: A,
    pub(crate) then: B,
}

impl<T, A, B> Comparer<T> for ThenBy<A, B>
where
    A: Comparer<T>,
    B: Comparer<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.then.compare(a, b))
    }
}

/// An iterator that yields the elements of another iterator in a stable sorted order.
///
/// Nothing is sorted until the first element is requested, at which point the whole source is buffered and sorted.
/// Elements that compare equal keep the order in which the source yielded them.
///
/// See [`Counted::order_by`].
pub struct Sorted<I: Iterator, C> {
    pub(crate) source: I,
    pub(crate) comparer: C,
    pub(crate) buffer: Option<vec::IntoIter<I::Item>>,
}

impl<I: Iterator, C> Sorted<I, C> {
    pub(crate) fn new(source: I, comparer: C) -> Self {
        Self {
            source,
            comparer,
            buffer: None,
        }
    }

    /// Refine this ordering: within each run of elements that the current ordering considers equal, order them by
    /// `key` using `cmp`, descending if `descending` is set.
    ///
    /// Any iteration already in progress is discarded; the refined iterator starts from the beginning.
    pub fn refine_by<K, F, D>(self, key: F, cmp: D, descending: bool) -> Sorted<I, ThenBy<C, ByKey<F, K, D>>>
    where
        F: Fn(&I::Item) -> K,
        D: Comparer<K>,
    {
        Sorted::new(
            self.source,
            ThenBy {
                first: self.comparer,
                then: ByKey::new(key, cmp, descending),
            },
        )
    }

    fn sorted(&mut self) -> &mut vec::IntoIter<I::Item>
    where
        C: Comparer<I::Item>,
    {
        let Self {
            source,
            comparer,
            buffer,
        } = self;
        buffer.get_or_insert_with(|| {
            let mut items = Vec::with_capacity(source.size_hint().0);
            items.extend(source);
            trace_event!(capacity = items.len(), "sorting buffered sequence");
            items.sort_by(|a, b| comparer.compare(a, b));
            items.into_iter()
        })
    }
}

impl<I, C> Clone for Sorted<I, C>
where
    I: Iterator + Clone,
    I::Item: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            comparer: self.comparer.clone(),
            buffer: self.buffer.clone(),
        }
    }
}

impl<I, C> Iterator for Sorted<I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.sorted().next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.buffer {
            Some(buffer) => buffer.size_hint(),
            None => self.source.size_hint(),
        }
    }
}

impl<I, C> FusedIterator for Sorted<I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
}

/// A [`Counted`] sequence in a known order that may be refined further with [`Counted::then_by`] and friends.
pub type OrderedCounted<I, C> = Counted<Sorted<I, C>>;

impl<I: Iterator> Counted<I> {
    /// Sort this sequence by the natural ordering of a key. The sort is stable and deferred until iteration.
    ///
    /// ```
    /// # use counted::prelude::*;
    /// let words = from_collection(&["pear", "fig", "apple"]).order_by(|w| w.len());
    /// assert_eq!(words.len(), 3);
    /// assert_eq!(words.to_list(), vec![&"fig", &"pear", &"apple"]);
    /// ```
    pub fn order_by<K, F>(self, key: F) -> OrderedCounted<I, ByKey<F, K, Natural>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        self.order_by_with(key, Natural)
    }

    /// Sort this sequence by a key, comparing keys with `cmp`.
    pub fn order_by_with<K, F, C>(self, key: F, cmp: C) -> OrderedCounted<I, ByKey<F, K, C>>
    where
        F: Fn(&I::Item) -> K,
        C: Comparer<K>,
    {
        Counted::new(Sorted::new(self.iter, ByKey::new(key, cmp, false)), self.count)
    }

    /// Sort this sequence by the natural ordering of a key, largest first.
    pub fn order_by_desc<K, F>(self, key: F) -> OrderedCounted<I, ByKey<F, K, Natural>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        self.order_by_desc_with(key, Natural)
    }

    /// Sort this sequence by a key, comparing keys with `cmp`, largest first.
    pub fn order_by_desc_with<K, F, C>(self, key: F, cmp: C) -> OrderedCounted<I, ByKey<F, K, C>>
    where
        F: Fn(&I::Item) -> K,
        C: Comparer<K>,
    {
        Counted::new(Sorted::new(self.iter, ByKey::new(key, cmp, true)), self.count)
    }
}

impl<I: Iterator, C: Comparer<I::Item>> OrderedCounted<I, C> {
    /// Break ties in the current ordering by the natural ordering of a secondary key.
    pub fn then_by<K, F>(self, key: F) -> OrderedCounted<I, ThenBy<C, ByKey<F, K, Natural>>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        self.refine_by(key, Natural, false)
    }

    /// Break ties in the current ordering by a secondary key, comparing keys with `cmp`.
    pub fn then_by_with<K, F, D>(self, key: F, cmp: D) -> OrderedCounted<I, ThenBy<C, ByKey<F, K, D>>>
    where
        F: Fn(&I::Item) -> K,
        D: Comparer<K>,
    {
        self.refine_by(key, cmp, false)
    }

    /// Break ties in the current ordering by the natural ordering of a secondary key, largest first.
    pub fn then_by_desc<K, F>(self, key: F) -> OrderedCounted<I, ThenBy<C, ByKey<F, K, Natural>>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        self.refine_by(key, Natural, true)
    }

    /// Break ties in the current ordering by a secondary key, comparing keys with `cmp`, largest first.
    pub fn then_by_desc_with<K, F, D>(self, key: F, cmp: D) -> OrderedCounted<I, ThenBy<C, ByKey<F, K, D>>>
    where
        F: Fn(&I::Item) -> K,
        D: Comparer<K>,
    {
        self.refine_by(key, cmp, true)
    }

    /// Refine the current ordering by a secondary key. See [`Sorted::refine_by`].
    pub fn refine_by<K, F, D>(
        self,
        key: F,
        cmp: D,
        descending: bool,
    ) -> OrderedCounted<I, ThenBy<C, ByKey<F, K, D>>>
    where
        F: Fn(&I::Item) -> K,
        D: Comparer<K>,
    {
        Counted::new(self.iter.refine_by(key, cmp, descending), self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use alloc::{vec, vec::Vec};

    #[test]
    fn sort_is_deferred() {
        let mut pulled = 0;
        {
            let xs = from_collection(&[3, 1, 2])
                .inspect(|_| pulled += 1)
                .order_by(|x| **x);
            assert_eq!(xs.len(), 3);
        }
        assert_eq!(pulled, 0);
    }

    #[test]
    fn stable_within_equal_keys() {
        let xs = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = from_collection(&xs).order_by(|x| x.0).map(|x| x.1).to_list();
        assert_eq!(sorted, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn descending_keeps_ties_in_input_order() {
        let xs = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = from_collection(&xs)
            .order_by_desc(|x| x.0)
            .map(|x| x.1)
            .to_list();
        assert_eq!(sorted, vec!['a', 'c', 'b', 'd']);
    }

    #[test]
    fn custom_comparer() {
        let xs = ["b", "A", "c", "B"];
        let sorted = from_collection(&xs)
            .order_by_with(|s| **s, |a: &&str, b: &&str| {
                a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
            })
            .map(|s| *s)
            .to_list();
        assert_eq!(sorted, vec!["A", "b", "B", "c"]);
    }

    #[test]
    fn then_by_chains() {
        let xs = [(2, 1, 'a'), (1, 2, 'b'), (2, 0, 'c'), (1, 2, 'd'), (1, 1, 'e')];
        let sorted = from_collection(&xs)
            .order_by(|x| x.0)
            .then_by_desc(|x| x.1)
            .then_by_with(|x| x.2, Natural)
            .map(|x| x.2)
            .to_list();
        assert_eq!(sorted, vec!['b', 'd', 'e', 'a', 'c']);
    }

    #[test]
    fn reiteration_sorts_again() {
        let xs = from_collection(&[3, 1, 2]).order_by(|x| **x);
        let first: Vec<_> = xs.iter().collect();
        let second: Vec<_> = xs.iter().collect();
        assert_eq!(first, vec![&1, &2, &3]);
        assert_eq!(first, second);
    }

    #[test]
    fn natural_on_unsized() {
        assert_eq!(Natural.compare("a", "b"), Ordering::Less);
        assert_eq!(Natural.compare(&[2, 1][..], &[1, 9][..]), Ordering::Greater);
    }

    // Refines whatever ordering it's handed, knowing only that it's a comparer
    fn by_second_then_third<I, C>(xs: OrderedCounted<I, C>, descending: bool) -> Vec<char>
    where
        I: Iterator<Item = (u8, u8, char)>,
        C: Comparer<(u8, u8, char)>,
    {
        xs.refine_by(|x| x.1, Natural, descending)
            .then_by_desc_with(|x| x.2, |a: &char, b: &char| a.cmp(b))
            .map(|x| x.2)
            .to_list()
    }

    #[test]
    fn refine_generic_ordering() {
        let xs: [(u8, u8, char); 5] = [(1, 0, 'a'), (0, 1, 'b'), (0, 0, 'c'), (0, 1, 'd'), (1, 0, 'e')];
        let ordered = || from_collection(&xs).map(|x| *x).order_by(|x| x.0);
        assert_eq!(by_second_then_third(ordered(), false), vec!['c', 'd', 'b', 'e', 'a']);
        assert_eq!(by_second_then_third(ordered(), true), vec!['d', 'b', 'c', 'e', 'a']);
    }
}
