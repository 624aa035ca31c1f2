#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(doc, feature = "std", test)), no_std)]
#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

extern crate alloc;

#[macro_use]
mod debug;

pub mod combinator;
pub mod container;
#[cfg(feature = "either")]
mod either;
pub mod error;
pub mod iter;
pub mod order;
pub mod primitive;
mod terminal;

pub use crate::{
    container::Container,
    error::Error,
    iter::Iter,
    order::{Comparer, Natural, OrderedCounted, Sorted},
};

/// Commonly used functions, traits and types.
pub mod prelude {
    pub use super::{
        order::{Comparer as _, Natural},
        primitive::{empty, from_collection, range, repeat, single},
        Counted, Error, IntoCounted as _, OrderedCounted,
    };
}

use crate::combinator::*;
use core::{fmt, iter as core_iter};

/// A lazy sequence that knows exactly how many elements it will yield.
///
/// A `Counted` pairs an iterator with its exact element count. The count is carried through every combinator in
/// closed form, so [`Counted::len`] is always O(1) and the materialising terminals ([`Counted::to_list`],
/// [`Counted::to_array`], [`Counted::to_dictionary`]) allocate exactly once.
///
/// The stored iterator is never advanced: iterating a `Counted` (via [`Counted::iter`]) clones it first, so a
/// `Counted` can be iterated as many times as you like and each iteration re-runs the whole pipeline. This means that
/// most operations that iterate require the underlying iterator to be [`Clone`], which all of the standard adapters are
/// whenever their contents are.
///
/// # Examples
///
/// ```
/// # use counted::prelude::*;
/// let squares = range(1, 5).unwrap().map(|x| x * x);
///
/// // Known without iterating
/// assert_eq!(squares.len(), 5);
///
/// assert_eq!(squares.clone().skip(2).to_list(), vec![9, 16, 25]);
/// assert_eq!(squares.to_array().len(), 5);
/// ```
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless iterated or materialised"]
pub struct Counted<I> {
    pub(crate) iter: I,
    pub(crate) count: usize,
}

/// Adds two counts, panicking if the result does not fit in a `usize`.
#[track_caller]
pub(crate) fn add_counts(a: usize, b: usize) -> usize {
    match a.checked_add(b) {
        Some(count) => count,
        None => panic!("count overflow: {} + {} does not fit in a usize", a, b),
    }
}

impl<I: Iterator> Counted<I> {
    /// Pair an iterator with the number of elements it yields.
    ///
    /// The count is trusted: if `iter` does not yield exactly `count` elements, later operations may yield fewer
    /// elements than reported. Iteration never yields *more* than `count` elements.
    pub fn new(iter: I, count: usize) -> Self {
        Self { iter, count }
    }

    /// Wrap an iterator that already knows its exact length.
    ///
    /// ```
    /// # use counted::Counted;
    /// let xs = Counted::from_exact([1, 2, 3].into_iter());
    /// assert_eq!(xs.len(), 3);
    /// ```
    pub fn from_exact(iter: I) -> Self
    where
        I: ExactSizeIterator,
    {
        let count = iter.len();
        Self { iter, count }
    }

    /// Pair an iterator with the count of another sequence.
    pub fn with_count_of<J>(iter: I, other: &Counted<J>) -> Self {
        Self {
            iter,
            count: other.count,
        }
    }

    /// The exact number of elements this sequence yields.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if this sequence yields no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Start a new iteration over this sequence, leaving the sequence itself untouched.
    pub fn iter(&self) -> Iter<I>
    where
        I: Clone,
    {
        Iter::new(self.iter.clone(), self.count)
    }

    /// Take the underlying iterator out of this sequence, discarding the count.
    pub fn into_inner(self) -> I {
        self.iter
    }

    /// Map each element of this sequence with the given function. The count is unchanged.
    ///
    /// ```
    /// # use counted::prelude::*;
    /// let xs = range(1, 5).unwrap().map(|x| x * x);
    /// assert_eq!(xs.count(), 5);
    /// assert_eq!(xs.to_list(), vec![1, 4, 9, 16, 25]);
    /// ```
    pub fn map<U, F>(self, f: F) -> Counted<core_iter::Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Counted::new(self.iter.map(f), self.count)
    }

    /// Convert each element into another type via [`Into`]. The count is unchanged.
    pub fn cast<U>(self) -> Counted<Cast<I, U>>
    where
        I::Item: Into<U>,
    {
        Counted::new(Cast::new(self.iter), self.count)
    }

    /// Convert each element into another type via [`TryInto`], yielding the result of each conversion.
    ///
    /// A failed conversion does not end the sequence: the count is unchanged and the error is yielded in place of the
    /// element.
    ///
    /// ```
    /// # use counted::prelude::*;
    /// let xs = from_collection(&[1i32, -1, 300]).map(|x| *x).try_cast::<u8>();
    /// let results = xs.to_list();
    /// assert_eq!(results.len(), 3);
    /// assert_eq!(results[0], Ok(1));
    /// assert!(results[1].is_err());
    /// assert!(results[2].is_err());
    /// ```
    pub fn try_cast<U>(self) -> Counted<TryCast<I, U>>
    where
        I::Item: TryInto<U>,
    {
        Counted::new(TryCast::new(self.iter), self.count)
    }

    /// Skip the first `n` elements.
    ///
    /// When `n` is at least the length of this sequence the result is empty, and iterating it never touches the
    /// underlying iterator.
    pub fn skip(self, n: usize) -> Counted<core_iter::Skip<I>> {
        let count = self.count.saturating_sub(n);
        Counted::new(self.iter.skip(n), count)
    }

    /// Take at most the first `n` elements.
    pub fn take(self, n: usize) -> Counted<core_iter::Take<I>> {
        let count = self.count.min(n);
        Counted::new(self.iter.take(n), count)
    }

    /// Yield the elements of this sequence followed by the elements of `other`.
    ///
    /// # Panics
    ///
    /// Panics if the combined count overflows a `usize`. See [`Counted::try_concat`] for a checked version.
    #[track_caller]
    pub fn concat<J>(self, other: Counted<J>) -> Counted<core_iter::Chain<I, J>>
    where
        J: Iterator<Item = I::Item>,
    {
        let count = add_counts(self.count, other.count);
        Counted::new(self.iter.chain(other.iter), count)
    }

    /// Like [`Counted::concat`], but returns [`Error::CountOverflow`] instead of panicking.
    pub fn try_concat<J>(self, other: Counted<J>) -> Result<Counted<core_iter::Chain<I, J>>, Error>
    where
        J: Iterator<Item = I::Item>,
    {
        let count = self
            .count
            .checked_add(other.count)
            .ok_or(Error::CountOverflow)?;
        Ok(Counted::new(self.iter.chain(other.iter), count))
    }

    /// Pair the elements of this sequence with those of `other`, combining each pair with `f`.
    ///
    /// The result is as long as the shorter of the two sequences.
    ///
    /// ```
    /// # use counted::prelude::*;
    /// let a = from_collection(&[1, 2, 3]);
    /// let b = from_collection(&[10, 20]);
    /// let sums = a.zip(b, |a, b| a + b);
    /// assert_eq!(sums.len(), 2);
    /// assert_eq!(sums.to_list(), vec![11, 22]);
    /// ```
    pub fn zip<J, U, F>(self, other: Counted<J>, f: F) -> Counted<ZipWith<I, J, F>>
    where
        J: Iterator,
        F: FnMut(I::Item, J::Item) -> U,
    {
        let count = self.count.min(other.count);
        Counted::new(ZipWith::new(self.iter, other.iter, f), count)
    }

    /// Yield `item` before the elements of this sequence.
    #[track_caller]
    pub fn prepend(self, item: I::Item) -> Counted<core_iter::Chain<core_iter::Once<I::Item>, I>> {
        let count = add_counts(self.count, 1);
        Counted::new(core_iter::once(item).chain(self.iter), count)
    }

    /// Yield `item` after the elements of this sequence.
    #[track_caller]
    pub fn append(self, item: I::Item) -> Counted<core_iter::Chain<I, core_iter::Once<I::Item>>> {
        let count = add_counts(self.count, 1);
        Counted::new(self.iter.chain(core_iter::once(item)), count)
    }

    /// Yield all of `items` before the elements of this sequence.
    ///
    /// ```
    /// # use counted::prelude::*;
    /// let xs = range(3, 2).unwrap().prepend_all([1, 2]);
    /// assert_eq!(xs.len(), 4);
    /// assert_eq!(xs.to_list(), vec![1, 2, 3, 4]);
    /// ```
    #[track_caller]
    pub fn prepend_all<X>(self, items: X) -> Counted<core_iter::Chain<X::IntoIter, I>>
    where
        X: IntoIterator<Item = I::Item>,
        X::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let count = add_counts(items.len(), self.count);
        Counted::new(items.chain(self.iter), count)
    }

    /// Yield all of `items` after the elements of this sequence.
    #[track_caller]
    pub fn append_all<X>(self, items: X) -> Counted<core_iter::Chain<I, X::IntoIter>>
    where
        X: IntoIterator<Item = I::Item>,
        X::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let count = add_counts(self.count, items.len());
        Counted::new(self.iter.chain(items), count)
    }

    /// Yield the elements of this sequence in reverse order.
    ///
    /// Unlike most combinators this is eager: the sequence is iterated once, right away, into a buffer of exactly
    /// [`Counted::len`] elements, which later iterations read back to front. The underlying iterator need not be
    /// double-ended.
    ///
    /// ```
    /// # use counted::prelude::*;
    /// let xs = range(1, 3).unwrap().reverse();
    /// assert_eq!(xs.clone().to_list(), vec![3, 2, 1]);
    /// assert_eq!(xs.to_list(), vec![3, 2, 1]);
    /// ```
    pub fn reverse(self) -> Counted<Reversed<I::Item>>
    where
        I::Item: Clone,
    {
        let items = self.to_list();
        trace_event!(capacity = items.len(), "reverse snapshot");
        let count = items.len();
        Counted::new(Reversed::new(items.into()), count)
    }

    /// Call `f` with each element as it passes through, without changing the sequence.
    pub fn inspect<F>(self, f: F) -> Counted<core_iter::Inspect<I, F>>
    where
        F: FnMut(&I::Item),
    {
        Counted::new(self.iter.inspect(f), self.count)
    }
}

impl<I: Iterator> IntoIterator for Counted<I> {
    type Item = I::Item;
    type IntoIter = Iter<I>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.iter, self.count)
    }
}

impl<'a, I: Iterator + Clone> IntoIterator for &'a Counted<I> {
    type Item = I::Item;
    type IntoIter = Iter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I> fmt::Debug for Counted<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counted")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

/// An extension trait that turns any exactly-sized iterator into a [`Counted`] sequence.
///
/// ```
/// # use counted::prelude::*;
/// let names = vec!["ada", "grace", "barbara"];
/// let lengths = names.iter().counted().map(|name| name.len());
/// assert_eq!(lengths.len(), 3);
/// assert!(lengths.all(|len| len >= 3));
/// ```
pub trait IntoCounted: Iterator + Sized {
    /// Wrap this iterator, taking its count from [`ExactSizeIterator::len`].
    fn counted(self) -> Counted<Self>;
}

impl<I: ExactSizeIterator> IntoCounted for I {
    fn counted(self) -> Counted<Self> {
        Counted::from_exact(self)
    }
}
