//! Iterator adapters produced by the combinators on [`Counted`].
//!
//! Most combinators reuse the adapters from [`core::iter`] directly. The ones here cover what `core` doesn't provide.
//! Although it's *sometimes* useful to be able to name their type, these are much easier to work with when accessed
//! through their respective methods on [`Counted`].

#[allow(unused_imports)] // Only referenced by docs
use crate::Counted;
use alloc::sync::Arc;
use core::{iter::FusedIterator, marker::PhantomData};

/// See [`Counted::cast`].
pub struct Cast<I, U> {
    pub(crate) iter: I,
    pub(crate) phantom: PhantomData<fn() -> U>,
}

impl<I, U> Cast<I, U> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            phantom: PhantomData,
        }
    }
}

impl<I: Clone, U> Clone for Cast<I, U> {
    fn clone(&self) -> Self {
        Self::new(self.iter.clone())
    }
}

impl<I, U> Iterator for Cast<I, U>
where
    I: Iterator,
    I::Item: Into<U>,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        self.iter.next().map(Into::into)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// See [`Counted::try_cast`].
pub struct TryCast<I, U> {
    pub(crate) iter: I,
    pub(crate) phantom: PhantomData<fn() -> U>,
}

impl<I, U> TryCast<I, U> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            phantom: PhantomData,
        }
    }
}

impl<I: Clone, U> Clone for TryCast<I, U> {
    fn clone(&self) -> Self {
        Self::new(self.iter.clone())
    }
}

impl<I, U> Iterator for TryCast<I, U>
where
    I: Iterator,
    I::Item: TryInto<U>,
{
    type Item = Result<U, <I::Item as TryInto<U>>::Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(TryInto::try_into)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// See [`Counted::zip`].
#[derive(Clone)]
pub struct ZipWith<A, B, F> {
    pub(crate) a: A,
    pub(crate) b: B,
    pub(crate) f: F,
}

impl<A, B, F> ZipWith<A, B, F> {
    pub(crate) fn new(a: A, b: B, f: F) -> Self {
        Self { a, b, f }
    }
}

impl<A, B, F, U> Iterator for ZipWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        let a = self.a.next()?;
        let b = self.b.next()?;
        Some((self.f)(a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.a.size_hint();
        let (b_lo, b_hi) = self.b.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        (a_lo.min(b_lo), hi)
    }
}

/// See [`Counted::reverse`].
///
/// Holds a shared snapshot of the reversed sequence, so cloning it (and hence re-iterating the [`Counted`] that owns
/// it) never copies the elements.
pub struct Reversed<T> {
    pub(crate) items: Arc<[T]>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Reversed<T> {
    pub(crate) fn new(items: Arc<[T]>) -> Self {
        let back = items.len();
        Self {
            items,
            front: 0,
            back,
        }
    }
}

impl<T> Clone for Reversed<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: Clone> Iterator for Reversed<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.back == self.front {
            return None;
        }
        self.back -= 1;
        Some(self.items[self.back].clone())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T: Clone> DoubleEndedIterator for Reversed<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.back == self.front {
            return None;
        }
        let item = self.items[self.front].clone();
        self.front += 1;
        Some(item)
    }
}

impl<T: Clone> ExactSizeIterator for Reversed<T> {}

impl<T: Clone> FusedIterator for Reversed<T> {}
