//! Iteration over [`Counted`](crate::Counted) sequences.

use core::iter::FusedIterator;

/// An iterator over a [`Counted`](crate::Counted) sequence.
///
/// Yields at most as many elements as the sequence's count, and reports the number of elements still to come through
/// [`ExactSizeIterator::len`]. Once the count is spent the underlying iterator is not advanced again.
///
/// See [`Counted::iter`](crate::Counted::iter).
#[derive(Clone, Debug)]
pub struct Iter<I> {
    iter: I,
    remaining: usize,
}

impl<I> Iter<I> {
    pub(crate) fn new(iter: I, remaining: usize) -> Self {
        Self { iter, remaining }
    }
}

impl<I: Iterator> Iterator for Iter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.iter.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            // The source came up short of its count; stay consistent with what we've actually seen.
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I: Iterator> ExactSizeIterator for Iter<I> {}

impl<I: Iterator> FusedIterator for Iter<I> {}
