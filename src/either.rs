//! A small module that implements the [`Comparer`] trait for the
//! [`either::Either`](https://docs.rs/either/latest/either/enum.Either.html) type.
//!
//! This allows the ordering of a sequence to be picked at runtime without boxing.

use crate::order::Comparer;
use core::cmp::Ordering;
use either::Either;

impl<T, L, R> Comparer<T> for Either<L, R>
where
    T: ?Sized,
    L: Comparer<T>,
    R: Comparer<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            Either::Left(l) => l.compare(a, b),
            Either::Right(r) => r.compare(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use alloc::vec;
    use core::cmp::Ordering;
    use either::Either;

    fn by_length(a: &&str, b: &&str) -> Ordering {
        a.len().cmp(&b.len())
    }

    #[test]
    fn picks_comparer_at_runtime() {
        let words = ["b", "aaa", "cc"];
        let sort = |cmp: Either<Natural, fn(&&str, &&str) -> Ordering>| {
            from_collection(&words)
                .order_by_with(|w| **w, cmp)
                .map(|w| *w)
                .to_list()
        };
        assert_eq!(sort(Either::Left(Natural)), vec!["aaa", "b", "cc"]);
        assert_eq!(sort(Either::Right(by_length)), vec!["b", "cc", "aaa"]);
    }
}
