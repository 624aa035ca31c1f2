//! Functions that create [`Counted`] sequences from scratch or from existing collections.

use super::*;
use core::ops::RangeInclusive;

/// A sequence with no elements.
///
/// ```
/// # use counted::prelude::*;
/// let xs = empty::<u32>();
/// assert!(!xs.any());
/// assert_eq!(xs.to_list(), Vec::<u32>::new());
/// ```
pub fn empty<T>() -> Counted<core_iter::Empty<T>> {
    Counted::new(core_iter::empty(), 0)
}

/// The `count` consecutive integers starting at `start`.
///
/// Returns [`Error::OutOfRange`] if the last element, `start + count - 1`, does not fit in an `i64`.
///
/// ```
/// # use counted::prelude::*;
/// assert_eq!(range(-1, 3).unwrap().to_list(), vec![-1, 0, 1]);
/// assert_eq!(range(i64::MAX, 1).unwrap().to_list(), vec![i64::MAX]);
/// assert!(range(i64::MAX, 2).is_err());
/// ```
pub fn range(start: i64, count: usize) -> Result<Counted<RangeInclusive<i64>>, Error> {
    let items = match count.checked_sub(1) {
        // Any inverted range is empty
        None => 1..=0,
        Some(offset) => {
            let last = i64::try_from(offset)
                .ok()
                .and_then(|offset| start.checked_add(offset))
                .ok_or(Error::OutOfRange { start, count })?;
            start..=last
        }
    };
    Ok(Counted::new(items, count))
}

/// `item`, repeated `count` times.
pub fn repeat<T: Clone>(item: T, count: usize) -> Counted<core_iter::Take<core_iter::Repeat<T>>> {
    Counted::new(core_iter::repeat(item).take(count), count)
}

/// A sequence containing only `item`.
pub fn single<T>(item: T) -> Counted<core_iter::Once<T>> {
    Counted::new(core_iter::once(item), 1)
}

/// Borrow a collection that already knows its length as a [`Counted`] sequence of references. Nothing is copied.
///
/// This works for anything whose borrowed iterator is exactly sized: slices, arrays, [`Vec`](alloc::vec::Vec),
/// [`VecDeque`](alloc::collections::VecDeque), [`BTreeMap`](alloc::collections::BTreeMap),
/// [`hashbrown::HashMap`], and so on.
///
/// ```
/// # use counted::prelude::*;
/// let v = vec![10, 20, 30];
/// let xs = from_collection(&v);
/// assert_eq!(xs.len(), 3);
/// assert!(xs.contains(&&20));
/// ```
pub fn from_collection<'a, C>(collection: &'a C) -> Counted<<&'a C as IntoIterator>::IntoIter>
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::IntoIter: ExactSizeIterator,
{
    Counted::from_exact(collection.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{collections::BTreeMap, vec, vec::Vec};

    #[test]
    fn range_edges() {
        assert_eq!(range(5, 0).unwrap().len(), 0);
        assert_eq!(range(i64::MAX, 0).unwrap().to_list(), Vec::<i64>::new());
        assert_eq!(range(i64::MIN, 0).unwrap().len(), 0);
        assert_eq!(range(i64::MAX - 1, 2).unwrap().to_list(), vec![i64::MAX - 1, i64::MAX]);
        assert_eq!(range(i64::MAX, 1).unwrap().to_list(), vec![i64::MAX]);
        assert_eq!(range(i64::MIN, 2).unwrap().to_list(), vec![i64::MIN, i64::MIN + 1]);
        assert_eq!(
            range(i64::MAX, 2).unwrap_err(),
            Error::OutOfRange {
                start: i64::MAX,
                count: 2
            }
        );
    }

    #[test]
    fn repeat_and_single() {
        assert_eq!(repeat("x", 3).to_list(), vec!["x", "x", "x"]);
        assert_eq!(repeat(1, 0).len(), 0);
        assert_eq!(single('a').to_list(), vec!['a']);
        assert_eq!(single('a').len(), 1);
    }

    #[test]
    fn collections() {
        let mut map = BTreeMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        let entries = from_collection(&map);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.to_list(), vec![(&"a", &1), (&"b", &2)]);

        let slice: &[u8] = b"hi";
        assert_eq!(from_collection(slice).len(), 2);
    }
}
