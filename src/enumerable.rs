// Enumerable domains - index driven enumeration of finite sets

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// A finite set of values addressable by index.
///
/// Implementors provide `count` and `at_index`; `all` and `all_lazy` come for
/// free. Nothing is cached: a domain backed by a live resource (the MIDI
/// endpoints for example) is queried again on every call.
pub trait Enumerable: Sized {
    /// Number of values in the domain.
    fn count() -> usize;

    /// Value at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= Self::count()`. Callers bound their indices by
    /// `count()` first.
    fn at_index(index: usize) -> Self;

    /// See [`all`].
    fn all() -> Vec<Self> {
        all::<Self>()
    }

    /// See [`all_lazy`].
    fn all_lazy() -> AllLazy<Self> {
        all_lazy::<Self>()
    }
}

/// Every value of the domain, in index order.
pub fn all<T: Enumerable>() -> Vec<T> {
    all_lazy::<T>().iter().collect()
}

/// A lazy view over every value of the domain.
///
/// `at_index` is only called when the iterator is consumed, so
/// `all_lazy::<T>().iter().find(..)` stops at the first match.
pub fn all_lazy<T: Enumerable>() -> AllLazy<T> {
    AllLazy {
        _marker: PhantomData,
    }
}

/// Report an index outside `0..count` as a contract violation.
#[track_caller]
pub fn index_out_of_range(index: usize, count: usize) -> ! {
    panic!("index out of range: the count is {count} but the index is {index}")
}

/// Restartable lazy view returned by [`all_lazy`].
///
/// Each call to [`AllLazy::iter`] starts a fresh traversal at index 0 and
/// reads `count()` at that moment. For live domains the length reported by
/// the iterator can go stale: if the domain shrinks mid-traversal the next
/// `at_index` call panics. Such domains should offer a one-shot snapshot for
/// lookups (see `Destination::snapshot`).
pub struct AllLazy<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Enumerable> AllLazy<T> {
    /// Current size of the domain.
    pub fn len(&self) -> usize {
        T::count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds-checked random access.
    pub fn get(&self, index: usize) -> Option<T> {
        if index < T::count() {
            Some(T::at_index(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> LazyIter<T> {
        LazyIter {
            front: 0,
            back: T::count(),
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for AllLazy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AllLazy<T> {}

impl<T> fmt::Debug for AllLazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllLazy").finish()
    }
}

impl<T: Enumerable> IntoIterator for AllLazy<T> {
    type Item = T;
    type IntoIter = LazyIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Enumerable> IntoIterator for &AllLazy<T> {
    type Item = T;
    type IntoIter = LazyIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One traversal of an [`AllLazy`] view.
pub struct LazyIter<T> {
    front: usize,
    back: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for LazyIter<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for LazyIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyIter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<T: Enumerable> Iterator for LazyIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let value = T::at_index(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        // Skipped values are never built
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<T: Enumerable> DoubleEndedIterator for LazyIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(T::at_index(self.back))
    }
}

impl<T: Enumerable> ExactSizeIterator for LazyIter<T> {}

impl<T: Enumerable> FusedIterator for LazyIter<T> {}
