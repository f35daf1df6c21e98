use std::iter::FusedIterator;

use crate::{Indexable, Indexer};

/// Index-order traversal of an [`Indexable`], read through [`Indexable::get`].
///
/// The end is fixed to the length at creation time. Each element is read
/// independently, so an `Err` does not end the traversal.
pub struct Iter<'a, T: Indexer> {
    source: &'a Indexable<T>,
    pos: usize,
    end: usize,
}

impl<'a, T> Iter<'a, T>
where
    T: Indexer,
    T::Value: Clone,
{
    #[inline]
    pub fn new(source: &'a Indexable<T>) -> Self {
        Self {
            source,
            pos: 0,
            end: source.len(),
        }
    }

    /// Returns the next index to be read.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Iterator for Iter<'_, T>
where
    T: Indexer,
    T::Value: Clone,
{
    type Item = Result<Option<T::Value>, T::Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        let item = self.source.get(self.pos);
        self.pos += 1;
        Some(item)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.pos = self.pos.saturating_add(n).min(self.end);
        self.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T>
where
    T: Indexer,
    T::Value: Clone,
{
}

impl<T> FusedIterator for Iter<'_, T>
where
    T: Indexer,
    T::Value: Clone,
{
}
