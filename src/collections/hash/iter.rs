//! Iterators over [`Set`](super::Set) members.
//!
//! All of them skip empty and tombstone buckets and know the exact number of
//! members left, so they implement [`ExactSizeIterator`].

use core::iter::FusedIterator;
use core::slice;
use std::vec;

use super::table::Slot;

/// Borrowing iterator, created by [`Set::iter`](super::Set::iter).
pub struct Iter<'a, K> {
    slots: slice::Iter<'a, Slot<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(slots: &'a [Slot<K>], len: usize) -> Self {
        Self {
            slots: slots.iter(),
            remaining: len,
        }
    }
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.slots.by_ref().find_map(Slot::key)?;
        self.remaining -= 1;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

/// Consuming iterator, created by `Set::into_iter`.
pub struct IntoIter<K> {
    slots: vec::IntoIter<Slot<K>>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(slots: Vec<Slot<K>>, len: usize) -> Self {
        Self {
            slots: slots.into_iter(),
            remaining: len,
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.slots.by_ref().find_map(Slot::into_key)?;
        self.remaining -= 1;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}
impl<K> FusedIterator for IntoIter<K> {}

/// Draining iterator, created by [`Set::drain`](super::Set::drain).
///
/// The set is empty once this is created; members not yet yielded are
/// dropped along with the iterator.
pub struct Drain<'a, K> {
    slots: vec::Drain<'a, Slot<K>>,
    remaining: usize,
}

impl<'a, K> Drain<'a, K> {
    pub(crate) fn new(slots: vec::Drain<'a, Slot<K>>, len: usize) -> Self {
        Self {
            slots,
            remaining: len,
        }
    }
}

impl<K> Iterator for Drain<'_, K> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.slots.by_ref().find_map(Slot::into_key)?;
        self.remaining -= 1;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Drain<'_, K> {}
impl<K> FusedIterator for Drain<'_, K> {}
