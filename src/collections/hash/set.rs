//! `Set` — a mutable, unordered set of distinct values.
//!
//! Each member is stored as its own lookup key in a [`KeyTable`] with no
//! payload. Iteration order is unspecified and may change after any
//! mutation.
//!
//! Combining operations (`union`, `intersection`, `difference`,
//! `symmetric_difference`) never touch their inputs: each starts from a deep
//! copy of `self` and returns a new, independently owned set.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::ops::{BitAnd, BitOr, BitXor, Sub};
use std::collections::hash_map::RandomState;

use super::iter::{Drain, IntoIter, Iter};
use super::table::KeyTable;
use crate::error::SetError;

/// A hash set of distinct values.
///
/// # Example
///
/// ```rust
/// use setkit::Set;
///
/// let a = Set::create([1, 2, 3]);
/// let b = Set::create([3, 4]);
///
/// let u = a.union(&b);
/// assert!(u.is_equal(&Set::create([1, 2, 3, 4])));
/// assert!(a.is_subset(&u));
/// ```
#[repr(transparent)]
pub struct Set<K, S = RandomState> {
    table: KeyTable<K, S>,
}

impl<K> Set<K, RandomState>
where
    K: Eq + Hash,
{
    /// Creates an empty set. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates an empty set able to hold `capacity` members without rehashing.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }

    /// Creates a set holding `values`. Duplicates collapse silently.
    ///
    /// Equivalent to [`Set::new`] followed by [`Set::add`].
    pub fn create<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut set = Self::new();
        set.add(values);
        set
    }
}

impl<K, S> Set<K, S> {
    /// Creates an empty set that hashes with `hash_builder`.
    #[inline]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: KeyTable::with_hasher(hash_builder),
        }
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of members the set can hold before rehashing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns a reference to the set's hasher.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.table.hasher()
    }

    /// Removes every member.
    #[inline]
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterates over the members in unspecified order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.table.slots(), self.table.len())
    }

    /// Removes every member, yielding them in unspecified order.
    pub fn drain(&mut self) -> Drain<'_, K> {
        let len = self.table.len();
        Drain::new(self.table.drain_slots(), len)
    }

    /// Keeps only the members for which `f` returns `true`.
    #[inline]
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.table.retain(f);
    }

    /// Returns a snapshot of the current members in unspecified order.
    ///
    /// The returned vector is independent of the set: later mutation of the
    /// set does not affect it.
    pub fn members(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a new set with the same members and hasher and no storage
    /// shared with `self`.
    #[inline]
    pub fn deep_copy(&self) -> Self
    where
        K: Clone,
        S: Clone,
    {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<K, S> Set<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Creates an empty set able to hold `capacity` members without
    /// rehashing, hashing with `hash_builder`.
    ///
    /// # Panics
    ///
    /// Panics if the required bucket count overflows `usize`.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: KeyTable::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Reserves room for at least `additional` more members.
    ///
    /// # Panics
    ///
    /// Panics if the required bucket count overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Reserves room for at least `additional` more members.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::CapacityOverflow`] if the bucket count overflows
    /// and [`SetError::AllocError`] if the allocator refuses the request. The
    /// set is unchanged on error.
    #[inline]
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), SetError> {
        self.table.try_reserve(additional)
    }

    /// Shrinks storage to the smallest size that holds the current members.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.table.shrink_to_fit();
    }

    /// Adds every value in `values`. Values already present are left as they are.
    pub fn add<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = K>,
    {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        self.table.reserve(lower);
        for value in values {
            self.table.insert(value);
        }
    }

    /// Adds a single value. Returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, value: K) -> bool {
        self.table.insert(value)
    }

    /// Removes every value in `values` that is present. Absent values are
    /// ignored.
    ///
    /// Accepts owned values or references, so another set can be passed
    /// directly: `a.remove(&b)`.
    pub fn remove<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        for value in values {
            self.table.remove(value.borrow());
        }
    }

    /// Removes a single value. Returns `true` if it was present.
    #[inline]
    pub fn discard<Q>(&mut self, value: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.remove(value)
    }

    /// Removes and returns the member equal to `value`.
    #[inline]
    pub fn take<Q>(&mut self, value: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.take(value)
    }

    /// Returns `true` if `value` is a member.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.contains(value)
    }

    /// Returns the stored member equal to `value`.
    #[inline]
    pub fn get<Q>(&self, value: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.get(value)
    }

    /// Returns a new set of the values in `self` or in `other`.
    pub fn union(&self, other: &Self) -> Self
    where
        K: Clone,
        S: Clone,
    {
        let mut result = self.deep_copy();
        result.add(other.iter().cloned());
        result
    }

    /// Returns a new set of the values in both `self` and `other`.
    ///
    /// Starts from a copy of `self` and drops every value not in `other`.
    pub fn intersection(&self, other: &Self) -> Self
    where
        K: Clone,
        S: Clone,
    {
        let mut result = self.deep_copy();
        result.retain(|value| other.contains(value));
        result
    }

    /// Returns a new set of the values in `self` but not in `other`.
    ///
    /// Starts from a copy of `self` and drops every value present in `other`.
    pub fn difference(&self, other: &Self) -> Self
    where
        K: Clone,
        S: Clone,
    {
        let mut result = self.deep_copy();
        if result.len() <= other.len() {
            result.retain(|value| !other.contains(value));
        } else {
            result.remove(other);
        }
        result
    }

    /// Returns a new set of the values in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &Self) -> Self
    where
        K: Clone,
        S: Clone,
    {
        let mut result = self.difference(other);
        result.add(other.iter().filter(|value| !self.contains(*value)).cloned());
        result
    }

    /// Returns `true` if every member of `self` is also in `other`.
    ///
    /// The empty set is a subset of every set, itself included.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|value| other.contains(value))
    }

    /// Returns `true` if every member of `other` is also in `self`.
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` share no members.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().all(|value| !large.contains(value))
    }

    /// Returns `true` if `self` and `other` have the same members.
    #[inline]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.is_subset(other) && other.is_subset(self)
    }
}

// ===== TRAIT IMPLEMENTATIONS =====

impl<K, S> Clone for Set<K, S>
where
    K: Clone,
    S: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

impl<K, S> Default for Set<K, S>
where
    S: Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, S> PartialEq for Set<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<K, S> Eq for Set<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
}

/// Renders as `Set{ v1 v2 ... }` in unspecified order. Diagnostic only.
impl<K, S> fmt::Display for Set<K, S>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Set{ ")?;
        for value in self {
            write!(f, "{value} ")?;
        }
        f.write_str("}")
    }
}

impl<K, S> fmt::Debug for Set<K, S>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, S> FromIterator<K> for Set<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.add(iter);
        set
    }
}

impl<K, const N: usize> From<[K; N]> for Set<K, RandomState>
where
    K: Eq + Hash,
{
    fn from(values: [K; N]) -> Self {
        Self::create(values)
    }
}

impl<K, S> Extend<K> for Set<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a, K, S> Extend<&'a K> for Set<K, S>
where
    K: Eq + Hash + Copy + 'a,
    S: BuildHasher,
{
    #[inline]
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.add(iter.into_iter().copied());
    }
}

impl<'a, K, S> IntoIterator for &'a Set<K, S> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, S> IntoIterator for Set<K, S> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.table.len();
        IntoIter::new(self.table.into_slots(), len)
    }
}

impl<K, S> BitOr<&Set<K, S>> for &Set<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<K, S>;

    /// Same as [`Set::union`].
    fn bitor(self, rhs: &Set<K, S>) -> Set<K, S> {
        self.union(rhs)
    }
}

impl<K, S> BitAnd<&Set<K, S>> for &Set<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<K, S>;

    /// Same as [`Set::intersection`].
    fn bitand(self, rhs: &Set<K, S>) -> Set<K, S> {
        self.intersection(rhs)
    }
}

impl<K, S> Sub<&Set<K, S>> for &Set<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<K, S>;

    /// Same as [`Set::difference`].
    fn sub(self, rhs: &Set<K, S>) -> Set<K, S> {
        self.difference(rhs)
    }
}

impl<K, S> BitXor<&Set<K, S>> for &Set<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<K, S>;

    /// Same as [`Set::symmetric_difference`].
    fn bitxor(self, rhs: &Set<K, S>) -> Set<K, S> {
        self.symmetric_difference(rhs)
    }
}
