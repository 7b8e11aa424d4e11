//! `KeyTable` — an open-addressing hash table that stores keys only.
//!
//! This is the storage engine behind [`Set`](super::Set). Every member is its
//! own lookup key and carries no payload.
//!
//! Layout and probing:
//! - **Power-of-two bucket array**: the home bucket is `hash & (buckets - 1)`
//! - **Linear probing**: a lookup walks forward until it hits an empty slot
//!   (miss) or an occupied slot holding an equal key (hit)
//! - **Tombstones**: removal leaves a marker so later probe chains stay intact;
//!   insertion reuses the first tombstone it passes
//! - **Half-load bound**: live keys plus tombstones never exceed half the
//!   buckets, so every probe sequence terminates at an empty slot

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::mem;
use std::collections::hash_map::RandomState;

use crate::error::SetError;

/// Smallest non-zero bucket count.
pub const MIN_BUCKETS: usize = 8;

/// Live keys plus tombstones are kept at or below `buckets / MAX_LOAD_DIVISOR`.
pub const MAX_LOAD_DIVISOR: usize = 2;

/// A single bucket.
#[derive(Clone, Debug)]
pub(crate) enum Slot<K> {
    Empty,
    Tombstone,
    Occupied(K),
}

impl<K> Slot<K> {
    #[inline(always)]
    pub(crate) fn key(&self) -> Option<&K> {
        match self {
            Slot::Occupied(key) => Some(key),
            _ => None,
        }
    }

    #[inline(always)]
    pub(crate) fn into_key(self) -> Option<K> {
        match self {
            Slot::Occupied(key) => Some(key),
            _ => None,
        }
    }
}

/// Outcome of probing for a key on the insert path.
enum Probe {
    Found,
    Vacant(usize),
}

/// Open-addressing table of keys.
#[derive(Clone)]
pub struct KeyTable<K, S = RandomState> {
    /// Bucket array; empty (no allocation) or a power of two no smaller than `MIN_BUCKETS`
    slots: Vec<Slot<K>>,
    /// Number of occupied slots
    len: usize,
    /// Number of tombstone slots
    tombstones: usize,
    hash_builder: S,
}

impl<K, S> KeyTable<K, S> {
    /// Creates an empty table that will hash with `hash_builder`. Does not allocate.
    #[inline]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            tombstones: 0,
            hash_builder,
        }
    }

    /// Returns the number of keys stored.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no keys.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets currently allocated.
    #[inline(always)]
    pub fn buckets(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of keys the table can hold before it must rehash,
    /// ignoring tombstones.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len() / MAX_LOAD_DIVISOR
    }

    /// Returns the current load factor (live keys / buckets).
    #[inline]
    pub fn load_factor(&self) -> f32 {
        if self.slots.is_empty() {
            0.0
        } else {
            self.len as f32 / self.slots.len() as f32
        }
    }

    /// Returns a reference to the table's hasher.
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes every key. Keeps the bucket allocation.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.len = 0;
        self.tombstones = 0;
    }

    /// Keeps only the keys for which `f` returns `true`.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K) -> bool,
    {
        for slot in &mut self.slots {
            if let Slot::Occupied(key) = slot {
                if !f(key) {
                    *slot = Slot::Tombstone;
                    self.len -= 1;
                    self.tombstones += 1;
                }
            }
        }
    }

    #[inline]
    pub(crate) fn slots(&self) -> &[Slot<K>] {
        &self.slots
    }

    /// Hands out every slot and leaves the table empty.
    pub(crate) fn drain_slots(&mut self) -> std::vec::Drain<'_, Slot<K>> {
        self.len = 0;
        self.tombstones = 0;
        self.slots.drain(..)
    }

    pub(crate) fn into_slots(self) -> Vec<Slot<K>> {
        self.slots
    }
}

impl<K, S> KeyTable<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Creates an empty table able to hold `capacity` keys without rehashing.
    ///
    /// # Panics
    ///
    /// Panics if the required bucket count overflows `usize`.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let mut table = Self::with_hasher(hash_builder);
        table.reserve(capacity);
        table
    }

    #[inline(always)]
    fn home<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hash_builder.hash_one(key) as usize) & (self.slots.len() - 1)
    }

    /// Finds the bucket holding `key`.
    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.len == 0 {
            return None;
        }

        let mask = self.slots.len() - 1;
        let mut idx = self.home(key);
        for _ in 0..self.slots.len() {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied(stored) if stored.borrow() == key => return Some(idx),
                _ => {}
            }
            idx = (idx + 1) & mask;
        }
        None
    }

    /// Probes for `key` on the insert path. Reports the first tombstone passed
    /// as the vacancy when the key is absent.
    fn probe_insert(&self, key: &K) -> Probe {
        let mask = self.slots.len() - 1;
        let mut idx = self.home(key);
        let mut first_tombstone = None;
        for _ in 0..self.slots.len() {
            match &self.slots[idx] {
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(idx)),
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(idx);
                }
                Slot::Occupied(stored) if stored == key => return Probe::Found,
                Slot::Occupied(_) => {}
            }
            idx = (idx + 1) & mask;
        }
        match first_tombstone {
            Some(idx) => Probe::Vacant(idx),
            None => unreachable!("key table probed {} full buckets", self.slots.len()),
        }
    }

    /// Returns `true` if the table holds `key`.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns the stored key equal to `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).and_then(|idx| self.slots[idx].key())
    }

    /// Inserts `key`. Returns `true` if it was not already present; an
    /// existing equal key is left in place.
    pub fn insert(&mut self, key: K) -> bool {
        self.reserve_one();
        match self.probe_insert(&key) {
            Probe::Found => false,
            Probe::Vacant(idx) => {
                if matches!(self.slots[idx], Slot::Tombstone) {
                    self.tombstones -= 1;
                }
                self.slots[idx] = Slot::Occupied(key);
                self.len += 1;
                true
            }
        }
    }

    /// Removes and returns the stored key equal to `key`.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.find(key)?;
        let mask = self.slots.len() - 1;

        // No probe chain runs through `idx` if the next bucket is empty.
        let marker = if matches!(self.slots[(idx + 1) & mask], Slot::Empty) {
            Slot::Empty
        } else {
            self.tombstones += 1;
            Slot::Tombstone
        };
        self.len -= 1;
        mem::replace(&mut self.slots[idx], marker).into_key()
    }

    /// Removes `key`. Returns `true` if it was present.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Reserves room for at least `additional` more keys.
    ///
    /// # Panics
    ///
    /// Panics if the required bucket count overflows `usize` or the
    /// allocation fails.
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            panic!("{err}");
        }
    }

    /// Reserves room for at least `additional` more keys, reporting failure
    /// instead of panicking.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), SetError> {
        if additional == 0 {
            return Ok(());
        }
        let needed = self
            .len
            .checked_add(additional)
            .ok_or(SetError::CapacityOverflow)?;
        let occupied = needed.saturating_add(self.tombstones);
        if occupied <= self.capacity() {
            return Ok(());
        }
        let buckets = buckets_for(needed)?.max(self.slots.len());
        self.try_rehash(buckets)
    }

    /// Rebuilds the table at the smallest bucket count that holds the live
    /// keys, discarding tombstones.
    pub fn shrink_to_fit(&mut self) {
        if self.len == 0 {
            #[cfg(feature = "tracing")]
            tracing::trace!(old_buckets = self.slots.len(), "releasing empty key table");
            self.slots = Vec::new();
            self.tombstones = 0;
            return;
        }
        // `len` already fits in the current table, so this cannot overflow.
        let buckets = buckets_for(self.len).unwrap_or(self.slots.len());
        if buckets < self.slots.len() || self.tombstones > 0 {
            self.rehash(buckets);
        }
    }

    /// Makes room for one more key, growing when live keys fill a quarter of
    /// the buckets and otherwise rehashing in place to clear tombstones.
    #[inline]
    fn reserve_one(&mut self) {
        let occupied = self.len + self.tombstones + 1;
        if occupied * MAX_LOAD_DIVISOR <= self.slots.len() {
            return;
        }
        let buckets = if self.slots.is_empty() {
            MIN_BUCKETS
        } else if self.len * 4 >= self.slots.len() {
            self.slots.len().checked_mul(2).unwrap_or_else(|| panic!("{}", SetError::CapacityOverflow))
        } else {
            self.slots.len()
        };
        self.rehash(buckets);
    }

    fn rehash(&mut self, buckets: usize) {
        if let Err(err) = self.try_rehash(buckets) {
            panic!("{err}");
        }
    }

    /// Moves every live key into a fresh array of `buckets` slots.
    fn try_rehash(&mut self, buckets: usize) -> Result<(), SetError> {
        debug_assert!(buckets.is_power_of_two());
        debug_assert!(self.len * MAX_LOAD_DIVISOR <= buckets);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_buckets = self.slots.len(),
            new_buckets = buckets,
            len = self.len,
            tombstones = self.tombstones,
            "rehashing key table"
        );

        let mut fresh = Vec::new();
        fresh
            .try_reserve_exact(buckets)
            .map_err(|_| SetError::AllocError { buckets })?;
        fresh.resize_with(buckets, || Slot::Empty);

        let old = mem::replace(&mut self.slots, fresh);
        self.tombstones = 0;
        let mask = buckets - 1;
        for key in old.into_iter().filter_map(Slot::into_key) {
            let mut idx = self.home(&key);
            while !matches!(self.slots[idx], Slot::Empty) {
                idx = (idx + 1) & mask;
            }
            self.slots[idx] = Slot::Occupied(key);
        }
        Ok(())
    }
}

impl<K, S> Default for KeyTable<K, S>
where
    S: Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

/// Smallest bucket count that keeps `capacity` keys within the load bound.
fn buckets_for(capacity: usize) -> Result<usize, SetError> {
    capacity
        .checked_mul(MAX_LOAD_DIVISOR)
        .and_then(|n| n.max(MIN_BUCKETS).checked_next_power_of_two())
        .ok_or(SetError::CapacityOverflow)
}
