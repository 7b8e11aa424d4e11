//! # `setkit` - Hash Set with Set Algebra
//!
//! A mutable, unordered set of distinct values with membership tests and the
//! standard set algebra: union, intersection, difference, symmetric
//! difference, and subset/equality comparisons.
//!
//! ## Guarantees
//!
//! - **Distinct members**: each value is its own lookup key and is stored at
//!   most once. Adding a present value is a no-op.
//! - **Total operations**: removing or testing an absent value is legal and
//!   never fails. The only fallible API is [`Set::try_reserve`].
//! - **Independent results**: `deep_copy`, `union`, `intersection`,
//!   `difference` and `members` all return freshly owned storage; mutating
//!   the result never affects the source and vice versa.
//! - **Typed elements**: members share one element type `K: Eq + Hash`, so
//!   mixing element types is a compile error rather than a runtime one.
//!
//! ## Architecture
//!
//! 1. **Key table** ([`KeyTable`]):
//!    - Open addressing with linear probing over a power-of-two bucket array
//!    - Tombstones on removal, reused by later inserts
//!    - Live keys plus tombstones kept at or below half the buckets
//!
//! 2. **Set** ([`Set`]):
//!    - Thin `repr(transparent)` wrapper over the key table
//!    - Bulk `add`/`remove`, set algebra, snapshots and iterators
//!    - Operator sugar: `&a | &b`, `&a & &b`, `&a - &b`, `&a ^ &b`
//!
//! Sets are plain single-owner values with no internal locking. Wrap one in a
//! `Mutex` to share it between threads.
//!
//! ## Logging
//!
//! With the `tracing` feature enabled the key table emits `trace`-level
//! events whenever it rehashes or shrinks.
//!
//! ## Example
//!
//! ```rust
//! use setkit::{set, Set};
//!
//! let mut a = set![1, 2, 3];
//! let b = Set::create([2, 3, 4]);
//!
//! assert_eq!(a.intersection(&b), set![2, 3]);
//! assert_eq!(a.difference(&b), set![1]);
//!
//! a.add([4, 5]);
//! a.remove([1]);
//! assert!(b.is_subset(&a));
//! println!("{a}"); // Set{ 2 3 4 5 } in some order
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

pub mod collections;
pub mod error;
mod macros;

pub use collections::{KeyTable, Set};
pub use error::SetError;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // `Set` is `repr(transparent)` over its key table.
    assert!(mem::size_of::<Set<u64>>() == mem::size_of::<KeyTable<u64>>());
    assert!(mem::align_of::<Set<u64>>() == mem::align_of::<KeyTable<u64>>());

    // `RandomState` is the only per-set overhead beyond the bucket vector.
    assert!(
        mem::size_of::<KeyTable<u64>>()
            == mem::size_of::<Vec<u8>>()
                + 2 * mem::size_of::<usize>()
                + mem::size_of::<std::collections::hash_map::RandomState>()
    );
};
