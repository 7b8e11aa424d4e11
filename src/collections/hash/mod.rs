//! Hash-based collections.
//!
//! This module contains the open-addressing key table and the set built on
//! top of it.

pub mod iter;
pub mod set;
pub mod table;

pub use iter::{Drain, IntoIter, Iter};
pub use set::Set;
pub use table::KeyTable;
