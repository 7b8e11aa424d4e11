//! Collections provided by `setkit`.
//!
//! Collections are organized by data structure type:
//! - `hash`: Hash-based collections (the key table and [`Set`])

pub mod hash;

// Re-export commonly used types from submodules
pub use hash::{KeyTable, Set};
