//! JSON equality utilities.
//!
//! Two notions of equality live here: [`deep_equal`] for `test` operations
//! and [`loose_equal`] for the differ's scalar check. The differ never
//! compares containers by value.

mod deep_equal;

pub use deep_equal::{deep_equal, loose_equal};
