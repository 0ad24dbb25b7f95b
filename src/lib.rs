//! Stackfall (workspace facade crate).
//!
//! Re-exports the member crates as `stackfall::{core, types}` so hosts and the
//! integration tests depend on a single package.

pub use stackfall_core as core;
pub use stackfall_types as types;
