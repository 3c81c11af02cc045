//! Shared test utilities for jobwatch integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod builders;
pub mod stores;

pub use builders::*;
pub use stores::*;
