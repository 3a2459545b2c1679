//! Wire contracts and pure domain logic shared by the loyalty front-end.
//!
//! Nothing in this crate performs I/O: types deserialize whatever shape the
//! backend returns, and the helpers (status derivation, list normalization,
//! notification enrichment, form validation) are plain functions.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
