//! Domain model for commune reference data and the current selection.
//!
//! # Responsibility
//! - Define the dataset record shape consumed at the input boundary.
//! - Define the picker projection and the flat selection state.
//!
//! # Invariants
//! - Dataset records are read-only once loaded.
//! - Selection state never carries absent values; empty string/list means
//!   "not set".

pub mod municipality;
pub mod selection;
