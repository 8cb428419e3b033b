//! In-memory state containers for one user session.
//!
//! # Responsibility
//! - Hold the reference commune list and expose the picker projection.
//! - Hold the single current selection.
//!
//! # Invariants
//! - Each store has exactly one writer operation.
//! - Stores are plain owned values; callers pass them where needed.

pub mod reference_store;
pub mod selection_store;
