//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Own the validation rules applied before any write.
//!
//! # Invariants
//! - Every contact is identified by a store-assigned `ContactId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod contact;
