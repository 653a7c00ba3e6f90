//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and gateway calls into request-level APIs.
//! - Keep front ends decoupled from storage details.

pub mod contact_service;
pub mod outcome;
