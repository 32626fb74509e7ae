//! Shared types for the customers service.
//!
//! Holds the pieces both the storage and HTTP layers agree on: primary key
//! and timestamp aliases, the domain error type, and the tri-state [`Patch`]
//! wrapper used by partial-update payloads.

pub mod error;
pub mod patch;
pub mod types;

pub use patch::Patch;
