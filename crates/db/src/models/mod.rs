//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - The wire-facing shapes derived from it

pub mod flag;
pub mod selection;
pub mod stats;
pub mod user;
