//! Domain types for the keyword selection board.
//!
//! Pure types only: row identity, toggle actions, source rows, and the
//! domain error enum. No I/O happens in this crate.

pub mod actions;
pub mod error;
pub mod row_key;
pub mod source_row;
pub mod types;
