//! Toggle engines: the mutation core of the board.
//!
//! Each engine validates its inputs, runs one transactional mutation against
//! the store, and converts store failures into the domain-level "error"
//! action. Broadcasting is not their concern -- callers publish the outcome
//! on the event bus.

mod flags;
mod selections;

pub use flags::{FlagEngine, FlagOutcome};
pub use selections::{SelectionEngine, ToggleOutcome};
