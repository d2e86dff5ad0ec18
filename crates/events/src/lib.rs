//! In-process publish/subscribe for board events.

pub mod bus;

pub use bus::{BoardEvent, EventBus};
