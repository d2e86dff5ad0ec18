//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod flag_repo;
pub mod selection_repo;
pub mod stats_repo;
pub mod user_repo;

pub use flag_repo::FlagRepo;
pub use selection_repo::SelectionRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
