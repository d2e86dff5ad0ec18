//! Authentication primitives: password hashing and strength checks.

pub mod password;

pub use password::{hash_password, validate_password_strength, verify_password};
