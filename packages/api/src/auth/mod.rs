//! Password hashing for locally provisioned accounts.

#[cfg(feature = "server")]
mod password;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
