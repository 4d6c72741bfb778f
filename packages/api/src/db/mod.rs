//! # Database module — PostgreSQL connection pool management
//!
//! This module provides the shared PostgreSQL connection pool used by the server
//! functions in the `api` crate. It is entirely gated behind `#[cfg(feature = "server")]`
//! so that client (WASM) builds never pull in SQLx or Tokio networking code.
//!
//! The pool is a **lazy, process-wide singleton** backed by a [`tokio::sync::OnceCell`].
//! The first call to [`get_pool`] reads `DATABASE_URL` from the environment (via `dotenvy`),
//! opens a pool with up to 5 connections, and caches the result for all subsequent
//! callers. The admin scripts do not use it: each of them owns a short-lived pool
//! that it closes itself.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::{database_url, get_pool};
