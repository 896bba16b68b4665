//! Application layer containing the caller-facing account operations.
//!
//! This module defines the `AccountService`, which validates requests, builds
//! transaction records and hands them to a storage backend for atomic
//! application.

pub mod service;
