//! # domains
//!
//! The central domain logic and interface definitions for Finders, the
//! lost-and-found exchange. Everything here is storage- and transport-
//! agnostic: the models describe the records the marketplace keeps, the
//! ports describe what a storage backend must provide, and the error type
//! carries failures across crate boundaries.
//!
//! Adapter crates (`storage-adapters`, `api-adapters`) depend on this crate,
//! never the other way around.

pub mod error;
pub mod ids;
pub mod models;
pub mod ports;

pub use error::{DomainError, Result};
pub use models::*;
pub use ports::*;
