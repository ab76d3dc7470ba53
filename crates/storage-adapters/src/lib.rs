//! # storage-adapters
//!
//! Storage implementations of the `domains` ports. The only backend today
//! is [`MemoryRecordStore`], a process-local store that starts empty and
//! forgets everything on shutdown; `demo` carries the fixtures used to make
//! a fresh store worth looking at.

pub mod demo;
pub mod memory;

pub use memory::MemoryRecordStore;
