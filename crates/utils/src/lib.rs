//! Shared filesystem primitives for appdir
//!
//! This crate provides the building blocks every section parser and writer
//! composes: a JSON document codec that treats absent files as "no data", a
//! deterministic directory walker, and an atomic single-file write.

pub mod atomic_file;
pub mod document;
pub mod logging;
pub mod walker;

pub use atomic_file::*;
pub use document::*;
pub use walker::*;
