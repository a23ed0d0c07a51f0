//! Core contract between a host interpreter runtime and its extensions
//!
//! This crate defines the vocabulary both sides compile against:
//! - Value: dynamically-typed values crossing the boundary
//! - CallFrame: per-invocation arguments plus the single output slot
//! - PrimitiveSpec / Phase / Registry: primitive declaration and dispatch
//! - Extension: the lifecycle contract (name, register, close)
//! - Error / Result: the boundary error taxonomy
//!
//! It holds no state of its own beyond the registry's name table and does no
//! I/O or locking; extension state lives in the crates that implement the
//! contract.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod error; // Error taxonomy and Result alias
pub mod extension; // Extension lifecycle trait
pub mod frame; // Per-invocation call frame
pub mod registry; // Primitive specs, phases, dispatch
pub mod value; // Dynamic boundary values

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use extension::Extension;
pub use frame::CallFrame;
pub use registry::{Phase, PrimitiveImpl, PrimitiveSpec, Registry};
pub use value::Value;
