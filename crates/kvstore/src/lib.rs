//! In-memory key-value store extension for a host interpreter runtime
//!
//! This crate implements the extension side of the `mica-core` contract:
//! - Store: the lock-guarded text-to-text map
//! - primitives: the six `kv-*` operations and their registration table
//! - KvExtension: the lifecycle adapter hosts load, register, and close
//!
//! Embedded code sees `kv-set!`, `kv-get`, `kv-delete!`, `kv-keys`,
//! `kv-count`, and `kv-clear!`; native code holds the extension and, if it
//! wants, the store handle directly.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod extension; // Lifecycle adapter
pub mod primitives; // The kv-* operations and their table
pub mod store; // Lock-guarded map

// Re-export commonly used types
pub use extension::KvExtension;
pub use store::Store;
