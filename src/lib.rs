//! Mica: a thread-safe in-memory key-value store, packaged as an extension
//! for embedded interpreter runtimes
//!
//! The workspace splits into two crates, re-exported here so embeddings
//! depend on one:
//! - `mica-core`: the host-boundary contract (values, call frames, the
//!   primitive registry, the extension lifecycle trait)
//! - `mica-kvstore`: the store and the six `kv-*` primitives
//!
//! # Example
//!
//! ```
//! use mica::{CallFrame, Extension, KvExtension, Registry, Value};
//!
//! let ext = KvExtension::new();
//! let mut registry = Registry::new();
//! ext.register(&mut registry)?;
//!
//! let mut frame = CallFrame::new(vec![Value::from("host"), Value::from("localhost")]);
//! registry.invoke("kv-set!", &mut frame)?;
//!
//! let mut frame = CallFrame::new(vec![Value::from("host")]);
//! registry.invoke("kv-get", &mut frame)?;
//! assert_eq!(frame.take_value(), Some(Value::from("localhost")));
//!
//! ext.close()?;
//! # Ok::<(), mica::Error>(())
//! ```

pub use mica_core::{
    CallFrame, Error, Extension, Phase, PrimitiveImpl, PrimitiveSpec, Registry, Result, Value,
};
pub use mica_kvstore::{KvExtension, Store};
