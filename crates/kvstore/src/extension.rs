//! Extension lifecycle adapter
//!
//! Packages the store and its primitive table behind the host's
//! [`Extension`] contract: a constant name, one registration at the runtime
//! phase, and a close hook that drains the store and reports how many
//! entries it discarded.

use std::sync::Arc;

use tracing::{debug, info};

use mica_core::{Extension, Phase, Registry, Result};

use crate::primitives;
use crate::store::Store;

/// The key-value store packaged as a host extension
///
/// Owns one [`Store`]; registration binds every primitive to it, so two
/// extension instances never share state. The host drives the lifecycle:
/// register once at load, close at most once at teardown.
///
/// # Example
///
/// ```
/// use mica_core::{CallFrame, Extension, Registry, Value};
/// use mica_kvstore::KvExtension;
///
/// let ext = KvExtension::new();
/// let mut registry = Registry::new();
/// ext.register(&mut registry)?;
///
/// let mut frame = CallFrame::new(vec![Value::from("host"), Value::from("localhost")]);
/// registry.invoke("kv-set!", &mut frame)?;
/// # Ok::<(), mica_core::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct KvExtension {
    store: Arc<Store>,
}

impl KvExtension {
    /// Create an extension with an empty store
    pub fn new() -> Self {
        KvExtension {
            store: Arc::new(Store::new()),
        }
    }

    /// Handle to the underlying store
    ///
    /// For embeddings that seed or inspect state from native code; embedded
    /// code goes through the primitives.
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }
}

impl Extension for KvExtension {
    fn name(&self) -> &str {
        "kvstore"
    }

    fn register(&self, registry: &mut Registry) -> Result<()> {
        let specs = primitives::specs(&self.store);
        let installed = specs.len();
        registry.add_primitives(specs, Phase::Runtime)?;
        debug!(target: "mica::kvstore", primitives = installed, "registered");
        Ok(())
    }

    fn close(&self) -> Result<()> {
        let discarded = self.store.drain();
        info!(target: "mica::kvstore", extension = self.name(), entries = discarded, "closed");
        Ok(())
    }
}
