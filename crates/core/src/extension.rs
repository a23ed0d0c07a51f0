//! Lifecycle contract for pluggable extensions

use crate::error::Result;
use crate::registry::Registry;

/// Capability contract a host requires of a pluggable extension
///
/// The host drives the lifecycle: construct, [`register`](Extension::register)
/// once at load time, [`close`](Extension::close) at most once at teardown.
/// Calling either hook again is a host contract violation the extension does
/// not guard against. The trait is object-safe so hosts can hold
/// `Box<dyn Extension>`.
pub trait Extension {
    /// Constant identifier used by the host for diagnostics and namespacing
    fn name(&self) -> &str;

    /// Install the extension's primitives into the host registry
    ///
    /// Called exactly once per instance. Registry errors propagate to the
    /// host unmodified.
    fn register(&self, registry: &mut Registry) -> Result<()>;

    /// Release resources at host teardown
    ///
    /// Called at most once. Extensions with nothing to release keep this
    /// default.
    fn close(&self) -> Result<()> {
        Ok(())
    }
}
