//! Lifecycle Tests
//!
//! Tests the register-then-close cycle a host drives, including the close
//! summary event captured through a tracing layer.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::common::*;
use mica::{Extension, KvExtension, Registry, Value};

// ============================================================================
// Close Summary Capture
// ============================================================================

/// Collects the `entries` field of every close summary under the kvstore
/// target.
#[derive(Clone, Default)]
struct CloseSummaries(Arc<Mutex<Vec<u64>>>);

struct EntriesVisitor {
    entries: Option<u64>,
}

impl Visit for EntriesVisitor {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "entries" {
            self.entries = Some(value);
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

impl<S: Subscriber> Layer<S> for CloseSummaries {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != "mica::kvstore" {
            return;
        }
        let mut visitor = EntriesVisitor { entries: None };
        event.record(&mut visitor);
        if let Some(entries) = visitor.entries {
            self.0.lock().unwrap().push(entries);
        }
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn close_emits_one_summary_with_discarded_count() {
    let summaries = CloseSummaries::default();
    let subscriber = tracing_subscriber::registry().with(summaries.clone());

    let (ext, registry) = registered();
    call_ok(&registry, "kv-set!", vec!["host".into(), "localhost".into()]);
    call_ok(&registry, "kv-set!", vec!["port".into(), "8080".into()]);

    tracing::subscriber::with_default(subscriber, || {
        ext.close().unwrap();
    });

    let seen = summaries.0.lock().unwrap();
    assert_eq!(seen.as_slice(), &[2]);
}

#[test]
fn close_summary_reports_zero_for_empty_store() {
    let summaries = CloseSummaries::default();
    let subscriber = tracing_subscriber::registry().with(summaries.clone());

    let ext = KvExtension::new();
    tracing::subscriber::with_default(subscriber, || {
        ext.close().unwrap();
    });

    let seen = summaries.0.lock().unwrap();
    assert_eq!(seen.as_slice(), &[0]);
}

#[test]
fn close_returns_ok_and_drains() {
    let (ext, registry) = registered();
    call_ok(&registry, "kv-set!", vec!["a".into(), "1".into()]);
    call_ok(&registry, "kv-set!", vec!["b".into(), "2".into()]);

    ext.close().unwrap();
    assert!(ext.store().is_empty());
}

#[test]
fn second_close_reports_an_already_empty_store() {
    let summaries = CloseSummaries::default();
    let subscriber = tracing_subscriber::registry().with(summaries.clone());

    let (ext, registry) = registered();
    call_ok(&registry, "kv-set!", vec!["k".into(), "v".into()]);

    // Re-close is outside the host contract; it degrades to draining an
    // empty store rather than failing.
    tracing::subscriber::with_default(subscriber, || {
        ext.close().unwrap();
        ext.close().unwrap();
    });

    let seen = summaries.0.lock().unwrap();
    assert_eq!(seen.as_slice(), &[1, 0]);
}

#[test]
fn full_cycle_register_populate_close() {
    let ext = KvExtension::new();
    let mut registry = Registry::new();

    ext.register(&mut registry).unwrap();
    call_ok(&registry, "kv-set!", vec!["host".into(), "localhost".into()]);
    assert_eq!(call_ok(&registry, "kv-count", vec![]), Value::Int(1));

    ext.close().unwrap();
    assert_eq!(ext.store().count(), 0);
}

#[test]
fn host_can_drive_extensions_as_trait_objects() {
    let extensions: Vec<Box<dyn Extension>> = vec![Box::new(KvExtension::new())];
    let mut registry = Registry::new();

    for ext in &extensions {
        ext.register(&mut registry).unwrap();
    }
    assert_eq!(registry.len(), 6);

    for ext in &extensions {
        assert_eq!(ext.name(), "kvstore");
        ext.close().unwrap();
    }
}
