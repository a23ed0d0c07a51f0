//! Registry Introspection Tests
//!
//! Tests the installed table as a host help system would read it: names,
//! docs, parameter names, categories, arity contracts, and load phases.

use crate::common::*;
use mica::{Phase, Registry};

#[test]
fn six_primitives_install_with_sorted_names() {
    let (_ext, registry) = registered();

    assert_eq!(registry.len(), 6);
    assert_eq!(
        registry.names(),
        vec!["kv-clear!", "kv-count", "kv-delete!", "kv-get", "kv-keys", "kv-set!"]
    );
}

#[test]
fn specs_carry_declared_metadata() {
    let (_ext, registry) = registered();

    let get = registry.get("kv-get").unwrap();
    assert_eq!(get.min_args(), 1);
    assert!(get.is_variadic());
    assert_eq!(get.doc(), "Get value by key. Optional default if key missing.");
    assert_eq!(get.param_names(), ["key".to_string(), "default".to_string()]);
    assert_eq!(get.category(), "kvstore");

    let set = registry.get("kv-set!").unwrap();
    assert_eq!(set.min_args(), 2);
    assert!(!set.is_variadic());
    assert_eq!(set.param_names(), ["key".to_string(), "value".to_string()]);

    let keys = registry.get("kv-keys").unwrap();
    assert_eq!(keys.min_args(), 0);
    assert!(keys.param_names().is_empty());
}

#[test]
fn every_primitive_shares_the_category() {
    let (_ext, registry) = registered();

    for name in registry.names() {
        let spec = registry.get(name).unwrap();
        assert_eq!(spec.category(), "kvstore", "{name}");
        assert!(!spec.doc().is_empty(), "{name} has no doc");
    }
}

#[test]
fn everything_registers_at_runtime_phase() {
    let (_ext, registry) = registered();

    for name in registry.names() {
        assert_eq!(registry.phase(name), Some(Phase::Runtime), "{name}");
    }
}

#[test]
fn empty_registry_introspection() {
    let registry = Registry::new();

    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.names().is_empty());
    assert!(registry.get("kv-get").is_none());
    assert_eq!(registry.phase("kv-get"), None);
    assert!(!registry.contains("kv-get"));
}
