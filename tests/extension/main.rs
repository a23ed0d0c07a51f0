//! Extension Integration Tests
//!
//! End-to-end tests for the kvstore extension loaded into a host registry:
//! - primitive dispatch through call frames
//! - the error taxonomy (type, arity, not-found, duplicate, unknown)
//! - registry introspection and load phases
//! - extension lifecycle, including the close summary event
//! - concurrent invocation from multiple threads


mod lifecycle;
mod registry;
