//! Embedded-language primitives backed by the store
//!
//! Six operations, all registered under category `kvstore`:
//!
//! | Primitive    | Arity              | Result                     |
//! |--------------|--------------------|----------------------------|
//! | `kv-set!`    | exactly 2          | void                       |
//! | `kv-get`     | 1 + optional default | text (or the default)    |
//! | `kv-delete!` | exactly 1          | void                       |
//! | `kv-keys`    | 0                  | list of text, sorted       |
//! | `kv-count`   | 0                  | integer                    |
//! | `kv-clear!`  | 0                  | void                       |
//!
//! Argument validation runs before any lock is taken, so invalid calls never
//! contend with readers or writers, and a failing call never leaves a
//! partial mutation behind.

use std::sync::Arc;

use mica_core::{CallFrame, Error, PrimitiveSpec, Result, Value};

use crate::store::Store;

/// Category tag shared by every primitive in this extension
pub const CATEGORY: &str = "kvstore";

/// Build the registration table, binding each primitive to `store`
///
/// Each closure captures its own handle to the store, so tables built for
/// two extension instances never share state.
pub fn specs(store: &Arc<Store>) -> Vec<PrimitiveSpec> {
    vec![
        {
            let store = Arc::clone(store);
            PrimitiveSpec::new("kv-set!", 2, move |frame| set(&store, frame))
                .with_doc("Set a key-value pair (both strings).")
                .with_params(&["key", "value"])
                .with_category(CATEGORY)
        },
        {
            let store = Arc::clone(store);
            PrimitiveSpec::new("kv-get", 1, move |frame| get(&store, frame))
                .variadic()
                .with_doc("Get value by key. Optional default if key missing.")
                .with_params(&["key", "default"])
                .with_category(CATEGORY)
        },
        {
            let store = Arc::clone(store);
            PrimitiveSpec::new("kv-delete!", 1, move |frame| delete(&store, frame))
                .with_doc("Delete a key.")
                .with_params(&["key"])
                .with_category(CATEGORY)
        },
        {
            let store = Arc::clone(store);
            PrimitiveSpec::new("kv-keys", 0, move |frame| keys(&store, frame))
                .with_doc("Return a sorted list of all keys.")
                .with_category(CATEGORY)
        },
        {
            let store = Arc::clone(store);
            PrimitiveSpec::new("kv-count", 0, move |frame| count(&store, frame))
                .with_doc("Return the number of entries.")
                .with_category(CATEGORY)
        },
        {
            let store = Arc::clone(store);
            PrimitiveSpec::new("kv-clear!", 0, move |frame| clear(&store, frame))
                .with_doc("Remove all entries.")
                .with_category(CATEGORY)
        },
    ]
}

// ========== Operations ==========

fn set(store: &Store, frame: &mut CallFrame) -> Result<()> {
    let key = text_arg(frame, "kv-set!", 0)?;
    let value = text_arg(frame, "kv-set!", 1)?;
    store.set(key, value);
    frame.set_value(Value::Void);
    Ok(())
}

fn get(store: &Store, frame: &mut CallFrame) -> Result<()> {
    let key = text_arg(frame, "kv-get", 0)?;
    let default = optional_default(frame, "kv-get", 1)?;
    match store.get(&key) {
        Some(value) => frame.set_value(Value::Text(value)),
        None => match default {
            Some(value) => frame.set_value(value),
            None => {
                return Err(Error::KeyNotFound {
                    primitive: "kv-get".to_string(),
                    key,
                })
            }
        },
    }
    Ok(())
}

fn delete(store: &Store, frame: &mut CallFrame) -> Result<()> {
    let key = text_arg(frame, "kv-delete!", 0)?;
    store.delete(&key);
    frame.set_value(Value::Void);
    Ok(())
}

fn keys(store: &Store, frame: &mut CallFrame) -> Result<()> {
    // Copy out under the shared lock, sort outside it
    let mut keys = store.keys();
    keys.sort_unstable();
    frame.set_value(Value::from(keys));
    Ok(())
}

fn count(store: &Store, frame: &mut CallFrame) -> Result<()> {
    frame.set_value(Value::Int(store.count() as i64));
    Ok(())
}

fn clear(store: &Store, frame: &mut CallFrame) -> Result<()> {
    store.clear();
    frame.set_value(Value::Void);
    Ok(())
}

// ========== Argument Extraction ==========

/// Narrow the argument at `index` to text
///
/// Error positions are 1-based, matching how embedded-language users count
/// arguments. The registry's arity check guarantees the argument exists for
/// indexes below the declared minimum; a missing argument here means the
/// helper was asked past that and is reported as an arity error.
fn text_arg(frame: &CallFrame, primitive: &str, index: usize) -> Result<String> {
    match frame.arg(index) {
        Some(Value::Text(s)) => Ok(s.clone()),
        Some(other) => Err(Error::WrongType {
            primitive: primitive.to_string(),
            position: index + 1,
            expected: "text",
            actual: other.type_name(),
        }),
        None => Err(Error::Arity {
            primitive: primitive.to_string(),
            expected: format!("at least {}", index + 1),
            got: frame.arg_count(),
        }),
    }
}

/// Optional trailing argument starting at `from`: zero or one value
///
/// Presence decides the not-found policy, not the value itself, so an
/// explicit void default still counts as supplied. Two or more trailing
/// arguments is an arity error.
fn optional_default(frame: &CallFrame, primitive: &str, from: usize) -> Result<Option<Value>> {
    match frame.rest(from) {
        [] => Ok(None),
        [value] => Ok(Some(value.clone())),
        _ => Err(Error::Arity {
            primitive: primitive.to_string(),
            expected: format!("at most {}", from + 1),
            got: frame.arg_count(),
        }),
    }
}
