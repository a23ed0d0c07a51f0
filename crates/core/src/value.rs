//! Dynamic values crossing the host boundary
//!
//! This module defines:
//! - Value: the dynamically-typed value exchanged between host and primitive
//!
//! ## Value Model
//!
//! The Value enum has exactly 7 variants:
//! - Void, Bool, Int, Float, Text, Symbol, List
//!
//! `Void` is an explicit "no value" marker, not an absence: primitives with
//! no meaningful result still populate the output slot with it so the host
//! can tell "ran and produced nothing" from "never ran".
//!
//! ### Type Rules
//!
//! - No implicit coercions: `Int(1) != Float(1.0)`
//! - `Text` and `Symbol` are distinct even for equal contents
//! - Float equality follows IEEE-754: `NaN != NaN`, `-0.0 == 0.0`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dynamically-typed value exchanged between a host runtime and a primitive
///
/// Within this extension only `Text`, `List` of `Text`, `Int`, and `Void`
/// actually cross the boundary, but the contract models the host's full
/// scalar vocabulary so type errors can name what arrived.
///
/// ## Type Equality
///
/// Different variants are NEVER equal, even when the payloads look alike:
/// - `Int(1) != Float(1.0)`
/// - `Symbol("x") != Text("x")`
///
/// Float equality follows IEEE-754 semantics:
/// - `NaN != NaN`
/// - `-0.0 == 0.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Explicit "no value" marker
    Void,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 text
    Text(String),
    /// Interned-style identifier, distinct from text
    Symbol(String),
    /// Ordered sequence of values
    List(Vec<Value>),
}

// Custom PartialEq for IEEE-754 float semantics
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Void, Value::Void) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // Different variants are never equal
            _ => false,
        }
    }
}

impl Value {
    /// Get the type name as used in diagnostics and type errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Void => "void",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
        }
    }

    /// Check if this is the void marker
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Check if this is a boolean value
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if this is a float value
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if this is a text value
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Check if this is a symbol value
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Check if this is a list value
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a Text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &str if this is a Symbol value
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[Value] if this is a List value
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }
}

// Rendered the way an embedded-language REPL would print it
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "#<void>"),
            Value::Bool(true) => write!(f, "#t"),
            Value::Bool(false) => write!(f, "#f"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<Vec<String>> for Value {
    fn from(l: Vec<String>) -> Self {
        Value::List(l.into_iter().map(Value::Text).collect())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Void
    }
}
