//! Per-invocation call frame exchanged between host and primitive

use crate::value::Value;

/// One primitive invocation: positional arguments in, one result out
///
/// The host builds a frame for each call, the primitive either fills the
/// output slot or returns an error (never both; the invocation path returns
/// `Result<()>` and only a success writes the slot), and the host consumes
/// the slot afterwards. The frame itself does not enforce arity; the
/// registry checks the declared contract before dispatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallFrame {
    args: Vec<Value>,
    value: Option<Value>,
}

impl CallFrame {
    /// Create a frame carrying the given positional arguments
    pub fn new(args: Vec<Value>) -> Self {
        CallFrame { args, value: None }
    }

    /// Create a frame with no arguments
    pub fn empty() -> Self {
        CallFrame::new(Vec::new())
    }

    /// Number of positional arguments
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Argument at `index`, if present
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    /// Arguments from `from` onward; empty when `from` is past the end
    pub fn rest(&self, from: usize) -> &[Value] {
        self.args.get(from..).unwrap_or(&[])
    }

    /// Write the result value; a later write replaces an earlier one
    pub fn set_value(&mut self, value: Value) {
        self.value = Some(value);
    }

    /// Result value, if the primitive produced one
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Consume the result value, leaving the slot empty
    pub fn take_value(&mut self) -> Option<Value> {
        self.value.take()
    }
}
