//! Primitive declarations, load phases, and the dispatch registry
//!
//! This module defines:
//! - PrimitiveSpec: one callable primitive's declaration (name, arity
//!   contract, implementation, documentation)
//! - Phase: the load stage a primitive is installed at
//! - Registry: the host-side namespace mapping names to installed primitives
//!
//! The registry enforces the declared arity before dispatching, so an
//! implementation never sees fewer arguments than its declared minimum, nor
//! extras unless it declared itself variadic.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::frame::CallFrame;

/// Shared handle to a primitive implementation
pub type PrimitiveImpl = Arc<dyn Fn(&mut CallFrame) -> Result<()> + Send + Sync>;

/// Load stage a primitive is installed at
///
/// Ordinary callable primitives are installed at [`Phase::Runtime`]. The
/// earlier stages exist for hosts that install reader syntax or macro
/// transformers before evaluation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Reader/syntax stage
    Syntax,
    /// Macro-expansion stage
    Macro,
    /// Evaluation stage; ordinary primitives live here
    Runtime,
}

/// Declaration of one callable primitive
///
/// Built with [`PrimitiveSpec::new`] plus the `with_*` builder methods, then
/// handed to [`Registry::add_primitives`] in a batch. The implementation
/// closure typically captures a shared handle to whatever state the
/// primitive operates on.
#[derive(Clone)]
pub struct PrimitiveSpec {
    name: String,
    min_args: usize,
    variadic: bool,
    run: PrimitiveImpl,
    doc: String,
    param_names: Vec<String>,
    category: String,
}

impl PrimitiveSpec {
    /// Declare a primitive with its name, minimum arity, and implementation
    pub fn new<F>(name: impl Into<String>, min_args: usize, run: F) -> Self
    where
        F: Fn(&mut CallFrame) -> Result<()> + Send + Sync + 'static,
    {
        PrimitiveSpec {
            name: name.into(),
            min_args,
            variadic: false,
            run: Arc::new(run),
            doc: String::new(),
            param_names: Vec::new(),
            category: String::new(),
        }
    }

    /// Accept arguments beyond the declared minimum
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Attach a one-line documentation string
    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = doc.to_string();
        self
    }

    /// Declare parameter names, for help output
    pub fn with_params(mut self, names: &[&str]) -> Self {
        self.param_names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Tag the primitive with a category
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Primitive name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum number of arguments
    pub fn min_args(&self) -> usize {
        self.min_args
    }

    /// Whether arguments beyond the minimum are accepted
    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Documentation string (empty if none was attached)
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Declared parameter names
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Category tag (empty if none was attached)
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl fmt::Debug for PrimitiveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveSpec")
            .field("name", &self.name)
            .field("min_args", &self.min_args)
            .field("variadic", &self.variadic)
            .field("doc", &self.doc)
            .field("param_names", &self.param_names)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
struct Installed {
    spec: PrimitiveSpec,
    phase: Phase,
}

/// Host-side namespace of callable primitives
///
/// Extensions install their declaration tables with
/// [`Registry::add_primitives`]; the host dispatches calls with
/// [`Registry::invoke`]. Introspection methods never mutate.
#[derive(Debug, Default)]
pub struct Registry {
    primitives: HashMap<String, Installed>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Registry::default()
    }

    /// Install a batch of primitives at the given phase
    ///
    /// The whole batch is checked before anything is installed: a name that
    /// is already registered, or that appears twice within the batch, rejects
    /// the batch with [`Error::DuplicatePrimitive`] and the registry is left
    /// unchanged.
    pub fn add_primitives(&mut self, specs: Vec<PrimitiveSpec>, phase: Phase) -> Result<()> {
        for (i, spec) in specs.iter().enumerate() {
            let name = spec.name();
            if self.primitives.contains_key(name)
                || specs[..i].iter().any(|earlier| earlier.name() == name)
            {
                return Err(Error::DuplicatePrimitive {
                    name: name.to_string(),
                });
            }
        }
        for spec in specs {
            let name = spec.name().to_string();
            self.primitives.insert(name, Installed { spec, phase });
        }
        Ok(())
    }

    /// Dispatch a call to the named primitive
    ///
    /// Checks the declared arity first; the implementation is never entered
    /// for an unknown name or an argument count outside the contract.
    pub fn invoke(&self, name: &str, frame: &mut CallFrame) -> Result<()> {
        let installed = self.primitives.get(name).ok_or_else(|| Error::UnknownPrimitive {
            name: name.to_string(),
        })?;
        let spec = &installed.spec;

        let got = frame.arg_count();
        if got < spec.min_args || (!spec.variadic && got > spec.min_args) {
            let expected = if spec.variadic {
                format!("at least {}", spec.min_args)
            } else {
                format!("exactly {}", spec.min_args)
            };
            return Err(Error::Arity {
                primitive: spec.name.clone(),
                expected,
                got,
            });
        }

        (spec.run)(frame)
    }

    /// Declaration for `name`, if registered
    pub fn get(&self, name: &str) -> Option<&PrimitiveSpec> {
        self.primitives.get(name).map(|installed| &installed.spec)
    }

    /// Phase `name` was installed at, if registered
    pub fn phase(&self, name: &str) -> Option<Phase> {
        self.primitives.get(name).map(|installed| installed.phase)
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.primitives.contains_key(name)
    }

    /// All registered names, sorted ascending
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.primitives.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered primitives
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the registry has no primitives
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
