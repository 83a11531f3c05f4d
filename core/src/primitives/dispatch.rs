//! Name-based dispatch table for the elementwise primitives.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::ffi;
use super::ops;
use crate::array::HostArray;
use crate::error::{RawcError, Result};

/// Signature of every registered primitive.
pub type PrimitiveFn = fn(&HostArray, &HostArray) -> Result<HostArray>;

/// Elementwise primitives backed by the C library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Elementwise addition.
    Add,
    /// Elementwise multiplication.
    Multiplication,
}

impl Primitive {
    /// Every primitive, in declaration order.
    pub const ALL: [Primitive; 2] = [Primitive::Add, Primitive::Multiplication];

    /// Dispatch name, identical to the C entry point name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiplication => "multiplication",
        }
    }

    /// The safe wrapper for this primitive.
    pub fn func(&self) -> PrimitiveFn {
        match self {
            Self::Add => ops::add,
            Self::Multiplication => ops::multiplication,
        }
    }

    /// Run this primitive.
    pub fn call(&self, left: &HostArray, right: &HostArray) -> Result<HostArray> {
        (self.func())(left, right)
    }

    pub(super) fn kernel(&self) -> ffi::BinaryKernel {
        match self {
            Self::Add => ffi::add,
            Self::Multiplication => ffi::multiplication,
        }
    }
}

impl FromStr for Primitive {
    type Err = RawcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| RawcError::UnknownOp(s.to_string()))
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapping from operation name to callable.
#[derive(Clone)]
pub struct Registry {
    table: HashMap<&'static str, PrimitiveFn>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish()
    }
}

impl Registry {
    /// Build the table of all primitives.
    pub fn primitives() -> Self {
        let table = Primitive::ALL
            .into_iter()
            .map(|p| (p.name(), p.func()))
            .collect();
        Self { table }
    }

    /// Look up a primitive by name.
    pub fn get(&self, name: &str) -> Option<PrimitiveFn> {
        self.table.get(name).copied()
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.table.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered primitives.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Look up `name` and run it on the operands.
    ///
    /// # Errors
    ///
    /// Returns [`RawcError::UnknownOp`] if nothing is registered under `name`,
    /// otherwise whatever the primitive returns.
    pub fn dispatch(&self, name: &str, left: &HostArray, right: &HostArray) -> Result<HostArray> {
        let func = self
            .get(name)
            .ok_or_else(|| RawcError::UnknownOp(name.to_string()))?;
        func(left, right)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::primitives()
    }
}

/// Process-wide registry, built on first use.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::primitives)
}
