//! Elementwise primitives.
//!
//! This module provides FFI bindings to the raw C ops library, the safe
//! wrappers that marshal [`HostArray`](crate::HostArray) operands across that
//! boundary, and a name-based registry for dispatch.

mod descriptor;
mod dispatch;
mod ffi;
mod ops;

pub use dispatch::{registry, Primitive, PrimitiveFn, Registry};
pub use ops::{add, multiplication};
