//! rawc-rs: Rust bindings for the raw C elementwise ops library.
//!
//! The numeric work is done entirely by a small C library (`raw_c/`) that
//! takes its output buffer as the first argument. This crate owns the
//! buffers, builds borrowed descriptors for the C side, checks shapes before
//! every call, and exposes the operations by name.
//!
//! # Example
//!
//! ```ignore
//! use rawc_rs::{registry, HostArray};
//!
//! let left = HostArray::from_shape_vec(&[4], vec![1.0, 2.0, 3.0, 4.0])?;
//! let right = HostArray::from_shape_vec(&[4], vec![2.0, 2.0, 2.0, 2.0])?;
//!
//! let out = registry().dispatch("multiplication", &left, &right)?;
//! assert_eq!(out.to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
//! ```
//!
//! # Building
//!
//! The build script compiles `raw_c/src/ops.c` with the system C compiler.
//!
//! ```bash
//! cargo build --release
//!
//! # Optimize the C side independently
//! RAWC_OPT_LEVEL=3 cargo build
//! ```

pub mod array;
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod primitives;

// Re-export commonly used types
pub use array::HostArray;
pub use error::{RawcError, Result};
pub use primitives::{add, multiplication, registry, Primitive, PrimitiveFn, Registry};
