//! FFI declarations for the raw C ops library.
//!
//! This module contains the raw FFI bindings. Use the safe wrappers
//! in the `ops` module instead of calling these directly.

use std::os::raw::c_int;

/// Buffer descriptor shared with `raw_c/include/array.h`.
///
/// Every pointer is borrowed. The C side never frees them and neither does
/// this struct.
#[repr(C)]
#[derive(Debug)]
pub struct Array {
    pub data: *mut f32,
    pub shape: *const c_int,
    pub strides: *const c_int,
    pub ndim: c_int,
    pub size: c_int,
}

/// Signature shared by every binary elementwise entry point.
pub type BinaryKernel = unsafe extern "C" fn(output: *mut Array, left: *mut Array, right: *mut Array);

extern "C" {
    // Elementwise binary ops, output first
    pub fn add(output: *mut Array, left: *mut Array, right: *mut Array);
    pub fn multiplication(output: *mut Array, left: *mut Array, right: *mut Array);
}
