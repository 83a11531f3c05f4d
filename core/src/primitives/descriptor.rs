//! Borrowed buffer descriptors for the C boundary.
//!
//! A descriptor aliases the buffer of a [`HostArray`] for the duration of one
//! native call. It owns only the `int` shape and stride tables it points at;
//! the element buffer stays owned by the host array and is never freed here.

use std::marker::PhantomData;
use std::os::raw::c_int;

use super::ffi;
use crate::array::HostArray;
use crate::error::{RawcError, Result};

/// Shape, strides and element count converted to C `int`s.
#[derive(Debug)]
struct CLayout {
    shape: Vec<c_int>,
    strides: Vec<c_int>,
    size: c_int,
}

impl CLayout {
    fn new(shape: &[usize]) -> Result<Self> {
        // The C iterator needs at least one dimension; a scalar is [1].
        let dims: &[usize] = if shape.is_empty() { &[1] } else { shape };

        let shape = dims
            .iter()
            .map(|&d| to_c_int(d, "dimension"))
            .collect::<Result<Vec<_>>>()?;

        let mut strides = vec![1 as c_int; shape.len()];
        for i in (0..shape.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1]
                .checked_mul(shape[i + 1].max(1))
                .ok_or_else(|| RawcError::tensor("stride overflows C int"))?;
        }

        let size = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| RawcError::tensor("element count overflows usize"))?;
        let size = to_c_int(size, "element count")?;

        Ok(Self {
            shape,
            strides,
            size,
        })
    }

    fn raw(&self, data: *mut f32) -> ffi::Array {
        ffi::Array {
            data,
            shape: self.shape.as_ptr(),
            strides: self.strides.as_ptr(),
            ndim: self.shape.len() as c_int,
            size: self.size,
        }
    }
}

fn to_c_int(value: usize, what: &str) -> Result<c_int> {
    c_int::try_from(value)
        .map_err(|_| RawcError::tensor(format!("{} {} does not fit in a C int", what, value)))
}

/// Read-only view of an operand.
#[derive(Debug)]
pub(super) struct InputDescriptor<'a> {
    raw: ffi::Array,
    _layout: CLayout,
    _borrow: PhantomData<&'a [f32]>,
}

impl<'a> InputDescriptor<'a> {
    /// Describe `array` for the C side. `role` names the operand in errors.
    pub(super) fn new(array: &'a HostArray, role: &'static str) -> Result<Self> {
        let data = array.as_ptr();
        if data.is_null() {
            return Err(RawcError::NullPointer(role));
        }
        let layout = CLayout::new(array.shape())?;
        // The C signatures are not const-qualified but never write inputs.
        let raw = layout.raw(data as *mut f32);
        Ok(Self {
            raw,
            _layout: layout,
            _borrow: PhantomData,
        })
    }

    pub(super) fn as_raw(&mut self) -> *mut ffi::Array {
        &mut self.raw
    }
}

/// Writable view of a freshly allocated output.
#[derive(Debug)]
pub(super) struct OutputDescriptor<'a> {
    raw: ffi::Array,
    _layout: CLayout,
    _borrow: PhantomData<&'a mut [f32]>,
}

impl<'a> OutputDescriptor<'a> {
    pub(super) fn new(array: &'a mut HostArray) -> Result<Self> {
        let layout = CLayout::new(array.shape())?;
        let data = array.as_mut_ptr();
        if data.is_null() {
            return Err(RawcError::NullPointer("output"));
        }
        let raw = layout.raw(data);
        Ok(Self {
            raw,
            _layout: layout,
            _borrow: PhantomData,
        })
    }

    pub(super) fn as_raw(&mut self) -> *mut ffi::Array {
        &mut self.raw
    }
}
