//! Host-side array wrapper.
//!
//! [`HostArray`] owns a contiguous, row-major `f32` buffer together with its
//! shape. It is the only type that owns memory handed to the C library;
//! descriptors built from it borrow that memory for one call.

use ndarray::{ArrayD, IxDyn};

use crate::error::{RawcError, Result};

/// A contiguous `f32` array with a dynamic shape.
#[derive(Debug, Clone, PartialEq)]
pub struct HostArray {
    data: ArrayD<f32>,
}

impl HostArray {
    /// Allocate a zero-filled array.
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: ArrayD::zeros(IxDyn(shape)),
        }
    }

    /// Wrap a flat buffer, checking that its length matches the shape.
    pub fn from_shape_vec(shape: &[usize], data: Vec<f32>) -> Result<Self> {
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| RawcError::tensor("element count overflows usize"))?;
        if data.len() != expected {
            return Err(RawcError::SizeMismatch {
                shape: shape.to_vec(),
                expected,
                actual: data.len(),
            });
        }
        let data = ArrayD::from_shape_vec(IxDyn(shape), data)
            .map_err(|e| RawcError::tensor(format!("Array shape error: {}", e)))?;
        Ok(Self { data })
    }

    /// Take ownership of an ndarray, copying it into standard layout if needed.
    pub fn from_array(array: ArrayD<f32>) -> Self {
        let data = if array.is_standard_layout() {
            array
        } else {
            array.as_standard_layout().into_owned()
        };
        Self { data }
    }

    /// Get the shape of the array.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get the number of dimensions.
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Get the total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the array is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the elements in row-major order.
    pub fn as_slice(&self) -> Option<&[f32]> {
        self.data.as_slice()
    }

    /// Copy the elements out in row-major order.
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    /// Borrow the underlying ndarray.
    pub fn as_array(&self) -> &ArrayD<f32> {
        &self.data
    }

    /// Unwrap into the underlying ndarray.
    pub fn into_array(self) -> ArrayD<f32> {
        self.data
    }

    pub(crate) fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut f32 {
        self.data.as_mut_ptr()
    }
}

impl From<ArrayD<f32>> for HostArray {
    fn from(array: ArrayD<f32>) -> Self {
        Self::from_array(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn zeros_matches_shape() {
        let a = HostArray::zeros(&[2, 3]);
        assert_eq!(a.shape(), &[2, 3]);
        assert_eq!(a.len(), 6);
        assert!(a.to_vec().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn scalar_shape_holds_one_element() {
        let a = HostArray::zeros(&[]);
        assert_eq!(a.ndim(), 0);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn from_shape_vec_rejects_wrong_length() {
        let err = HostArray::from_shape_vec(&[2, 2], vec![1.0, 2.0, 3.0]).unwrap_err();
        match err {
            RawcError::SizeMismatch {
                shape,
                expected,
                actual,
            } => {
                assert_eq!(shape, vec![2, 2]);
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_shape_vec_rejects_overflowing_shape() {
        let err = HostArray::from_shape_vec(&[usize::MAX, 2], Vec::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid tensor: element count overflows usize"
        );
    }

    #[test]
    fn from_array_makes_transposed_input_contiguous() {
        let base = Array2::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let transposed = base.reversed_axes().into_dyn();
        assert!(!transposed.is_standard_layout());

        let a = HostArray::from_array(transposed);
        assert_eq!(a.shape(), &[3, 2]);
        assert_eq!(a.as_slice().unwrap(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }
}
