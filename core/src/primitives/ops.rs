//! Safe wrappers around the raw C elementwise kernels.
//!
//! Each wrapper checks that both operands share a shape, allocates a
//! zero-filled output with the left operand's shape, and lets the C kernel
//! fill it in place. No arithmetic happens on the Rust side.

use tracing::trace;

use super::descriptor::{InputDescriptor, OutputDescriptor};
use super::dispatch::Primitive;
use crate::array::HostArray;
use crate::error::{RawcError, Result};

/// Elementwise `left + right`.
///
/// # Errors
///
/// Returns [`RawcError::ShapeMismatch`] if the operand shapes differ.
///
/// # Example
///
/// ```ignore
/// use rawc_rs::{add, HostArray};
///
/// let left = HostArray::from_shape_vec(&[4], vec![1.0, 2.0, 3.0, 4.0])?;
/// let right = HostArray::from_shape_vec(&[4], vec![10.0, 20.0, 30.0, 40.0])?;
/// assert_eq!(add(&left, &right)?.to_vec(), vec![11.0, 22.0, 33.0, 44.0]);
/// ```
pub fn add(left: &HostArray, right: &HostArray) -> Result<HostArray> {
    elementwise(Primitive::Add, left, right)
}

/// Elementwise `left * right`.
///
/// # Errors
///
/// Returns [`RawcError::ShapeMismatch`] if the operand shapes differ.
pub fn multiplication(left: &HostArray, right: &HostArray) -> Result<HostArray> {
    elementwise(Primitive::Multiplication, left, right)
}

fn elementwise(op: Primitive, left: &HostArray, right: &HostArray) -> Result<HostArray> {
    if left.shape() != right.shape() {
        return Err(RawcError::shape_mismatch(left.shape(), right.shape()));
    }

    // The C backend takes the output as its first argument
    let mut output = HostArray::zeros(left.shape());
    trace!(op = %op, shape = ?left.shape(), "calling raw_c kernel");

    {
        let mut left_c = InputDescriptor::new(left, "left")?;
        let mut right_c = InputDescriptor::new(right, "right")?;
        let mut output_c = OutputDescriptor::new(&mut output)?;
        let kernel = op.kernel();

        // SAFETY: all three descriptors describe live, contiguous buffers of
        // the same shape, and `output` is a fresh allocation that aliases
        // neither input.
        unsafe {
            kernel(output_c.as_raw(), left_c.as_raw(), right_c.as_raw());
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn array(shape: &[usize], data: &[f32]) -> HostArray {
        HostArray::from_shape_vec(shape, data.to_vec()).unwrap()
    }

    #[test]
    fn add_reference_vector() {
        let out = add(
            &array(&[4], &[1.0, 2.0, 3.0, 4.0]),
            &array(&[4], &[10.0, 20.0, 30.0, 40.0]),
        )
        .unwrap();
        assert_eq!(out.shape(), &[4]);
        assert_eq!(out.to_vec(), vec![11.0, 22.0, 33.0, 44.0]);
    }

    #[test]
    fn multiplication_reference_vector() {
        let out = multiplication(
            &array(&[4], &[1.0, 2.0, 3.0, 4.0]),
            &array(&[4], &[2.0, 2.0, 2.0, 2.0]),
        )
        .unwrap();
        assert_eq!(out.to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn matrix_shape_is_preserved() {
        let left = array(&[2, 3], &[0.5, 1.5, 2.5, -1.0, -2.0, -3.0]);
        let right = array(&[2, 3], &[0.25, 0.25, 0.25, 4.0, 4.0, 4.0]);

        let sum = add(&left, &right).unwrap();
        assert_eq!(sum.shape(), &[2, 3]);
        for (v, exp) in sum.to_vec().iter().zip([0.75, 1.75, 2.75, 3.0, 2.0, 1.0]) {
            assert_abs_diff_eq!(*v, exp, epsilon = 1e-6);
        }

        let product = multiplication(&left, &right).unwrap();
        assert_eq!(product.shape(), &[2, 3]);
        for (v, exp) in product.to_vec().iter().zip([0.125, 0.375, 0.625, -4.0, -8.0, -12.0]) {
            assert_abs_diff_eq!(*v, exp, epsilon = 1e-6);
        }
    }

    #[test]
    fn scalar_operands() {
        let out = multiplication(&array(&[], &[3.0]), &array(&[], &[-2.0])).unwrap();
        assert_eq!(out.ndim(), 0);
        assert_eq!(out.to_vec(), vec![-6.0]);
    }

    #[test]
    fn empty_operands_give_empty_output() {
        let out = add(&HostArray::zeros(&[0, 5]), &HostArray::zeros(&[0, 5])).unwrap();
        assert_eq!(out.shape(), &[0, 5]);
        assert!(out.is_empty());
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let err = add(&HostArray::zeros(&[4]), &HostArray::zeros(&[2, 2])).unwrap_err();
        match err {
            RawcError::ShapeMismatch { left, right } => {
                assert_eq!(left, vec![4]);
                assert_eq!(right, vec![2, 2]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn output_does_not_alias_inputs() {
        let left = array(&[3], &[1.0, 2.0, 3.0]);
        let right = array(&[3], &[4.0, 5.0, 6.0]);
        let out = add(&left, &right).unwrap();

        assert_ne!(out.as_ptr(), left.as_ptr());
        assert_ne!(out.as_ptr(), right.as_ptr());
        // Inputs are left untouched
        assert_eq!(left.to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(right.to_vec(), vec![4.0, 5.0, 6.0]);
    }
}
