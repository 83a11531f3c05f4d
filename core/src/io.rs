//! JSON encoding of arrays for the CLI.
//!
//! Arrays travel as `{"data": [...], "shape": [...]}` with `data` in
//! row-major order. Values are read as `f64` and must fit in `f32`; anything
//! larger in magnitude is rejected rather than rounded to infinity.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::array::HostArray;
use crate::error::{RawcError, Result};

/// Serialized form of a [`HostArray`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayFile {
    pub data: Vec<f64>,
    pub shape: Vec<usize>,
}

impl ArrayFile {
    /// Validate and convert into a host array.
    pub fn into_host(self) -> Result<HostArray> {
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &v)| to_f32(i, v))
            .collect::<Result<Vec<_>>>()?;
        HostArray::from_shape_vec(&self.shape, data)
    }
}

fn to_f32(index: usize, value: f64) -> Result<f32> {
    if value.is_finite() && value.abs() > f32::MAX as f64 {
        return Err(RawcError::tensor(format!(
            "data[{}] = {} does not fit in f32",
            index, value
        )));
    }
    Ok(value as f32)
}

impl From<&HostArray> for ArrayFile {
    fn from(array: &HostArray) -> Self {
        Self {
            data: array.to_vec().into_iter().map(f64::from).collect(),
            shape: array.shape().to_vec(),
        }
    }
}

/// Result of one dispatched operation, as printed by `rawc-rs run`.
#[derive(Debug, Serialize)]
pub struct RunOutput<'a> {
    pub op: &'a str,
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

impl<'a> RunOutput<'a> {
    pub fn new(op: &'a str, result: &HostArray) -> Self {
        Self {
            op,
            shape: result.shape().to_vec(),
            data: result.to_vec(),
        }
    }
}

/// Parse an array from a JSON string.
pub fn array_from_json(json: &str) -> Result<HostArray> {
    let file: ArrayFile = serde_json::from_str(json)?;
    file.into_host()
}

/// Read an array from a JSON file.
pub fn read_array(path: impl AsRef<Path>) -> Result<HostArray> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RawcError::FileNotFound(path.to_path_buf()));
    }
    array_from_json(&std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_and_shape() {
        let a = array_from_json(r#"{"data": [1, 2, 3, 4, 5, 6], "shape": [3, 2]}"#).unwrap();
        assert_eq!(a.shape(), &[3, 2]);
        assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn inconsistent_shape_is_rejected() {
        let err = array_from_json(r#"{"data": [1, 2, 3], "shape": [2, 2]}"#).unwrap_err();
        assert!(matches!(err, RawcError::SizeMismatch { .. }));
    }

    #[test]
    fn overflowing_shape_is_an_error_not_a_panic() {
        let err = array_from_json(r#"{"data": [], "shape": [4294967296, 4294967296]}"#)
            .unwrap_err();
        assert!(matches!(err, RawcError::Tensor(_)));
        assert_eq!(err.to_string(), "Invalid tensor: element count overflows usize");
    }

    #[test]
    fn values_outside_f32_range_are_rejected() {
        let err = array_from_json(r#"{"data": [1.0, 1e40], "shape": [2]}"#).unwrap_err();
        assert!(matches!(err, RawcError::Tensor(_)));
        assert!(err.to_string().contains("data[1]"));

        let err = array_from_json(r#"{"data": [-1e39], "shape": [1]}"#).unwrap_err();
        assert!(matches!(err, RawcError::Tensor(_)));
    }

    #[test]
    fn f32_extremes_are_accepted() {
        let json = format!(
            r#"{{"data": [{}, {}], "shape": [2]}}"#,
            f64::from(f32::MAX),
            f64::from(f32::MIN)
        );
        let a = array_from_json(&json).unwrap();
        assert_eq!(a.to_vec(), vec![f32::MAX, f32::MIN]);
    }

    #[test]
    fn missing_field_is_a_json_error() {
        let err = array_from_json(r#"{"data": [1.0]}"#).unwrap_err();
        assert!(matches!(err, RawcError::Json(_)));
    }

    #[test]
    fn run_output_serializes_result() {
        let result = HostArray::from_shape_vec(&[2], vec![1.5, -2.0]).unwrap();
        let json = serde_json::to_value(RunOutput::new("add", &result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"op": "add", "shape": [2], "data": [1.5, -2.0]})
        );
    }
}
