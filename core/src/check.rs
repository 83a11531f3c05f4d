//! Native library self-check.
//!
//! Runs every primitive on fixed inputs with known results. Used by
//! `rawc-rs check` to confirm the linked C library behaves.

use tracing::{debug, warn};

use crate::array::HostArray;
use crate::error::Result;
use crate::primitives::Primitive;

/// Outcome of one reference computation.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub op: Primitive,
    pub expected: Vec<f32>,
    pub actual: Vec<f32>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

fn reference_case(op: Primitive) -> ([f32; 4], [f32; 4], [f32; 4]) {
    match op {
        Primitive::Add => (
            [1.0, 2.0, 3.0, 4.0],
            [10.0, 20.0, 30.0, 40.0],
            [11.0, 22.0, 33.0, 44.0],
        ),
        Primitive::Multiplication => (
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 2.0, 2.0, 2.0],
            [2.0, 4.0, 6.0, 8.0],
        ),
    }
}

/// Run every primitive on its reference inputs.
pub fn run_checks() -> Result<Vec<CheckOutcome>> {
    Primitive::ALL
        .into_iter()
        .map(|op| {
            let (left, right, expected) = reference_case(op);
            let left = HostArray::from_shape_vec(&[4], left.to_vec())?;
            let right = HostArray::from_shape_vec(&[4], right.to_vec())?;
            let actual = op.call(&left, &right)?.to_vec();

            let outcome = CheckOutcome {
                op,
                expected: expected.to_vec(),
                actual,
            };
            if outcome.passed() {
                debug!("check {} ok", op);
            } else {
                warn!(
                    "check {} failed: expected {:?}, got {:?}",
                    op, outcome.expected, outcome.actual
                );
            }
            Ok(outcome)
        })
        .collect()
}

/// Render outcomes as one line per primitive.
pub fn report(outcomes: &[CheckOutcome]) -> String {
    outcomes
        .iter()
        .map(|o| {
            let status = if o.passed() { "OK" } else { "FAILED" };
            format!("{:<16} {:<6} {:?}", o.op.name(), status, o.actual)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
