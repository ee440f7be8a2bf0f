// Copyright (c) 2025 rszyzsynth developers
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::common::{expi, C64};
use crate::config::{SynthConfig, SynthResult};
use crate::qasm::controlled_qasm;
use crate::unitary::SingleQubitUnitary;
use crate::zyz::{zyz_decompose, EulerAngles};
use log::debug;
use nalgebra::{Matrix2, Matrix4, Vector4};
use num_traits::{One, Zero};
use std::fmt::{Display, Formatter, Result};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rz,
    Ry,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Axis::Rz => write!(f, "rz"),
            Axis::Ry => write!(f, "ry"),
        }
    }
}

/// A single-axis rotation, the building block of the A/B/C sub-operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRotation {
    pub axis: Axis,
    pub angle: f64,
}

impl AxisRotation {
    pub fn rz(angle: f64) -> Self {
        Self {
            axis: Axis::Rz,
            angle,
        }
    }

    pub fn ry(angle: f64) -> Self {
        Self {
            axis: Axis::Ry,
            angle,
        }
    }

    pub fn to_unitary(&self) -> SingleQubitUnitary {
        match self.axis {
            Axis::Rz => SingleQubitUnitary::rz(self.angle),
            Axis::Ry => SingleQubitUnitary::ry(self.angle),
        }
    }
}

/// The A/B/C sub-operations and conditional phase of the Euler-based
/// controlled-gate construction. Rotations are listed in circuit application
/// order; interleaving them with two CNOTs and a `p(phase)` on the control
/// line reproduces `diag-block(I, U)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlledSynthesisPlan {
    pub a: [AxisRotation; 2],
    pub b: [AxisRotation; 2],
    pub c: [AxisRotation; 1],
    pub phase: f64,
}

/// Recombines the ZYZ angles of `u` into the A/B/C sub-operations:
/// `A = Ry(theta/2) Rz(lam)`, `B = Rz(-(phi+lam)/2) Ry(-theta/2)`,
/// `C = Rz((phi-lam)/2)`, with the extracted global phase carried on the
/// control line. Pure algebra on top of [`zyz_decompose`]; no singular cases
/// of its own.
pub fn synthesize_controlled(u: &SingleQubitUnitary) -> ControlledSynthesisPlan {
    let EulerAngles {
        theta,
        phi,
        lam,
        phase,
    } = zyz_decompose(u);

    ControlledSynthesisPlan {
        a: [AxisRotation::rz(lam), AxisRotation::ry(theta / 2.0)],
        b: [
            AxisRotation::ry(-theta / 2.0),
            AxisRotation::rz(-(phi + lam) / 2.0),
        ],
        c: [AxisRotation::rz((phi - lam) / 2.0)],
        phase,
    }
}

/// Product of rotations in circuit application order (later rotations
/// multiply from the left).
fn segment(rotations: &[AxisRotation]) -> SingleQubitUnitary {
    rotations
        .iter()
        .fold(SingleQubitUnitary::identity(), |acc, r| {
            r.to_unitary().mul(&acc)
        })
}

/// Embeds a target-qubit operation into the two-qubit space, with the
/// control qubit as the most significant bit.
fn on_target(u: &SingleQubitUnitary) -> Matrix4<C64> {
    Matrix2::identity().kronecker(u.matrix())
}

fn cnot() -> Matrix4<C64> {
    let zero = C64::zero();
    let one = C64::one();
    Matrix4::new(
        one, zero, zero, zero, //
        zero, one, zero, zero, //
        zero, zero, zero, one, //
        zero, zero, one, zero,
    )
}

impl ControlledSynthesisPlan {
    /// Full 4x4 operator of the synthesized sequence: A, CNOT, B, CNOT, C on
    /// the target plus `p(phase)` on the control.
    pub fn to_matrix(&self) -> Matrix4<C64> {
        let a = on_target(&segment(&self.a));
        let b = on_target(&segment(&self.b));
        let c = on_target(&segment(&self.c));
        let one = C64::one();
        let ph = expi(self.phase);
        let control_phase = Matrix4::from_diagonal(&Vector4::new(one, one, ph, ph));
        c * cnot() * b * cnot() * a * control_phase
    }
}

/// Synthesizes the controlled version of `u` and renders the two-qubit
/// circuit text.
///
/// When `config.check_solution` is set, the full 4x4 operator of the plan is
/// compared entrywise against `diag-block(I, u)` within `config.atol`.
pub fn controlled_circuit(u: &SingleQubitUnitary, config: &SynthConfig) -> SynthResult {
    let start = config.measure_time.then(Instant::now);

    let angles = zyz_decompose(u);
    let plan = synthesize_controlled(u);
    let qasm = controlled_qasm(&plan);

    let is_correct = config.check_solution.then(|| {
        let expected = controlled_embedding(u);
        let distance = matrix4_distance(&plan.to_matrix(), &expected);
        distance < config.atol
    });

    if let Some(start_time) = start {
        debug!(
            "time of controlled_circuit: {:.3} ms",
            start_time.elapsed().as_secs_f64() * 1000.0
        );
    }

    SynthResult {
        qasm,
        angles,
        is_correct,
    }
}

/// The target operator `diag-block(I, U)`: identity when the control is |0>,
/// `U` on the target when the control is |1>.
pub fn controlled_embedding(u: &SingleQubitUnitary) -> Matrix4<C64> {
    let zero = C64::zero();
    let one = C64::one();
    let m = u.matrix();
    Matrix4::new(
        one,
        zero,
        zero,
        zero,
        zero,
        one,
        zero,
        zero,
        zero,
        zero,
        m[(0, 0)],
        m[(0, 1)],
        zero,
        zero,
        m[(1, 0)],
        m[(1, 1)],
    )
}

/// Maximum entrywise deviation between two 4x4 operators.
pub fn matrix4_distance(a: &Matrix4<C64>, b: &Matrix4<C64>) -> f64 {
    (a - b).iter().map(|c| c.norm()).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_identity_when_control_unset() {
        // A, B, C multiply to the identity on the target.
        let plan = synthesize_controlled(&crate::unitary::HADAMARD);
        let product = segment(&plan.c)
            .mul(&segment(&plan.b))
            .mul(&segment(&plan.a));
        assert!(
            product.approx_eq(&SingleQubitUnitary::identity(), 1e-10),
            "A*B*C differs from identity by {}",
            product.distance(&SingleQubitUnitary::identity())
        );
    }

    #[test]
    fn test_controlled_pauli_x_is_cnot() {
        let plan = synthesize_controlled(&crate::unitary::PAULI_X);
        let distance = matrix4_distance(&plan.to_matrix(), &cnot());
        assert!(distance < 1e-10, "distance from CNOT = {}", distance);
    }
}
