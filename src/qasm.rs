// Copyright (c) 2025 rszyzsynth developers
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! OpenQASM 3 rendering of synthesis results.
//!
//! Both circuit styles share one formatting path parameterized by
//! [`AxisRotation`] records; the decomposition itself never touches text.

use crate::controlled::{AxisRotation, ControlledSynthesisPlan};
use crate::zyz::EulerAngles;

fn header(num_qubits: usize) -> String {
    format!(
        "OPENQASM 3.0;\ninclude \"stdgates.inc\";\n\nqubit[{n}] q;\nbit[{n}] c;\n\n",
        n = num_qubits
    )
}

fn push_rotations(out: &mut String, rotations: &[AxisRotation], qubit: usize) {
    for r in rotations {
        out.push_str(&format!("{}({:.6}) q[{}];\n", r.axis, r.angle, qubit));
    }
}

/// Renders the single-qubit ZYZ circuit. Gates appear in application order
/// (rightmost factor of the decomposition first).
pub fn zyz_qasm(angles: &EulerAngles) -> String {
    let rotations = [
        AxisRotation::rz(angles.lam),
        AxisRotation::ry(angles.theta),
        AxisRotation::rz(angles.phi),
    ];
    let mut out = header(1);
    out.push_str(&format!("gphase({:.6});\n", angles.phase));
    push_rotations(&mut out, &rotations, 0);
    out.push_str("\nmeasure q -> c;\n");
    out
}

/// Renders the two-qubit controlled circuit: A, CNOT, B, CNOT, C on the
/// target q[0], with the conditional phase on the control q[1].
pub fn controlled_qasm(plan: &ControlledSynthesisPlan) -> String {
    let mut out = header(2);
    push_rotations(&mut out, &plan.a, 0);
    out.push_str(&format!("p({:.6}) q[1];\n", plan.phase));
    out.push_str("\ncx q[1], q[0];\n\n");
    push_rotations(&mut out, &plan.b, 0);
    out.push_str("\ncx q[1], q[0];\n\n");
    push_rotations(&mut out, &plan.c, 0);
    out.push_str("\nmeasure q -> c;\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controlled::synthesize_controlled;
    use crate::unitary::SingleQubitUnitary;
    use crate::zyz::zyz_decompose;

    #[test]
    fn test_zyz_qasm_identity() {
        let angles = zyz_decompose(&SingleQubitUnitary::identity());
        let qasm = zyz_qasm(&angles);
        let expected = "OPENQASM 3.0;\n\
                        include \"stdgates.inc\";\n\
                        \n\
                        qubit[1] q;\n\
                        bit[1] c;\n\
                        \n\
                        gphase(0.000000);\n\
                        rz(0.000000) q[0];\n\
                        ry(0.000000) q[0];\n\
                        rz(0.000000) q[0];\n\
                        \n\
                        measure q -> c;\n";
        assert_eq!(qasm, expected);
    }

    #[test]
    fn test_controlled_qasm_structure() {
        let plan = synthesize_controlled(&SingleQubitUnitary::ry(1.25));
        let qasm = controlled_qasm(&plan);
        assert_eq!(qasm.matches("cx q[1], q[0];").count(), 2);
        assert_eq!(qasm.matches("p(").count(), 1);
        assert!(qasm.starts_with("OPENQASM 3.0;\n"));
        assert!(qasm.contains("qubit[2] q;"));
        assert!(qasm.ends_with("measure q -> c;\n"));
        // A contributes rz then ry, B contributes ry then rz, C one rz.
        assert_eq!(qasm.matches(") q[0];").count(), 5);
    }
}
