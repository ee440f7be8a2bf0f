// Copyright (c) 2025 rszyzsynth developers
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::common::{expi, DEGENERACY_EPS};
use crate::config::{SynthConfig, SynthResult};
use crate::qasm::zyz_qasm;
use crate::unitary::SingleQubitUnitary;
use log::debug;
use std::f64::consts::PI;
use std::time::Instant;

/// Angles of the ZYZ Euler decomposition
/// `U = e^(i*phase) * Rz(phi) * Ry(theta) * Rz(lam)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    pub theta: f64,
    pub phi: f64,
    pub lam: f64,
    pub phase: f64,
}

impl EulerAngles {
    /// Reconstructs the unitary described by the angles.
    pub fn to_unitary(&self) -> SingleQubitUnitary {
        SingleQubitUnitary::rz(self.phi)
            .mul(&SingleQubitUnitary::ry(self.theta))
            .mul(&SingleQubitUnitary::rz(self.lam))
            .scale(expi(self.phase))
    }
}

/// Extracts the ZYZ Euler angles of a single-qubit unitary.
///
/// The input is assumed to be unitary; near-unitary inputs give best-effort
/// results and never panic. The extraction has two singular configurations
/// (theta near 0 and theta near pi) where only a combination of `phi` and
/// `lam` is determined; each gets its own closed-form branch with the
/// convention `lam = 0`, guarded by [`DEGENERACY_EPS`] so the generic branch
/// never divides by a vanishing trigonometric term.
pub fn zyz_decompose(u: &SingleQubitUnitary) -> EulerAngles {
    let det = u.det();
    let phase = det.arg() / 2.0;

    // Only two entries of the phase-normalized matrix are consulted; the
    // other two are fixed by unitarity.
    let u00 = u.entry(0, 0) * expi(-phase);
    let u10 = u.entry(1, 0) * expi(-phase);

    // |u00| = cos(theta/2) and |u10| = sin(theta/2). atan2 keeps the angle
    // exact at both poles, where acos(|u00|) would amplify a 1-ulp magnitude
    // error to ~1e-8 and skip the degenerate branches.
    let theta = 2.0 * u10.norm().atan2(u00.norm());

    let (phi, lam) = if theta.abs() < DEGENERACY_EPS {
        // Pure Z-rotation: u00 = e^(-i*phi/2), only phi + lam is determined.
        debug!("zyz: degenerate branch theta ~ 0");
        (-2.0 * u00.arg(), 0.0)
    } else if (theta - PI).abs() < DEGENERACY_EPS {
        // Ry(pi) times a Z-rotation: u10 = e^(i*phi/2), only phi - lam is
        // determined.
        debug!("zyz: degenerate branch theta ~ pi");
        (2.0 * u10.arg(), 0.0)
    } else {
        let half = theta / 2.0;
        let phase_sum = -2.0 * (u00 / half.cos()).arg();
        let phase_diff = 2.0 * (u10 / half.sin()).arg();
        ((phase_sum + phase_diff) / 2.0, (phase_sum - phase_diff) / 2.0)
    };

    EulerAngles {
        theta,
        phi,
        lam,
        phase,
    }
}

/// Decomposes `u` and renders the single-qubit circuit text.
///
/// When `config.check_solution` is set, the angles are fed back through the
/// reconstruction and compared entrywise against the input within
/// `config.atol`.
pub fn zyz_circuit(u: &SingleQubitUnitary, config: &SynthConfig) -> SynthResult {
    let start = config.measure_time.then(Instant::now);

    let angles = zyz_decompose(u);
    let qasm = zyz_qasm(&angles);

    let is_correct = config
        .check_solution
        .then(|| angles.to_unitary().approx_eq(u, config.atol));

    if let Some(start_time) = start {
        debug!(
            "time of zyz_circuit: {:.3} ms",
            start_time.elapsed().as_secs_f64() * 1000.0
        );
    }

    SynthResult {
        qasm,
        angles,
        is_correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{angles_close, DEFAULT_ATOL};
    use crate::unitary::{PAULI_X, PAULI_Z};

    #[test]
    fn test_identity_angles() {
        let angles = zyz_decompose(&SingleQubitUnitary::identity());
        assert!(angles.theta.abs() < 1e-12, "theta = {}", angles.theta);
        assert!(angles.phi.abs() < 1e-12, "phi = {}", angles.phi);
        assert!(angles.lam.abs() < 1e-12, "lam = {}", angles.lam);
        assert!(angles.phase.abs() < 1e-12, "phase = {}", angles.phase);
    }

    #[test]
    fn test_pauli_z_takes_theta_zero_branch() {
        let angles = zyz_decompose(&PAULI_Z);
        assert!(angles.theta.abs() < 1e-12, "theta = {}", angles.theta);
        assert!(angles.lam.abs() < 1e-12, "lam = {}", angles.lam);
        assert!(
            angles_close(angles.phi, PI, 1e-9),
            "phi = {} not equivalent to pi",
            angles.phi
        );
    }

    #[test]
    fn test_pauli_x_takes_theta_pi_branch() {
        let angles = zyz_decompose(&PAULI_X);
        assert!(
            (angles.theta - PI).abs() < 1e-12,
            "theta = {}",
            angles.theta
        );
        assert!(angles.lam.abs() < 1e-12, "lam = {}", angles.lam);
        assert!(
            angles.to_unitary().approx_eq(&PAULI_X, DEFAULT_ATOL),
            "reconstruction differs from X by {}",
            angles.to_unitary().distance(&PAULI_X)
        );
    }

    #[test]
    fn test_rz_roundtrip_in_degenerate_branch() {
        for k in -7..=7 {
            let x = k as f64 * PI / 7.3;
            let u = SingleQubitUnitary::rz(x);
            let angles = zyz_decompose(&u);
            assert!(angles.theta.abs() < 1e-9, "theta = {}", angles.theta);
            assert!(angles.lam.abs() < 1e-12, "lam = {}", angles.lam);
            assert!(
                angles.to_unitary().approx_eq(&u, DEFAULT_ATOL),
                "Rz({}) roundtrip off by {}",
                x,
                angles.to_unitary().distance(&u)
            );
        }
    }
}
