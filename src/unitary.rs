// Copyright (c) 2025 rszyzsynth developers
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::common::{expi, C64, DEFAULT_ATOL};
use nalgebra::Matrix2;
use num_complex::Complex;
use once_cell::sync::Lazy;
use std::fmt::{Debug, Display, Formatter, Result};

/// A 2x2 complex matrix treated as a single-qubit unitary.
///
/// The wrapper is a pure value: it is never mutated after construction and
/// unitarity is assumed rather than enforced. `is_unitary` is available as an
/// advisory validity check for callers that want one.
#[derive(Clone, PartialEq)]
pub struct SingleQubitUnitary {
    mat: Matrix2<C64>,
}

pub static PAULI_X: Lazy<SingleQubitUnitary> = Lazy::new(|| {
    SingleQubitUnitary::from_rows(
        Complex::new(0.0, 0.0),
        Complex::new(1.0, 0.0),
        Complex::new(1.0, 0.0),
        Complex::new(0.0, 0.0),
    )
});

pub static PAULI_Y: Lazy<SingleQubitUnitary> = Lazy::new(|| {
    SingleQubitUnitary::from_rows(
        Complex::new(0.0, 0.0),
        Complex::new(0.0, -1.0),
        Complex::new(0.0, 1.0),
        Complex::new(0.0, 0.0),
    )
});

pub static PAULI_Z: Lazy<SingleQubitUnitary> = Lazy::new(|| {
    SingleQubitUnitary::from_rows(
        Complex::new(1.0, 0.0),
        Complex::new(0.0, 0.0),
        Complex::new(0.0, 0.0),
        Complex::new(-1.0, 0.0),
    )
});

pub static HADAMARD: Lazy<SingleQubitUnitary> = Lazy::new(|| {
    let s = std::f64::consts::FRAC_1_SQRT_2;
    SingleQubitUnitary::from_rows(
        Complex::new(s, 0.0),
        Complex::new(s, 0.0),
        Complex::new(s, 0.0),
        Complex::new(-s, 0.0),
    )
});

impl SingleQubitUnitary {
    pub fn from_matrix(mat: Matrix2<C64>) -> Self {
        Self { mat }
    }

    /// Builds the matrix from its entries in row-major order.
    pub fn from_rows(u00: C64, u01: C64, u10: C64, u11: C64) -> Self {
        Self {
            mat: Matrix2::new(u00, u01, u10, u11),
        }
    }

    pub fn identity() -> Self {
        Self {
            mat: Matrix2::identity(),
        }
    }

    /// Z-rotation `Rz(angle) = diag(e^(-i*angle/2), e^(i*angle/2))`.
    pub fn rz(angle: f64) -> Self {
        let zero = Complex::new(0.0, 0.0);
        Self::from_rows(expi(-angle / 2.0), zero, zero, expi(angle / 2.0))
    }

    /// Y-rotation with the standard real matrix.
    pub fn ry(angle: f64) -> Self {
        let c = Complex::new((angle / 2.0).cos(), 0.0);
        let s = Complex::new((angle / 2.0).sin(), 0.0);
        Self::from_rows(c, -s, s, c)
    }

    /// Global-phase matrix `e^(i*delta) * I`.
    pub fn phase(delta: f64) -> Self {
        Self::identity().scale(expi(delta))
    }

    /// Looks up a named gate, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let u = match name.to_ascii_lowercase().as_str() {
            "identity" | "i" | "id" => Self::identity(),
            "x" => PAULI_X.clone(),
            "y" => PAULI_Y.clone(),
            "z" => PAULI_Z.clone(),
            "h" => HADAMARD.clone(),
            "s" => Self::from_rows(
                Complex::new(1.0, 0.0),
                Complex::new(0.0, 0.0),
                Complex::new(0.0, 0.0),
                Complex::new(0.0, 1.0),
            ),
            "t" => Self::from_rows(
                Complex::new(1.0, 0.0),
                Complex::new(0.0, 0.0),
                Complex::new(0.0, 0.0),
                expi(std::f64::consts::FRAC_PI_4),
            ),
            _ => return None,
        };
        Some(u)
    }

    pub fn matrix(&self) -> &Matrix2<C64> {
        &self.mat
    }

    pub fn entry(&self, row: usize, col: usize) -> C64 {
        self.mat[(row, col)]
    }

    pub fn det(&self) -> C64 {
        self.mat[(0, 0)] * self.mat[(1, 1)] - self.mat[(0, 1)] * self.mat[(1, 0)]
    }

    pub fn scale(&self, factor: C64) -> Self {
        Self {
            mat: self.mat.map(|c| c * factor),
        }
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        Self {
            mat: self.mat * rhs.mat,
        }
    }

    pub fn adjoint(&self) -> Self {
        Self {
            mat: self.mat.adjoint(),
        }
    }

    /// Maximum entrywise deviation from `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.mat - other.mat)
            .iter()
            .map(|c| c.norm())
            .fold(0.0, f64::max)
    }

    pub fn approx_eq(&self, other: &Self, atol: f64) -> bool {
        self.distance(other) < atol
    }

    /// Advisory check that `U * U_dagger` is the identity within `atol`.
    pub fn is_unitary(&self, atol: f64) -> bool {
        self.mul(&self.adjoint()).approx_eq(&Self::identity(), atol)
    }

    pub fn is_unitary_default(&self) -> bool {
        self.is_unitary(DEFAULT_ATOL)
    }
}

impl Display for SingleQubitUnitary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "[[{:.6}, {:.6}], [{:.6}, {:.6}]]",
            self.mat[(0, 0)],
            self.mat[(0, 1)],
            self.mat[(1, 0)],
            self.mat[(1, 1)]
        )
    }
}

impl Debug for SingleQubitUnitary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "SingleQubitUnitary({})", self)
    }
}
