// Copyright (c) 2025 rszyzsynth developers
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use num_complex::Complex;

pub type C64 = Complex<f64>;

/// Absolute tolerance used for matrix comparisons and validity checks.
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Tolerance routing near-singular rotation angles into the closed-form
/// degenerate branches of the ZYZ extraction. Must be wide enough that the
/// generic branch never divides by a near-zero trigonometric term.
pub const DEGENERACY_EPS: f64 = 1e-10;

/// Unit-modulus complex number `e^(i*angle)`.
pub fn expi(angle: f64) -> C64 {
    Complex::from_polar(1.0, angle)
}

/// Reduces an angle to the principal range (-pi, pi].
pub fn principal_angle(x: f64) -> f64 {
    let mut r = x.rem_euclid(std::f64::consts::TAU);
    if r > std::f64::consts::PI {
        r -= std::f64::consts::TAU;
    }
    r
}

/// Returns true if two angles agree modulo 2*pi within `atol`.
pub fn angles_close(a: f64, b: f64, atol: f64) -> bool {
    principal_angle(a - b).abs() < atol
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_principal_angle_range() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let x: f64 = rng.random_range(-20.0 * PI..=20.0 * PI);
            let r = principal_angle(x);
            assert!(
                r > -PI && r <= PI,
                "principal_angle({}) = {} out of (-pi, pi]",
                x,
                r
            );
            let turns = (x - r) / TAU;
            assert!(
                (turns - turns.round()).abs() < 1e-9,
                "principal_angle({}) = {} not congruent mod 2pi",
                x,
                r
            );
        }
    }

    #[test]
    fn test_principal_angle_boundaries() {
        assert_eq!(principal_angle(0.0), 0.0);
        assert!((principal_angle(PI) - PI).abs() < 1e-12);
        assert!((principal_angle(-PI) - PI).abs() < 1e-12);
        assert!(principal_angle(TAU).abs() < 1e-12);
    }

    #[test]
    fn test_angles_close_wraps() {
        assert!(angles_close(-PI, PI, 1e-12));
        assert!(angles_close(0.1, 0.1 + TAU, 1e-9));
        assert!(!angles_close(0.0, 0.5, 1e-9));
    }
}
