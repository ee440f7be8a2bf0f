// Copyright (c) 2025 rszyzsynth developers
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::common::C64;
use crate::unitary::SingleQubitUnitary;
use nalgebra::Matrix2;
use num_complex::Complex;
use rand::Rng;
use rand_distr::StandardNormal;

/// Samples a Haar-random single-qubit unitary.
///
/// QR factorization of a complex standard-Gaussian matrix, with the Q columns
/// rescaled by the phases of R's diagonal so the distribution is uniform over
/// U(2) rather than biased by the factorization's sign convention.
pub fn haar_random_unitary<R: Rng + ?Sized>(rng: &mut R) -> SingleQubitUnitary {
    let gaussian = |rng: &mut R| -> C64 {
        let re: f64 = rng.sample(StandardNormal);
        let im: f64 = rng.sample(StandardNormal);
        Complex::new(re, im)
    };
    let g = Matrix2::new(
        gaussian(rng),
        gaussian(rng),
        gaussian(rng),
        gaussian(rng),
    );

    let qr = g.qr();
    let mut q = qr.q();
    let r = qr.r();

    for col in 0..2 {
        let d = r[(col, col)];
        // A Gaussian sample with a zero diagonal entry has measure zero, but
        // don't divide by it if it happens.
        if d.norm() > 0.0 {
            let ph = d / d.norm();
            for row in 0..2 {
                q[(row, col)] *= ph;
            }
        }
    }

    SingleQubitUnitary::from_matrix(q)
}
