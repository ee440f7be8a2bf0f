// Copyright (c) 2025 rszyzsynth developers
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::common::{C64, DEFAULT_ATOL};
use crate::unitary::SingleQubitUnitary;
use crate::zyz::EulerAngles;
use num_complex::Complex;

#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Absolute tolerance for the optional solution check.
    pub atol: f64,
    pub check_solution: bool,
    pub verbose: bool,
    pub measure_time: bool,
}

impl SynthConfig {
    pub fn with_check_solution(mut self, check_solution: bool) -> Self {
        self.check_solution = check_solution;
        self
    }

    pub fn with_atol(mut self, atol: f64) -> Self {
        self.atol = atol;
        self
    }
}

/// Creates the default config to easily call the code from other rust packages.
pub fn config_default() -> SynthConfig {
    SynthConfig {
        atol: DEFAULT_ATOL,
        check_solution: false,
        verbose: false,
        measure_time: false,
    }
}

/// Result of a synthesis run: the circuit text, the extracted angles, and the
/// outcome of the solution check when one was requested.
#[derive(Debug, Clone)]
pub struct SynthResult {
    pub qasm: String,
    pub angles: EulerAngles,
    pub is_correct: Option<bool>,
}

/// Parses a 2x2 complex matrix from eight reals in row-major (re, im) pairs,
/// separated by whitespace and/or commas.
pub fn parse_matrix_entries(input: &str) -> Option<SingleQubitUnitary> {
    let values: Vec<f64> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect::<Option<Vec<f64>>>()?;
    if values.len() != 8 {
        return None;
    }
    let entries: Vec<C64> = values
        .chunks_exact(2)
        .map(|pair| Complex::new(pair[0], pair[1]))
        .collect();
    Some(SingleQubitUnitary::from_rows(
        entries[0], entries[1], entries[2], entries[3],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matrix_entries_pauli_x() {
        let u = parse_matrix_entries("0,0 1,0 1,0 0,0").unwrap();
        assert!(u.approx_eq(&crate::unitary::PAULI_X, 1e-15));
    }

    #[test]
    fn test_parse_matrix_entries_rejects_bad_input() {
        assert!(parse_matrix_entries("1,0 0,0 0,0").is_none());
        assert!(parse_matrix_entries("a,b c,d e,f g,h").is_none());
        assert!(parse_matrix_entries("").is_none());
    }
}
