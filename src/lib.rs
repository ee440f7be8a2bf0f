// Copyright (c) 2025 rszyzsynth developers
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

pub mod common;
pub mod config;
pub mod controlled;
pub mod haar;
pub mod qasm;
pub mod unitary;
pub mod zyz;
