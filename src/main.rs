// Copyright (c) 2025 rszyzsynth developers
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use clap::{Arg, Command};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;

use rszyzsynth::common::DEFAULT_ATOL;
use rszyzsynth::config::{config_default, parse_matrix_entries, SynthConfig};
use rszyzsynth::controlled::controlled_circuit;
use rszyzsynth::haar::haar_random_unitary;
use rszyzsynth::unitary::SingleQubitUnitary;
use rszyzsynth::zyz::zyz_circuit;

fn main() {
    let matches = build_command().get_matches();

    let verbose = matches.get_flag("verbose");
    let time = matches.get_flag("time");

    if verbose || time {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::init();
    }

    let config = parse_arguments(&matches);
    let unitary = parse_unitary(&matches);

    if !unitary.is_unitary(DEFAULT_ATOL) {
        warn!("input matrix is not unitary within {:e}", DEFAULT_ATOL);
    }

    let start = if config.measure_time {
        Some(Instant::now())
    } else {
        None
    };

    let res = if matches.get_flag("controlled") {
        controlled_circuit(&unitary, &config)
    } else {
        zyz_circuit(&unitary, &config)
    };

    if let Some(start_time) = start {
        let elapsed = start_time.elapsed();
        info!("Elapsed time: {:.3?}", elapsed);
    }

    if let Some(correct) = res.is_correct {
        info!("solution is correct: {:?}", correct);
    }

    println!("{}", res.qasm);
}

fn build_command() -> Command {
    Command::new("rszyzsynth")
        .arg(Arg::new("matrix").required(true).help(
            "eight reals (row-major re,im pairs), a named gate \
             (identity, x, y, z, h, s, t), or 'random'",
        ))
        .arg(Arg::new("seed").long("seed").short('s').default_value("1"))
        .arg(
            Arg::new("atol")
                .long("atol")
                .default_value("1e-8"),
        )
        .arg(
            Arg::new("controlled")
                .long("controlled")
                .short('c')
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("time")
                .long("time")
                .short('t')
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .action(clap::ArgAction::SetTrue),
        )
}

fn parse_arguments(matches: &clap::ArgMatches) -> SynthConfig {
    let atol = matches.get_one::<String>("atol").unwrap().parse().unwrap();
    let mut config = config_default()
        .with_atol(atol)
        .with_check_solution(matches.get_flag("check"));
    config.verbose = matches.get_flag("verbose");
    config.measure_time = matches.get_flag("time");
    config
}

fn parse_unitary(matches: &clap::ArgMatches) -> SingleQubitUnitary {
    let matrix_str = matches.get_one::<String>("matrix").unwrap();
    if matrix_str.eq_ignore_ascii_case("random") {
        let seed = matches.get_one::<String>("seed").unwrap().parse().unwrap();
        let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
        return haar_random_unitary(&mut rng);
    }
    if let Some(u) = SingleQubitUnitary::from_name(matrix_str) {
        return u;
    }
    match parse_matrix_entries(matrix_str) {
        Some(u) => u,
        None => panic!("Unsupported matrix: {}", matrix_str),
    }
}
