//! factor-code CLI: print factorization codes for a numeric range.
//!
//! Usage:
//!   factor-code [--min=N] [--max=N] [--step=N] [--json]
//!
//! Defaults: --min=1 --max=100 --step=1. Plain output prints one
//! `n  code` line per value; --json emits the whole batch as a JSON array.

use serde::Serialize;

use factor_code::encode_range;

/// CLI configuration parsed from command-line arguments.
struct CliConfig {
    min: u64,
    max: u64,
    step: u64,
    json: bool,
}

#[derive(Serialize)]
struct CodeRecord {
    n: u64,
    code: String,
}

fn parse_args() -> CliConfig {
    let mut config = CliConfig {
        min: 1,
        max: 100,
        step: 1,
        json: false,
    };

    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--min=") {
            config.min = parse_or_exit(value, "--min");
        } else if let Some(value) = arg.strip_prefix("--max=") {
            config.max = parse_or_exit(value, "--max");
        } else if let Some(value) = arg.strip_prefix("--step=") {
            config.step = parse_or_exit(value, "--step");
        } else if arg == "--json" {
            config.json = true;
        } else {
            eprintln!("unknown argument: {}", arg);
            std::process::exit(2);
        }
    }

    config
}

fn parse_or_exit(value: &str, flag: &str) -> u64 {
    match value.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("{} expects a non-negative integer, got '{}'", flag, value);
            std::process::exit(2);
        }
    }
}

fn main() {
    let config = parse_args();

    let records = match encode_range(config.min, config.max, config.step) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    if config.json {
        let records: Vec<CodeRecord> = records
            .into_iter()
            .map(|(n, code)| CodeRecord { n, code })
            .collect();
        match serde_json::to_string_pretty(&records) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("failed to serialize results: {}", err);
                std::process::exit(1);
            }
        }
    } else {
        for (n, code) in records {
            println!("{:>8}  {}", n, code);
        }
    }
}
