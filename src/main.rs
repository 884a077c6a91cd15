//! CLI entry point: reads a document from a file argument or stdin, feeds
//! it to the reader in fixed-size chunks, and prints the resulting DOM or
//! error. No CLI-parsing crate — flags are read by hand, matching the
//! teacher's own minimal `main.rs`.

use std::fs::File;
use std::io::{self, Read};
use std::process::ExitCode;

const DEFAULT_CHUNK_SIZE: usize = 4096;

struct Args {
    path: Option<String>,
    chunk_size: usize,
    log_level: String,
}

fn parse_args() -> Result<Args, String> {
    let mut path = None;
    let mut chunk_size = DEFAULT_CHUNK_SIZE;
    let mut log_level = "warn".to_string();

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--chunk-size" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--chunk-size requires a value".to_string())?;
                chunk_size = value
                    .parse()
                    .map_err(|_| format!("invalid --chunk-size value: {value}"))?;
            }
            "--log-level" => {
                log_level = iter
                    .next()
                    .ok_or_else(|| "--log-level requires a value".to_string())?;
            }
            other if other.starts_with("--") => {
                return Err(format!("unrecognized flag: {other}"));
            }
            other => path = Some(other.to_string()),
        }
    }

    Ok(Args {
        path,
        chunk_size,
        log_level,
    })
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&args.log_level),
    )
    .init();

    let node = match &args.path {
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("{path}: {e}"))?;
            jflow::driver::drive(file, args.chunk_size).map_err(|e| e.to_string())?
        }
        None => jflow::driver::drive(io::stdin().lock(), args.chunk_size)
            .map_err(|e| e.to_string())?,
    };

    println!("{node}");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("jflow: {msg}");
            ExitCode::FAILURE
        }
    }
}
