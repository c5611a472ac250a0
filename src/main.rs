//! postgrid - evaluate a grid of postfix cell expressions.
//!
//! Reads a sheet (dimensions header plus one expression per cell) from a file
//! or stdin, evaluates every cell in dependency order, and prints the result
//! table. Any error aborts the run with a message on stderr and exit code 1;
//! nothing is written to the output in that case.

use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use postgrid_core::{parse_sheet, write_results};

fn print_usage() {
    eprintln!("Usage: postgrid [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                 Sheet to evaluate (reads stdin if omitted)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <FILE>    Write results to a file instead of stdout");
    eprintln!("  -h, --help             Print help");
}

fn run(input_file: Option<&PathBuf>, output_file: Option<&PathBuf>) -> Result<()> {
    let content = match input_file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let sheet = parse_sheet(&content)?;
    let results = sheet.evaluate()?;
    let rendered = write_results(&sheet, &results);

    match output_file {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut input_file: Option<PathBuf> = None;
    let mut output_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                output_file = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if input_file.is_none() {
                    input_file = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    if let Err(e) = run(input_file.as_ref(), output_file.as_ref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
