// src/cli.rs
use std::{env, path::PathBuf};

use crate::csv::Delim;
use crate::params::Params;
use crate::progress::Progress;
use crate::record::ProductRecord;
use crate::{runner, specs};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_platforms {
        for spec in specs::ALL {
            println!("{}\t{}", spec.id, spec.name);
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress;
    runner::run(&params, Some(&mut progress)).map(|_| ())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-p" | "--platform" => {
                let v = args.next().ok_or("Missing value for --platform")?;
                params.platform =
                    Some(specs::by_id(&v).ok_or_else(|| format!("Unknown platform: {}", v))?);
            }
            "-n" | "--max" => {
                let v: usize = args.next().ok_or("Missing value for --max")?.parse()?;
                if v == 0 {
                    return Err("--max must be positive".into());
                }
                params.max_products = Some(v);
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.include_headers = true,
            "--manual" => params.manual = true,
            "--list-platforms" => params.list_platforms = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// Echo accepted records as the scan goes, like a progress ticker.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, anchors: usize) {
        println!("Found {anchors} elements with prices");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn record_found(&mut self, count: usize, record: &ProductRecord) {
        println!("Product {count}: {} - {}", clip(&record.name, 40), record.price);
    }
    fn finish(&mut self, total: usize) {
        println!("\nFound {total} total products");
    }
}

fn clip(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s!(s);
    }
    let mut t: String = s.chars().take(max_chars).collect();
    t.push_str("...");
    t
}
