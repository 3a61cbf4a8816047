use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use linegrep::Matcher;

// Usage: echo <input_text> | linegrep -E <pattern>
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to match against the input line
    #[arg(short = 'E', value_name = "PATTERN")]
    pattern: String,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => {
            info!("Match found!");
            process::exit(0)
        }
        Ok(false) => {
            info!("No match!");
            process::exit(1)
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(2)
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let matcher = Matcher::new(&args.pattern)?;

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("error reading input")?;

    Ok(matcher.is_match(strip_newline(&input)))
}

fn strip_newline(input: &[u8]) -> &[u8] {
    match input.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => input,
    }
}
