//! JOIN Closure CLI
//!
//! # Usage
//!
//! ```bash
//! # Inline inversions
//! join-closure -n 2 -i 0,1 -i 1,2
//!
//! # From a JSON file: {"n": 3, "inversions": [[0, 1], [1, 2], [2, 3]]}
//! join-closure --input inversions.json --format json
//!
//! # With engine configuration (YAML v1)
//! join-closure -n 3 -i 0,1 --config closure.yaml --adjacency
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use join_closure::config::ClosureConfig;
use join_closure::{JoinClosureInput, JoinClosureOutput, JoinClosureUseCase, JoinClosureUseCaseImpl};
use serde::Deserialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "join-closure")]
#[command(about = "JOIN closure of inversions folded modulo n", long_about = None)]
struct Cli {
    /// Number of residue classes
    #[arg(short = 'n', long = "modulus", allow_negative_numbers = true)]
    modulus: Option<i64>,

    /// Inversion as `a,b` (repeatable)
    #[arg(short, long = "inversion", value_parser = parse_inversion, allow_hyphen_values = true)]
    inversions: Vec<(i64, i64)>,

    /// JSON input file `{"n": .., "inversions": [[a, b], ..]}`
    #[arg(long)]
    input: Option<PathBuf>,

    /// Engine configuration (YAML v1)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also print the adjacency matrix
    #[arg(long)]
    adjacency: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Deserialize)]
struct InputFile {
    n: i64,
    #[serde(default)]
    inversions: Vec<(i64, i64)>,
}

fn parse_inversion(s: &str) -> Result<(i64, i64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `a,b`, got '{}'", s))?;
    let a = a.trim().parse().map_err(|e| format!("bad left endpoint '{}': {}", a, e))?;
    let b = b.trim().parse().map_err(|e| format!("bad right endpoint '{}': {}", b, e))?;
    Ok((a, b))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (n, inversions) = match &cli.input {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let mut file: InputFile = serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            file.inversions.extend(cli.inversions.iter().copied());
            (cli.modulus.unwrap_or(file.n), file.inversions)
        }
        None => match cli.modulus {
            Some(n) => (n, cli.inversions.clone()),
            None => bail!("missing modulus: pass -n/--modulus or --input"),
        },
    };

    let config = cli
        .config
        .as_ref()
        .map(|path| ClosureConfig::from_yaml(path))
        .transpose()
        .context("loading engine configuration")?;

    let output = JoinClosureUseCaseImpl::new().compute_join_closure(JoinClosureInput {
        n,
        inversions: &inversions,
        config,
    })?;

    match cli.format {
        OutputFormat::Text => print_text(&output, cli.adjacency),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    Ok(())
}

fn print_text(output: &JoinClosureOutput, adjacency: bool) {
    if adjacency {
        println!("Adjacency matrix:");
        for row in &output.adjacency {
            let line: Vec<&str> = row.iter().map(|&b| if b { "1" } else { "0" }).collect();
            println!("{}", line.join(" "));
        }
        println!();
    }

    println!("JOIN matrix (* on diagonal means in a cycle):");
    print!("{}", output.join_matrix);

    println!();
    println!("JOIN:");
    print!("{}", output.join_set);
}
