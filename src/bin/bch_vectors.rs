use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bch_decoder::bch::{BchCode, PositionOrder};
use bch_decoder::config::CodePreset;
use bch_decoder::llr::{self, LlrFrame};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bch_vectors",
    about = "Decode LLR test vectors and report BCH error locations"
)]
struct Cli {
    /// Code selection: 100 = (63, 51), 200 = (255, 239), 300 = (1023, 983)
    code: CodePreset,
    /// Directory holding pNNN.txt and pNNNa.txt
    #[arg(long, default_value = "testdata")]
    testdata_dir: PathBuf,
    /// LLR input file (overrides the preset file in --testdata-dir)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Compare the located errors with the answer file
    #[arg(long)]
    compare: bool,
    /// Answer file (overrides the preset file in --testdata-dir)
    #[arg(long)]
    answers: Option<PathBuf>,
    /// Bit order of printed positions: lsb (x^p) or msb (vector index)
    #[arg(long, default_value_t = PositionOrder::Lsb)]
    order: PositionOrder,
    /// Show per-codeword detail and debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = cli
        .code
        .build()
        .with_context(|| format!("failed to build code {}", cli.code))?;

    println!("BCH code: {}", cli.code.name());
    println!("Parameters: {}", code.parameters());
    println!("Primitive polynomial: {:#b}", code.field().primitive_poly());

    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| cli.testdata_dir.join(cli.code.input_file()));
    let frames = read_frames(&input, code.code_length())?;
    println!(
        "Read {} codeword(s) from {} ({} rows each)",
        frames.len(),
        input.display(),
        llr::rows_per_codeword(code.code_length())
    );

    let expected = if cli.compare {
        let path = cli
            .answers
            .clone()
            .unwrap_or_else(|| cli.testdata_dir.join(cli.code.answer_file()));
        Some(read_answers(&path, code.error_correction_capability())?)
    } else {
        None
    };

    let failures = run(&cli, &code, &frames, expected.as_deref());
    if failures > 0 {
        bail!("{} of {} codeword(s) failed", failures, frames.len());
    }

    Ok(())
}

/// Decode every frame and print the results; returns the number of failures
fn run(cli: &Cli, code: &BchCode, frames: &[LlrFrame], expected: Option<&[Vec<usize>]>) -> usize {
    let n = code.code_length();
    let words: Vec<_> = frames.iter().map(LlrFrame::hard_decisions).collect();
    // Answers are always in LSB order, so decode in LSB and convert for display
    let results = code.decoder().decode_all(&words);
    let mut failures = 0;

    for (index, (word, result)) in words.iter().zip(results).enumerate() {
        println!();
        println!("Input {}:", index + 1);
        if cli.verbose {
            let bits: String = word.iter().by_vals().map(|b| if b { '1' } else { '0' }).collect();
            println!("  Received (MSB first): {}", bits);
        }

        let decoded = match result {
            Ok(decoded) => decoded,
            Err(e) => {
                println!("  Decode failure: {}", e);
                failures += 1;
                continue;
            }
        };

        if decoded.is_clean() {
            println!("  No errors detected");
        } else {
            let shown: Vec<usize> = decoded
                .positions
                .iter()
                .map(|&p| cli.order.position_of(p, n))
                .collect();
            println!(
                "  Found {} error(s) at {} position(s) {:?}",
                decoded.error_count(),
                cli.order,
                shown
            );
            for &position in &decoded.positions {
                println!(
                    "    x^{} (LSB index {}) / MSB index {}",
                    position,
                    position,
                    PositionOrder::Msb.position_of(position, n)
                );
            }
        }

        if let Some(answer) = expected.and_then(|all| all.get(index)) {
            let found: BTreeSet<usize> = decoded.positions.iter().copied().collect();
            let wanted: BTreeSet<usize> = answer.iter().copied().collect();
            if found == wanted {
                println!("  MATCH");
            } else {
                println!("  MISMATCH: expected {:?}, found {:?}", wanted, found);
                failures += 1;
            }
        }

        if cli.verbose && !decoded.is_clean() {
            let bits: String = decoded
                .message
                .iter()
                .by_vals()
                .map(|b| if b { '1' } else { '0' })
                .collect();
            println!("  Decoded message: {}", bits);
        }
    }

    failures
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(contents.lines().map(str::to_string).collect())
}

fn read_frames(path: &Path, n: usize) -> Result<Vec<LlrFrame>> {
    let lines = read_lines(path)?;
    llr::parse_llr_rows(&lines, n)
        .with_context(|| format!("failed to parse LLR rows in {}", path.display()))
}

fn read_answers(path: &Path, t: usize) -> Result<Vec<Vec<usize>>> {
    let lines = read_lines(path)?;
    llr::parse_answer_lines(&lines, t)
        .with_context(|| format!("failed to parse answers in {}", path.display()))
}
