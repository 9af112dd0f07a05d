use std::fs;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wavexpr::{
    CompiledExpression, apply_multi_frame, apply_single_frame, compile, uses_frame_variables,
};

/// wavexpr compiles a wavetable formula and applies it to an empty table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells wavexpr to read the formula from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Number of frames in the table.
    #[arg(long, default_value_t = 8)]
    frames: usize,

    /// Number of samples per frame.
    #[arg(long, default_value_t = 256)]
    samples: usize,

    /// Frame rewritten in single-frame mode and read by `sel`.
    #[arg(long, default_value_t = 0)]
    selected: usize,

    /// Prints the parsed formula, fully parenthesised.
    #[arg(long)]
    ast: bool,

    /// Prints every sample of the resulting table.
    #[arg(short, long)]
    print: bool,

    /// Enables debug logging (overridden by `RUST_LOG`).
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let formula = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    if let Err(e) = run(&args, formula.trim()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn run(args: &Args, formula: &str) -> Result<(), Box<dyn std::error::Error>> {
    let compiled = compile(formula)?;
    if args.ast {
        println!("{}", compiled.ast());
    }

    let mut grid = vec![vec![0.0f32; args.samples]; args.frames];
    let multi = uses_frame_variables(&compiled);
    if multi {
        apply_multi_frame(&compiled, &mut grid, args.selected, args.samples)?;
    } else {
        apply_single_frame(&compiled, &mut grid, args.selected, args.samples)?;
    }

    println!("mode: {}", if multi { "multi-frame" } else { "single-frame" });
    print_summary(&compiled, &grid);

    if args.print {
        for (t, frame) in grid.iter().enumerate() {
            let line = frame.iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(" ");
            println!("{t}: {line}");
        }
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn print_summary(compiled: &CompiledExpression, grid: &[Vec<f32>]) {
    println!("formula: {}", compiled.source());
    for (t, frame) in grid.iter().enumerate() {
        let min = frame.iter().copied().fold(f32::INFINITY, f32::min);
        let max = frame.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let rms = if frame.is_empty() {
            0.0
        } else {
            (frame.iter().map(|s| s * s).sum::<f32>() / frame.len() as f32).sqrt()
        };
        println!("frame {t:>3}: min {min:>9.5}  max {max:>9.5}  rms {rms:>9.5}");
    }
}
