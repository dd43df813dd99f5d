// src/bin/flamefile.rs

//! Demo driver: runs a pair of trivial benchmark functions (sequentially and
//! then from worker threads) with every function instrumented, and leaves a
//! trace file behind for a timeline viewer.

use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use flamefile::constants::DEFAULT_TRACE_FILENAME;
use flamefile::{Instrumentor, profile_function, profile_scope};

#[derive(Parser, Debug)]
#[command(name = "flamefile", about = "Record a sample instrumentation trace.")]
struct Cli {
    /// Path of the trace file to write.
    #[arg(short, long, default_value = DEFAULT_TRACE_FILENAME)]
    output: PathBuf,

    /// Iterations per benchmark function.
    #[arg(short, long, default_value_t = 1000)]
    iterations: u32,
}

fn print_greetings(instrumentor: &Instrumentor, iterations: u32) {
    profile_function!(instrumentor);
    for i in 0..iterations {
        println!("Hello World #{i}");
    }
}

fn print_square_roots(instrumentor: &Instrumentor, iterations: u32) {
    profile_function!(instrumentor);
    for i in 0..iterations {
        println!("Hello World #{}", f64::from(i).sqrt());
    }
}

fn run_benchmarks(instrumentor: &Instrumentor, iterations: u32) {
    profile_function!(instrumentor);
    println!("Running benchmarks...");
    print_greetings(instrumentor, iterations);
    print_square_roots(instrumentor, iterations);
}

/// Same benchmarks, but racing on two worker threads. The recorder serializes
/// the writes, so the interleaved spans still land in one valid document.
fn run_threaded_benchmarks(instrumentor: &Instrumentor, iterations: u32) {
    profile_scope!(instrumentor, "run_threaded_benchmarks");
    println!("Running threaded benchmarks...");
    thread::scope(|scope| {
        scope.spawn(|| print_greetings(instrumentor, iterations));
        scope.spawn(|| print_square_roots(instrumentor, iterations));
    });
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("\nError: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let instrumentor = Instrumentor::new();
    instrumentor
        .begin_session("benchmarks", &cli.output)
        .with_context(|| format!("Could not begin a session at '{}'", cli.output.display()))?;

    run_benchmarks(&instrumentor, cli.iterations);
    run_threaded_benchmarks(&instrumentor, cli.iterations);

    instrumentor.end_session().context("Could not end the session")?;
    println!(
        "Trace written to '{}'. Load it in chrome://tracing or Perfetto.",
        cli.output.display()
    );
    Ok(())
}
