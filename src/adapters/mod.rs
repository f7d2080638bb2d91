//! Optional command-line front end over the library functions, built only
//! with the `cli` feature.
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, compute_report, parse_inputs, print_output};

    let args = Args::parse();
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let input = parse_inputs(&args)?;
    let out = compute_report(&input);

    print_output(&out, &args)?;

    Ok(())
}
