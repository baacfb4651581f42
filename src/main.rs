//! `ldshape` command-line entry point.
//!
//! ```text
//! ldshape -s rectangular -g 4x2x3 -o block.ldr
//! ldshape -s trapezoid -g 6 --kind oblique oblique --cornercolor 4
//! ldshape --shapelist
//! ```

mod cli;

use std::process::ExitCode;

use clap::Parser;
use ldshape::LdShapeError;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(cli::log_filter(args.quiet, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    if args.shapelist {
        for label in cli::shape_list() {
            println!("{label}");
        }
        return ExitCode::SUCCESS;
    }
    if args.kindlist {
        print!("{}", cli::kind_list());
        return ExitCode::SUCCESS;
    }

    match cli::exec(&args) {
        Ok(Some(_)) => ExitCode::SUCCESS,
        Ok(None) => ExitCode::FAILURE,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("{}", cli::error_report(&err));
            if !args.quiet && matches!(err, LdShapeError::UnsupportedShape { .. }) {
                eprintln!("Select a shape from the list:");
                for label in cli::shape_list() {
                    eprintln!("{label}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
