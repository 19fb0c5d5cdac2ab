//! CLI probe entry point.
//!
//! # Responsibility
//! - Load and summarize a bundle config given as the first argument.
//! - With no argument, print the core crate version for quick sanity checks.

use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(config_path) = args.next() else {
        println!("taskboard_core version={}", taskboard_core::core_version());
        return ExitCode::SUCCESS;
    };

    match taskboard_core::load_bundle_config(&config_path) {
        Ok(config) => {
            println!(
                "entry={} output={} rules={} watch={}",
                config.entry,
                config.output.filename,
                config.rules.len(),
                config.watch
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
