//! vipswin CLI - resolve a build plan and drive the container
//!
//! `build` invokes Docker and exits with the container's code on failure.
//! `plan` and `targets` only print; nothing is invoked.

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use vipswin_core::{
    args::{Cli, Command},
    invoke::{execute, DockerRuntime, DriverError},
    resolve::resolve,
    PACKAGING_DIR,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Plan(args) => {
            let plan = resolve(&args.request());
            println!("{}", serde_json::to_string_pretty(&plan).unwrap());
            ExitCode::SUCCESS
        }

        Command::Targets(args) => {
            let plan = resolve(&args.request());
            for target in &plan.targets {
                println!("{target}");
            }
            ExitCode::SUCCESS
        }

        Command::Build(args) => {
            let plan = resolve(&args.request());
            let runtime = DockerRuntime::new(&args.image);

            match execute(&plan, &runtime, Path::new(PACKAGING_DIR)) {
                Ok(manifest) => {
                    println!("{}", serde_json::to_string_pretty(&manifest).unwrap());
                    ExitCode::SUCCESS
                }
                Err(DriverError::BuildFailed { code }) => {
                    eprintln!("error: container build failed with exit code {code}");
                    // Propagate the container's code where it fits in a u8.
                    u8::try_from(code)
                        .map(ExitCode::from)
                        .unwrap_or(ExitCode::FAILURE)
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
