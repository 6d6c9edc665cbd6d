//! CLI Surface
//!
//! Lives in the library so the integration tests can drive the exact
//! argument grammar the binary exposes.

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::invoke::DEFAULT_IMAGE;
use crate::profile::Variant;
use crate::resolve::BuildRequest;

#[derive(Debug, Parser)]
#[command(name = "vipswin-cli")]
#[command(about = "Cross-compile Windows libvips binaries through Docker and MXE")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the containerized build and write the release manifest
    Build(BuildArgs),

    /// Print the resolved build plan as JSON without building anything
    Plan(BuildArgs),

    /// Print the resolved target triples, one per line
    Targets(BuildArgs),
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Dependency set to build
    #[arg(value_enum)]
    pub variant: Variant,

    /// Include the GPL-licensed HEVC codecs (drops all static targets)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false
    )]
    pub with_hevc: bool,

    /// Build image to run
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: String,
}

impl BuildArgs {
    pub fn request(&self) -> BuildRequest {
        BuildRequest {
            variant: self.variant,
            with_hevc: self.with_hevc,
        }
    }
}
