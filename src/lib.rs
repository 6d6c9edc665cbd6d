//! vipswin-core - Windows cross-build driver for libvips
//!
//! Resolves an MXE plugin set and a mingw target matrix from a build
//! variant and an HEVC flag, then hands off to a containerized build.
//! Licensing is the one hard rule: GPL codec plugins force shared-only
//! linkage, so static zips never ship GPL code.

pub mod args;
pub mod hashing;
pub mod invoke;
pub mod manifest;
pub mod profile;
pub mod resolve;

pub use args::{BuildArgs, Cli, Command};
pub use invoke::{execute, ContainerRuntime, DockerRuntime, DriverError};
pub use manifest::{ArtifactEntry, BuildManifest};
pub use profile::{Arch, Linkage, Target, Variant};
pub use resolve::{resolve, BuildPlan, BuildRequest};

pub const DRIVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Host directory the container drops release zips into.
pub const PACKAGING_DIR: &str = "packaging";
