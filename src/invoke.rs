//! Container Build Invocation
//!
//! One blocking `docker run`, exit code propagated. No retries: a failed
//! build fails the driver, and whatever diagnostics Docker or MXE emit go
//! straight to the inherited stdio.

use std::env;
use std::io;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

use crate::manifest::{self, BuildManifest};
use crate::resolve::BuildPlan;

/// Image containing the MXE toolchain and the libvips build scripts.
pub const DEFAULT_IMAGE: &str = "libvips/build-win64-mxe";

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("container build failed with exit code {code}")]
    BuildFailed { code: i32 },

    #[error("container build terminated by a signal")]
    BuildInterrupted,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Seam between plan resolution and the external toolchain.
pub trait ContainerRuntime {
    fn run(&self, plan: &BuildPlan) -> Result<(), DriverError>;
}

/// The real thing: shells out to `docker run`.
pub struct DockerRuntime {
    image: String,
}

impl DockerRuntime {
    pub fn new(image: impl Into<String>) -> Self {
        Self { image: image.into() }
    }
}

impl Default for DockerRuntime {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE)
    }
}

impl ContainerRuntime for DockerRuntime {
    fn run(&self, plan: &BuildPlan) -> Result<(), DriverError> {
        let cwd = env::current_dir()?;

        let mut cmd = Command::new("docker");
        cmd.arg("run").arg("--rm");
        for (key, value) in &plan.env {
            cmd.arg("-e").arg(format!("{key}={value}"));
        }
        for dir in &plan.plugin_dirs {
            cmd.arg("-v")
                .arg(format!("{}:/data/{dir}", cwd.join(dir).display()));
        }
        cmd.arg("-v").arg(format!(
            "{}:/data/{}",
            cwd.join(crate::PACKAGING_DIR).display(),
            crate::PACKAGING_DIR
        ));
        cmd.arg(&self.image).arg(plan.variant.as_str());
        for target in &plan.targets {
            cmd.arg(target.to_string());
        }

        let status = cmd.status()?;
        if status.success() {
            Ok(())
        } else {
            match status.code() {
                Some(code) => Err(DriverError::BuildFailed { code }),
                None => Err(DriverError::BuildInterrupted),
            }
        }
    }
}

/// Run the containerized build, then record what it produced.
///
/// The manifest is only written when the container exits zero; a failed
/// build leaves `packaging/` untouched by the driver.
pub fn execute(
    plan: &BuildPlan,
    runtime: &dyn ContainerRuntime,
    packaging_dir: &Path,
) -> Result<BuildManifest, DriverError> {
    runtime.run(plan)?;
    manifest::write_manifest(packaging_dir, plan)
}
