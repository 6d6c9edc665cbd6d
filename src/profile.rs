//! Build Profiles - Variants, Architectures, Linkage

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which dependency set gets cross-compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Web-oriented loaders and savers only
    VipsWeb,
    /// Everything libvips can be built with
    VipsAll,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::VipsWeb => "vips-web",
            Variant::VipsAll => "vips-all",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X86_64,
    I686,
    Aarch64,
}

impl Arch {
    pub const ALL: [Arch; 3] = [Arch::X86_64, Arch::I686, Arch::Aarch64];

    /// The mingw-w64 triple prefix MXE uses for this architecture.
    pub fn triple_prefix(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64-w64-mingw32",
            Arch::I686 => "i686-w64-mingw32",
            Arch::Aarch64 => "aarch64-w64-mingw32",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    Shared,
    Static,
}

impl Linkage {
    pub fn suffix(&self) -> &'static str {
        match self {
            Linkage::Shared => "shared",
            Linkage::Static => "static",
        }
    }
}

/// One MXE build target, e.g. `x86_64-w64-mingw32.shared`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub arch: Arch,
    pub linkage: Linkage,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.arch.triple_prefix(), self.linkage.suffix())
    }
}

// Targets serialize as the triple string; that is what the container and
// the CI logs expect to see.
impl Serialize for Target {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
