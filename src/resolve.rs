//! Plugin/Target Resolution - Licensing-Aware Matrix
//!
//! The HEVC plugins are GPL. Static zips bundle every dependency into the
//! DLL-free artifact, so a GPL plugin anywhere in the set rules static
//! linkage out entirely. Shared builds keep the codecs in their own DLLs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::profile::{Arch, Linkage, Target, Variant};

/// MXE plugin directories every build mounts.
pub const BASE_PLUGIN_DIRS: [&str; 2] =
    ["build/plugins/llvm-mingw", "build/plugins/meson-wrapper"];

/// Recipes for the GPL-licensed HEVC encoder/decoder stack.
pub const HEVC_PLUGIN_DIR: &str = "build/plugins/hevc-deps";

/// Parsed CLI input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BuildRequest {
    pub variant: Variant,
    pub with_hevc: bool,
}

/// Everything the container invocation needs, resolved up front.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    pub variant: Variant,
    pub with_hevc: bool,
    pub contains_gpl_libs: bool,
    pub plugin_dirs: Vec<String>,
    pub targets: Vec<Target>,
    /// Passed through to the packaging step inside the container.
    pub env: BTreeMap<String, String>,
}

/// Resolve the plugin set and target matrix for a request.
///
/// This is the ONLY place linkage policy lives. `with_hevc` is the sole
/// GPL source today, so `contains_gpl_libs` is its direct image.
pub fn resolve(request: &BuildRequest) -> BuildPlan {
    let contains_gpl_libs = request.with_hevc;

    let mut plugin_dirs: Vec<String> =
        BASE_PLUGIN_DIRS.iter().map(|d| (*d).to_string()).collect();
    if request.with_hevc {
        plugin_dirs.push(HEVC_PLUGIN_DIR.to_string());
    }

    let linkages: &[Linkage] = if contains_gpl_libs {
        &[Linkage::Shared]
    } else {
        &[Linkage::Shared, Linkage::Static]
    };

    let mut targets = Vec::with_capacity(Arch::ALL.len() * linkages.len());
    for arch in Arch::ALL {
        for &linkage in linkages {
            targets.push(Target { arch, linkage });
        }
    }

    let mut env = BTreeMap::new();
    env.insert("HEVC".to_string(), request.with_hevc.to_string());

    BuildPlan {
        variant: request.variant,
        with_hevc: request.with_hevc,
        contains_gpl_libs,
        plugin_dirs,
        targets,
        env,
    }
}
