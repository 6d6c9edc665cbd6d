//! Release Manifest
//!
//! Records what a build produced: one entry per zip in `packaging/`, with
//! sizes and SHA-256 digests, so a published artifact set can be checked
//! against the run that made it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::hashing::{canonical_hash, sha256_hex};
use crate::invoke::DriverError;
use crate::profile::Variant;
use crate::resolve::BuildPlan;
use crate::DRIVER_VERSION;

pub const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactEntry {
    pub filename: String,
    pub bytes: u64,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildManifest {
    pub driver_version: String,
    pub variant: Variant,
    pub hevc: bool,
    pub created_at: DateTime<Utc>,
    /// Hash of the resolved plan, so two runs with the same inputs are
    /// recognizable as such regardless of timestamps.
    pub plan_hash: String,
    pub artifacts: Vec<ArtifactEntry>,
    pub manifest_hash: String,
}

/// Digest every `.zip` under `dir`, sorted by filename.
pub fn collect_artifacts(dir: &Path) -> Result<Vec<ArtifactEntry>, DriverError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().map_or(false, |e| e == "zip") {
            let data = fs::read(&path)?;
            entries.push(ArtifactEntry {
                filename: entry.file_name().to_string_lossy().into_owned(),
                bytes: data.len() as u64,
                sha256: sha256_hex(&data),
            });
        }
    }
    entries.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(entries)
}

/// Scan `dir` for artifacts and write `manifest.json` next to them.
pub fn write_manifest(dir: &Path, plan: &BuildPlan) -> Result<BuildManifest, DriverError> {
    let artifacts = collect_artifacts(dir)?;

    let mut manifest = BuildManifest {
        driver_version: DRIVER_VERSION.to_string(),
        variant: plan.variant,
        hevc: plan.with_hevc,
        created_at: Utc::now(),
        plan_hash: canonical_hash(plan)?,
        artifacts,
        manifest_hash: String::new(), // computed below, over everything else
    };
    manifest.manifest_hash = canonical_hash(&manifest)?;

    fs::write(
        dir.join(MANIFEST_FILENAME),
        serde_json::to_vec_pretty(&manifest)?,
    )?;
    Ok(manifest)
}
