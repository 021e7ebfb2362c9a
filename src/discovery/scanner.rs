//! Tribe/unit directory scanner.
//!
//! The asset tree is two levels deep: `tribes/<tribe>/<unit>/conf`. Every
//! unit directory with a conf file is a conversion candidate; the reserved
//! `pics` and `scripting` directories hold shared assets, not units.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SpritemapError};

/// Directory names that never hold units.
pub const RESERVED_DIRS: &[&str] = &["pics", "scripting"];

/// One unit directory found under the tribes root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDir {
    /// Tribe directory name (immediate child of the root).
    pub tribe: String,
    /// Unit directory name, used in the output header comment.
    pub unit: String,
    /// Absolute or root-relative path to the unit directory.
    pub path: PathBuf,
}

impl UnitDir {
    /// Path of the unit's conf file.
    pub fn conf_path(&self) -> PathBuf {
        self.path.join("conf")
    }

    /// Path the converted document is written to.
    pub fn output_path(&self) -> PathBuf {
        self.path.join("animations.lua")
    }
}

/// Enumerate unit directories under a tribes root.
///
/// Walks exactly two levels deep, skips the reserved directory names plus
/// any caller-supplied excludes, and keeps only directories that contain a
/// `conf` file. Results are sorted by path so conversion order (and status
/// output) is stable across runs.
pub fn scan_tribes(root: &Path, excludes: &[String]) -> Result<Vec<UnitDir>> {
    if !root.is_dir() {
        return Err(SpritemapError::MissingRoot {
            path: root.to_path_buf(),
            help: Some(
                "Pass the asset tree root, e.g. `spritemap convert path/to/tribes`".to_string(),
            ),
        });
    }

    let mut units = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }

        let Some(unit) = entry.file_name().to_str() else {
            continue;
        };
        if RESERVED_DIRS.contains(&unit) || excludes.iter().any(|e| e == unit) {
            continue;
        }

        let tribe = entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        // Directories without a conf are not units (asset trees contain
        // plenty of those); skip them rather than failing the walk.
        if !entry.path().join("conf").is_file() {
            continue;
        }

        units.push(UnitDir {
            tribe,
            unit: unit.to_string(),
            path: entry.path().to_path_buf(),
        });
    }

    Ok(units)
}
