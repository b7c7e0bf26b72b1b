//! Per-platform configure/build records.
//!
//! The pipeline is gated on directory existence alone; this file only
//! records what already happened, so partial runs can be diagnosed with
//! `status` instead of inferred from directory listings.

use crate::{platform, tree};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const STATE_FILE: &str = ".multibuild-state.json";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TreeState {
    #[serde(default)]
    pub platforms: BTreeMap<String, PlatformState>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PlatformState {
    pub generated: bool,
    pub built: bool,
}

fn state_path(root: &Path) -> PathBuf {
    root.join(STATE_FILE)
}

/// A tree without a state file loads as the empty record.
pub fn load(root: &Path) -> Result<TreeState> {
    let path = state_path(root);
    if !path.exists() {
        return Ok(TreeState::default());
    }
    let contents =
        fs::read_to_string(&path).with_context(|| format!("Reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Parsing {}", path.display()))
}

pub fn save(root: &Path, state: &TreeState) -> Result<()> {
    let path = state_path(root);
    let contents = serde_json::to_string_pretty(state)?;
    fs::write(&path, contents).with_context(|| format!("Writing {}", path.display()))
}

pub fn record_generated(root: &Path, id: &str) -> Result<()> {
    let mut state = load(root)?;
    state.platforms.entry(id.to_string()).or_default().generated = true;
    save(root, &state)
}

pub fn record_built(root: &Path, id: &str) -> Result<()> {
    let mut state = load(root)?;
    state.platforms.entry(id.to_string()).or_default().built = true;
    save(root, &state)
}

/// `status`: one line per platform, recorded state next to what's actually
/// on disk.
pub fn report(root: &Path) -> Result<()> {
    tree::require_tree(root)?;
    let state = load(root)?;

    println!("Build tree: {}\n", root.display());
    for p in platform::PLATFORMS {
        let recorded = state.platforms.get(p.id).cloned().unwrap_or_default();
        println!(
            "  {:6} {:9} generated={:5} built={:5} build-dir={} install-dir={}",
            p.id,
            if p.enabled { "[active]" } else { "[dormant]" },
            recorded.generated,
            recorded.built,
            presence(&p.build_dir(root)),
            presence(&p.install_dir(root)),
        );
    }
    Ok(())
}

fn presence(path: &Path) -> &'static str {
    if path.exists() {
        "present"
    } else {
        "missing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_state_file_loads_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let state = load(tmp.path()).unwrap();
        assert!(state.platforms.is_empty());
    }

    #[test]
    fn records_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        record_generated(tmp.path(), "win64").unwrap();
        record_built(tmp.path(), "win64").unwrap();
        record_generated(tmp.path(), "linux").unwrap();

        let state = load(tmp.path()).unwrap();
        assert!(state.platforms["win64"].generated);
        assert!(state.platforms["win64"].built);
        assert!(state.platforms["linux"].generated);
        assert!(!state.platforms["linux"].built);
    }

    #[test]
    fn recording_built_keeps_generated() {
        let tmp = tempfile::tempdir().unwrap();
        record_generated(tmp.path(), "linux").unwrap();
        record_built(tmp.path(), "linux").unwrap();

        let state = load(tmp.path()).unwrap();
        assert!(state.platforms["linux"].generated);
    }
}
