//! On-disk build tree: the uniform per-platform layout plus the existence
//! checks that gate every pipeline stage.
//!
//! Directory presence is the only precondition state; the records in `state`
//! are diagnostic and never consulted here.

use crate::platform::{self, Platform};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Create `root` and the build/install directory pair for every platform,
/// dormant ones included, so the layout is uniform.
pub fn initialize(root: &Path) -> Result<()> {
    if root.exists() {
        bail!(
            "refusing to configure {}: path already exists",
            root.display()
        );
    }
    fs::create_dir(root).with_context(|| format!("Creating {}", root.display()))?;
    for p in platform::PLATFORMS {
        for dir in [p.build_dir(root), p.install_dir(root)] {
            fs::create_dir(&dir).with_context(|| format!("Creating {}", dir.display()))?;
        }
    }
    Ok(())
}

pub fn require_tree(root: &Path) -> Result<()> {
    if !root.exists() {
        bail!(
            "build tree {} not found. Run: multibuild configure {}",
            root.display(),
            root.display()
        );
    }
    Ok(())
}

/// Fail on the first platform whose build directory is missing, before any
/// build tool runs.
pub fn require_build_dirs<'a>(
    root: &Path,
    platforms: impl IntoIterator<Item = &'a Platform>,
) -> Result<()> {
    for p in platforms {
        let dir = p.build_dir(root);
        if !dir.exists() {
            bail!(
                "{} build directory {} not found. Run: multibuild configure",
                p.id,
                dir.display()
            );
        }
    }
    Ok(())
}

/// Same check against install directories, used before launch.
pub fn require_install_dirs<'a>(
    root: &Path,
    platforms: impl IntoIterator<Item = &'a Platform>,
) -> Result<()> {
    for p in platforms {
        let dir = p.install_dir(root);
        if !dir.exists() {
            bail!(
                "{} install directory {} not found. Run: multibuild configure",
                p.id,
                dir.display()
            );
        }
    }
    Ok(())
}
