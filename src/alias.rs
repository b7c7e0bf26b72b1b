//! The "current build" alias.
//!
//! External editor tooling reads compiler metadata from one well-known
//! location next to the tree root; every configure repoints it at the linux
//! build directory. Nothing in this tool ever reads the alias back.

use crate::platform::Platform;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const ALIAS_NAME: &str = "build-release";

/// The alias lives next to the tree root, not inside it.
pub fn alias_path(root: &Path) -> Result<PathBuf> {
    let parent = root.parent().with_context(|| {
        format!(
            "{} has no parent directory to hold the alias",
            root.display()
        )
    })?;
    Ok(parent.join(ALIAS_NAME))
}

/// Replace the alias so it resolves to the absolute path of `platform`'s
/// build directory.
pub fn update(root: &Path, platform: &Platform) -> Result<()> {
    let alias = alias_path(root)?;
    let target = fs::canonicalize(platform.build_dir(root))
        .with_context(|| format!("Resolving {}", platform.build_dir(root).display()))?;

    remove_existing(&alias)?;
    point_at(&target, &alias)?;
    println!("  alias {} -> {}", alias.display(), target.display());
    Ok(())
}

fn remove_existing(path: &Path) -> Result<()> {
    // is_dir follows links, so the symlink check has to come first.
    if path.is_symlink() || path.is_file() {
        fs::remove_file(path).with_context(|| format!("Removing {}", path.display()))?;
    } else if path.is_dir() {
        fs::remove_dir_all(path).with_context(|| format!("Removing {}", path.display()))?;
    }
    Ok(())
}

#[cfg(unix)]
fn point_at(target: &Path, alias: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, alias).with_context(|| {
        format!(
            "Creating symlink {} -> {}",
            alias.display(),
            target.display()
        )
    })
}

// Native symlinks can require elevated privileges here, so the alias becomes
// a snapshot copy of the build directory instead.
#[cfg(not(unix))]
fn point_at(target: &Path, alias: &Path) -> Result<()> {
    copy_dir(target, alias)
        .with_context(|| format!("Copying {} -> {}", target.display(), alias.display()))
}

#[cfg(not(unix))]
fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let to = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &to)?;
        } else {
            fs::copy(entry.path(), &to)?;
        }
    }
    Ok(())
}
