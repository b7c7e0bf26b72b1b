//! Build pass: run the build tool for every active platform in matrix order,
//! then stage runtime DLLs for cross-built targets.

use crate::{platform, process, state, tree};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

pub const BUILD_TOOL: &str = "ninja";

/// Build and install every active platform. Preconditions are checked for
/// all platforms up front so a half-configured tree aborts before any build
/// starts.
pub fn build_all(root: &Path) -> Result<()> {
    tree::require_tree(root)?;
    tree::require_build_dirs(root, platform::enabled())?;

    for p in platform::enabled() {
        println!("\n=== {} ===", p.id);
        process::run(&mut build_command(root, p))?;
        if let Some(runtime) = p.runtime_libs {
            stage_runtime_libs(Path::new(runtime), &p.install_dir(root).join("bin"))?;
        }
        state::record_built(root, p.id)?;
    }
    Ok(())
}

/// The `install` target drives both compilation and installation; the
/// generator wired the install prefix in at configure time.
pub fn build_command(root: &Path, p: &platform::Platform) -> Command {
    let mut cmd = Command::new(BUILD_TOOL);
    cmd.arg("-C").arg(p.build_dir(root));
    cmd.arg("install");
    cmd
}

/// Cross-built binaries don't carry their runtime DLLs into the install
/// tree; copy them in next to the client binary.
fn stage_runtime_libs(runtime_dir: &Path, bin_dir: &Path) -> Result<()> {
    fs::create_dir_all(bin_dir).with_context(|| format!("Creating {}", bin_dir.display()))?;

    let entries = fs::read_dir(runtime_dir)
        .with_context(|| format!("Reading runtime directory {}", runtime_dir.display()))?;

    let mut staged = 0;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("dll") {
            continue;
        }
        fs::copy(&path, bin_dir.join(entry.file_name()))
            .with_context(|| format!("Staging {}", path.display()))?;
        staged += 1;
    }
    println!("  staged {} runtime DLLs into {}", staged, bin_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_command_targets_install() {
        let cmd = build_command(Path::new("out"), &platform::LINUX);
        assert_eq!(cmd.get_program().to_str(), Some("ninja"));
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, ["-C", "out/build-release-linux", "install"]);
    }

    #[test]
    fn staging_copies_only_dlls() {
        let tmp = tempfile::tempdir().unwrap();
        let runtime = tmp.path().join("runtime");
        let bin = tmp.path().join("bin");
        fs::create_dir(&runtime).unwrap();
        fs::write(runtime.join("libwinpthread-1.dll"), "a").unwrap();
        fs::write(runtime.join("libstdc++-6.dll"), "b").unwrap();
        fs::write(runtime.join("readme.txt"), "c").unwrap();

        stage_runtime_libs(&runtime, &bin).unwrap();

        assert!(bin.join("libwinpthread-1.dll").is_file());
        assert!(bin.join("libstdc++-6.dll").is_file());
        assert!(!bin.join("readme.txt").exists());
        assert_eq!(fs::read_dir(&bin).unwrap().count(), 2);
    }

    #[test]
    fn staging_fails_on_missing_runtime_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let err = stage_runtime_libs(&tmp.path().join("nope"), &tmp.path().join("bin"))
            .unwrap_err();
        assert!(err.to_string().contains("runtime directory"));
    }
}
