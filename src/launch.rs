//! Test launch: refresh artifacts, then start one detached client session
//! per active platform.
//!
//! Sessions are fire-and-forget: each gets its own terminal and this run
//! returns as soon as all of them have been spawned.

use crate::{build, platform, tree};
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub const TERMINAL: &str = "xterm";

const DEFAULT_RESOLUTION: &str = "640x480";
const LIBRARY_PATH_VAR: &str = "LD_LIBRARY_PATH";

pub fn run(root: &Path) -> Result<()> {
    tree::require_install_dirs(root, platform::enabled())?;
    build::build_all(root)?;

    println!();
    for p in platform::enabled() {
        let mut cmd = session_command(root, p)?;
        let child = cmd
            .spawn()
            .with_context(|| format!("Spawning {} session", p.id))?;
        // Deliberately not waited on: the session outlives this run.
        println!("  {} session started (PID {})", p.id, child.id());
    }
    Ok(())
}

/// One terminal session per platform: own geometry and title, the install
/// bin directory as working directory, the platform's library overlay, and
/// the default test resolution.
pub fn session_command(root: &Path, p: &platform::Platform) -> Result<Command> {
    let bin_dir = absolute(&p.install_dir(root).join("bin"))?;

    let mut cmd = Command::new(TERMINAL);
    cmd.current_dir(&bin_dir);
    cmd.args(["-geometry", p.window_geometry]);
    cmd.arg("-T").arg(format!("floating (aster {})", p.id));

    if let Some(lib) = p.library_dir {
        let lib_dir = absolute(&p.install_dir(root).join(lib))?;
        cmd.env(LIBRARY_PATH_VAR, overlay_library_path(&lib_dir));
    }

    cmd.arg("-e");
    cmd.arg(format!("./{}", p.client_binary));
    cmd.args(["--resolution", DEFAULT_RESOLUTION]);
    cmd.stderr(Stdio::null());
    Ok(cmd)
}

/// Prepend `lib_dir` to the inherited dynamic-library search path.
fn overlay_library_path(lib_dir: &Path) -> OsString {
    let mut value = lib_dir.as_os_str().to_os_string();
    if let Some(existing) = std::env::var_os(LIBRARY_PATH_VAR) {
        if !existing.is_empty() {
            value.push(":");
            value.push(existing);
        }
    }
    value
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()
        .context("Resolving current directory")?
        .join(path))
}
