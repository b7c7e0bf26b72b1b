//! Preflight: check that everything the pipeline shells out to is actually
//! available before a configure run discovers it the hard way.

use crate::{build, configure, launch, platform};
use anyhow::{bail, Result};
use std::path::Path;

pub fn run() -> Result<()> {
    let mut ok = true;

    for tool in [configure::GENERATOR, build::BUILD_TOOL, launch::TERMINAL] {
        if which::which(tool).is_err() {
            eprintln!("[FAIL] missing `{tool}` in PATH");
            ok = false;
        } else {
            eprintln!("[OK] {tool}");
        }
    }

    for p in platform::enabled() {
        if let Some(runtime) = p.runtime_libs {
            let dir = Path::new(runtime);
            if dir.is_dir() {
                eprintln!("[OK] {}", dir.display());
            } else {
                eprintln!(
                    "[FAIL] missing {} runtime directory: {}",
                    p.id,
                    dir.display()
                );
                ok = false;
            }
        }
    }

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}
