//! Shared subprocess plumbing.

use anyhow::{bail, Context, Result};
use std::process::Command;

/// Render a command as the single line echoed before running it.
pub fn render(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Echo and run a command to completion, failing on a non-zero exit.
pub fn run(cmd: &mut Command) -> Result<()> {
    println!("{}", render(cmd));
    let program = cmd.get_program().to_string_lossy().into_owned();
    let status = cmd
        .status()
        .with_context(|| format!("Spawning {program}"))?;
    if !status.success() {
        bail!("{program} failed with status {status}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_joins_program_and_args() {
        let mut cmd = Command::new("ninja");
        cmd.args(["-C", "out/build-release-linux", "install"]);
        assert_eq!(render(&cmd), "ninja -C out/build-release-linux install");
    }
}
