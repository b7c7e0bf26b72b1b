//! Generator pass: produce native build definitions for every active
//! platform, repoint the editor alias, then hand off to the first build.

use crate::{alias, build, platform, process, state, tree};
use anyhow::Result;
use std::path::Path;
use std::process::Command;

pub const GENERATOR: &str = "cmake";

const GENERATOR_FLAVOR: &str = "Ninja";
const BUILD_PROFILE: &str = "RelWithDebInfo";

pub fn run(root: &Path) -> Result<()> {
    tree::initialize(root)?;

    for p in platform::enabled() {
        println!("\n=== {} ===", p.id);
        process::run(&mut generator_command(root, p))?;
        state::record_generated(root, p.id)?;
    }

    alias::update(root, &platform::LINUX)?;
    build::build_all(root)
}

/// Compose the generator invocation for one platform. The current directory
/// is the project checkout; the build tree lives wherever the caller chose.
pub fn generator_command(root: &Path, p: &platform::Platform) -> Command {
    let mut cmd = Command::new(GENERATOR);
    cmd.arg("-B").arg(p.build_dir(root));
    cmd.arg(format!(
        "-DCMAKE_INSTALL_PREFIX={}",
        p.install_dir(root).display()
    ));
    cmd.args(["-G", GENERATOR_FLAVOR]);
    cmd.arg(format!("-DCMAKE_BUILD_TYPE={BUILD_PROFILE}"));
    cmd.arg(format!("-DASTER_PLATFORM={}", p.generator_variant));
    if p.export_compile_commands {
        cmd.arg("-DCMAKE_EXPORT_COMPILE_COMMANDS=1");
    }
    cmd.args(p.generator_args);
    cmd.arg(".");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn win64_generator_invocation() {
        let cmd = generator_command(Path::new("out"), &platform::WIN64);
        assert_eq!(cmd.get_program().to_str(), Some("cmake"));
        assert_eq!(
            args_of(&cmd),
            [
                "-B",
                "out/build-release-win64",
                "-DCMAKE_INSTALL_PREFIX=out/install-release-win64",
                "-G",
                "Ninja",
                "-DCMAKE_BUILD_TYPE=RelWithDebInfo",
                "-DASTER_PLATFORM=Win64",
                ".",
            ]
        );
    }

    #[test]
    fn linux_generator_exports_compile_metadata() {
        let cmd = generator_command(Path::new("out"), &platform::LINUX);
        let args = args_of(&cmd);
        assert!(args.contains(&"-DCMAKE_EXPORT_COMPILE_COMMANDS=1".to_string()));
        assert!(args.contains(&"-DASTER_PLATFORM=Linux".to_string()));
        // The project checkout itself is always the source directory.
        assert_eq!(args.last().map(String::as_str), Some("."));
    }

    #[test]
    fn win64_generator_does_not_export_compile_metadata() {
        let cmd = generator_command(Path::new("out"), &platform::WIN64);
        assert!(!args_of(&cmd)
            .iter()
            .any(|a| a.starts_with("-DCMAKE_EXPORT_COMPILE_COMMANDS")));
    }
}
