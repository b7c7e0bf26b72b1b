//! Build target matrix.
//!
//! One record per target the client ships on, in invocation order. win32 is
//! fully specified but dormant: `configure` scaffolds its directories and
//! nothing else touches it.

use std::path::{Path, PathBuf};

/// mingw-w64 runtime DLLs that a cross-built win64 client needs next to it.
pub const MINGW64_RUNTIME_DIR: &str = "/usr/x86_64-w64-mingw32/bin";
/// 32-bit counterpart, for when win32 comes back.
pub const MINGW32_RUNTIME_DIR: &str = "/usr/i686-w64-mingw32/bin";

#[derive(Debug)]
pub struct Platform {
    pub id: &'static str,
    /// Dormant platforms keep their directory scaffolding but are skipped by
    /// every generator, build and launch pass.
    pub enabled: bool,
    /// Value of the ASTER_PLATFORM generator variable; the project's own
    /// CMakeLists selects the toolchain from it.
    pub generator_variant: &'static str,
    /// Extra generator options beyond the shared set.
    pub generator_args: &'static [&'static str],
    /// Emit machine-readable compile metadata for editor tooling.
    pub export_compile_commands: bool,
    /// Where runtime DLLs are staged from after a build, if anywhere.
    pub runtime_libs: Option<&'static str>,
    /// Install subdirectory prepended to the dynamic-library search path
    /// when launching, if the platform needs one.
    pub library_dir: Option<&'static str>,
    pub client_binary: &'static str,
    /// Offsets differ per platform so concurrent sessions don't stack.
    pub window_geometry: &'static str,
}

pub const WIN64: Platform = Platform {
    id: "win64",
    enabled: true,
    generator_variant: "Win64",
    generator_args: &[],
    export_compile_commands: false,
    runtime_libs: Some(MINGW64_RUNTIME_DIR),
    library_dir: None,
    client_binary: "aster-client.exe",
    window_geometry: "80x20+500+30",
};

pub const WIN32: Platform = Platform {
    id: "win32",
    enabled: false,
    generator_variant: "Win32",
    generator_args: &[],
    export_compile_commands: false,
    runtime_libs: Some(MINGW32_RUNTIME_DIR),
    library_dir: None,
    client_binary: "aster-client.exe",
    window_geometry: "80x20+980+30",
};

pub const LINUX: Platform = Platform {
    id: "linux",
    enabled: true,
    generator_variant: "Linux",
    generator_args: &[],
    export_compile_commands: true,
    runtime_libs: None,
    library_dir: Some("lib"),
    client_binary: "aster-client",
    window_geometry: "80x20+20+30",
};

/// Matrix order is invocation order.
pub const PLATFORMS: &[Platform] = &[WIN64, WIN32, LINUX];

impl Platform {
    pub fn build_dir(&self, root: &Path) -> PathBuf {
        root.join(format!("build-release-{}", self.id))
    }

    pub fn install_dir(&self, root: &Path) -> PathBuf {
        root.join(format!("install-release-{}", self.id))
    }
}

/// Platforms that actually take part in generator/build/launch passes.
pub fn enabled() -> impl Iterator<Item = &'static Platform> {
    PLATFORMS.iter().filter(|p| p.enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_skips_dormant_win32() {
        let ids: Vec<&str> = enabled().map(|p| p.id).collect();
        assert_eq!(ids, ["win64", "linux"]);
    }

    #[test]
    fn dormant_platform_is_still_defined() {
        assert!(PLATFORMS.iter().any(|p| p.id == "win32" && !p.enabled));
    }

    #[test]
    fn directory_naming() {
        let root = Path::new("out");
        assert_eq!(
            WIN64.build_dir(root),
            PathBuf::from("out/build-release-win64")
        );
        assert_eq!(
            LINUX.install_dir(root),
            PathBuf::from("out/install-release-linux")
        );
    }

    #[test]
    fn only_linux_exports_compile_metadata() {
        for p in PLATFORMS {
            assert_eq!(p.export_compile_commands, p.id == "linux");
        }
    }
}
