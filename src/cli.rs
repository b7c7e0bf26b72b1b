use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "multibuild")]
#[command(about = "Configure, build and launch the Aster client across every target platform")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Create the build tree, generate native build definitions for every
    /// active platform, repoint the editor alias, then run a first build.
    Configure {
        /// Where to create the build tree; must not exist yet.
        root: PathBuf,
    },

    /// Rebuild and reinstall every active platform in an existing tree.
    Build {
        /// Root created by `configure`.
        root: PathBuf,
    },

    /// Rebuild, then start one detached client session per active platform.
    Launch {
        /// Root created by `configure`.
        root: PathBuf,
    },

    /// Show recorded configure/build state next to what's on disk.
    Status {
        /// Root created by `configure`.
        root: PathBuf,
    },

    /// Check that the external tools the pipeline drives are available.
    Doctor,
}
