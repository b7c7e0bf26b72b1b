//! # multibuild
//!
//! Configure, build and test-launch the Aster client for every target
//! platform from one place.
//!
//! ## Usage
//!
//! ```bash
//! multibuild configure out   # create tree + generate + first build
//! multibuild build out       # rebuild + reinstall every active platform
//! multibuild launch out      # rebuild, then one client session per platform
//! multibuild status out      # recorded state vs on-disk layout
//! multibuild doctor          # preflight the external tools
//! ```

use anyhow::Result;
use clap::Parser;

mod alias;
mod app;
mod build;
mod cli;
mod configure;
mod doctor;
mod launch;
mod platform;
mod process;
mod state;
mod tree;

fn main() -> Result<()> {
    let cli = crate::cli::Cli::parse();
    crate::app::run(cli)
}
