use anyhow::Result;

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    match cli.cmd {
        crate::cli::Cmd::Configure { root } => crate::configure::run(&root),
        crate::cli::Cmd::Build { root } => crate::build::build_all(&root),
        crate::cli::Cmd::Launch { root } => crate::launch::run(&root),
        crate::cli::Cmd::Status { root } => crate::state::report(&root),
        crate::cli::Cmd::Doctor => crate::doctor::run(),
    }
}
