//! dev-config CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: collect the arguments, hand them to
//! the launcher, and exit with the installer's status.
//! For programmatic use, prefer the library API (`dev_config::Launcher`).

mod cli;

fn main() {
    let args = cli::CliArgs::parse_verbatim();
    std::process::exit(cli::run(args));
}
