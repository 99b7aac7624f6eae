//! Usage document printed for `--help` / `-h`.
//!
//! The flags listed here are interpreted by `install.sh`, not by the launcher.

use std::io::Write;

/// Flags documented for the installer, in the order they are listed.
pub const INSTALLER_FLAGS: [&str; 8] = [
    "--no-hooks",
    "--no-git",
    "--no-tools",
    "--no-cron",
    "--hooks-only",
    "--git-only",
    "--tools-only",
    "--cron-only",
];

pub const USAGE: &str = "
@dodo-digital/dev-config

Power-user Claude Code config with integrated tooling for agentic development.

Usage:
  npx @dodo-digital/dev-config [options]

Options:
  --help, -h          Show this help message
  --no-hooks          Skip Claude hooks installation
  --no-git            Skip git config installation
  --no-tools          Skip CLI tools installation
  --no-cron           Skip crontab installation
  --hooks-only        Only install Claude hooks
  --git-only          Only install git config
  --tools-only        Only install CLI tools
  --cron-only         Only install crontab

Examples:
  npx @dodo-digital/dev-config              # Install everything
  npx @dodo-digital/dev-config --no-cron    # Skip crontab
  npx @dodo-digital/dev-config --hooks-only # Just Claude hooks

Repository: https://github.com/dodo-digital/dev-config
";

/// Write the usage document to `out`.
pub fn show_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{USAGE}")?;
    out.flush()
}
