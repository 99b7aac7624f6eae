use clap::Parser;
use std::ffi::OsString;

/// The launcher recognizes no options of its own besides `--help`/`-h`, and
/// even those are detected after collection. clap's built-in help and version
/// flags are disabled so every token reaches `install.sh`.
#[derive(Parser, Debug)]
#[command(
    name = "dev-config",
    about = "Install dev-config by running the bundled install.sh",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Arguments forwarded verbatim to install.sh
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub forwarded: Vec<OsString>,
}

impl CliArgs {
    /// Parse the process arguments, keeping every token for the installer.
    pub fn parse_verbatim() -> Self {
        Self::parse_verbatim_from(std::env::args_os())
    }

    /// clap consumes a leading `--` as its own delimiter; the installer
    /// must still receive it, so it is put back in front.
    pub fn parse_verbatim_from<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let mut args = Self::parse_from(&argv);
        if argv.get(1).is_some_and(|first| first == "--") {
            args.forwarded.insert(0, OsString::from("--"));
        }
        args
    }
}
