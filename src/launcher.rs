//! Locating and delegating to the bundled installer script.
//!
//! The package is laid out as
//!
//! ```text
//! <root>/
//!   bin/dev-config   launcher executable
//!   install.sh       installer script
//! ```
//!
//! [`Launcher`] resolves `<root>` from the executable's own location, checks
//! that `install.sh` is present, and then either prints the usage document or
//! runs `bash install.sh <args>` from `<root>` with inherited standard streams.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::help::show_help;
use crate::types::{Invocation, Outcome};

pub const SCRIPT_NAME: &str = "install.sh";
pub const DEFAULT_INTERPRETER: &str = "bash";

pub const START_BANNER: &str = "🚀 Installing dev-config...";
pub const SUCCESS_BANNER: &str = "✅ dev-config installed successfully!";

/// Classify the raw argument list (program name already stripped).
///
/// A `--help` or `-h` anywhere in the list selects help, even when it sits
/// in the value position of another option. Everything else is returned
/// unchanged for the installer to interpret.
pub fn parse_args<I, S>(args: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.iter().any(|a| is_help_flag(a)) {
        Invocation::Help
    } else {
        Invocation::Delegate(args)
    }
}

fn is_help_flag(arg: &OsStr) -> bool {
    arg == "--help" || arg == "-h"
}

/// Package root for a launcher installed at `<root>/bin/<exe>`.
pub fn package_root_for(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}

/// Exit code to report for a finished child. A child killed by a signal has
/// no code; it is reported as `128 + signal` like a shell would.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// Best-effort console write. A closed or full stream must not change the
/// exit status, so failures are only logged.
fn announce<W: Write>(mut out: W, line: fmt::Arguments<'_>) {
    if let Err(e) = out.write_fmt(line).and_then(|()| out.flush()) {
        debug!("Console write failed: {}", e);
    }
}

#[derive(Debug, Clone)]
pub struct Launcher {
    root: PathBuf,
    script: PathBuf,
    interpreter: OsString,
}

impl Launcher {
    /// Launcher for a package rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let script = root.join(SCRIPT_NAME);
        Self {
            root,
            script,
            interpreter: OsString::from(DEFAULT_INTERPRETER),
        }
    }

    /// Launcher for the package the running executable belongs to.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe()?;
        // Follow symlinks so a linked launcher still finds its own package.
        let exe = fs::canonicalize(&exe).unwrap_or(exe);
        let root = package_root_for(&exe).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("cannot determine package root from {}", exe.display()),
            )
        })?;
        debug!("Launcher executable: {:?}, package root: {:?}", exe, root);
        Ok(Self::new(root))
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<OsString>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Path of the installer script, failing if it is not on disk.
    pub fn resolve_path(&self) -> Result<&Path> {
        if self.script.is_file() {
            debug!("Resolved installer script: {:?}", self.script());
            Ok(self.script())
        } else {
            warn!("Installer script missing at {:?}", self.script());
            Err(Error::MissingDependency {
                path: self.script.clone(),
            })
        }
    }

    /// The child command: `<interpreter> <script> <args...>` run from the
    /// package root with all three standard streams inherited.
    pub fn command(&self, args: &[OsString]) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(&self.script)
            .args(args)
            .current_dir(&self.root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Full entry point: check the script, then show help or delegate.
    pub fn launch<I, S>(&self, args: I) -> Result<Outcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.resolve_path()?;

        match parse_args(args) {
            Invocation::Help => {
                info!("Help flag present, not running installer");
                if let Err(e) = show_help(&mut io::stdout().lock()) {
                    debug!("Console write failed: {}", e);
                }
                Ok(Outcome::HelpShown)
            }
            Invocation::Delegate(args) => self.run(&args),
        }
    }

    /// Spawn the installer with `args` and wait for it to finish.
    ///
    /// Prints the start banner before spawning and the outcome banner after
    /// the child exits.
    pub fn run(&self, args: &[OsString]) -> Result<Outcome> {
        announce(io::stdout().lock(), format_args!("{START_BANNER}\n\n"));

        info!(
            "Spawning {:?} {:?} with {} forwarded argument(s)",
            self.interpreter,
            self.script(),
            args.len()
        );
        let mut child = self
            .command(args)
            .spawn()
            .map_err(|source| Error::SpawnFailure { source })?;
        let status = child
            .wait()
            .map_err(|source| Error::SpawnFailure { source })?;
        debug!("Installer exited with {:?}", status);

        let code = exit_code_of(status);
        if code == 0 {
            announce(io::stdout().lock(), format_args!("\n{SUCCESS_BANNER}\n"));
            Ok(Outcome::DelegatedSuccess)
        } else {
            announce(
                io::stderr().lock(),
                format_args!("\n❌ Installation failed with code {code}\n"),
            );
            Ok(Outcome::DelegatedFailure { code })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn help_flag_anywhere_selects_help() {
        assert_eq!(parse_args(["--help"]), Invocation::Help);
        assert_eq!(parse_args(["-h"]), Invocation::Help);
        assert_eq!(parse_args(["--no-cron", "--git-only", "-h"]), Invocation::Help);
        // Also when it looks like the value of another option.
        assert_eq!(parse_args(["--name", "--help"]), Invocation::Help);
    }

    #[test]
    fn other_arguments_pass_through_in_order() {
        let args = ["--tools-only", "--unknown", "value", "-x"];
        assert_eq!(parse_args(args), Invocation::Delegate(os(&args)));
        assert_eq!(parse_args(Vec::<String>::new()), Invocation::Delegate(vec![]));
    }

    #[test]
    fn lookalike_flags_are_not_help() {
        let args = ["--helpful", "-hh", "--help=yes"];
        assert_eq!(parse_args(args), Invocation::Delegate(os(&args)));
    }

    #[test]
    fn package_root_is_two_levels_above_executable() {
        assert_eq!(
            package_root_for(Path::new("/opt/dev-config/bin/dev-config")),
            Some(PathBuf::from("/opt/dev-config"))
        );
        assert_eq!(
            package_root_for(Path::new("bin/dev-config")),
            Some(PathBuf::new())
        );
        assert_eq!(package_root_for(Path::new("dev-config")), None);
        assert_eq!(package_root_for(Path::new("/")), None);
    }

    #[test]
    fn resolve_path_requires_script_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let launcher = Launcher::new(dir.path());

        match launcher.resolve_path() {
            Err(Error::MissingDependency { path }) => {
                assert_eq!(path, dir.path().join(SCRIPT_NAME))
            }
            other => panic!("expected MissingDependency, got {other:?}"),
        }

        fs::write(dir.path().join(SCRIPT_NAME), "exit 0\n").unwrap();
        assert_eq!(launcher.resolve_path().unwrap(), dir.path().join(SCRIPT_NAME));
    }

    #[test]
    fn launch_without_script_never_spawns() {
        let dir = tempfile::tempdir().unwrap();
        // An interpreter that cannot exist; reaching spawn would yield SpawnFailure.
        let launcher = Launcher::new(dir.path()).with_interpreter("/nonexistent/interpreter");
        let err = launcher.launch(["--help"]).unwrap_err();
        assert!(matches!(err, Error::MissingDependency { .. }));
    }

    #[test]
    fn command_targets_script_from_package_root() {
        let launcher = Launcher::new("/opt/dev-config");
        let cmd = launcher.command(&os(&["--no-git", "--cron-only"]));

        assert_eq!(cmd.get_program(), "bash");
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(
            args,
            [
                OsStr::new("/opt/dev-config/install.sh"),
                OsStr::new("--no-git"),
                OsStr::new("--cron-only"),
            ]
        );
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/opt/dev-config")));
    }

    struct ClosedStream;

    impl Write for ClosedStream {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn announce_tolerates_closed_stream() {
        announce(ClosedStream, format_args!("{START_BANNER}\n"));

        let mut buf = Vec::new();
        announce(&mut buf, format_args!("\n{SUCCESS_BANNER}\n"));
        assert_eq!(buf, format!("\n{SUCCESS_BANNER}\n").into_bytes());
    }

    #[test]
    fn spawn_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SCRIPT_NAME), "exit 0\n").unwrap();
        let launcher = Launcher::new(dir.path()).with_interpreter("/nonexistent/interpreter");

        let err = launcher.run(&[]).unwrap_err();
        assert!(matches!(err, Error::SpawnFailure { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn run_mirrors_child_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SCRIPT_NAME),
            "if [ \"$1\" = \"--no-cron\" ]; then exit 2; fi\nexit 0\n",
        )
        .unwrap();
        let launcher = Launcher::new(dir.path());

        assert_eq!(launcher.run(&[]).unwrap(), Outcome::DelegatedSuccess);
        assert_eq!(
            launcher.run(&os(&["--no-cron"])).unwrap(),
            Outcome::DelegatedFailure { code: 2 }
        );
    }

    #[cfg(unix)]
    #[test]
    fn child_runs_in_package_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        fs::write(root.join(SCRIPT_NAME), "pwd > cwd.txt\n").unwrap();

        let outcome = Launcher::new(&root).launch(Vec::<OsString>::new()).unwrap();
        assert_eq!(outcome, Outcome::DelegatedSuccess);

        let cwd = fs::read_to_string(root.join("cwd.txt")).unwrap();
        assert_eq!(Path::new(cwd.trim()), root);
    }

    #[cfg(unix)]
    #[test]
    fn signalled_child_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SCRIPT_NAME), "kill -TERM $$\n").unwrap();

        let outcome = Launcher::new(dir.path()).run(&[]).unwrap();
        assert_eq!(outcome, Outcome::DelegatedFailure { code: 128 + 15 });
    }
}
