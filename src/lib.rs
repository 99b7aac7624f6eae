#![doc = r#"
dev-config: launcher for the bundled `install.sh` installer.

The launcher is deliberately thin: it locates `install.sh` next to its own
`bin/` directory, prints usage for `--help`/`-h`, and otherwise runs the script
under `bash` with every other argument forwarded verbatim. The installer's exit
code becomes the launcher's exit code.

Run the installer from your own code
------------------------------------
```rust,no_run
use dev_config::{Launcher, Outcome};

fn main() -> dev_config::Result<()> {
    let launcher = Launcher::new("/opt/dev-config");
    let outcome = launcher.launch(["--no-cron"])?;
    if let Outcome::DelegatedFailure { code } = outcome {
        eprintln!("installer exited with {code}");
    }
    std::process::exit(outcome.exit_code());
}
```

Classify arguments without running anything
-------------------------------------------
```rust
use dev_config::{parse_args, Invocation};

assert_eq!(parse_args(["--tools-only", "-h"]), Invocation::Help);
assert!(matches!(parse_args(["--git-only"]), Invocation::Delegate(_)));
```

Error handling
--------------
Fallible operations return `dev_config::Result<T>`. A missing script is
`Error::MissingDependency`, an interpreter that cannot be started is
`Error::SpawnFailure`. An installer that runs and fails is not an error: it is
reported as `Outcome::DelegatedFailure { code }`.

Logging
-------
The crate emits `tracing` events. The `dev-config` binary installs a
subscriber only when `DEV_CONFIG_LOG` holds a filter such as `debug`.
"#]

pub mod error;
pub mod help;
pub mod launcher;
pub mod types;

pub use error::{Error, Result};
pub use help::{INSTALLER_FLAGS, USAGE, show_help};
pub use launcher::{Launcher, SCRIPT_NAME, parse_args};
pub use types::{Invocation, Outcome};
