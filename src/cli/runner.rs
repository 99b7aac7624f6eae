use std::io::Write;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use dev_config::{Launcher, Outcome};

use super::args::CliArgs;
use super::errors::AppError;

/// Environment variable holding an `EnvFilter` directive for diagnostics.
pub const LOG_ENV: &str = "DEV_CONFIG_LOG";

/// Diagnostics go to stderr and stay off unless `DEV_CONFIG_LOG` is set.
fn init_logging() -> Result<(), ParseError> {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let filter = EnvFilter::try_new(directives)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn launch(args: CliArgs) -> Result<Outcome, AppError> {
    let launcher = Launcher::from_current_exe()?;
    info!("Package root: {:?}", launcher.root());
    Ok(launcher.launch(args.forwarded)?)
}

/// Run the launcher and return the process exit code.
pub fn run(args: CliArgs) -> i32 {
    if let Err(e) = init_logging() {
        let _ = writeln!(std::io::stderr(), "Ignoring {LOG_ENV}: {e}");
    }

    match launch(args) {
        Ok(outcome) => {
            debug!("Launcher finished: {:?}", outcome);
            outcome.exit_code()
        }
        Err(e) => {
            let _ = writeln!(std::io::stderr(), "{e}");
            e.exit_code()
        }
    }
}
