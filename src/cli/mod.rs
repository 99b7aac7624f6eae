//! Command Line Interface (CLI) layer for dev-config.
//!
//! This module defines argument collection (`args`), error reporting
//! (`errors`), and the orchestration logic (`runner`) that wires the
//! process arguments to `dev_config::Launcher`.
//!
//! If you are embedding the launcher into another application, use
//! `dev_config::Launcher` directly instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
