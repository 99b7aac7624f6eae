use std::ffi::OsString;

/// What the launcher decided to do with its argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A help flag appeared somewhere in the arguments.
    Help,
    /// Hand the arguments, untouched, to the installer script.
    Delegate(Vec<OsString>),
}

/// Terminal state of a launcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HelpShown,
    DelegatedSuccess,
    DelegatedFailure { code: i32 },
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::HelpShown | Outcome::DelegatedSuccess => 0,
            Outcome::DelegatedFailure { code } => code,
        }
    }
}
