use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error: {0}")]
    MissingScript(dev_config::Error),

    #[error(transparent)]
    Launcher(dev_config::Error),
}

impl From<dev_config::Error> for AppError {
    fn from(err: dev_config::Error) -> Self {
        match err {
            dev_config::Error::MissingDependency { .. } => AppError::MissingScript(err),
            other => AppError::Launcher(other),
        }
    }
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::MissingScript(err) | AppError::Launcher(err) => err.exit_code(),
        }
    }
}
