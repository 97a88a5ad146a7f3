use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {reason}")]
    Record { line: usize, reason: String },

    #[error("solver '{0}' is not in the configured solver set")]
    UnknownSolver(String),

    #[error("no trial recorded for solver '{solver}' on instance '{instance}'")]
    MissingTrial { instance: String, solver: String },

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Custom(String),
}
