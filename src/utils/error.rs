use thiserror::Error;

#[derive(Error, Debug)]
pub enum RobotError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// HTTP 410: the robot ran out of energy. Terminal, never retried.
    #[error("Robot is out of energy (HTTP 410)")]
    OutOfEnergy,

    /// Every attempt failed with a retryable status or a transport error.
    /// `status` and `body` describe the last attempt observed.
    #[error("API request failed after {attempts} tries (last status: {status}): {body}")]
    RetriesExhausted {
        attempts: u32,
        status: String,
        body: String,
    },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl RobotError {
    /// Process exit code for the CLI. Energy exhaustion and exhausted
    /// retries stay distinguishable for scripting.
    pub fn exit_code(&self) -> i32 {
        match self {
            RobotError::OutOfEnergy => 3,
            RobotError::RetriesExhausted { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, RobotError>;
