use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Frame count must be at least 1, got: {frames}")]
    InvalidFrameCount { frames: usize },

    #[error("Fill ratio must be in (0, 1], got: {ratio}")]
    InvalidFillRatio { ratio: f32 },

    #[error("Verification failed: {failures} of {checked} assets")]
    VerificationFailed { failures: usize, checked: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Processing error: {0}")]
    Processing(#[from] spritepro::Error),
}
