use thiserror::Error;

/// Errors raised by the coaching core
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Day {index} does not exist (program has {len} days)")]
    DayOutOfRange { index: usize, len: usize },

    #[error("Exercise {index} does not exist on day {day} ({len} exercises)")]
    ExerciseOutOfRange { day: usize, index: usize, len: usize },

    #[error("The program has no days yet")]
    EmptyProgram,

    #[error("Failed to get a response from the AI Fitness Coach: {0}")]
    Generation(String),

    #[error("Received an empty response from the AI. Please try again.")]
    EmptyResponse,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoachError>;
