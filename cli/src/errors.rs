use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Could not read input, error is {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("Line {line}: expected `<label> <score>` but the score is missing")]
    MissingScore { line: usize },
    #[error("Could not serialize output, error is {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Could not start producer threads, error is {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
