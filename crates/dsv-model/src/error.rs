use thiserror::Error;

#[derive(Debug, Error)]
pub enum DsvError {
    /// An issue was added with a code that is not registered in the catalog
    /// and carried no inline message. This is a defect in the calling rule,
    /// not bad input data; callers should let it propagate and fail the run.
    #[error("issue code not registered in catalog: {code}")]
    UnknownIssueCode { code: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, DsvError>;
