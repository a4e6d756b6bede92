/// Fetch failures for either feed. The controller handles every variant the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    NetworkError(String),
    HttpStatus { status: u16, text: String },
    DecodeError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AppError::HttpStatus { status, text } => write!(f, "HTTP Error: {} {}", status, text),
            AppError::DecodeError(msg) => write!(f, "Decode Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type FetchResult<T> = Result<T, AppError>;
