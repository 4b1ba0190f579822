//! Error types for the records client.

/// Errors that can occur while retrieving a page of records.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured base URL could not be parsed.
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// The request never produced a response (network error, timeout, unreadable body).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The endpoint answered with a status other than 200.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not a JSON array of records.
    #[error("Failed to decode response: {message}")]
    Decode { message: String, body: String },
}

/// Coarse classification of an [`Error`], for callers that only need to branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Transport,
    Status,
    Decode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidUrl { .. } => ErrorKind::Config,
            Error::Transport(_) => ErrorKind::Transport,
            Error::HttpStatus { .. } => ErrorKind::Status,
            Error::Decode { .. } => ErrorKind::Decode,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        let err = Error::InvalidUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("nope"));

        let err = Error::Transport("connection refused".to_string());
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("connection refused"));

        let err = Error::HttpStatus {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.kind(), ErrorKind::Status);
        assert!(err.to_string().contains("503"));

        let err = Error::Decode {
            message: "expected value".to_string(),
            body: "<html>".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().contains("expected value"));
    }
}
