use thiserror::Error;

pub type LogApiResult<T> = Result<T, LogApiError>;

#[derive(Debug, Error)]
pub enum LogApiError {
    /// Non-2xx response; body is the raw response text
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(Box<ureq::Transport>),

    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LogApiError {
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ureq::Error> for LogApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, resp) => {
                let body = resp.into_string().unwrap_or_default();
                Self::http(status, body)
            }
            ureq::Error::Transport(transport) => Self::Transport(Box::new(transport)),
        }
    }
}
