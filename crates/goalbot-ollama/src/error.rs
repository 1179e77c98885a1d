use thiserror::Error;

#[derive(Debug, Error)]
pub enum OllamaError {
    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Http(#[from] ureq::Error),
}
