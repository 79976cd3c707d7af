#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("forecast request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed forecast response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid forecast endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
