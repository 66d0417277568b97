use thiserror::Error;

/// Failures while building a search field or mounting it into a form
#[derive(Debug, Error)]
pub enum Error {
    #[error("input name must not be empty")]
    EmptyInputName,

    #[error("form already has a field named `{0}`")]
    DuplicateInputName(String),

    #[error("invalid remote url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// A failed remote resolution.
///
/// The three kinds are only kept apart for diagnostics; the field treats them
/// all the same way (no rows, error recorded).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),
}
