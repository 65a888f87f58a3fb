use serde_json::error::Category;

/// Broad failure classes for the JSON transport helpers.
///
/// Every [`JsonError`] belongs to exactly one class. None of them are retried;
/// each is terminal for the request being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The request body was not exactly one acceptable JSON value.
    MalformedInput,
    /// The outgoing payload could not be encoded. Nothing was written.
    Serialization,
    /// Reading the body or writing the response failed at the I/O level.
    Transport,
}

#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("body must not be empty")]
    EmptyBody,

    #[error("body contains badly-formed JSON: {0}")]
    Syntax(String),

    #[error("body contains incomplete JSON: {0}")]
    Incomplete(String),

    #[error("body contains an incorrect JSON type: {0}")]
    Data(String),

    #[error("body must have only a single JSON value")]
    MultipleValues,

    #[error("body must not be larger than {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("failed to serialize JSON payload: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JsonError {
    /// Map a decode failure from `serde_json` onto the taxonomy.
    pub fn from_decode(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax => JsonError::Syntax(err.to_string()),
            Category::Data => JsonError::Data(err.to_string()),
            Category::Eof => JsonError::Incomplete(err.to_string()),
            Category::Io => JsonError::Io(std::io::Error::other(err)),
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            JsonError::EmptyBody
            | JsonError::Syntax(_)
            | JsonError::Incomplete(_)
            | JsonError::Data(_)
            | JsonError::MultipleValues
            | JsonError::BodyTooLarge { .. } => ErrorClass::MalformedInput,
            JsonError::Serialize(_) => ErrorClass::Serialization,
            JsonError::Io(_) => ErrorClass::Transport,
        }
    }
}
