use sampling::source::OsError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("parameter mismatch: expected parameters {expected:#018x}, key carries {got:#018x}")]
    ParameterMismatch { expected: u64, got: u64 },

    #[error("invalid plaintext: {0} is not a bit")]
    InvalidPlaintext(u8),

    #[error("malformed key: {0}")]
    MalformedKey(String),

    #[error("entropy source failure: {0}")]
    Entropy(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<OsError> for Error {
    fn from(err: OsError) -> Self {
        Error::Entropy(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
