use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Error type used throughout the crate.
///
/// Parsing and validation failures are surfaced to the immediate caller; none are recovered from
/// or suppressed internally. Connectivity data that cannot be fully parsed is never partially
/// returned.
#[derive(Debug, Error)]
pub enum Error {
    /// A string value is not a member of the closed enumeration it was parsed against.
    #[error("'{value}' is not a valid {category} value")]
    InvalidEnumValue {
        category: &'static str,
        value: String,
    },

    /// A version token is not a 10-digit `YYYYMMDDNN` string or the all-zero sentinel.
    #[error("malformed version token '{value}': expected \"YYYYMMDDNN\" or \"0000000000\"")]
    MalformedVersionToken { value: String },

    /// The JSON document root is neither an object nor an array.
    #[error("unexpected JSON root shape: expected an object or an array")]
    UnexpectedRootShape,

    /// A field in one record of a response failed validation. The whole response is rejected;
    /// no partial results are returned.
    #[error("record {index}: invalid value '{value}' for field '{field}'")]
    RecordValidation {
        field: &'static str,
        value: String,
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// The web service answered with a non-success HTTP status.
    #[error("request failed with HTTP status {status}")]
    RemoteRequestFailed { status: u16 },

    /// The HTTP transport failed before a complete response was received.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON or does not match the expected record shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}
