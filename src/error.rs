use thiserror::Error;

/// Rejections raised by input validation. The message is the exact line
/// shown to the user before exiting with status 1.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The cookie ETP-RT is incorrect")]
    InvalidCookie,

    #[error("The URL is incorrect")]
    InvalidUrl,

    #[error("{0} is not an available language")]
    UnavailableLanguage(String),
}

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
