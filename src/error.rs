// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string at an untyped boundary did not name a known value.
    InvalidArgument { field: &'static str, value: String },
    Lifecycle(LifecycleError),
    Runtime(String),
    LockPoisoned,
    Io(String),
    Config(String),
}

/// Misuse of a feed session outside its live window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    /// The session was never initialized.
    NotInitialized,

    /// `initialize` was called on a session that is already live.
    AlreadyInitialized,

    /// The session has been torn down.
    TornDown,
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleError::NotInitialized => write!(f, "feed used before initialize"),
            LifecycleError::AlreadyInitialized => write!(f, "feed already initialized"),
            LifecycleError::TornDown => write!(f, "feed used after teardown"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { field, value } => {
                write!(f, "Invalid Argument: unknown {} '{}'", field, value)
            }
            Error::Lifecycle(e) => write!(f, "Lifecycle Error: {}", e),
            Error::Runtime(e) => write!(f, "Runtime Error: {}", e),
            Error::LockPoisoned => write!(f, "Lock Error: feed state lock poisoned"),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LifecycleError> for Error {
    fn from(err: LifecycleError) -> Self {
        Error::Lifecycle(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
