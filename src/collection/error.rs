//! Error code related to data collection.

use std::{borrow::Cow, num::ParseIntError};

use thiserror::Error;

/// A type alias for handling collection-related errors.
pub type CollectionResult<T> = std::result::Result<T, CollectionError>;

/// The errors that can happen with data collection.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// An error when there is an IO exception.
    #[error(transparent)]
    InvalidIo(#[from] std::io::Error),
    /// An error to represent errors around parsing.
    #[error("Parsing error, {0}")]
    Parsing(Cow<'static, str>),
    /// The primary memory counters could not be read. This is fatal, and
    /// `code` becomes the exit code of the process.
    #[error("unable to query the system memory counters (error {code})")]
    Query {
        code: i32,
        #[source]
        source: Box<CollectionError>,
    },
}

impl CollectionError {
    /// A parsing error.
    pub fn parsing<C: Into<Cow<'static, str>>>(reason: C) -> Self {
        Self::Parsing(reason.into())
    }

    /// Wraps a failure of the primary counter query, picking up the OS error
    /// code if there is one.
    pub(crate) fn query(err: CollectionError) -> Self {
        let code = err.os_code().unwrap_or(1);
        Self::Query {
            code,
            source: Box::new(err),
        }
    }

    /// The OS-reported error code behind this error, if any.
    fn os_code(&self) -> Option<i32> {
        match self {
            CollectionError::InvalidIo(err) => err.raw_os_error().filter(|code| *code != 0),
            CollectionError::Parsing(_) => None,
            CollectionError::Query { code, .. } => Some(*code),
        }
    }

    /// The code the process should exit with for this error. Never zero.
    pub fn exit_code(&self) -> i32 {
        self.os_code().unwrap_or(1)
    }
}

impl From<ParseIntError> for CollectionError {
    fn from(err: ParseIntError) -> Self {
        CollectionError::Parsing(err.to_string().into())
    }
}
