use std::io;

use crate::Page;

/// Errors returned while reading or fetching a document.
///
/// Reading is a single pass over the token stream; whatever had been extracted when the failure
/// happened is kept and can be inspected with [Error::partial_page].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The underlying reader failed before the end of the document.
    #[error("failed to read document")]
    Read {
        /// The I/O error reported by the reader.
        #[source]
        source: io::Error,
        /// Everything extracted up to the failure.
        partial: Box<Page>,
    },

    /// The HTTP request could not be completed.
    #[cfg(feature = "fetch")]
    #[error("failed to fetch {url}")]
    Fetch {
        /// The requested URL.
        url: String,
        /// The error reported by the HTTP client.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[cfg(feature = "fetch")]
    #[error("failed to fetch {url}: HTTP status {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
}

impl Error {
    /// The page as far as it was extracted before the error, if any reading had started.
    #[must_use]
    pub fn partial_page(&self) -> Option<&Page> {
        match self {
            Error::Read { partial, .. } => Some(partial.as_ref()),
            #[cfg(feature = "fetch")]
            _ => None,
        }
    }

    /// Like [Error::partial_page], but by value.
    #[must_use]
    pub fn into_partial_page(self) -> Option<Page> {
        match self {
            Error::Read { partial, .. } => Some(*partial),
            #[cfg(feature = "fetch")]
            _ => None,
        }
    }
}
