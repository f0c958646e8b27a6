// error.rs — crate-wide error type
//
// Only real failures live here: a content document that cannot be read or
// parsed, and a preference file that cannot be written. Missing elements,
// missing document keys, and unknown project ids are normal conditions and
// stay `Option`/no-op in the modules that meet them.

use crate::locale::Locale;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The content document for a locale could not be read.
    #[error("failed to read content for locale '{locale}': {source}")]
    Retrieval {
        locale: Locale,
        #[source]
        source: std::io::Error,
    },

    /// The content document was read but is not valid JSON.
    #[error("malformed content document for locale '{locale}': {source}")]
    Malformed {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    /// The locale preference could not be persisted.
    #[error("failed to persist locale preference to {}: {source}", .path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
