//! Error types for the `bronzesim` binary.
//!
//! [`EngineError`] is the top-level error `run` propagates with `?`;
//! `main` prints it as a single line on stderr and exits non-zero.

use std::path::PathBuf;

/// Top-level error for the `bronzesim` binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The `.bronze` source could not be read.
    #[error("cannot read '{path}': {source}")]
    ReadSource {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The `.bronze` source failed to parse.
    #[error("{source}")]
    Parse {
        /// The underlying parse error.
        #[from]
        source: bronzesim_dsl::ParseError,
    },

    /// The program declared no vocations.
    #[error("example must define at least 1 vocation in vocations {{ ... }}")]
    NoVocations,

    /// A snapshot or map file could not be written.
    #[error("cannot write '{path}': {source}")]
    WriteOutput {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A snapshot failed to serialize.
    #[error("snapshot serialization failed: {source}")]
    Serialize {
        /// The underlying serde error.
        #[from]
        source: serde_json::Error,
    },
}
