//! Error types for the plugin.
//!
//! Failures are recovered close to where they occur. The host-facing hook in
//! [`crate::runner`] never returns an error; the per-stream test and the
//! [`Prober`](crate::probe::Prober) contract surface failures as typed
//! values so the hook can decide how to react.

use std::path::PathBuf;

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while evaluating a file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Probing failed or the file is not a supported media file.
    #[error("probe failed for {}: {message}", path.display())]
    Probe {
        /// Path of the file that could not be probed.
        path: PathBuf,
        /// Human-readable failure description from the prober.
        message: String,
    },

    /// A probed stream carries no codec identifier.
    #[error("stream {index} has no codec name")]
    MissingCodecName {
        /// Index of the offending stream within the probe report.
        index: u32,
    },
}

impl Error {
    /// Convenience constructor for [`Error::Probe`].
    pub fn probe(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Probe {
            path: path.into(),
            message: message.into(),
        }
    }
}
