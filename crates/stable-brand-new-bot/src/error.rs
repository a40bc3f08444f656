//! Error types for the synchronizer run

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a synchronizer run
///
/// Mutation failures (comment create/delete) are deliberately absent here:
/// they are downgraded to warnings at the call site and never abort the run.
#[derive(Error, Debug)]
pub enum SyncError {
    /// No PR reference derivable from the environment
    #[error("reference not found: neither GITHUB_REF nor GITHUB_EVENT_PATH is set")]
    ReferenceNotFound,

    /// GITHUB_REF was set but did not look like a PR merge ref
    #[error("reference not found: GITHUB_REF {0:?} does not match refs/pull/<number>/merge")]
    MalformedMergeRef(String),

    /// The event file could not be read
    #[error("failed to read event file {}: {source}", .path.display())]
    EventFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The event file was not valid JSON
    #[error("failed to parse event file {}: {source}", .path.display())]
    EventFileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The resolved source carried no usable PR number
    #[error("cannot find PR")]
    PullRequestNotFound,

    /// A remote read (labels or comments) failed
    #[error(transparent)]
    Api(#[from] anyhow::Error),
}
