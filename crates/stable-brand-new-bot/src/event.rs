//! Event payload parsing
//!
//! GitHub Actions writes the triggering webhook event to the file named by
//! GITHUB_EVENT_PATH. Only the number of the pull request (or issue, for
//! issue events) is of interest here; everything else is ignored.

use crate::error::SyncError;
use serde::Deserialize;
use std::path::Path;

/// The slice of a webhook event payload the resolver consults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    /// Present on pull_request events
    #[serde(default)]
    pub pull_request: Option<NumberedItem>,

    /// Present on issue events (issues, issue_comment)
    #[serde(default)]
    pub issue: Option<NumberedItem>,
}

/// An event sub-object carrying an item number
#[derive(Debug, Clone, Deserialize)]
pub struct NumberedItem {
    pub number: Option<u64>,
}

impl EventPayload {
    /// Extract the PR/issue number
    ///
    /// A present `pull_request` object wins even when it carries no number;
    /// `issue` is only consulted when there is no pull request at all.
    pub fn item_number(&self) -> Option<u64> {
        if let Some(pull_request) = &self.pull_request {
            return pull_request.number;
        }
        self.issue.as_ref().and_then(|issue| issue.number)
    }
}

/// Read and parse the event file at `path`
pub fn read_event_file(path: &Path) -> Result<EventPayload, SyncError> {
    let content = std::fs::read_to_string(path).map_err(|source| SyncError::EventFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| SyncError::EventFileParse {
        path: path.to_path_buf(),
        source,
    })
}
