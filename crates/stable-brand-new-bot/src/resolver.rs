//! PR reference resolution
//!
//! Works out which pull request a run acts on. Two sources are consulted in
//! priority order: the merge ref Actions exposes in GITHUB_REF, then the
//! event payload file. Each source either produces a reference, produces
//! nothing (handing over to the next source), or fails the run.

use crate::config::BotConfig;
use crate::error::SyncError;
use crate::event::read_event_file;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Newtype wrapper for GitHub PR numbers, providing type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PullRequestRef(u64);

impl PullRequestRef {
    /// Get the raw number (for API calls)
    pub fn number(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A resolution source
///
/// `Ok(None)` means "not configured, try the next one"; errors end the run.
type Source = fn(&BotConfig) -> Result<Option<PullRequestRef>, SyncError>;

/// Sources in priority order
const SOURCES: [Source; 2] = [from_merge_ref, from_event_file];

/// Resolve the PR to act on from the configured sources
///
/// The first source producing a reference wins. A resolved number of zero
/// is rejected the same way as no number at all.
pub fn resolve(config: &BotConfig) -> Result<PullRequestRef, SyncError> {
    for source in SOURCES {
        if let Some(found) = source(config)? {
            if found.number() == 0 {
                return Err(SyncError::PullRequestNotFound);
            }
            return Ok(found);
        }
    }

    Err(SyncError::ReferenceNotFound)
}

/// Source 1: the merge ref Actions sets for pull_request triggers
///
/// `refs/pull/<number>/merge` yields the number. A set but non-matching
/// value is an error rather than a fallthrough: it means the run was not
/// triggered by a pull request.
fn from_merge_ref(config: &BotConfig) -> Result<Option<PullRequestRef>, SyncError> {
    static MERGE_REF_REGEX: OnceLock<Regex> = OnceLock::new();

    let Some(github_ref) = config.github_ref.as_deref() else {
        return Ok(None);
    };

    let re = MERGE_REF_REGEX.get_or_init(|| Regex::new(r"refs/pull/(\d+)/merge").unwrap());

    let captures = re
        .captures(github_ref)
        .ok_or_else(|| SyncError::MalformedMergeRef(github_ref.to_string()))?;

    let number = captures[1]
        .parse::<u64>()
        .map_err(|_| SyncError::MalformedMergeRef(github_ref.to_string()))?;

    Ok(Some(PullRequestRef(number)))
}

/// Source 2: the event payload file
///
/// A configured path must resolve: a readable payload without a usable
/// number is "cannot find PR", not a fallthrough.
fn from_event_file(config: &BotConfig) -> Result<Option<PullRequestRef>, SyncError> {
    let Some(event_path) = config.event_path.as_deref() else {
        return Ok(None);
    };

    let payload = read_event_file(Path::new(event_path))?;

    match payload.item_number() {
        Some(number) => Ok(Some(PullRequestRef(number))),
        None => Err(SyncError::PullRequestNotFound),
    }
}
