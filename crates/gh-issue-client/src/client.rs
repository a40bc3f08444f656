//! Issue client trait definition
//!
//! This module defines the core `IssueClient` trait that all client
//! implementations must satisfy. It covers the four capabilities the
//! synchronizer needs and nothing else.

use crate::types::{IssueComment, Label};
use async_trait::async_trait;

/// GitHub issue API client trait
///
/// Defines the interface for label and comment operations on a single
/// repository. Implementations can be direct (hitting the API) or
/// in-memory fakes for tests.
///
/// Issues and pull requests share one number space on GitHub, so every
/// method takes the number of either.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_issue_client::IssueClient;
///
/// async fn has_any_label(client: &dyn IssueClient, number: u64) -> anyhow::Result<bool> {
///     Ok(!client.fetch_labels(number).await?.is_empty())
/// }
/// ```
#[async_trait]
pub trait IssueClient: Send + Sync {
    /// Fetch all labels currently applied to an issue or pull request
    ///
    /// # Arguments
    ///
    /// * `number` - Issue or pull request number
    ///
    /// # Returns
    ///
    /// The applied labels (possibly empty), or an error if the API call fails.
    async fn fetch_labels(&self, number: u64) -> anyhow::Result<Vec<Label>>;

    /// Fetch all conversation comments on an issue or pull request
    ///
    /// Comments are returned in the server's order (oldest first).
    ///
    /// # Arguments
    ///
    /// * `number` - Issue or pull request number
    ///
    /// # Returns
    ///
    /// All comments on the item, or an error if the API call fails.
    async fn fetch_comments(&self, number: u64) -> anyhow::Result<Vec<IssueComment>>;

    /// Post a new conversation comment
    ///
    /// # Arguments
    ///
    /// * `number` - Issue or pull request number
    /// * `body` - Markdown comment body
    ///
    /// # Returns
    ///
    /// The created comment, or an error if the API call fails.
    async fn post_comment(&self, number: u64, body: &str) -> anyhow::Result<IssueComment>;

    /// Delete a conversation comment
    ///
    /// # Arguments
    ///
    /// * `comment_id` - The GitHub comment ID to delete
    ///
    /// # Returns
    ///
    /// Ok(()) on success, error on failure.
    async fn remove_comment(&self, comment_id: u64) -> anyhow::Result<()>;
}
