//! Octocrab-based issue API client
//!
//! Direct implementation of the `IssueClient` trait using the octocrab
//! library, bound to a single repository at construction time.

use crate::client::IssueClient;
use crate::types::{IssueComment, Label};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use octocrab::models::CommentId;
use std::sync::Arc;

/// Page size for the paginated list endpoints
const PER_PAGE: u8 = 100;

/// Direct issue API client using octocrab
///
/// All calls target the `owner/repo` given at construction time.
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
    owner: String,
    repo: String,
}

impl OctocrabClient {
    /// Create a new client for the given repository
    pub fn new(octocrab: Arc<Octocrab>, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            octocrab,
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

#[async_trait]
impl IssueClient for OctocrabClient {
    async fn fetch_labels(&self, number: u64) -> anyhow::Result<Vec<Label>> {
        debug!("Fetching labels for {}/{}#{}", self.owner, self.repo, number);

        let mut labels = Vec::new();
        let mut page_num = 1u32;

        loop {
            let page = self
                .octocrab
                .issues(self.owner.as_str(), self.repo.as_str())
                .list_labels_for_issue(number)
                .per_page(PER_PAGE)
                .page(page_num)
                .send()
                .await?;

            let page_len = page.items.len();
            for label in &page.items {
                labels.push(convert_label(label));
            }

            if page_len < PER_PAGE as usize {
                break;
            }
            page_num += 1;
        }

        debug!(
            "Fetched {} labels for {}/{}#{}",
            labels.len(),
            self.owner,
            self.repo,
            number
        );
        Ok(labels)
    }

    async fn fetch_comments(&self, number: u64) -> anyhow::Result<Vec<IssueComment>> {
        debug!(
            "Fetching comments for {}/{}#{}",
            self.owner, self.repo, number
        );

        let mut comments = Vec::new();
        let mut page_num = 1u32;

        loop {
            let page = self
                .octocrab
                .issues(self.owner.as_str(), self.repo.as_str())
                .list_comments(number)
                .per_page(PER_PAGE)
                .page(page_num)
                .send()
                .await?;

            let page_len = page.items.len();
            for comment in &page.items {
                comments.push(convert_comment(comment));
            }

            if page_len < PER_PAGE as usize {
                break;
            }
            page_num += 1;
        }

        debug!(
            "Fetched {} comments for {}/{}#{}",
            comments.len(),
            self.owner,
            self.repo,
            number
        );
        Ok(comments)
    }

    async fn post_comment(&self, number: u64, body: &str) -> anyhow::Result<IssueComment> {
        debug!("Posting comment to {}/{}#{}", self.owner, self.repo, number);

        let created = self
            .octocrab
            .issues(self.owner.as_str(), self.repo.as_str())
            .create_comment(number, body)
            .await?;

        Ok(convert_comment(&created))
    }

    async fn remove_comment(&self, comment_id: u64) -> anyhow::Result<()> {
        debug!(
            "Deleting comment {} in {}/{}",
            comment_id, self.owner, self.repo
        );

        self.octocrab
            .issues(self.owner.as_str(), self.repo.as_str())
            .delete_comment(CommentId(comment_id))
            .await?;

        Ok(())
    }
}

/// Convert octocrab Label to our Label type
fn convert_label(label: &octocrab::models::Label) -> Label {
    Label {
        name: label.name.clone(),
    }
}

/// Convert octocrab issue Comment to our IssueComment type
fn convert_comment(comment: &octocrab::models::issues::Comment) -> IssueComment {
    IssueComment {
        id: comment.id.0,
        body: comment.body.clone().unwrap_or_default(),
    }
}
