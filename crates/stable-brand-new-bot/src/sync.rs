//! Synchronization decision and orchestration
//!
//! The decision is a pure function over the two observed booleans; `run`
//! does the surrounding I/O. Keeping them apart lets the truth table be
//! tested without any client at all.

use crate::comment::{INFO_COMMENT_BODY, STABLE_BRAND_NEW_LABEL, find_info_comment, label_is_set};
use crate::config::BotConfig;
use crate::error::SyncError;
use crate::resolver::resolve;
use gh_issue_client::{IssueClient, IssueComment};
use log::{debug, info, warn};

/// The one mutation (or none) a run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Label state and comment state already agree
    None,
    /// Label set but no informational comment yet: post one
    Post,
    /// Label gone but the informational comment remains: delete it
    Delete { comment_id: u64 },
}

/// Decide which mutation brings the comment in line with the label
pub fn decide(label_set: bool, existing: Option<&IssueComment>) -> SyncAction {
    match (label_set, existing) {
        (true, Some(_)) => SyncAction::None,
        (true, None) => SyncAction::Post,
        (false, Some(comment)) => SyncAction::Delete {
            comment_id: comment.id,
        },
        (false, None) => SyncAction::None,
    }
}

/// Run one synchronization pass
///
/// Resolves the PR, reads its labels and comments, and applies the decided
/// action. Resolution and read failures abort the run; mutation failures
/// are logged as warnings and the run still completes.
pub async fn run(config: &BotConfig, client: &dyn IssueClient) -> Result<(), SyncError> {
    let pr = resolve(config)?;
    info!("Process PR {}", pr);

    let labels = client.fetch_labels(pr.number()).await?;
    let label_set = label_is_set(&labels, STABLE_BRAND_NEW_LABEL);
    info!(
        "label {:?} is {}set",
        STABLE_BRAND_NEW_LABEL,
        if label_set { "" } else { "not " }
    );

    let comments = client.fetch_comments(pr.number()).await?;
    let existing = find_info_comment(&comments);
    info!(
        "informational comment {}",
        if existing.is_some() {
            "exists"
        } else {
            "does not exist"
        }
    );

    match decide(label_set, existing) {
        SyncAction::None => {
            debug!("label and comment already in sync for PR {}", pr);
        }
        SyncAction::Post => {
            info!("adding informational comment to PR {}", pr);
            if let Err(err) = client.post_comment(pr.number(), INFO_COMMENT_BODY).await {
                warn!("cannot add comment to PR {}: {}", pr, err);
            }
        }
        SyncAction::Delete { comment_id } => {
            info!("deleting comment {} from PR {}", comment_id, pr);
            if let Err(err) = client.remove_comment(comment_id).await {
                warn!("cannot delete comment {} from PR {}: {}", comment_id, pr, err);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::INFO_COMMENT_MARKER;
    use crate::config::Repository;
    use async_trait::async_trait;
    use gh_issue_client::Label;
    use std::sync::Mutex;

    /// In-memory client recording every call, with injectable failures
    #[derive(Default)]
    struct FakeIssueClient {
        labels: Vec<Label>,
        comments: Vec<IssueComment>,
        fail_labels: bool,
        fail_comments: bool,
        fail_mutations: bool,
        reads: Mutex<Vec<&'static str>>,
        posted: Mutex<Vec<(u64, String)>>,
        removed: Mutex<Vec<u64>>,
    }

    #[async_trait]
    impl IssueClient for FakeIssueClient {
        async fn fetch_labels(&self, _number: u64) -> anyhow::Result<Vec<Label>> {
            self.reads.lock().unwrap().push("labels");
            if self.fail_labels {
                anyhow::bail!("labels unavailable");
            }
            Ok(self.labels.clone())
        }

        async fn fetch_comments(&self, _number: u64) -> anyhow::Result<Vec<IssueComment>> {
            self.reads.lock().unwrap().push("comments");
            if self.fail_comments {
                anyhow::bail!("comments unavailable");
            }
            Ok(self.comments.clone())
        }

        async fn post_comment(&self, number: u64, body: &str) -> anyhow::Result<IssueComment> {
            self.posted.lock().unwrap().push((number, body.to_string()));
            if self.fail_mutations {
                anyhow::bail!("post rejected");
            }
            Ok(IssueComment {
                id: 999,
                body: body.to_string(),
            })
        }

        async fn remove_comment(&self, comment_id: u64) -> anyhow::Result<()> {
            self.removed.lock().unwrap().push(comment_id);
            if self.fail_mutations {
                anyhow::bail!("delete rejected");
            }
            Ok(())
        }
    }

    fn brand_new_label() -> Label {
        Label {
            name: STABLE_BRAND_NEW_LABEL.to_string(),
        }
    }

    fn info_comment(id: u64) -> IssueComment {
        IssueComment {
            id,
            body: format!("{}\n\nsome text", INFO_COMMENT_MARKER),
        }
    }

    fn config() -> BotConfig {
        BotConfig {
            github_ref: Some("refs/pull/2725/merge".to_string()),
            event_path: None,
            repository: Repository::parse("ioBroker/ioBroker.repositories").unwrap(),
            token: "t".to_string(),
        }
    }

    #[test]
    fn test_decide_noop_when_label_and_comment_present() {
        let comment = info_comment(1);
        assert_eq!(decide(true, Some(&comment)), SyncAction::None);
    }

    #[test]
    fn test_decide_posts_when_only_label_present() {
        assert_eq!(decide(true, None), SyncAction::Post);
    }

    #[test]
    fn test_decide_deletes_when_only_comment_present() {
        let comment = info_comment(17);
        assert_eq!(decide(false, Some(&comment)), SyncAction::Delete { comment_id: 17 });
    }

    #[test]
    fn test_decide_noop_when_neither_present() {
        assert_eq!(decide(false, None), SyncAction::None);
    }

    #[tokio::test]
    async fn test_run_posts_comment_once() {
        let client = FakeIssueClient {
            labels: vec![brand_new_label()],
            ..Default::default()
        };

        run(&config(), &client).await.unwrap();

        let posted = client.posted.lock().unwrap();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].0, 2725);
        assert_eq!(posted[0].1, INFO_COMMENT_BODY);
        assert!(client.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_deletes_existing_comment() {
        let client = FakeIssueClient {
            comments: vec![info_comment(17)],
            ..Default::default()
        };

        run(&config(), &client).await.unwrap();

        assert_eq!(*client.removed.lock().unwrap(), vec![17]);
        assert!(client.posted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_noop_when_label_and_comment_present() {
        let client = FakeIssueClient {
            labels: vec![brand_new_label()],
            comments: vec![info_comment(17)],
            ..Default::default()
        };

        run(&config(), &client).await.unwrap();

        assert!(client.posted.lock().unwrap().is_empty());
        assert!(client.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_noop_without_label_or_comment() {
        let client = FakeIssueClient::default();

        run(&config(), &client).await.unwrap();

        assert!(client.posted.lock().unwrap().is_empty());
        assert!(client.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_completes_when_post_fails() {
        let client = FakeIssueClient {
            labels: vec![brand_new_label()],
            fail_mutations: true,
            ..Default::default()
        };

        run(&config(), &client).await.unwrap();

        assert_eq!(client.posted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_run_completes_when_delete_fails() {
        let client = FakeIssueClient {
            comments: vec![info_comment(17)],
            fail_mutations: true,
            ..Default::default()
        };

        run(&config(), &client).await.unwrap();

        assert_eq!(*client.removed.lock().unwrap(), vec![17]);
    }

    #[tokio::test]
    async fn test_run_propagates_label_fetch_failure() {
        let client = FakeIssueClient {
            fail_labels: true,
            ..Default::default()
        };

        let err = run(&config(), &client).await.unwrap_err();

        assert!(matches!(err, SyncError::Api(_)));
        assert_eq!(*client.reads.lock().unwrap(), vec!["labels"]);
        assert!(client.posted.lock().unwrap().is_empty());
        assert!(client.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_propagates_comment_fetch_failure() {
        let client = FakeIssueClient {
            labels: vec![brand_new_label()],
            fail_comments: true,
            ..Default::default()
        };

        let err = run(&config(), &client).await.unwrap_err();

        assert!(matches!(err, SyncError::Api(_)));
        assert!(client.posted.lock().unwrap().is_empty());
        assert!(client.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_skips_api_after_resolution_failure() {
        let client = FakeIssueClient::default();
        let cfg = BotConfig {
            github_ref: None,
            event_path: None,
            repository: Repository::parse("ioBroker/ioBroker.repositories").unwrap(),
            token: "t".to_string(),
        };

        let err = run(&cfg, &client).await.unwrap_err();

        assert!(matches!(err, SyncError::ReferenceNotFound));
        assert!(client.reads.lock().unwrap().is_empty());
        assert!(client.posted.lock().unwrap().is_empty());
        assert!(client.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_ignores_unrelated_comments() {
        let client = FakeIssueClient {
            labels: vec![brand_new_label()],
            comments: vec![IssueComment {
                id: 3,
                body: "please add screenshots".to_string(),
            }],
            ..Default::default()
        };

        run(&config(), &client).await.unwrap();

        assert_eq!(client.posted.lock().unwrap().len(), 1);
        assert!(client.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_reads_labels_and_comments_once() {
        let client = FakeIssueClient {
            labels: vec![brand_new_label()],
            comments: vec![info_comment(17)],
            ..Default::default()
        };

        run(&config(), &client).await.unwrap();

        assert_eq!(*client.reads.lock().unwrap(), vec!["labels", "comments"]);
    }
}
