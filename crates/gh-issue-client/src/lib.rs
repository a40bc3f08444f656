//! GitHub issue API client for label and comment synchronization
//!
//! This crate provides a trait-based client for the small slice of the
//! GitHub issues API the synchronizer needs: listing applied labels,
//! listing comments, posting a comment and deleting a comment.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               IssueClient trait                  │
//! │  - fetch_labels()                                │
//! │  - fetch_comments()                              │
//! │  - post_comment()                                │
//! │  - remove_comment()                              │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_issue_client::{IssueClient, OctocrabClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let octocrab = octocrab::Octocrab::builder()
//!     .personal_token("token".to_string())
//!     .build()?;
//!
//! let client = OctocrabClient::new(Arc::new(octocrab), "ioBroker", "ioBroker.repositories");
//!
//! let labels = client.fetch_labels(2725).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod types;

pub use client::IssueClient;
pub use octocrab_client::OctocrabClient;
pub use types::{IssueComment, Label};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
