//! GitHub API data transfer objects
//!
//! These types carry the only fields the synchronizer consults. They are
//! intentionally separate from octocrab's models so that consumers of this
//! crate never touch SDK types.

use serde::{Deserialize, Serialize};

/// A label applied to an issue or pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name (e.g., "STABLE - brand new")
    pub name: String,
}

/// A conversation comment on an issue or pull request
///
/// This is a plain issue comment, not a review (diff line) comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueComment {
    /// GitHub comment ID
    pub id: u64,

    /// Comment body text (empty if the API returned no body)
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_deserialize_ignores_extra_fields() {
        // GitHub returns far more fields than we model
        let json = r#"{"id":1,"node_id":"x","name":"bug","color":"d73a4a","default":true}"#;
        let label: Label = serde_json::from_str(json).unwrap();
        assert_eq!(label.name, "bug");
    }

    #[test]
    fn test_issue_comment_serialization() {
        let comment = IssueComment {
            id: 42,
            body: "some text".to_string(),
        };

        let json = serde_json::to_string(&comment).unwrap();
        let deserialized: IssueComment = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, comment);
    }
}
