//! The informational comment and the label controlling it
//!
//! The comment body is static; its first line doubles as the marker the
//! lookup matches on, so posting and finding stay in agreement.

use gh_issue_client::{IssueComment, Label};

/// Label whose presence requests the informational comment
pub const STABLE_BRAND_NEW_LABEL: &str = "STABLE - brand new";

/// First line of the informational comment; lookup matches on this substring
pub const INFO_COMMENT_MARKER: &str =
    "## ioBroker repository information about STABLE-BRAND-NEW tagging";

/// Full body of the informational comment (static, no interpolation)
pub const INFO_COMMENT_BODY: &str = "\
## ioBroker repository information about STABLE-BRAND-NEW tagging

Your PR has been tagged with label STABLE - BRAND NEW. This indicates that the release requested to be added to the stable repository seems to be too young for immediate processing.

Normally a release should be available at LATEST repository for at least one or two weeks without any serious issues detected within this timeframe. Your release seems to be younger than 7 days. Your PR will be kept in evidence and be merged approximately one week after creation of the release without any further action required by you.

**IMPORTANT:**
Of course it is possible to release a new version immediately, if it is a hotfix for a serious problem, i.e. some error causing adapter crashes or incompatible api changes of external websites blocking normal usage. In this case, please indicate this fact as a comment and mention mcm1957 and eventually Apollon77 explicitly. Please describe the reason (i.e. by referencing an issue). Hot-fixes should minimize the changes, even dependency updates should be avoided if not related to the fix. New functionality and major (breaking) updates are most likely never a hotfix.

Please note that ANY (even hot fixes) should be available at latest at least 1 day and have some (few) installations to avoid hot-fixes with serious problems at stable repository. Exceptions to this minimal delay must be discussed individually.

Feel free to contact me (mcm1957) if you have any more questions.";

/// Whether any label exactly matches `name` (case-sensitive)
pub fn label_is_set(labels: &[Label], name: &str) -> bool {
    labels.iter().any(|label| label.name == name)
}

/// First comment whose body contains the marker, in server order
pub fn find_info_comment(comments: &[IssueComment]) -> Option<&IssueComment> {
    comments
        .iter()
        .find(|comment| comment.body.contains(INFO_COMMENT_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str) -> Label {
        Label {
            name: name.to_string(),
        }
    }

    fn comment(id: u64, body: &str) -> IssueComment {
        IssueComment {
            id,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_body_starts_with_marker() {
        assert!(INFO_COMMENT_BODY.starts_with(INFO_COMMENT_MARKER));
    }

    #[test]
    fn test_label_is_set_exact_match() {
        let labels = vec![label("STABLE - brand new")];
        assert!(label_is_set(&labels, STABLE_BRAND_NEW_LABEL));
    }

    #[test]
    fn test_label_is_set_rejects_other_labels() {
        let labels = vec![label("bug")];
        assert!(!label_is_set(&labels, STABLE_BRAND_NEW_LABEL));
    }

    #[test]
    fn test_label_is_set_empty_list() {
        assert!(!label_is_set(&[], STABLE_BRAND_NEW_LABEL));
    }

    #[test]
    fn test_label_is_set_case_sensitive() {
        let labels = vec![label("STABLE - BRAND NEW")];
        assert!(!label_is_set(&labels, STABLE_BRAND_NEW_LABEL));
    }

    #[test]
    fn test_find_info_comment_matches_marker_anywhere_in_body() {
        let comments = vec![
            comment(1, "unrelated"),
            comment(2, &format!("some prefix\n{}\nsome suffix", INFO_COMMENT_MARKER)),
        ];

        let found = find_info_comment(&comments).unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn test_find_info_comment_returns_first_match() {
        let comments = vec![
            comment(1, INFO_COMMENT_BODY),
            comment(2, INFO_COMMENT_BODY),
        ];

        let found = find_info_comment(&comments).unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn test_find_info_comment_without_match() {
        let comments = vec![comment(1, "unrelated"), comment(2, "also unrelated")];
        assert!(find_info_comment(&comments).is_none());
    }
}
