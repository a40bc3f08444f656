//! Run configuration
//!
//! The environment is read exactly once at startup into a `BotConfig`;
//! everything downstream works off that snapshot. Empty variables count
//! as unset throughout, which is how Actions exposes unconfigured
//! values and secrets.

use std::env;
use std::fmt;

/// Repository acted on when GITHUB_REPOSITORY is not set
const DEFAULT_REPOSITORY: &str = "ioBroker/ioBroker.repositories";

/// Everything a run needs from the environment
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Value of GITHUB_REF, when set and non-empty
    pub github_ref: Option<String>,

    /// Value of GITHUB_EVENT_PATH, when set and non-empty
    pub event_path: Option<String>,

    /// Repository whose PRs are synchronized
    pub repository: Repository,

    /// API token for the GitHub client
    pub token: String,
}

/// An `owner/name` repository pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parse an `owner/name` pair as found in GITHUB_REPOSITORY
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        let (owner, name) = value
            .split_once('/')
            .ok_or_else(|| anyhow::anyhow!("invalid repository {:?}, expected owner/name", value))?;

        if owner.is_empty() || name.is_empty() {
            anyhow::bail!("invalid repository {:?}, expected owner/name", value);
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl BotConfig {
    /// Snapshot the environment the bot acts on
    ///
    /// Reads GITHUB_REF, GITHUB_EVENT_PATH and GITHUB_REPOSITORY, and
    /// resolves the API token from the first of OWN_GITHUB_TOKEN,
    /// GITHUB_TOKEN and GH_TOKEN that is set. Empty variables count as
    /// unset, which is how Actions exposes them when not applicable.
    pub fn from_env() -> anyhow::Result<Self> {
        let github_ref = env_non_empty("GITHUB_REF");
        let event_path = env_non_empty("GITHUB_EVENT_PATH");

        let repository = match env_non_empty("GITHUB_REPOSITORY") {
            Some(value) => Repository::parse(&value)?,
            None => Repository::parse(DEFAULT_REPOSITORY)?,
        };

        let token = env_non_empty("OWN_GITHUB_TOKEN")
            .or_else(|| env_non_empty("GITHUB_TOKEN"))
            .or_else(|| env_non_empty("GH_TOKEN"))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "GitHub token not found. Set OWN_GITHUB_TOKEN, GITHUB_TOKEN or GH_TOKEN"
                )
            })?;

        Ok(Self {
            github_ref,
            event_path,
            repository,
            token,
        })
    }
}

/// Whether a `.env` file should be consulted before reading the token
pub(crate) fn should_load_dotenv() -> bool {
    env_non_empty("OWN_GITHUB_TOKEN").is_none()
        && env_non_empty("GITHUB_TOKEN").is_none()
        && env_non_empty("GH_TOKEN").is_none()
}

/// Read an environment variable, treating empty values as unset
fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
