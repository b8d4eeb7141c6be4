use crate::{cli::Cli, transfer::SnapshotRule};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE_NAME: &str = "release-transfer.yaml";

/// Optional file-level defaults; every CLI flag overrides its counterpart.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub scratch_dir: Option<PathBuf>,
    #[serde(default)]
    pub keep_snapshots: bool,
    #[serde(default)]
    pub snapshot_prefix: Option<String>,
}

impl FileConfig {
    pub async fn load() -> Result<FileConfig> {
        let config_string = match tokio::fs::read_to_string(DEFAULT_CONFIG_FILE_NAME).await {
            Ok(content) => content,
            // an absent config file just means defaults
            Err(_) => return Ok(FileConfig::default()),
        };

        let config = serde_yaml::from_str::<FileConfig>(&config_string)
            .context("cannot parse the config file")?;

        Ok(config)
    }
}

/// A repository addressed as `owner/name`, accepted either in that canonical
/// form or as a full GitHub web URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn parse(input: &str) -> Result<RepoRef> {
        let canonical = Self::from_url(input).unwrap_or_else(|| input.to_string());

        let mut segments = canonical.splitn(2, '/');
        match (segments.next(), segments.next()) {
            (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => Ok(RepoRef {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => bail!("'{}' is not a valid repository reference", input),
        }
    }

    /// Extracts `owner/name` from a GitHub URL; `None` when the input does
    /// not contain the host segment and is assumed already canonical.
    fn from_url(input: &str) -> Option<String> {
        let rest = input.split("github.com/").nth(1)?;

        let mut segments = rest.split('/');
        let owner = segments.next()?;
        let name = segments.next()?;

        if owner.is_empty() || name.is_empty() {
            return None;
        }

        Some(format!("{}/{}", owner, name.trim_end_matches(".git")))
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferMode {
    /// Specific releases addressed by tag, resolved independently.
    Tags(Vec<String>),
    /// Every release of the source repository, in listing order.
    All,
    /// The platform's latest non-draft, non-prerelease release.
    Latest,
}

/// Everything the driver needs, resolved once at startup. No ambient
/// lookups happen past this point.
#[derive(Debug)]
pub struct TransferConfig {
    pub token: String,
    pub source: RepoRef,
    pub target: RepoRef,
    pub mode: TransferMode,
    pub snapshot_rule: SnapshotRule,
    pub scratch_dir: PathBuf,
}

impl TransferConfig {
    pub fn resolve(cli: Cli, file: FileConfig) -> Result<TransferConfig> {
        let token = match cli.token {
            Some(token) if !token.is_empty() => token,
            _ => bail!("GITHUB_TOKEN environment variable not set"),
        };

        let source = RepoRef::parse(&cli.source)?;
        let target = RepoRef::parse(&cli.target)?;

        let mode = if cli.latest {
            TransferMode::Latest
        } else if !cli.tags.is_empty() {
            TransferMode::Tags(cli.tags)
        } else {
            TransferMode::All
        };

        let snapshot_rule = if cli.keep_snapshots || file.keep_snapshots {
            SnapshotRule::KeepAll
        } else if let Some(prefix) = cli.snapshot_prefix.or(file.snapshot_prefix) {
            SnapshotRule::NamePrefix(prefix)
        } else {
            SnapshotRule::default()
        };

        let scratch_dir = cli
            .scratch_dir
            .or(file.scratch_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(TransferConfig {
            token,
            source,
            target,
            mode,
            snapshot_rule,
            scratch_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("release-transfer").chain(args.iter().copied()))
    }

    #[test]
    fn should_parse_a_canonical_repository_reference() {
        let repo = RepoRef::parse("owner/repo").unwrap();

        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn should_extract_the_repository_from_a_github_url() {
        let repo = RepoRef::parse("https://github.com/owner/repo").unwrap();

        assert_eq!(repo, RepoRef::parse("owner/repo").unwrap());
    }

    #[test]
    fn should_strip_the_git_suffix_from_a_url() {
        let repo = RepoRef::parse("https://github.com/owner/repo.git").unwrap();

        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn should_ignore_trailing_url_segments() {
        let repo = RepoRef::parse("https://github.com/owner/repo/releases/tag/v1.0.0").unwrap();

        assert_eq!(repo.to_string(), "owner/repo");
    }

    #[test]
    fn should_reject_a_reference_without_a_slash() {
        assert!(RepoRef::parse("just-a-name").is_err());
    }

    #[test]
    fn missing_token_is_a_configuration_error() {
        let mut args = cli(&["owner/src", "owner/dst"]);
        args.token = None;

        let result = TransferConfig::resolve(args, FileConfig::default());

        assert!(result.is_err());
    }

    #[test]
    fn explicit_tags_select_the_tags_mode() {
        let mut args = cli(&["owner/src", "owner/dst", "v1", "v2"]);
        args.token = Some("token".to_string());

        let config = TransferConfig::resolve(args, FileConfig::default()).unwrap();

        assert_eq!(
            config.mode,
            TransferMode::Tags(vec!["v1".to_string(), "v2".to_string()])
        );
    }

    #[test]
    fn no_tags_default_to_transferring_every_release() {
        let mut args = cli(&["owner/src", "owner/dst"]);
        args.token = Some("token".to_string());

        let config = TransferConfig::resolve(args, FileConfig::default()).unwrap();

        assert_eq!(config.mode, TransferMode::All);
        assert_eq!(config.snapshot_rule, SnapshotRule::ArchiveSuffix);
    }

    #[test]
    fn latest_flag_selects_the_latest_mode() {
        let mut args = cli(&["--latest", "owner/src", "owner/dst"]);
        args.token = Some("token".to_string());

        let config = TransferConfig::resolve(args, FileConfig::default()).unwrap();

        assert_eq!(config.mode, TransferMode::Latest);
    }

    #[test]
    fn snapshot_prefix_selects_the_prefix_rule() {
        let mut args = cli(&["--snapshot-prefix", "source code", "owner/src", "owner/dst"]);
        args.token = Some("token".to_string());

        let config = TransferConfig::resolve(args, FileConfig::default()).unwrap();

        assert_eq!(
            config.snapshot_rule,
            SnapshotRule::NamePrefix("source code".to_string())
        );
    }

    #[test]
    fn cli_flags_override_the_file_config() {
        let mut args = cli(&["--keep-snapshots", "owner/src", "owner/dst"]);
        args.token = Some("token".to_string());

        let file = FileConfig {
            snapshot_prefix: Some("source code".to_string()),
            ..FileConfig::default()
        };

        let config = TransferConfig::resolve(args, file).unwrap();

        assert_eq!(config.snapshot_rule, SnapshotRule::KeepAll);
    }

    #[test]
    fn file_config_supplies_the_scratch_dir_default() {
        let mut args = cli(&["owner/src", "owner/dst"]);
        args.token = Some("token".to_string());

        let file = FileConfig {
            scratch_dir: Some(PathBuf::from("/tmp/scratch")),
            ..FileConfig::default()
        };

        let config = TransferConfig::resolve(args, file).unwrap();

        assert_eq!(config.scratch_dir, PathBuf::from("/tmp/scratch"));
    }

    #[test]
    fn file_config_defaults_apply_when_fields_are_absent() {
        let config = serde_yaml::from_str::<FileConfig>("scratch_dir: /tmp").unwrap();

        assert_eq!(config.scratch_dir, Some(PathBuf::from("/tmp")));
        assert!(!config.keep_snapshots);
        assert!(config.snapshot_prefix.is_none());
    }
}
