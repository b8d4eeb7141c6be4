use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "release-transfer",
    about = "Transfer releases and their assets from a source GitHub repository to a target repository",
    version
)]
pub struct Cli {
    /// Source repository ('owner/repo' or a full GitHub URL)
    pub source: String,

    /// Target repository ('owner/repo' or a full GitHub URL)
    pub target: String,

    /// Tags of the releases to transfer; every release is transferred when omitted
    #[arg(conflicts_with = "latest")]
    pub tags: Vec<String>,

    /// Transfer every release of the source repository (the default)
    #[arg(long, conflicts_with_all = ["tags", "latest"])]
    pub all: bool,

    /// Transfer only the latest non-draft, non-prerelease release
    #[arg(long)]
    pub latest: bool,

    /// Personal access token, usually supplied through the environment
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Also transfer the platform's auto-generated source snapshot archives
    #[arg(long)]
    pub keep_snapshots: bool,

    /// Treat assets starting with this prefix as source snapshots, instead
    /// of matching archive extensions
    #[arg(long, value_name = "PREFIX", conflicts_with = "keep_snapshots")]
    pub snapshot_prefix: Option<String>,

    /// Directory for the transient local asset copies
    #[arg(long, value_name = "DIR")]
    pub scratch_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_positional_repositories_and_tags() {
        let cli = Cli::parse_from(["release-transfer", "owner/src", "owner/dst", "v1", "v2"]);

        assert_eq!(cli.source, "owner/src");
        assert_eq!(cli.target, "owner/dst");
        assert_eq!(cli.tags, vec!["v1", "v2"]);
    }

    #[test]
    fn should_reject_tags_combined_with_latest() {
        let result =
            Cli::try_parse_from(["release-transfer", "--latest", "owner/src", "owner/dst", "v1"]);

        assert!(result.is_err());
    }

    #[test]
    fn should_require_both_repositories() {
        let result = Cli::try_parse_from(["release-transfer", "owner/src"]);

        assert!(result.is_err());
    }
}
