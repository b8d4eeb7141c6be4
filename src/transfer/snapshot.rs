/// Extensions GitHub uses for the auto-generated source archives it
/// attaches to every release.
const ARCHIVE_SUFFIXES: [&str; 2] = [".zip", ".tar.gz"];

/// Decides whether an asset is a source snapshot the transfer should skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotRule {
    /// Skip assets named like a source archive.
    ArchiveSuffix,
    /// Skip assets whose name starts with a literal prefix.
    NamePrefix(String),
    /// Transfer every asset.
    KeepAll,
}

impl SnapshotRule {
    pub fn is_source_snapshot(&self, name: &str) -> bool {
        match self {
            SnapshotRule::ArchiveSuffix => {
                ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
            }
            SnapshotRule::NamePrefix(prefix) => name.starts_with(prefix.as_str()),
            SnapshotRule::KeepAll => false,
        }
    }
}

impl Default for SnapshotRule {
    fn default() -> Self {
        SnapshotRule::ArchiveSuffix
    }
}
