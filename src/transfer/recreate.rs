use super::{asset, snapshot::SnapshotRule};
use crate::{
    config::RepoRef,
    github::{builder::BuilderExecutor, github_client::GithubClient, SourceRelease},
};
use anyhow::{Context, Result};
use std::path::Path;

/// Re-creates one source release on the target repository and moves its
/// assets over. A duplicate tag on the target makes the create call fail;
/// the error surfaces to the driver's per-release catch. The first asset
/// failure aborts the rest of this release's asset list.
pub async fn recreate_release(
    client: &GithubClient,
    target: &RepoRef,
    release: &SourceRelease,
    rule: &SnapshotRule,
    scratch_dir: &Path,
) -> Result<()> {
    log::info!("processing release: {}", release.title);

    let created = client
        .repo(&target.owner, &target.name)
        .releases()
        .create()
        .tag(&release.tag)
        .title(&release.title)
        .draft(release.draft)
        .prerelease(release.prerelease)
        .body(&release.body)
        .execute()
        .await
        .with_context(|| format!("cannot create release for tag '{}'", release.tag))?;

    for asset in &release.assets {
        if rule.is_source_snapshot(&asset.name) {
            log::info!("skipping source snapshot asset: {}", asset.name);
            continue;
        }

        asset::move_asset(client, &created, asset, scratch_dir).await?;
    }

    log::info!("successfully transferred release: {}", release.title);

    Ok(())
}
