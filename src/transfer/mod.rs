mod asset;
mod recreate;
mod snapshot;

pub use asset::TransferError;
pub use snapshot::SnapshotRule;

use crate::{
    config::{TransferConfig, TransferMode},
    github::{github_client::GithubClient, tag::Tag, SourceRelease},
};
use anyhow::{Context, Result};

/// Runs the whole transfer: resolves which releases the mode selects on the
/// source repository and re-creates each on the target. A failing release is
/// logged and does not abort its siblings.
pub async fn run(config: &TransferConfig) -> Result<()> {
    let client = GithubClient::new(&config.token);

    run_with_client(&client, config).await
}

pub(crate) async fn run_with_client(client: &GithubClient, config: &TransferConfig) -> Result<()> {
    let source = client.repo(&config.source.owner, &config.source.name);

    match &config.mode {
        TransferMode::Tags(tags) => {
            for tag in tags {
                let tag = Tag::new(tag);

                match source.releases().get_by_tag(&tag).await {
                    Ok(release) => recreate_and_log(client, config, &release).await,
                    Err(err) => log::error!(
                        "failed to find or transfer release with tag '{}': {:#}",
                        tag,
                        err
                    ),
                }
            }
        }
        TransferMode::All => {
            let releases = source
                .releases()
                .list()
                .await
                .context("cannot list releases on the source repository")?;

            for release in releases {
                recreate_and_log(client, config, &release).await;
            }
        }
        TransferMode::Latest => {
            let release = source
                .releases()
                .latest()
                .await
                .context("cannot resolve the latest release on the source repository")?;

            recreate_and_log(client, config, &release).await;
        }
    }

    Ok(())
}

async fn recreate_and_log(
    client: &GithubClient,
    config: &TransferConfig,
    release: &SourceRelease,
) {
    if let Err(err) = recreate::recreate_release(
        client,
        &config.target,
        release,
        &config.snapshot_rule,
        &config.scratch_dir,
    )
    .await
    {
        log::error!("failed to transfer release '{}': {:#}", release.title, err);
    }
}
