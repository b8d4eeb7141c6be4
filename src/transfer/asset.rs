use crate::{
    github::{github_client::GithubClient, CreatedRelease, RemoteAsset},
    http,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("failed to download asset '{name}'")]
    AssetDownload {
        name: String,
        #[source]
        cause: http::Error,
    },
}

/// Local copy of an asset's bytes, removed on every exit path once the
/// guard goes out of scope.
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    pub async fn write(dir: &Path, name: &str, content: &[u8]) -> Result<Self> {
        let path = dir.join(name);

        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("cannot write scratch file {}", path.display()))?;

        Ok(ScratchFile { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            log::warn!(
                "cannot remove scratch file {}: {}",
                self.path.display(),
                err
            );
        }
    }
}

/// Moves one asset: authenticated download, scratch file on disk, upload
/// to the destination release. The scratch file never outlives the call.
pub async fn move_asset(
    client: &GithubClient,
    destination: &CreatedRelease,
    asset: &RemoteAsset,
    scratch_dir: &Path,
) -> Result<()> {
    log::info!("transferring asset: {}", asset.name);

    let content = client
        .download_asset(&asset.download_url)
        .await
        .map_err(|cause| TransferError::AssetDownload {
            name: asset.name.to_owned(),
            cause,
        })?;

    let scratch = ScratchFile::write(scratch_dir, &asset.name, &content).await?;

    client
        .upload_asset(destination, &asset.name, scratch.path())
        .await
        .with_context(|| format!("failed to upload asset '{}'", asset.name))?;

    Ok(())
}
