use super::{
    dto::release_dto::ReleaseDto,
    handler::repository_handler::RepositoryHandler,
    release::{CreatedRelease, SourceRelease},
    request::create_release_request::CreateReleaseRequest,
    response::ReleaseResponse,
    tag::Tag,
};
use crate::{download, get, http, post, upload_file};
use anyhow::Result;
use std::path::Path;
use tokio::{fs::File, io::AsyncReadExt};

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_UPLOAD_BASE: &str = "https://uploads.github.com";

pub struct GithubClient {
    token: String,
    api_base: String,
    upload_base: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base(token, GITHUB_API_BASE, GITHUB_UPLOAD_BASE)
    }

    pub fn with_base(
        token: impl Into<String>,
        api_base: impl Into<String>,
        upload_base: impl Into<String>,
    ) -> Self {
        GithubClient {
            token: token.into(),
            api_base: api_base.into(),
            upload_base: upload_base.into(),
        }
    }

    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    pub(super) async fn create_release(&self, release_dto: ReleaseDto) -> Result<CreatedRelease> {
        let uri = format!(
            "{}/repos/{}/{}/releases",
            self.api_base, release_dto.owner, release_dto.repo
        );

        let request = CreateReleaseRequest::new(
            release_dto.tag.value(),
            release_dto.title,
            release_dto.body,
            release_dto.draft,
            release_dto.prerelease,
        );

        let body: String = serde_json::to_string(&request)?;

        let response = post!(&uri, &self.token, body)?;

        let release = serde_json::from_str::<ReleaseResponse>(&response)?;

        Ok(CreatedRelease::new(
            release.id,
            release_dto.owner,
            release_dto.repo,
        ))
    }

    pub(super) async fn get_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &Tag,
    ) -> Result<SourceRelease> {
        let uri = format!(
            "{}/repos/{}/{}/releases/tags/{}",
            self.api_base,
            owner,
            repo,
            tag.value()
        );

        let response = get!(&uri, &self.token)?;
        let release = serde_json::from_str::<ReleaseResponse>(&response)?;

        Ok(release.into())
    }

    pub(super) async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<SourceRelease>> {
        let uri = format!("{}/repos/{}/{}/releases", self.api_base, owner, repo);

        let response = get!(&uri, &self.token)?;
        let releases = serde_json::from_str::<Vec<ReleaseResponse>>(&response)?;

        Ok(releases.into_iter().map(SourceRelease::from).collect())
    }

    pub(super) async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<SourceRelease> {
        let uri = format!("{}/repos/{}/{}/releases/latest", self.api_base, owner, repo);

        let response = get!(&uri, &self.token)?;
        let release = serde_json::from_str::<ReleaseResponse>(&response)?;

        Ok(release.into())
    }

    pub async fn download_asset(&self, url: &str) -> Result<Vec<u8>, http::Error> {
        download!(url, &self.token)
    }

    pub async fn upload_asset(
        &self,
        release: &CreatedRelease,
        name: &str,
        path: &Path,
    ) -> Result<()> {
        let mut file = File::open(path).await?;
        let mut content = vec![];

        file.read_to_end(&mut content).await?;

        let uri = format!(
            "{}/repos/{}/{}/releases/{}/assets?name={}",
            self.upload_base, release.owner, release.repo, release.id, name
        );

        upload_file!(&uri, &self.token, content)?;

        Ok(())
    }
}
