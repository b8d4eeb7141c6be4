use crate::github::{
    builder::CreateReleaseBuilder, github_client::GithubClient, release::SourceRelease, tag::Tag,
};
use anyhow::Result;

pub struct ReleaseHandler<'c> {
    client: &'c GithubClient,
    owner: String,
    repo: String,
}

impl<'c> ReleaseHandler<'c> {
    pub fn new(
        client: &'c GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        ReleaseHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn create(&self) -> CreateReleaseBuilder<'c> {
        CreateReleaseBuilder::new(self.client, &self.owner, &self.repo)
    }

    pub async fn get_by_tag(&self, tag: &Tag) -> Result<SourceRelease> {
        self.client
            .get_release_by_tag(&self.owner, &self.repo, tag)
            .await
    }

    pub async fn list(&self) -> Result<Vec<SourceRelease>> {
        self.client.list_releases(&self.owner, &self.repo).await
    }

    pub async fn latest(&self) -> Result<SourceRelease> {
        self.client.get_latest_release(&self.owner, &self.repo).await
    }
}
