use super::BuilderExecutor;
use crate::github::{
    dto::release_dto::ReleaseDto, github_client::GithubClient, release::CreatedRelease, tag::Tag,
};
use anyhow::Result;

pub struct CreateReleaseBuilder<'c> {
    client: &'c GithubClient,
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub release_tag: Tag,
    pub draft: Option<bool>,
    pub prerelease: Option<bool>,
    pub body: Option<String>,
}

impl<'c> CreateReleaseBuilder<'c> {
    pub fn new(
        client: &'c GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        CreateReleaseBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            title: String::new(),
            release_tag: Tag::new(""),
            draft: None,
            prerelease: None,
            body: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn tag(mut self, release_tag: &Tag) -> Self {
        self.release_tag = release_tag.to_owned();
        self
    }

    pub fn draft(mut self, draft: bool) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn prerelease(mut self, pre_release: bool) -> Self {
        self.prerelease = Some(pre_release);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl BuilderExecutor for CreateReleaseBuilder<'_> {
    type Output = CreatedRelease;

    async fn execute(self) -> Result<CreatedRelease> {
        let release = ReleaseDto::new(
            self.owner,
            self.repo,
            self.release_tag,
            self.title,
            self.draft.unwrap_or_default(),
            self.prerelease.unwrap_or_default(),
            self.body.unwrap_or_default(),
        );

        self.client.create_release(release).await
    }
}
