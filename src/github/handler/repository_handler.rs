use super::release_handler::ReleaseHandler;
use crate::github::github_client::GithubClient;

pub struct RepositoryHandler<'c> {
    client: &'c GithubClient,
    owner: String,
    repo: String,
}

impl<'c> RepositoryHandler<'c> {
    pub fn new(
        client: &'c GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn releases(&self) -> ReleaseHandler<'c> {
        ReleaseHandler::new(self.client, &self.owner, &self.repo)
    }
}
