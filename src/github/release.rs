use super::{response::ReleaseResponse, tag::Tag};

/// A release as read from the source repository, with the asset list
/// embedded in the listing response.
#[derive(Debug, Clone)]
pub struct SourceRelease {
    pub tag: Tag,
    pub title: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
    pub assets: Vec<RemoteAsset>,
}

#[derive(Debug, Clone)]
pub struct RemoteAsset {
    pub name: String,
    pub download_url: String,
}

impl RemoteAsset {
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            download_url: download_url.into(),
        }
    }
}

impl From<ReleaseResponse> for SourceRelease {
    fn from(response: ReleaseResponse) -> Self {
        // releases created without an explicit title come back with a null name
        let title = response
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| response.tag_name.clone());

        SourceRelease {
            tag: Tag::new(response.tag_name),
            title,
            body: response.body.unwrap_or_default(),
            draft: response.draft,
            prerelease: response.prerelease,
            assets: response
                .assets
                .into_iter()
                .map(|asset| RemoteAsset::new(asset.name, asset.browser_download_url))
                .collect(),
        }
    }
}

/// Handle to a release freshly created on the target repository.
#[derive(Debug, Clone)]
pub struct CreatedRelease {
    pub id: u64,
    pub owner: String,
    pub repo: String,
}

impl CreatedRelease {
    pub fn new(id: u64, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CreatedRelease {
            id,
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}
