use crate::github::tag::Tag;

pub struct ReleaseDto {
    pub owner: String,
    pub repo: String,
    pub tag: Tag,
    pub title: String,
    pub draft: bool,
    pub prerelease: bool,
    pub body: String,
}

impl ReleaseDto {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        tag: Tag,
        title: impl Into<String>,
        draft: bool,
        prerelease: bool,
        body: impl Into<String>,
    ) -> Self {
        ReleaseDto {
            owner: owner.into(),
            repo: repo.into(),
            tag,
            title: title.into(),
            draft,
            prerelease,
            body: body.into(),
        }
    }
}
