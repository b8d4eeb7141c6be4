mod create_release_builder;

pub use create_release_builder::CreateReleaseBuilder;

use anyhow::Result;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output>;
}
