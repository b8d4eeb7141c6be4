pub mod builder;
pub mod dto;
pub mod github_client;
pub mod handler;
pub mod macros;
mod release;
pub mod request;
pub mod response;
pub mod tag;

pub use release::{CreatedRelease, RemoteAsset, SourceRelease};
