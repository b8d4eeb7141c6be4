mod asset_response;
mod release_response;

pub use asset_response::AssetResponse;
pub use release_response::ReleaseResponse;
