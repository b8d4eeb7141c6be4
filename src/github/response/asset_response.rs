use serde::Deserialize;

#[derive(Deserialize)]
pub struct AssetResponse {
    pub name: String,
    pub browser_download_url: String,
}
