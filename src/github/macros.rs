use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};

const USER_AGENT_NAME: &str = "release-transfer";
const API_VERSION: &str = "2022-11-28";

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
    fn download_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT, USER_AGENT_NAME)
    }

    fn download_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/octet-stream")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT, USER_AGENT_NAME)
    }
}

#[macro_export]
macro_rules! get {
    ($url:expr, $token:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .get($url)
            .default_headers($token)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! post {
    ($url:expr, $token:expr, $body:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .post($url)
            .default_headers($token)
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! upload_file {
    ($url:expr, $token:expr, $content:expr) => {{
        use reqwest::header::CONTENT_TYPE;
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .post($url)
            .default_headers($token)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body($content)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! download {
    ($url:expr, $token:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .get($url)
            .download_headers($token)
            .send()
            .await
            .handle_bytes()
            .await
    }};
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use mockito::Server;
    use tokio::join;

    #[tokio::test]
    async fn get_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";

        let mock_future = server
            .mock("GET", "/")
            .with_header("authorization", "Bearer test_token")
            .with_header("accept", "application/vnd.github+json")
            .with_header("x-github-api-version", "2022-11-28")
            .with_header("user-agent", "release-transfer")
            .with_body(expected_body)
            .create_async();

        let (m, ..) = join!(mock_future);

        let response = get!(url, "test_token")?;

        m.assert_async().await;

        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn post_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";
        let mock_future = server
            .mock("POST", "/")
            .with_header("authorization", "Bearer test_token")
            .with_header("accept", "application/vnd.github+json")
            .with_header("x-github-api-version", "2022-11-28")
            .with_header("user-agent", "release-transfer")
            .with_body(expected_body)
            .create_async();

        let (m, ..) = join!(mock_future);

        let response = post!(url, "test_token", expected_body)?;

        m.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn upload_file_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let content = b"binary_content".to_vec();
        let mock_future = server
            .mock("POST", "/")
            .with_header("authorization", "Bearer test_token")
            .with_header("content-type", "application/octet-stream")
            .with_body("uploaded")
            .create_async();

        let (m, ..) = join!(mock_future);

        let response = upload_file!(url, "test_token", content)?;

        m.assert_async().await;
        assert_eq!(response, "uploaded");

        Ok(())
    }

    #[tokio::test]
    async fn download_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_bytes = b"asset_bytes".to_vec();
        let mock_future = server
            .mock("GET", "/")
            .with_header("authorization", "Bearer test_token")
            .with_header("accept", "application/octet-stream")
            .with_body(expected_bytes.clone())
            .create_async();

        let (m, ..) = join!(mock_future);

        let response = download!(url, "test_token")?;

        m.assert_async().await;
        assert_eq!(response, expected_bytes);

        Ok(())
    }

    #[tokio::test]
    async fn download_macro_surfaces_error_status() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let mock_future = server
            .mock("GET", "/")
            .with_status(404)
            .with_body("Not Found")
            .create_async();

        let (m, ..) = join!(mock_future);

        let response = download!(url, "test_token");

        m.assert_async().await;
        assert!(response.is_err());

        Ok(())
    }
}
