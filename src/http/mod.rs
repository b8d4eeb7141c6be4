use reqwest::Client;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed with status {status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response body")]
    ReadResponseError {
        #[source]
        cause: reqwest::Error,
    },
}

pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
    async fn handle_bytes(self) -> Result<Vec<u8>, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status().as_u16();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseError { cause })?;

        if !(200..300).contains(&status) {
            return Err(Error::GenericResponseError {
                status,
                message: text,
            });
        }

        Ok(text)
    }

    async fn handle_bytes(self) -> Result<Vec<u8>, Error> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status().as_u16();

        if !(200..300).contains(&status) {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::GenericResponseError { status, message });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|cause| Error::ReadResponseError { cause })?;

        Ok(bytes.to_vec())
    }
}
