//! HTTP client for network-based API calls

use reqwest::{multipart, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::error::ErrorCode;
use shared::response::ApiResponse;

use crate::types::FileUpload;
use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the membership backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request, unwrapping the response envelope
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::data_response(response).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::data_response(response).await
    }

    /// Make a POST request where the response carries no data payload
    pub async fn post_unit<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        let _ = Self::handle_response::<Value>(response).await?;
        Ok(())
    }

    /// Make a PUT request with a JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::data_response(response).await
    }

    /// Make a DELETE request, ignoring any response data
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let mut request = self.client.delete(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        let _ = Self::handle_response::<Value>(response).await?;
        Ok(())
    }

    /// Make a multipart POST request uploading one file plus text fields
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        upload: &FileUpload,
        fields: &[(&str, String)],
    ) -> ClientResult<T> {
        let response = self.send_multipart(path, upload, fields).await?;
        Self::data_response(response).await
    }

    /// Multipart POST where the response carries no data payload
    pub async fn post_multipart_unit(
        &self,
        path: &str,
        upload: &FileUpload,
        fields: &[(&str, String)],
    ) -> ClientResult<()> {
        let response = self.send_multipart(path, upload, fields).await?;
        let _ = Self::handle_response::<Value>(response).await?;
        Ok(())
    }

    async fn send_multipart(
        &self,
        path: &str,
        upload: &FileUpload,
        fields: &[(&str, String)],
    ) -> ClientResult<reqwest::Response> {
        let part = multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)?;
        let mut form = multipart::Form::new().part("file", part);
        for (name, value) in fields {
            form = form.text(name.to_string(), value.clone());
        }

        let mut request = self.client.post(self.url(path)).multipart(form);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        Ok(request.send().await?)
    }

    /// Handle the HTTP response, returning the full envelope
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::debug!(status = %status, "API request failed");
            // Error bodies carry the envelope too; map the wire code when present
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<Value>>(&text) {
                if let Ok(code) = ErrorCode::try_from(envelope.code) {
                    return Err(ClientError::from_code(code, envelope.message));
                }
            }
            // Fall back to status-based mapping
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.is_success() {
            let code = ErrorCode::try_from(envelope.code).unwrap_or(ErrorCode::Unknown);
            return Err(ClientError::from_code(code, envelope.message));
        }
        Ok(envelope)
    }

    /// Handle the HTTP response and extract the required data payload
    async fn data_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        Self::handle_response::<T>(response)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
    }
}
