//! REST client for the task service.
//!
//! Requests are plain `http` values handed to a [`Transport`]. In the browser
//! that is the `fetch` API; tests plug in a recording double.

use crate::config::ClientConfig;
use crate::error::ApiError;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Method, Request, Response};
use serde::de::DeserializeOwned;
use shared::{AuditLog, ErrorBody, Task, TaskPage, TaskRequest};
use tracing::debug;
use url::form_urlencoded;

pub type ApiRequest = Request<Option<String>>;
pub type ApiResponse = Response<String>;

/// Moves one request over the wire. Non-2xx statuses are not errors at this
/// level; the client inspects them.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[derive(Debug)]
pub struct ApiClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_tasks(
        &self,
        page: u32,
        size: u32,
        search: &str,
    ) -> Result<TaskPage, ApiError> {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("page", &page.to_string())
            .append_pair("size", &size.to_string());
        if !search.trim().is_empty() {
            query.append_pair("search", search);
        }
        let uri = format!("{}?{}", self.config.endpoint("/api/tasks"), query.finish());

        let request = self.request(Method::GET, &uri, None)?;
        self.fetch_json(request).await
    }

    pub async fn create_task(&self, payload: &TaskRequest) -> Result<Task, ApiError> {
        let body = serde_json::to_string(payload)?;
        let request = self.request(Method::POST, &self.config.endpoint("/api/tasks"), Some(body))?;
        self.fetch_json(request).await
    }

    pub async fn update_task(&self, id: &str, payload: &TaskRequest) -> Result<Task, ApiError> {
        let body = serde_json::to_string(payload)?;
        let request = self.request(Method::PUT, &self.task_uri(id), Some(body))?;
        self.fetch_json(request).await
    }

    /// The response body is ignored.
    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &self.task_uri(id), None)?;
        self.execute(request).await.map(|_| ())
    }

    pub async fn list_audit_logs(&self) -> Result<Vec<AuditLog>, ApiError> {
        let request = self.request(Method::GET, &self.config.endpoint("/api/logs"), None)?;
        self.fetch_json(request).await
    }

    /// The id is encoded as one path segment.
    fn task_uri(&self, id: &str) -> String {
        self.config
            .endpoint(&format!("/api/tasks/{}", urlencoding::encode(id)))
    }

    fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> Result<ApiRequest, ApiError> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(AUTHORIZATION, self.config.authorization())
            .header(CONTENT_TYPE, "application/json")
            .body(body)?;
        Ok(request)
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.execute(request).await?;
        Ok(serde_json::from_str(response.body())?)
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        debug!(%method, %uri, "sending request");

        let response = self.transport.send(request).await?;
        let status = response.status();
        debug!(%method, %uri, %status, "received response");

        if status.is_success() {
            return Ok(response);
        }

        let message = serde_json::from_str::<ErrorBody>(response.body())
            .map(|body| body.error)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());
        Err(ApiError::Status { status, message })
    }
}
