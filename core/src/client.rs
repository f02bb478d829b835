//! Typed client for the example.com comment API.
//!
//! # Design
//! `CommentApiClient` holds a base URL and an injected `HttpTransport` and
//! carries no mutable state between calls. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! classifies an `HttpResponse`; the public operation just sends one through
//! the transport and hands the result to the other. Both halves are pure, so
//! they can be exercised without a transport at all.

use tracing::{debug, warn};

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::types::{Comment, CommentUpdate, NewComment};

/// Client for the comment API, generic over the transport that performs I/O.
#[derive(Debug, Clone)]
pub struct CommentApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T> CommentApiClient<T> {
    /// Client bound to `https://example.com`.
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(transport: T, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn with_config(transport: T, config: &ClientConfig) -> Self {
        Self::with_base_url(transport, &config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_list_comments(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, format!("{}/comments", self.base_url))
    }

    pub fn build_add_comment(&self, name: &str, text: &str) -> Result<HttpRequest, serde_json::Error> {
        let body = serde_json::to_string(&NewComment { name, text })?;
        Ok(HttpRequest::new(HttpMethod::Post, format!("{}/comment", self.base_url)).with_json_body(body))
    }

    pub fn build_update_comment(
        &self,
        id: u64,
        name: Option<&str>,
        text: Option<&str>,
    ) -> Result<HttpRequest, serde_json::Error> {
        let body = serde_json::to_string(&CommentUpdate { name, text })?;
        Ok(HttpRequest::new(HttpMethod::Put, format!("{}/comment/{id}", self.base_url)).with_json_body(body))
    }

    /// Decode a `GET /comments` response.
    ///
    /// Either every record decodes or the whole response is rejected; a single
    /// record missing `id`, `name` or `text` discards the rest. A body that is
    /// valid JSON but not an array is a `Decoding` failure.
    pub fn parse_list_comments<E>(&self, response: HttpResponse) -> Result<Vec<Comment>, ClientError<E>> {
        check_status(&response, "Failed to get comments")?;
        let items: Vec<serde_json::Value> =
            serde_json::from_str(&response.body).map_err(ClientError::Decoding)?;
        items
            .into_iter()
            .map(|item| serde_json::from_value::<Comment>(item).map_err(|_| invalid_comment_data(&response)))
            .collect()
    }

    pub fn parse_add_comment<E>(&self, response: HttpResponse) -> Result<(), ClientError<E>> {
        check_status(&response, "Failed to add comment")
    }

    pub fn parse_update_comment<E>(&self, response: HttpResponse) -> Result<(), ClientError<E>> {
        check_status(&response, "Failed to update comment")
    }
}

impl<T: HttpTransport> CommentApiClient<T> {
    /// `GET /comments`, in the order the server returned them.
    pub fn list_comments(&self) -> Result<Vec<Comment>, ClientError<T::Error>> {
        let response = self.send(self.build_list_comments())?;
        self.parse_list_comments(response)
    }

    /// `POST /comment`. Empty strings are forwarded as-is.
    pub fn add_comment(&self, name: &str, text: &str) -> Result<(), ClientError<T::Error>> {
        let request = self
            .build_add_comment(name, text)
            .map_err(|e| ClientError::Serialization(e.to_string()))?;
        let response = self.send(request)?;
        self.parse_add_comment(response)
    }

    /// `PUT /comment/{id}` carrying only the fields that are `Some`.
    pub fn update_comment(
        &self,
        id: u64,
        name: Option<&str>,
        text: Option<&str>,
    ) -> Result<(), ClientError<T::Error>> {
        let request = self
            .build_update_comment(id, name, text)
            .map_err(|e| ClientError::Serialization(e.to_string()))?;
        let response = self.send(request)?;
        self.parse_update_comment(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError<T::Error>> {
        let method = request.method;
        debug!(method = method.as_str(), url = %request.url, "sending request");
        let response = self.transport.send(request).map_err(|e| {
            warn!(method = method.as_str(), "transport failed");
            ClientError::Transport(e)
        })?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

/// Map a non-2xx status to a `Domain` error prefixed with `action`.
fn check_status<E>(response: &HttpResponse, action: &str) -> Result<(), ClientError<E>> {
    if response.is_success() {
        return Ok(());
    }
    warn!(status = response.status, "{action}");
    Err(ClientError::domain(
        format!(
            "{action}. Status code: {}. Response body: {}",
            response.status, response.body
        ),
        response.status,
        &response.body,
    ))
}

fn invalid_comment_data<E>(response: &HttpResponse) -> ClientError<E> {
    warn!(status = response.status, "invalid comment data in response");
    ClientError::domain(
        format!(
            "Invalid comment data in response: Status code: {}. Response body: {}",
            response.status, response.body
        ),
        response.status,
        &response.body,
    )
}
