// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST client for the poll service.
//!
//! One request per call. Nothing is retried, de-duplicated, or coalesced:
//! two calls to [`PollApi::vote`] are two independent requests.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use qp_core::{OptionId, Poll, PollCreate, PollId};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::route::Route;

/// Error type for REST calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}{}", detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },

    /// The response body was not the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server's own explanation, if it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Result type for REST calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Boxed future returned by [`PollApi`] methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = ApiResult<T>> + Send + 'a>>;

/// Body returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub detail: String,
}

/// Error body sent by the server, `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Pulls a readable message out of an error response body.
///
/// `detail` is usually a string; validation failures send a list of objects
/// with a `msg` field.
pub(crate) fn parse_detail(body: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(body).ok()?;
    match body.detail {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Response bodies that are checked after decoding.
trait Checked {
    fn check(&self) -> qp_core::Result<()>;
}

impl Checked for Poll {
    fn check(&self) -> qp_core::Result<()> {
        self.validate()
    }
}

impl Checked for Vec<Poll> {
    fn check(&self) -> qp_core::Result<()> {
        self.iter().try_for_each(Poll::validate)
    }
}

impl Checked for DeleteConfirmation {
    fn check(&self) -> qp_core::Result<()> {
        Ok(())
    }
}

/// REST operations on polls.
///
/// Mutating calls return the server's post-mutation snapshot of the poll.
pub trait PollApi: Send + Sync {
    fn list_polls(&self) -> ApiFuture<'_, Vec<Poll>>;

    fn create_poll<'a>(&'a self, request: &'a PollCreate) -> ApiFuture<'a, Poll>;

    fn vote(&self, poll: PollId, option: OptionId) -> ApiFuture<'_, Poll>;

    fn unvote(&self, poll: PollId, option: OptionId) -> ApiFuture<'_, Poll>;

    fn like(&self, poll: PollId) -> ApiFuture<'_, Poll>;

    fn unlike(&self, poll: PollId) -> ApiFuture<'_, Poll>;

    fn delete_poll(&self, poll: PollId) -> ApiFuture<'_, DeleteConfirmation>;
}

/// [`PollApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPollApi {
    http: Client,
    base_url: String,
}

impl HttpPollApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("quickpoll/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(HttpPollApi {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call<B, T>(&self, route: Route, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Checked,
    {
        let url = route.url(&self.base_url);
        tracing::debug!(%route, %url, "request");

        let mut request = self.http.request(route.method(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%route, "request failed: {}", e);
            ApiError::Request(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !status.is_success() {
            let detail = parse_detail(&text);
            tracing::warn!(%route, %status, detail = detail.as_deref(), "request rejected");
            return Err(ApiError::Status { status, detail });
        }

        let value: T =
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        value.check().map_err(|e| {
            tracing::warn!(%route, "rejected response: {}", e);
            ApiError::Decode(e.to_string())
        })?;
        Ok(value)
    }
}

impl PollApi for HttpPollApi {
    fn list_polls(&self) -> ApiFuture<'_, Vec<Poll>> {
        Box::pin(self.call::<(), _>(Route::List, None))
    }

    fn create_poll<'a>(&'a self, request: &'a PollCreate) -> ApiFuture<'a, Poll> {
        Box::pin(self.call(Route::Create, Some(request)))
    }

    fn vote(&self, poll: PollId, option: OptionId) -> ApiFuture<'_, Poll> {
        Box::pin(self.call::<(), _>(Route::Vote(poll, option), None))
    }

    fn unvote(&self, poll: PollId, option: OptionId) -> ApiFuture<'_, Poll> {
        Box::pin(self.call::<(), _>(Route::Unvote(poll, option), None))
    }

    fn like(&self, poll: PollId) -> ApiFuture<'_, Poll> {
        Box::pin(self.call::<(), _>(Route::Like(poll), None))
    }

    fn unlike(&self, poll: PollId) -> ApiFuture<'_, Poll> {
        Box::pin(self.call::<(), _>(Route::Unlike(poll), None))
    }

    fn delete_poll(&self, poll: PollId) -> ApiFuture<'_, DeleteConfirmation> {
        Box::pin(self.call::<(), _>(Route::Delete(poll), None))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
