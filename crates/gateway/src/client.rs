//! Request Gateway HTTP Client
//!
//! Sends requests to `{base_url}{endpoint path}` with a freshly fetched
//! bearer token. No retries and no client-side timeout; the transport
//! default applies.

use reqwest::multipart::Form;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use creatorkit_common::config::normalize_base_url;
use creatorkit_common::{Config, Error, Result};

use crate::envelope::{server_message, unwrap_envelope, Reply};
use crate::{CredentialProvider, Endpoint};

/// Body of an outgoing request
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Form),
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Multipart(_) => write!(f, "Multipart(..)"),
        }
    }
}

/// Authenticated gateway to the CreatorKit backend
#[derive(Debug, Clone)]
pub struct RequestGateway {
    http: Client,
    base_url: String,
}

impl RequestGateway {
    /// Create a gateway for the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Create a gateway from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint and unwrap its envelope
    pub async fn get<T: DeserializeOwned>(
        &self,
        credentials: &dyn CredentialProvider,
        endpoint: Endpoint,
    ) -> Result<Reply<T>> {
        self.send(credentials, endpoint, RequestBody::Empty).await
    }

    /// POST a JSON body and unwrap the envelope
    pub async fn post_json<B, T>(
        &self,
        credentials: &dyn CredentialProvider,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<Reply<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug_assert!(
            !endpoint.is_multipart(),
            "{} expects a multipart upload",
            endpoint
        );
        let body = serde_json::to_value(body)?;
        self.send(credentials, endpoint, RequestBody::Json(body))
            .await
    }

    /// POST a multipart form and unwrap the envelope
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        credentials: &dyn CredentialProvider,
        endpoint: Endpoint,
        form: Form,
    ) -> Result<Reply<T>> {
        debug_assert!(
            endpoint.is_multipart(),
            "{} does not accept multipart uploads",
            endpoint
        );
        self.send(credentials, endpoint, RequestBody::Multipart(form))
            .await
    }

    /// Fetch a token, send the request, and unwrap the response envelope.
    ///
    /// The token is fetched first; when that fails nothing is sent.
    pub async fn send<T: DeserializeOwned>(
        &self,
        credentials: &dyn CredentialProvider,
        endpoint: Endpoint,
        body: RequestBody,
    ) -> Result<Reply<T>> {
        let token = credentials.bearer_token().await.map_err(|e| {
            tracing::warn!(endpoint = %endpoint, error = %e, "Credential fetch failed, request not sent");
            match e {
                Error::Authentication(_) => e,
                other => Error::Authentication(other.user_message()),
            }
        })?;

        let url = format!("{}{}", self.base_url, endpoint.path());
        let mut request = self
            .http
            .request(endpoint.method(), &url)
            .bearer_auth(token);

        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        tracing::debug!(endpoint = %endpoint, "Sending backend request");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(endpoint = %endpoint, error = %e, "Backend request failed");
            Error::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = server_message(&body);
            tracing::warn!(
                endpoint = %endpoint,
                status = status.as_u16(),
                message = message.as_deref().unwrap_or(""),
                "Backend returned error status"
            );
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("Invalid response body: {}", e)))?;

        let reply = unwrap_envelope(value);
        if let Err(e) = &reply {
            tracing::info!(endpoint = %endpoint, error = %e, "Backend declined request");
        }
        reply
    }
}
