use log::debug;
use reqwest::{header, multipart, Request, RequestBuilder};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{PinterestError, Result};
use crate::http_client::{decode_response, endpoint_url};

/// Query parameters for a single request, built fresh per call.
pub(crate) type Query = Vec<(&'static str, String)>;

/// The content type Pinterest expects on every call, bodies or not.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Issues authenticated calls against the Pinterest API.
///
/// The client only holds read-only state, so clones share one connection
/// pool and may be used from several tasks at once.
#[derive(Debug, Clone)]
pub struct PinterestClient {
    /// The bearer token attached to every request.
    access_token: Option<String>,
    config: ClientConfig,
    http: reqwest::Client,
}

impl PinterestClient {
    /// Creates a new API client around the given access token.
    pub fn new(access_token: Option<String>) -> Self {
        Self::with_config(ClientConfig::default(), access_token)
    }

    pub fn with_config(config: ClientConfig, access_token: Option<String>) -> Self {
        Self {
            access_token,
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn has_access_token(&self) -> bool {
        self.ensure_access_token().is_ok()
    }

    /// Every authenticated operation passes through here before building a request.
    pub(crate) fn ensure_access_token(&self) -> Result<&str> {
        match self.access_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(PinterestError::MissingCredentials),
        }
    }

    /// Applies the configured client hints.
    fn with_hints(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(user_agent) = &self.config.user_agent {
            request = request.header(header::USER_AGENT, user_agent);
        }
        if let Some(locale) = &self.config.locale {
            request = request.header(header::ACCEPT_LANGUAGE, locale);
        }
        request
    }

    /// Builds, without sending, the GET request for `path`.
    fn build_get(&self, path: &[&str], mut query: Query) -> Result<Request> {
        let token = self.ensure_access_token()?;
        let url = endpoint_url(&self.config.base_url, path)?;
        query.push(("access_token", token.to_string()));

        let request = self
            .http
            .get(url)
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .query(&query);
        Ok(self.with_hints(request).build()?)
    }

    pub(crate) async fn get(&self, path: &[&str], query: Query) -> Result<Value> {
        let request = self.build_get(path, query)?;
        debug!("GET {}", request.url().path());

        let response = self.http.execute(request).await?;
        decode_response(response).await
    }

    pub(crate) async fn post_form(&self, path: &[&str], fields: Query) -> Result<Value> {
        let token = self.ensure_access_token()?;
        let url = endpoint_url(&self.config.base_url, path)?;
        debug!("POST {}", url.path());

        // `form` sets the urlencoded content type itself.
        let request = self
            .http
            .post(url)
            .query(&[("access_token", token)])
            .form(&fields);
        let response = self.with_hints(request).send().await?;
        decode_response(response).await
    }

    pub(crate) async fn post_multipart(&self, path: &[&str], form: multipart::Form) -> Result<Value> {
        let token = self.ensure_access_token()?;
        let url = endpoint_url(&self.config.base_url, path)?;
        debug!("POST {} (multipart)", url.path());

        let request = self
            .http
            .post(url)
            .query(&[("access_token", token)])
            .multipart(form);
        let response = self.with_hints(request).send().await?;
        decode_response(response).await
    }
}
