use log::debug;
use url::Url;

use super::TokenResponse;
use crate::config::{OAuthConfig, OAUTH_SCOPES};
use crate::error::Result;
use crate::http_client::{decode_response, exact_url};

/// The path the end user is redirected to in order to grant access.
const AUTHORIZATION_PATH: &str = "oauth";

/// The path leveraged for exchanging an authorization code.
const ACCESS_TOKEN_PATH: [&str; 3] = ["v1", "oauth", "token"];

/// Performs the two halves of the OAuth2 code flow around the user's redirect.
#[derive(Debug, Clone)]
pub struct PinterestOAuth {
    config: OAuthConfig,
    http: reqwest::Client,
}

impl PinterestOAuth {
    pub fn new(config: OAuthConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Builds the URL the end user should visit to authorize this application.
    ///
    /// Pinterest will redirect back to `redirect_uri` with a `code` query
    /// parameter, which [`PinterestOAuth::exchange_code`] turns into a token.
    pub fn authorization_url(&self, redirect_uri: &str) -> Url {
        let mut url = self.config.base_url.clone();
        url.set_path(&format!("/{AUTHORIZATION_PATH}/"));
        url.query_pairs_mut()
            .clear()
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("client_id", &self.config.client_id)
            .append_pair("scope", &OAUTH_SCOPES.join(","));
        url
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Exactly one request is made; a transport failure is returned as-is.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        let url = exact_url(&self.config.base_url, &ACCESS_TOKEN_PATH)?;
        debug!("POST {}", url.path());

        let response = self
            .http
            .post(url)
            .query(&[
                ("grant_type", "authorization_code"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("code", code),
            ])
            .send()
            .await?;

        decode_response(response).await.map(TokenResponse::from)
    }
}
