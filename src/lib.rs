//! A small client for the Pinterest REST API.
//!
//! [`oauth::PinterestOAuth`] walks the OAuth2 code flow: it builds the URL
//! the user authorizes at, then exchanges the code Pinterest redirects back
//! with for an access token. [`api::PinterestClient`] wraps that token and
//! exposes one method per endpoint, each returning the decoded JSON body.
//!
//! ```no_run
//! use pinterest::{OAuthConfig, PinterestClient, PinterestOAuth};
//!
//! # async fn example() -> Result<(), pinterest::PinterestError> {
//! let oauth = PinterestOAuth::new(OAuthConfig::from_env()?);
//! println!("visit {}", oauth.authorization_url("https://example.com/callback"));
//!
//! let token = oauth.exchange_code("code-from-redirect").await?;
//! let client = PinterestClient::new(token.access_token().map(str::to_string));
//! let me = client.me(&["id", "username"]).await?;
//! println!("{me}");
//! # Ok(())
//! # }
//! ```
pub mod api;
pub mod config;
mod error;
mod http_client;
pub mod oauth;

pub use api::{ImageSource, NewPin, Page, PinterestClient};
pub use config::{ClientConfig, OAuthConfig};
pub use error::{PinterestError, Result};
pub use oauth::{PinterestOAuth, TokenResponse};
