mod oauth_client;
mod token;

pub use oauth_client::PinterestOAuth;
pub use token::TokenResponse;
