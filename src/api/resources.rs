use serde_json::Value;

use super::client::{PinterestClient, Query};
use super::params::{fields_query, Page};
use super::pin::NewPin;
use crate::error::{PinterestError, Result};

impl PinterestClient {
    /// Returns the logged in user's information.
    pub async fn me(&self, fields: &[&str]) -> Result<Value> {
        self.ensure_access_token()?;
        self.get(&["v1", "me"], fields_query(fields)).await
    }

    /// Retrieves all the boards for the currently authenticated user.
    pub async fn boards(&self, fields: &[&str]) -> Result<Value> {
        self.ensure_access_token()?;
        self.get(&["v1", "me", "boards"], fields_query(fields)).await
    }

    /// Retrieves a single board, by id or `username/board_name`.
    pub async fn board(&self, board: &str, fields: &[&str]) -> Result<Value> {
        self.ensure_access_token()?;
        self.get(&board_path(board, &[]), fields_query(fields))
            .await
    }

    /// Lists the pins on a board.
    pub async fn board_pins(&self, board: &str, fields: &[&str]) -> Result<Value> {
        self.ensure_access_token()?;
        self.get(&board_path(board, &["pins"]), fields_query(fields))
            .await
    }

    /// Retrieves a single pin by id.
    pub async fn pin(&self, pin: &str, fields: &[&str]) -> Result<Value> {
        self.ensure_access_token()?;
        self.get(&["v1", "pins", pin], fields_query(fields)).await
    }

    /// Creates a pin. Not safe to retry: a repeated call creates a second pin.
    pub async fn create_pin(&self, pin: &NewPin) -> Result<Value> {
        self.ensure_access_token()?;
        match pin.multipart_form() {
            Some(form) => self.post_multipart(&["v1", "pins"], form).await,
            None => self.post_form(&["v1", "pins"], pin.text_fields()).await,
        }
    }

    /// The authenticated user's home feed.
    pub async fn home_feed(&self, page: Page) -> Result<Value> {
        self.ensure_access_token()?;
        self.get(&["v3", "feeds", "home"], paged(Query::new(), page))
            .await
    }

    /// Pins from a single category feed, e.g. `food_drink`.
    pub async fn category_feed(&self, category: &str, page: Page) -> Result<Value> {
        self.ensure_access_token()?;
        self.get(&["v3", "feeds", category], paged(Query::new(), page))
            .await
    }

    /// Searches all pins for `query`.
    pub async fn search_pins(&self, query: &str, page: Page) -> Result<Value> {
        self.ensure_access_token()?;
        let search = vec![("query", query.to_string())];
        self.get(&["v3", "search", "pins"], paged(search, page)).await
    }

    /// Looks up a user by username.
    pub async fn user(&self, username: &str, fields: &[&str]) -> Result<Value> {
        self.ensure_access_token()?;
        self.get(&["v3", "users", username], fields_query(fields))
            .await
    }

    /// Lists the users following `username`.
    pub async fn followers(&self, username: &str, page: Page) -> Result<Value> {
        self.ensure_access_token()?;
        self.get(
            &["v3", "users", username, "followers"],
            paged(Query::new(), page),
        )
        .await
    }

    /// Lists the users `username` follows.
    pub async fn following(&self, username: &str, page: Page) -> Result<Value> {
        self.ensure_access_token()?;
        self.get(
            &["v3", "users", username, "following"],
            paged(Query::new(), page),
        )
        .await
    }

    /// Disabled. Always fails, whatever the pin.
    pub async fn delete_pin(&self, _pin: &str) -> Result<Value> {
        self.ensure_access_token()?;
        Err(PinterestError::NotImplemented("delete_pin"))
    }

    /// Disabled. Always fails, whatever the board.
    pub async fn delete_board(&self, _board: &str) -> Result<Value> {
        self.ensure_access_token()?;
        Err(PinterestError::NotImplemented("delete_board"))
    }
}

/// A board is addressed by id or by `username/board_name`; only the board
/// spec may span more than one segment.
fn board_path<'a>(board: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
    let mut path = vec!["v1", "boards"];
    path.extend(board.split('/'));
    path.extend_from_slice(rest);
    path
}

fn paged(mut query: Query, page: Page) -> Query {
    page.push_onto(&mut query);
    query
}
