use anyhow::{Context, Result};
use keyring::Entry;
use serde::{Deserialize, Serialize};
use std::{io, io::Write};

const KEYRING_SERVICE: &str = "pinterestctl";
const KEYRING_USER: &str = "OAuth2 Credentials";

/// The format of our JSON within the user's keyring.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct CredentialStorage {
    pub access_token: String,
}

impl CredentialStorage {
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("stored credentials are not valid JSON")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("unable to serialize credentials")
    }
}

fn entry() -> Result<Entry> {
    Entry::new(KEYRING_SERVICE, KEYRING_USER).context("unable to open the OS keyring")
}

/// Retrieves the stored access token, if the user has logged in before.
pub fn load() -> Result<Option<CredentialStorage>> {
    match entry()?.get_password() {
        Ok(contents) => CredentialStorage::from_json(&contents).map(Some),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(err) => Err(err).context("unable to read stored credentials"),
    }
}

pub fn save(credentials: &CredentialStorage) -> Result<()> {
    entry()?
        .set_password(&credentials.to_json()?)
        .context("unable to update stored credentials")
}

pub fn clear() -> Result<()> {
    match entry()?.delete_password() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(err) => Err(err).context("unable to remove stored credentials"),
    }
}

/// Reads a single line from the user.
pub fn interactive_prompt(prompt: &str) -> Result<String> {
    let mut response = String::new();
    print!("{prompt}: ");
    io::stdout().flush()?;
    io::stdin()
        .read_line(&mut response)
        .context("unable to read from stdin")?;
    Ok(response.trim().to_string())
}
