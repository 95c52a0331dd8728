use log::{debug, warn};
use serde_json::Value;
use url::Url;

use crate::error::{PinterestError, Result};

/// Appends `path` to the base URL, one segment per element.
///
/// Each element is pushed whole, so a `/` inside a caller-supplied
/// identifier is percent-encoded rather than starting a new segment. The
/// trailing slash the resource endpoints expect is kept.
pub fn endpoint_url(base_url: &Url, path: &[&str]) -> Result<Url> {
    build_url(base_url, path, true)
}

/// Like [`endpoint_url`], without the trailing slash.
pub fn exact_url(base_url: &Url, path: &[&str]) -> Result<Url> {
    build_url(base_url, path, false)
}

fn build_url(base_url: &Url, path: &[&str], trailing_slash: bool) -> Result<Url> {
    // Empty and dot segments would address a different endpoint.
    if let Some(segment) = path
        .iter()
        .find(|segment| matches!(**segment, "" | "." | ".."))
    {
        return Err(PinterestError::InvalidPath(format!(
            "{segment:?} is not a valid path segment"
        )));
    }

    let mut url = base_url.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            PinterestError::Config(format!("{base_url} cannot be a base URL"))
        })?;
        segments.pop_if_empty();
        for segment in path {
            segments.push(segment);
        }
        if trailing_slash {
            segments.push("");
        }
    }
    Ok(url)
}

/// Reads the body of a response and decodes it as JSON.
///
/// Pinterest reports API-level failures in a JSON body, so a non-success
/// status is only logged; the decoded body is handed back to the caller.
pub async fn decode_response(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let url = response.url().path().to_string();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("{url} responded with {status}");
    }
    debug!("{url} responded with {} bytes", body.len());

    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.pinterest.com").unwrap()
    }

    #[test]
    fn builds_trailing_slash_paths() {
        let url = endpoint_url(&base(), &["v1", "me"]).unwrap();
        assert_eq!(url.as_str(), "https://api.pinterest.com/v1/me/");
    }

    #[test]
    fn slash_inside_identifier_is_encoded() {
        let url = endpoint_url(&base(), &["v3", "users", "alice/followers"]).unwrap();
        assert_eq!(url.path(), "/v3/users/alice%2Ffollowers/");
    }

    #[test]
    fn encodes_identifiers() {
        let url = endpoint_url(&base(), &["v3", "feeds", "food & drink"]).unwrap();
        assert_eq!(url.path(), "/v3/feeds/food%20&%20drink/");
    }

    #[test]
    fn rejects_empty_and_dot_segments() {
        for segment in ["", ".", ".."] {
            let result = endpoint_url(&base(), &["v1", "pins", segment]);
            assert!(
                matches!(result, Err(PinterestError::InvalidPath(_))),
                "{segment:?} was accepted"
            );
        }
    }

    #[test]
    fn exact_url_has_no_trailing_slash() {
        let url = exact_url(&base(), &["v1", "oauth", "token"]).unwrap();
        assert_eq!(url.as_str(), "https://api.pinterest.com/v1/oauth/token");
    }

    #[test]
    fn extends_base_path() {
        let base = Url::parse("http://localhost:9000/proxy/").unwrap();
        let url = endpoint_url(&base, &["v1", "pins"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/proxy/v1/pins/");
    }
}
