use std::path::Path;

use super::{parser, LineSequence};
use crate::config::FetchConfig;
use crate::error::FetchError;

/// Accept header sent with every subtitle request.
pub const ACCEPT: &str = "text/vtt, text/plain, */*";

/// Whether the locator names an HTTP(S) resource rather than a local file.
pub fn is_remote(locator: &str) -> bool {
    let lower = locator.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Retrieve raw subtitle text from a URL or a local path.
///
/// HTTP requests carry no credentials: no Authorization header and no
/// cookies, only the `Accept` header and the configured user agent.
pub fn fetch_text(locator: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let locator = locator.trim();
    if locator.is_empty() {
        return Err(FetchError::EmptyLocator);
    }

    if !is_remote(locator) {
        let path = Path::new(locator);
        return std::fs::read_to_string(path).map_err(|source| FetchError::File {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::info!(url = locator, "Fetching lyrics");
    let agent = ureq::AgentBuilder::new()
        .timeout(config.timeout())
        .user_agent(&config.user_agent)
        .build();

    let response = agent
        .get(locator)
        .set("Accept", ACCEPT)
        .call()
        .map_err(|err| match err {
            ureq::Error::Status(status, response) => FetchError::Status {
                status,
                status_text: response.status_text().to_string(),
            },
            ureq::Error::Transport(transport) => FetchError::Transport {
                url: locator.to_string(),
                source: Box::new(transport),
            },
        })?;

    response.into_string().map_err(|source| FetchError::Body {
        url: locator.to_string(),
        source,
    })
}

/// Fetch and parse lyrics, degrading every failure to an empty sequence.
///
/// Lyrics are an optional enhancement to playback, so retrieval errors are
/// logged and never surfaced to the caller.
pub fn load_lyrics(locator: &str, config: &FetchConfig) -> LineSequence {
    if locator.trim().is_empty() {
        return LineSequence::empty();
    }

    match fetch_text(locator, config) {
        Ok(content) => {
            let lines = parser::parse(&content, locator.trim());
            tracing::info!(lines = lines.len(), locator, "Loaded lyrics");
            lines
        }
        Err(err) => {
            tracing::warn!(locator, error = %err, "Failed to load lyrics");
            LineSequence::empty()
        }
    }
}
