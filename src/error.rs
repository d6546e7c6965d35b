use std::path::PathBuf;
use thiserror::Error;

/// Failure to retrieve raw subtitle text.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no lyrics locator given")]
    EmptyLocator,

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read lyrics file {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write config file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialise config")]
    Serialize(#[from] toml::ser::Error),
}
