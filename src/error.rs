use reqwest::Url;
use snafu::Snafu;
use std::num::ParseIntError;

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ViewerError {
    #[snafu(display("Unable to reach {}", url))]
    Transport { source: reqwest::Error, url: Url },
    #[snafu(display("{} answered with {}", url, status))]
    HttpStatus {
        status: reqwest::StatusCode,
        url: Url,
    },
    #[snafu(display("Unable to decode the body from {}", url))]
    Decode { source: serde_json::Error, url: Url },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse URL {:?}", original))]
    ParseUrl {
        source: url::ParseError,
        original: String,
    },
    #[snafu(display("{:?} can't be used as the API base, it needs to be an http(s) URL", original))]
    UnsupportedBaseUrl { original: String },
    #[snafu(display("Unable to parse request timeout {:?}", original))]
    ParseTimeout {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Unable to build the HTTP client"))]
    BuildClient { source: reqwest::Error },
}

impl ViewerError {
    /// Whether this came from talking to the API, as opposed to local setup.
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::HttpStatus { .. } | Self::Decode { .. }
        )
    }
}
