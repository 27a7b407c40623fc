use crate::error::{
    BadEnvVarSnafu, ParseTimeoutSnafu, ParseUrlSnafu, UnsupportedBaseUrlSnafu, ViewerResult,
};
use dotenvy::var;
use reqwest::Url;
use snafu::{ResultExt, ensure};
use std::{env::VarError, sync::Arc, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> ViewerResult<Self> {
        Self::from_lookup(optional_env_var)
    }

    /// Builds the configuration from whatever `lookup` says each variable holds.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> ViewerResult<Option<String>>,
    ) -> ViewerResult<Self> {
        Ok(Self {
            api_config: Arc::new(ApiConfig::from_lookup(&lookup)?),
            server_ip: lookup("ALUNOS_SERVER_IP")?
                .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string()),
        })
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

/// Where the student API lives and how patient we are with it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    request_timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> ViewerResult<Option<String>>,
    ) -> ViewerResult<Self> {
        let base_url = lookup("ALUNOS_API_BASE_URL")?
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let request_timeout = lookup("ALUNOS_REQUEST_TIMEOUT_SECS")?
            .map(|secs| {
                secs.trim()
                    .parse()
                    .map(Duration::from_secs)
                    .context(ParseTimeoutSnafu { original: secs })
            })
            .transpose()?;

        Ok(Self {
            base_url: parse_url(&base_url)?,
            request_timeout,
        })
    }

    pub fn with_base_url(base_url: &str) -> ViewerResult<Self> {
        Ok(Self {
            base_url: parse_url(base_url)?,
            request_timeout: None,
        })
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

/// Only `http`/`https` URLs that paths can be joined onto are usable as the API base.
fn parse_url(original: &str) -> ViewerResult<Url> {
    let url = Url::parse(original).context(ParseUrlSnafu { original })?;
    ensure!(
        matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base(),
        UnsupportedBaseUrlSnafu { original }
    );
    Ok(url)
}

pub fn optional_env_var(name: &'static str) -> ViewerResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}
