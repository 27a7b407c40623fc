//! Talking to the student API.

use crate::{
    config::ApiConfig,
    data::{ApiMessage, aluno::Aluno},
    error::{
        BuildClientSnafu, DecodeSnafu, HttpStatusSnafu, ParseUrlSnafu, TransportSnafu, ViewerResult,
    },
};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use snafu::{ResultExt, ensure};

/// Every URL this crate derives from the configured base, kept in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    root: Url,
    alunos: Url,
    export: Url,
}

impl ApiEndpoints {
    pub fn new(base_url: &Url) -> ViewerResult<Self> {
        let mut root = base_url.clone();
        if !root.path().ends_with('/') {
            let path = format!("{}/", root.path());
            root.set_path(&path);
        }
        root.set_query(None);
        root.set_fragment(None);

        let alunos = join(&root, "alunos")?;
        let mut export = join(&root, "alunos/export")?;
        export.set_query(Some("format=csv"));

        Ok(Self {
            root,
            alunos,
            export,
        })
    }

    pub const fn root(&self) -> &Url {
        &self.root
    }

    pub const fn alunos(&self) -> &Url {
        &self.alunos
    }

    pub const fn export(&self) -> &Url {
        &self.export
    }
}

fn join(base: &Url, relative: &str) -> ViewerResult<Url> {
    base.join(relative).context(ParseUrlSnafu {
        original: format!("{base}{relative}"),
    })
}

/// Anything that can hand us the API's data. The HTTP client is the real one,
/// tests swap in canned answers.
#[async_trait]
pub trait AlunoSource: Send + Sync {
    fn endpoints(&self) -> &ApiEndpoints;

    async fn fetch_message(&self) -> ViewerResult<ApiMessage>;

    async fn fetch_alunos(&self) -> ViewerResult<Vec<Aluno>>;
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    endpoints: ApiEndpoints,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ViewerResult<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().context(BuildClientSnafu)?,
            endpoints: ApiEndpoints::new(config.base_url())?,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> ViewerResult<T> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .context(TransportSnafu { url: url.clone() })?;

        let status = response.status();
        ensure!(
            status.is_success(),
            HttpStatusSnafu {
                status,
                url: url.clone()
            }
        );

        let body = response
            .bytes()
            .await
            .context(TransportSnafu { url: url.clone() })?;
        serde_json::from_slice(&body).context(DecodeSnafu { url: url.clone() })
    }
}

#[async_trait]
impl AlunoSource for ApiClient {
    fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    async fn fetch_message(&self) -> ViewerResult<ApiMessage> {
        self.get_json(self.endpoints.root()).await
    }

    async fn fetch_alunos(&self) -> ViewerResult<Vec<Aluno>> {
        self.get_json(self.endpoints.alunos()).await
    }
}
