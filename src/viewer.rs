use crate::{
    api::AlunoSource,
    data::aluno::Aluno,
    error::{ViewerError, ViewerResult},
    render::{Content, RenderTarget},
};
use std::sync::Arc;

/// Shown instead of the data whenever fetching or decoding fails.
pub const ERROR_TEXT: &str = "Erro ao conectar API";

/// Fetch failures are warnings, setup failures are errors.
fn log_failure(e: &ViewerError, what: &str) {
    if e.is_fetch_failure() {
        warn!(?e, "{what}");
    } else {
        error!(?e, "{what}");
    }
}

/// Fills a container with one line per student.
#[derive(Clone)]
pub struct RecordListViewer {
    source: Arc<dyn AlunoSource>,
}

impl RecordListViewer {
    pub fn new(source: Arc<dyn AlunoSource>) -> Self {
        Self { source }
    }

    /// Fetches the students, keeping transport, status and decode failures apart.
    pub async fn try_load(&self) -> ViewerResult<Vec<Aluno>> {
        self.source.fetch_alunos().await
    }

    pub async fn load_and_render(&self, target: &mut impl RenderTarget) {
        let content = match self.try_load().await {
            Ok(alunos) => {
                debug!(count = alunos.len(), "rendering alunos");
                Content::Lines(alunos.iter().map(Aluno::display_line).collect())
            }
            Err(e) => {
                log_failure(&e, "unable to load alunos");
                Content::Text(ERROR_TEXT.to_string())
            }
        };

        target.replace_content(content);
    }
}

/// Fills a container with the API's greeting.
#[derive(Clone)]
pub struct MessageViewer {
    source: Arc<dyn AlunoSource>,
}

impl MessageViewer {
    pub fn new(source: Arc<dyn AlunoSource>) -> Self {
        Self { source }
    }

    pub async fn load_and_render(&self, target: &mut impl RenderTarget) {
        let content = match self.source.fetch_message().await {
            Ok(message) => Content::Text(message.message),
            Err(e) => {
                log_failure(&e, "unable to load api message");
                Content::Text(ERROR_TEXT.to_string())
            }
        };

        target.replace_content(content);
    }
}
