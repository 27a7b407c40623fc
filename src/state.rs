use crate::{
    actions::ExportRedirector,
    api::{AlunoSource, ApiClient},
    config::ApiConfig,
    error::ViewerResult,
    viewer::{MessageViewer, RecordListViewer},
};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;

#[derive(Clone)]
pub struct ViewerState {
    source: Arc<dyn AlunoSource>,
}

impl ViewerState {
    pub fn new(api_config: &ApiConfig) -> ViewerResult<Self> {
        let client = ApiClient::new(api_config)?;
        Ok(Self::with_source(Arc::new(client)))
    }

    pub fn with_source(source: Arc<dyn AlunoSource>) -> Self {
        Self { source }
    }

    pub fn record_list_viewer(&self) -> RecordListViewer {
        RecordListViewer::new(self.source.clone())
    }

    pub fn message_viewer(&self) -> MessageViewer {
        MessageViewer::new(self.source.clone())
    }

    pub fn export_redirector(&self) -> ExportRedirector {
        ExportRedirector::new(self.source.endpoints().export().clone())
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="pt-BR" {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Alunos" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center justify-center text-white" {
                    (markup)
                }
            }
        }
    }
}

impl std::fmt::Debug for ViewerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerState")
            .field("endpoints", self.source.endpoints())
            .finish()
    }
}
