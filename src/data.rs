use serde::Deserialize;

pub mod aluno;

/// Body of the API root, shown verbatim in the `app` container.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiMessage {
    pub message: String,
}
