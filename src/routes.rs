use crate::{
    routes::{
        alunos::{get_export, internal_get_alunos, internal_get_message, internal_get_novo_aluno},
        health::get_health,
        index::get_index_route,
    },
    state::ViewerState,
};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub mod alunos;
pub mod health;
pub mod index;

pub fn router(state: ViewerState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/alunos/export", get(get_export))
        .route("/health", get(get_health))
        .route("/internal/message", get(internal_get_message))
        .route("/internal/alunos", get(internal_get_alunos))
        .route("/internal/alunos/novo", get(internal_get_novo_aluno))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
