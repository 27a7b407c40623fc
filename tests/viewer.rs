// tests/viewer.rs
mod common;

use std::sync::Arc;

use alunos_viewer::error::ViewerError;
use alunos_viewer::render::{Container, Content, RenderTarget};
use alunos_viewer::viewer::{ERROR_TEXT, MessageViewer, RecordListViewer};
use common::{Canned, FakeSource};

fn viewer(answers: impl IntoIterator<Item = Canned>) -> RecordListViewer {
    RecordListViewer::new(Arc::new(FakeSource::new(answers)))
}

#[tokio::test]
async fn renders_one_line_per_record_in_order() {
    let viewer = viewer([Canned::Body(
        r#"[{"name":"Ana","status":"ativo"},{"name":"Ravi"}]"#,
    )]);
    let mut lista = Container::new("lista-alunos");

    viewer.load_and_render(&mut lista).await;

    assert_eq!(lista.content().lines(), vec!["Ana — ativo", "Ravi — inactive"]);
    assert_eq!(lista.mutations(), 1);
}

#[tokio::test]
async fn empty_array_renders_empty_content() {
    let viewer = viewer([Canned::Body("[]")]);
    let mut lista = Container::new("lista-alunos");

    viewer.load_and_render(&mut lista).await;

    assert_eq!(lista.content().to_text(), "");
    assert!(lista.content().lines().is_empty());
}

#[tokio::test]
async fn bad_status_renders_only_the_error() {
    let viewer = viewer([Canned::Body(r#"[{"name":"Ana"}]"#), Canned::Status(500)]);
    let mut lista = Container::new("lista-alunos");

    viewer.load_and_render(&mut lista).await;
    viewer.load_and_render(&mut lista).await;

    assert_eq!(lista.content(), &Content::Text(ERROR_TEXT.to_string()));
    assert_eq!(lista.mutations(), 2);
}

#[tokio::test]
async fn malformed_body_renders_the_error() {
    let viewer = viewer([Canned::Body(r#"{"not":"a list"}"#)]);
    let mut lista = Container::new("lista-alunos");

    viewer.load_and_render(&mut lista).await;

    assert_eq!(lista.content().to_text(), ERROR_TEXT);
}

#[tokio::test]
async fn second_load_replaces_the_first() {
    let viewer = viewer([
        Canned::Body(r#"[{"name":"Ana","status":"ativo"},{"name":"Bruno"}]"#),
        Canned::Body(r#"[{"name":"Carlos","status":"inativo"}]"#),
    ]);
    let mut lista = Container::new("lista-alunos");

    viewer.load_and_render(&mut lista).await;
    viewer.load_and_render(&mut lista).await;

    assert_eq!(lista.content().lines(), vec!["Carlos — inativo"]);
}

#[tokio::test]
async fn try_load_keeps_failures_apart() {
    let viewer = viewer([Canned::Status(404), Canned::Body("nope")]);

    assert!(matches!(
        viewer.try_load().await,
        Err(ViewerError::HttpStatus { status, .. }) if status.as_u16() == 404
    ));
    assert!(matches!(
        viewer.try_load().await,
        Err(ViewerError::Decode { .. })
    ));
}

/// Counts writes without keeping them, to pin down one mutation per pass.
#[derive(Default)]
struct CountingTarget(usize);

impl RenderTarget for CountingTarget {
    fn replace_content(&mut self, _content: Content) {
        self.0 += 1;
    }
}

#[tokio::test]
async fn exactly_one_mutation_per_pass() {
    let viewer = viewer([
        Canned::Body(r#"[{"name":"A"},{"name":"B"},{"name":"C"}]"#),
        Canned::Status(503),
    ]);
    let mut target = CountingTarget::default();

    viewer.load_and_render(&mut target).await;
    assert_eq!(target.0, 1);
    viewer.load_and_render(&mut target).await;
    assert_eq!(target.0, 2);
}

#[tokio::test]
async fn message_is_shown_verbatim() {
    let viewer = MessageViewer::new(Arc::new(FakeSource::new([
        Canned::Body(r#"{"message":"Olá, <mundo>!"}"#),
        Canned::Status(502),
    ])));
    let mut app = Container::new("app");

    viewer.load_and_render(&mut app).await;
    assert_eq!(app.content().to_text(), "Olá, <mundo>!");

    viewer.load_and_render(&mut app).await;
    assert_eq!(app.content().to_text(), ERROR_TEXT);
}
