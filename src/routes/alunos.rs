use crate::{
    actions::{CreationStub, PendingRedirect},
    maud_conveniences::notice,
    render::Container,
    routes::index::{APP_ID, AVISO_ID, LISTA_ALUNOS_ID},
    state::ViewerState,
};
use axum::extract::State;
use maud::{Markup, Render, html};

pub async fn internal_get_alunos(State(state): State<ViewerState>) -> Markup {
    let mut lista = Container::new(LISTA_ALUNOS_ID);
    state.record_list_viewer().load_and_render(&mut lista).await;
    lista.render()
}

pub async fn internal_get_message(State(state): State<ViewerState>) -> Markup {
    let mut app = Container::new(APP_ID);
    state.message_viewer().load_and_render(&mut app).await;
    app.render()
}

pub async fn internal_get_novo_aluno() -> Markup {
    let mut aviso = Container::new(AVISO_ID);
    CreationStub.on_click(&mut aviso);

    html! {
        div id=(AVISO_ID) {
            (notice(aviso.content()))
        }
    }
}

pub async fn get_export(State(state): State<ViewerState>) -> PendingRedirect {
    let mut redirect = PendingRedirect::default();
    state.export_redirector().on_click(&mut redirect);
    redirect
}
