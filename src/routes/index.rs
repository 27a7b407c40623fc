use crate::{
    maud_conveniences::{subtitle, title},
    render::Container,
    state::ViewerState,
};
use axum::extract::State;
use maud::{Markup, html};

pub const APP_ID: &str = "app";
pub const LISTA_ALUNOS_ID: &str = "lista-alunos";
pub const AVISO_ID: &str = "aviso";
pub const BTN_NOVO_ID: &str = "btn-novo";
pub const BTN_EXPORT_ID: &str = "btn-export";

/// The page shell. Both containers start out loading and fill themselves once htmx sees them.
/// Only the containers get swapped, so the styled wrappers around them stay put.
pub async fn get_index_route(State(state): State<ViewerState>) -> Markup {
    let app = Container::new(APP_ID);
    let lista = Container::new(LISTA_ALUNOS_ID);

    state.render(html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-2xl w-full flex flex-col space-y-4" {
            (title("Alunos"))

            div hx-get="/internal/message" hx-trigger="load" hx-target={"#" (APP_ID)} hx-swap="outerHTML" class="text-gray-300" {
                (app)
            }

            div class="flex flex-row space-x-4" {
                button id=(BTN_NOVO_ID) hx-get="/internal/alunos/novo" hx-target={"#" (AVISO_ID)} hx-swap="outerHTML" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {
                    "Novo aluno"
                }
                a id=(BTN_EXPORT_ID) href="/alunos/export" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {
                    "Exportar CSV"
                }
            }

            div id=(AVISO_ID) {}

            (subtitle("Lista de alunos"))
            div hx-get="/internal/alunos" hx-trigger="load" hx-target={"#" (LISTA_ALUNOS_ID)} hx-swap="outerHTML" {
                (lista)
            }
        }
    })
}
