//! What the two buttons on the page do.

use crate::render::{Container, Content, RenderTarget};
use axum::response::{IntoResponse, Redirect, Response};
use reqwest::Url;

/// Shown when someone asks to add a student from the page.
pub const CREATION_NOTICE: &str =
    "Criação de alunos não está disponível nesta demo. Use a API diretamente.";

pub trait Navigator {
    fn navigate(&mut self, url: &Url);
}

pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Sends the browser to the CSV export.
#[derive(Debug, Clone)]
pub struct ExportRedirector {
    export_url: Url,
}

impl ExportRedirector {
    pub fn new(export_url: Url) -> Self {
        Self { export_url }
    }

    pub fn on_click(&self, navigator: &mut impl Navigator) {
        info!(url = %self.export_url, "redirecting to export");
        navigator.navigate(&self.export_url);
    }
}

/// Creation isn't supported here, so a click only tells the user so.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreationStub;

impl CreationStub {
    pub fn on_click(self, notifier: &mut impl Notifier) {
        notifier.notify(CREATION_NOTICE);
    }
}

impl Notifier for Container {
    fn notify(&mut self, message: &str) {
        self.replace_content(Content::Text(message.to_string()));
    }
}

/// Navigation as seen from the server: a `303 See Other` to wherever we were told to go.
#[derive(Debug, Default)]
pub struct PendingRedirect {
    location: Option<String>,
}

impl PendingRedirect {
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Navigator for PendingRedirect {
    fn navigate(&mut self, url: &Url) {
        self.location = Some(url.to_string());
    }
}

impl IntoResponse for PendingRedirect {
    fn into_response(self) -> Response {
        match self.location {
            Some(location) => Redirect::to(&location).into_response(),
            None => Redirect::to("/").into_response(),
        }
    }
}
