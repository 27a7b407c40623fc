use maud::{Markup, Render, html};

/// What sits inside a container before anything has been fetched.
pub const LOADING_TEXT: &str = "Carregando...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Lines(Vec<String>),
}

impl Content {
    /// The content as plain text, lines joined by newlines.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines.join("\n"),
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Text(text) if text.is_empty() => vec![],
            Self::Text(text) => text.lines().collect(),
            Self::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

impl Render for Content {
    fn render(&self) -> Markup {
        html! {
            @match self {
                Content::Text(text) => {
                    (text)
                }
                Content::Lines(lines) => {
                    @for line in lines {
                        div class="py-1 border-b border-gray-700" {(line)}
                    }
                }
            }
        }
    }
}

/// Something whose whole content gets swapped on each render pass.
pub trait RenderTarget {
    fn replace_content(&mut self, content: Content);
}

/// An element on the page, addressed by its id.
#[derive(Debug, Clone)]
pub struct Container {
    id: &'static str,
    content: Content,
    mutations: usize,
}

impl Container {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            content: Content::Text(LOADING_TEXT.to_string()),
            mutations: 0,
        }
    }

    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// How many times the content has been replaced.
    pub const fn mutations(&self) -> usize {
        self.mutations
    }
}

impl RenderTarget for Container {
    fn replace_content(&mut self, content: Content) {
        self.content = content;
        self.mutations += 1;
    }
}

impl Render for Container {
    fn render(&self) -> Markup {
        html! {
            div id=(self.id) {
                (self.content)
            }
        }
    }
}
