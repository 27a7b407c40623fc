use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Shown in place of a missing or empty status.
pub const INACTIVE_PLACEHOLDER: &str = "inactive";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Aluno {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Aluno {
    pub fn new(name: impl Into<String>, status: Option<&str>) -> Self {
        Self {
            name: name.into(),
            status: status.map(ToString::to_string),
        }
    }

    pub fn display_status(&self) -> &str {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ => INACTIVE_PLACEHOLDER,
        }
    }

    pub fn display_line(&self) -> String {
        self.to_string()
    }
}

impl Display for Aluno {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {}", self.name, self.display_status())
    }
}
