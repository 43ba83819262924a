//! Menu commands and loop control.

use std::fmt::{Display, Formatter};

/// An action selectable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    SearchById,
    SearchByType,
    Add,
    Delete,
    Save,
    Terminate,
}

/// What the menu loop does after an action returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl MenuCommand {
    /// Commands in the order they appear on the menu.
    pub const ALL: [MenuCommand; 7] = [
        MenuCommand::List,
        MenuCommand::SearchById,
        MenuCommand::SearchByType,
        MenuCommand::Add,
        MenuCommand::Delete,
        MenuCommand::Save,
        MenuCommand::Terminate,
    ];

    /// Short token shown on the menu.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            MenuCommand::List => "L",
            MenuCommand::SearchById => "P",
            MenuCommand::SearchByType => "PT",
            MenuCommand::Add => "A",
            MenuCommand::Delete => "E",
            MenuCommand::Save => "G",
            MenuCommand::Terminate => "T",
        }
    }

    /// Long token accepted as an alternative to the code.
    #[must_use]
    pub fn word(&self) -> &'static str {
        match self {
            MenuCommand::List => "LISTAR",
            MenuCommand::SearchById => "PESQUISAR",
            MenuCommand::SearchByType => "TIPO",
            MenuCommand::Add => "ACRESCENTAR",
            MenuCommand::Delete => "ELIMINAR",
            MenuCommand::Save => "GUARDAR",
            MenuCommand::Terminate => "TERMINAR",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::List => "Listar catálogo",
            MenuCommand::SearchById => "Pesquisar por id",
            MenuCommand::SearchByType => "Pesquisar por tipo",
            MenuCommand::Add => "Acrescentar produto",
            MenuCommand::Delete => "Eliminar produto",
            MenuCommand::Save => "Guardar catálogo em ficheiro",
            MenuCommand::Terminate => "Terminar programa",
        }
    }

    /// Matches a typed token against codes and words, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        let token = input.trim().to_uppercase();
        MenuCommand::ALL
            .into_iter()
            .find(|command| command.code() == token || command.word() == token)
    }
}

impl Display for MenuCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<2} - {}", self.code(), self.label())
    }
}
