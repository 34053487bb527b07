//! Modal prompts shown over the journey screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialog {
    /// Raised by giving up: offers a new game.
    Restart,
    /// Raised a few seconds after reaching the target.
    Completion,
}

impl Dialog {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Dialog::Restart => "Novo jogo?",
            Dialog::Completion => "Parabéns!",
        }
    }

    #[must_use]
    pub const fn body(self) -> &'static str {
        match self {
            Dialog::Restart => "Deseja iniciar um novo jogo?",
            Dialog::Completion => "Você alcançou a meta!",
        }
    }

    /// Label of the button that starts a new journey.
    #[must_use]
    pub const fn confirm_label(self) -> &'static str {
        match self {
            Dialog::Restart => "Sim",
            Dialog::Completion => "Reiniciar",
        }
    }

    /// Label of the decline button; the completion dialog has none.
    #[must_use]
    pub const fn decline_label(self) -> Option<&'static str> {
        match self {
            Dialog::Restart => Some("Não"),
            Dialog::Completion => None,
        }
    }
}
