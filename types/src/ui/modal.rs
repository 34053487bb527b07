//! Dialog entrance animations.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};
use crate::Dialog;

/// Length of a dialog entrance animation.
pub const MODAL_EFFECT_DURATION: Duration = Duration::from_millis(180);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffectKind {
    /// Grows from the center; used for the completion dialog.
    PopScale,
    /// Rises from below; used for the restart dialog.
    SlideUp,
}

#[derive(Debug, Clone)]
pub struct ModalEffect {
    kind: ModalEffectKind,
    timer: EffectTimer,
}

impl ModalEffect {
    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self {
            kind: ModalEffectKind::PopScale,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn slide_up(duration: Duration) -> Self {
        Self {
            kind: ModalEffectKind::SlideUp,
            timer: EffectTimer::new(duration),
        }
    }

    /// The entrance animation for `dialog`.
    #[must_use]
    pub fn for_dialog(dialog: Dialog) -> Self {
        match dialog {
            Dialog::Completion => Self::pop_scale(MODAL_EFFECT_DURATION),
            Dialog::Restart => Self::slide_up(MODAL_EFFECT_DURATION),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn kind(&self) -> ModalEffectKind {
        self.kind
    }
}
