//! Core engine for Tap Journey - owns the journey and everything around it.
//!
//! This crate drives the pure [`JourneyState`] machine without TUI
//! dependencies: it draws fresh targets, runs the completion timer on tokio,
//! tracks the dialog entrance animation and loads configuration.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

pub use tapjourney_types::ui::{
    AnimPhase, MODAL_EFFECT_DURATION, ModalEffect, ModalEffectKind, UiOptions,
};
pub use tapjourney_types::{
    COMPLETION_DELAY, Dialog, JourneyEvent, JourneyState, MAX_TARGET, MIN_TARGET, Phase, Scene,
    ScriptedTargets, Stage, Target, TargetOutOfRange, TargetSource, TimerCommand, Transition,
};

mod config;
mod timer;

pub use config::{
    ASCII_ONLY_ENV, AppConfig, ConfigError, HIGH_CONTRAST_ENV, JourneyConfig, apply_env_overrides,
    config_path, resolve_ui_options,
};

use timer::CompletionTimer;

// ============================================================================
// Targets
// ============================================================================

/// Draws targets uniformly from [`MIN_TARGET`]..=[`MAX_TARGET`] using the
/// thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTargets;

impl TargetSource for RandomTargets {
    fn next_target(&mut self) -> Target {
        Target::saturating(rand::random_range(Target::range()))
    }
}

// ============================================================================
// Commands
// ============================================================================

/// What the user asked for, independent of how it was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Tap,
    GiveUp,
    /// Start a new journey from whichever dialog is open.
    ConfirmRestart,
    DeclineRestart,
    DismissDialog,
    Quit,
}

// ============================================================================
// View state
// ============================================================================

#[derive(Debug)]
struct ViewState {
    modal_effect: Option<ModalEffect>,
    ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    last_frame: Instant,
}

impl ViewState {
    fn new(ui_options: UiOptions) -> Self {
        Self {
            modal_effect: None,
            ui_options,
            last_frame: Instant::now(),
        }
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    journey: JourneyState,
    targets: Box<dyn TargetSource>,
    timer: CompletionTimer,
    view: ViewState,
    journeys_started: u64,
    quit_requested: bool,
}

impl App {
    /// A fresh journey with random targets.
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self::with_targets(RandomTargets, ui_options)
    }

    pub fn with_targets(targets: impl TargetSource + 'static, ui_options: UiOptions) -> Self {
        let mut targets: Box<dyn TargetSource> = Box::new(targets);
        let journey = JourneyState::new(targets.next_target());
        info!(target = journey.target().get(), "Journey started");
        debug!(?ui_options, "UI options");
        Self {
            journey,
            targets,
            timer: CompletionTimer::new(),
            view: ViewState::new(ui_options),
            journeys_started: 1,
            quit_requested: false,
        }
    }

    #[must_use]
    pub fn journey(&self) -> &JourneyState {
        &self.journey
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.journey.stage()
    }

    #[must_use]
    pub fn dialog(&self) -> Option<Dialog> {
        self.journey.dialog()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    /// Number of journeys begun since launch, including the current one.
    #[must_use]
    pub fn journeys_started(&self) -> u64 {
        self.journeys_started
    }

    #[must_use]
    pub fn completion_pending(&self) -> bool {
        self.timer.is_pending()
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Apply a user command. Returns whether the journey changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        let event = match command {
            Command::Tap => JourneyEvent::Tap,
            Command::GiveUp => JourneyEvent::GiveUp,
            Command::ConfirmRestart => {
                if self.journey.dialog().is_none() {
                    return false;
                }
                JourneyEvent::ConfirmRestart(self.targets.next_target())
            }
            Command::DeclineRestart => JourneyEvent::DeclineRestart,
            Command::DismissDialog => JourneyEvent::DismissDialog,
            Command::Quit => {
                self.quit_requested = true;
                return false;
            }
        };
        self.apply(event)
    }

    /// Poll the completion timer. Call once per frame.
    pub fn tick(&mut self) {
        while let Some(epoch) = self.timer.try_fired() {
            if !self.apply(JourneyEvent::CompletionDelayElapsed { epoch }) {
                warn!(
                    epoch,
                    current = self.journey.completion_epoch(),
                    "Ignoring stale completion timer"
                );
            }
        }
    }

    fn apply(&mut self, event: JourneyEvent) -> bool {
        let dialog_before = self.journey.dialog();
        let transition = self.journey.apply(event);
        if !transition.changed {
            return false;
        }

        if let JourneyEvent::ConfirmRestart(target) = event {
            self.journeys_started += 1;
            info!(
                target = target.get(),
                journey = self.journeys_started,
                "Journey restarted"
            );
        }

        match transition.timer {
            Some(TimerCommand::Arm { epoch, delay }) => self.timer.arm(epoch, delay),
            Some(TimerCommand::Cancel) => self.timer.cancel(),
            None => {}
        }
        // The timer only lives while the completion screen is up.
        if !self.journey.shows_completion_screen() && self.timer.pending_epoch().is_some() {
            self.timer.cancel();
        }

        let dialog_after = self.journey.dialog();
        if dialog_after != dialog_before {
            self.view.modal_effect = match dialog_after {
                Some(dialog) if !self.view.ui_options.reduced_motion => {
                    Some(ModalEffect::for_dialog(dialog))
                }
                _ => None,
            };
        }

        debug!(
            ?event,
            phase = self.journey.phase().as_str(),
            stage = self.journey.stage().as_str(),
            progress = self.journey.progress(),
            target = self.journey.target().get(),
            "Journey transition"
        );
        true
    }

    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        elapsed
    }

    pub fn modal_effect_mut(&mut self) -> Option<&mut ModalEffect> {
        self.view.modal_effect.as_mut()
    }

    pub fn clear_modal_effect(&mut self) {
        self.view.modal_effect = None;
    }

    /// Abort any pending timer. Called on the way out.
    pub fn shutdown(&mut self) {
        self.timer.cancel();
        info!(journeys = self.journeys_started, "Shutting down");
    }
}
