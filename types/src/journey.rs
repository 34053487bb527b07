//! The journey state machine.
//!
//! `JourneyState` is the whole aggregate behind the screen. Every user action
//! and the completion timer are modeled as a [`JourneyEvent`] fed through
//! [`JourneyState::apply`], which mutates the state and reports whether the
//! completion timer must be armed or cancelled. Randomness and timing stay
//! outside: a restart carries its new target, and the timer's expiry comes
//! back as an event tagged with the epoch it was armed for.
//!
//! ```text
//! Start --tap--> InProgress --tap reaching target--> CompletionScreen
//!   |                |                                   | delay
//!   +----give up-----+--> RestartDialog                  v
//!                           | confirm -> Start      CompletionDialog
//!                           | decline -> GaveUp          | confirm -> Start
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Dialog, Stage, Target};

/// How long the completion screen stays up before the dialog appears.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(5000);

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyEvent {
    /// The tap button.
    Tap,
    /// The give-up button.
    GiveUp,
    /// "Sim" on the restart dialog or "Reiniciar" on the completion dialog.
    /// Carries the target of the next journey.
    ConfirmRestart(Target),
    /// "Não" on the restart dialog.
    DeclineRestart,
    /// The completion timer armed for `epoch` expired.
    CompletionDelayElapsed { epoch: u64 },
    /// The open dialog was dismissed without choosing a button.
    DismissDialog,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Start the completion timer; its expiry must report `epoch`.
    Arm { epoch: u64, delay: Duration },
    /// Drop any pending completion timer.
    Cancel,
}

/// Outcome of applying one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    pub changed: bool,
    pub timer: Option<TimerCommand>,
}

impl Transition {
    const fn unchanged() -> Self {
        Self {
            changed: false,
            timer: None,
        }
    }

    const fn changed() -> Self {
        Self {
            changed: true,
            timer: None,
        }
    }

    const fn with_timer(timer: TimerCommand) -> Self {
        Self {
            changed: true,
            timer: Some(timer),
        }
    }
}

/// Named state of the machine, derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Running with no taps yet.
    Start,
    /// Running with at least one tap.
    InProgress,
    /// Target reached, waiting for the completion delay.
    CompletionScreen,
    CompletionDialog,
    RestartDialog,
    /// Declined a new game. No control leads out of here.
    GaveUp,
    /// Stopped with no dialog and no controls, reached by dismissing a dialog.
    Halted,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::InProgress => "in_progress",
            Phase::CompletionScreen => "completion_screen",
            Phase::CompletionDialog => "completion_dialog",
            Phase::RestartDialog => "restart_dialog",
            Phase::GaveUp => "gave_up",
            Phase::Halted => "halted",
        }
    }
}

/// The single aggregate behind the journey screen.
///
/// Invariant: `progress <= target` at all times, enforced by [`Self::apply`]
/// and checked on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawJourneyState")]
pub struct JourneyState {
    running: bool,
    target: Target,
    progress: u32,
    show_restart_dialog: bool,
    show_completion_dialog: bool,
    show_completion_screen: bool,
    gave_up: bool,
    /// Bumped every time the completion screen is entered.
    completion_epoch: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidJourneyState {
    #[error("progress {progress} exceeds target {target}")]
    ProgressPastTarget { progress: u32, target: Target },
    #[error("restart and completion dialogs cannot both be visible")]
    ConflictingDialogs,
}

#[derive(Deserialize)]
struct RawJourneyState {
    running: bool,
    target: Target,
    progress: u32,
    show_restart_dialog: bool,
    show_completion_dialog: bool,
    show_completion_screen: bool,
    gave_up: bool,
    #[serde(default)]
    completion_epoch: u64,
}

impl TryFrom<RawJourneyState> for JourneyState {
    type Error = InvalidJourneyState;

    fn try_from(raw: RawJourneyState) -> Result<Self, Self::Error> {
        if raw.progress > raw.target.get() {
            return Err(InvalidJourneyState::ProgressPastTarget {
                progress: raw.progress,
                target: raw.target,
            });
        }
        if raw.show_restart_dialog && raw.show_completion_dialog {
            return Err(InvalidJourneyState::ConflictingDialogs);
        }
        Ok(Self {
            running: raw.running,
            target: raw.target,
            progress: raw.progress,
            show_restart_dialog: raw.show_restart_dialog,
            show_completion_dialog: raw.show_completion_dialog,
            show_completion_screen: raw.show_completion_screen,
            gave_up: raw.gave_up,
            completion_epoch: raw.completion_epoch,
        })
    }
}

impl JourneyState {
    /// A fresh journey: running, nothing tapped, no dialogs.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self {
            running: true,
            target,
            progress: 0,
            show_restart_dialog: false,
            show_completion_dialog: false,
            show_completion_screen: false,
            gave_up: false,
            completion_epoch: 0,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    #[must_use]
    pub fn progress(&self) -> u32 {
        self.progress
    }

    #[must_use]
    pub fn shows_restart_dialog(&self) -> bool {
        self.show_restart_dialog
    }

    #[must_use]
    pub fn shows_completion_dialog(&self) -> bool {
        self.show_completion_dialog
    }

    #[must_use]
    pub fn shows_completion_screen(&self) -> bool {
        self.show_completion_screen
    }

    #[must_use]
    pub fn gave_up(&self) -> bool {
        self.gave_up
    }

    #[must_use]
    pub fn completion_epoch(&self) -> u64 {
        self.completion_epoch
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        Stage::select(self.progress, self.target, self.gave_up)
    }

    /// The dialog currently on screen, if any.
    #[must_use]
    pub fn dialog(&self) -> Option<Dialog> {
        if self.show_restart_dialog {
            Some(Dialog::Restart)
        } else if self.show_completion_dialog {
            Some(Dialog::Completion)
        } else {
            None
        }
    }

    /// Whether the tap and give-up buttons are on screen.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.running {
            if self.progress == 0 {
                Phase::Start
            } else {
                Phase::InProgress
            }
        } else if self.show_restart_dialog {
            Phase::RestartDialog
        } else if self.show_completion_dialog {
            Phase::CompletionDialog
        } else if self.show_completion_screen {
            Phase::CompletionScreen
        } else if self.gave_up {
            Phase::GaveUp
        } else {
            Phase::Halted
        }
    }

    /// Apply one event. Events that make no sense in the current state are
    /// ignored and reported as unchanged.
    pub fn apply(&mut self, event: JourneyEvent) -> Transition {
        match event {
            JourneyEvent::Tap => self.tap(),
            JourneyEvent::GiveUp => self.give_up(),
            JourneyEvent::ConfirmRestart(target) => self.confirm_restart(target),
            JourneyEvent::DeclineRestart => self.decline_restart(),
            JourneyEvent::CompletionDelayElapsed { epoch } => self.completion_delay_elapsed(epoch),
            JourneyEvent::DismissDialog => self.dismiss_dialog(),
        }
    }

    fn tap(&mut self) -> Transition {
        if !self.running || self.progress >= self.target.get() {
            return Transition::unchanged();
        }

        self.progress += 1;
        if self.progress < self.target.get() {
            return Transition::changed();
        }

        self.running = false;
        self.show_completion_screen = true;
        self.completion_epoch = self.completion_epoch.wrapping_add(1);
        Transition::with_timer(TimerCommand::Arm {
            epoch: self.completion_epoch,
            delay: COMPLETION_DELAY,
        })
    }

    fn give_up(&mut self) -> Transition {
        if !self.running {
            return Transition::unchanged();
        }
        self.running = false;
        self.show_restart_dialog = true;
        Transition::changed()
    }

    fn confirm_restart(&mut self, target: Target) -> Transition {
        if !self.show_restart_dialog && !self.show_completion_dialog {
            return Transition::unchanged();
        }

        let leaving_completion_screen = self.show_completion_screen;
        let epoch = self.completion_epoch;
        *self = Self::new(target);
        self.completion_epoch = epoch;

        if leaving_completion_screen {
            Transition::with_timer(TimerCommand::Cancel)
        } else {
            Transition::changed()
        }
    }

    fn decline_restart(&mut self) -> Transition {
        if !self.show_restart_dialog {
            return Transition::unchanged();
        }
        self.show_restart_dialog = false;
        self.gave_up = true;
        Transition::changed()
    }

    fn completion_delay_elapsed(&mut self, epoch: u64) -> Transition {
        if !self.show_completion_screen || epoch != self.completion_epoch {
            return Transition::unchanged();
        }
        self.show_completion_screen = false;
        self.show_completion_dialog = true;
        Transition::changed()
    }

    fn dismiss_dialog(&mut self) -> Transition {
        if self.show_restart_dialog {
            self.show_restart_dialog = false;
            Transition::changed()
        } else if self.show_completion_dialog {
            self.show_completion_dialog = false;
            Transition::changed()
        } else {
            Transition::unchanged()
        }
    }
}
