//! Core domain types for Tap Journey.
//!
//! This crate contains the journey state machine and the pure projections
//! derived from it. No IO, no async, no rendering: the engine owns timing
//! and randomness, the TUI owns presentation.

mod dialog;
mod journey;
mod stage;
pub mod ui;

pub use dialog::Dialog;
pub use journey::{
    COMPLETION_DELAY, InvalidJourneyState, JourneyEvent, JourneyState, Phase, TimerCommand,
    Transition,
};
pub use stage::{Scene, Stage};

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

// ============================================================================
// Target
// ============================================================================

/// Smallest goal a journey can have.
pub const MIN_TARGET: u32 = 1;
/// Largest goal a journey can have.
pub const MAX_TARGET: u32 = 50;

/// The tap goal of a journey, always within [`MIN_TARGET`]..=[`MAX_TARGET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Target(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("target {0} is outside the allowed range {MIN_TARGET}..={MAX_TARGET}")]
pub struct TargetOutOfRange(pub u32);

impl Target {
    pub const MIN: Target = Target(MIN_TARGET);
    pub const MAX: Target = Target(MAX_TARGET);

    pub fn new(value: u32) -> Result<Self, TargetOutOfRange> {
        if Self::range().contains(&value) {
            Ok(Self(value))
        } else {
            Err(TargetOutOfRange(value))
        }
    }

    /// Clamp `value` into [`MIN_TARGET`]..=[`MAX_TARGET`].
    #[must_use]
    pub const fn saturating(value: u32) -> Self {
        if value < MIN_TARGET {
            Self::MIN
        } else if value > MAX_TARGET {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// The inclusive range every target is drawn from.
    #[must_use]
    pub const fn range() -> RangeInclusive<u32> {
        MIN_TARGET..=MAX_TARGET
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Target {
    type Error = TargetOutOfRange;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Target> for u32 {
    fn from(value: Target) -> Self {
        value.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Target sources
// ============================================================================

/// Supplies a fresh target whenever a journey starts or restarts.
pub trait TargetSource: Send {
    fn next_target(&mut self) -> Target;
}

/// Replays a fixed list of targets in order, wrapping around at the end.
///
/// Useful wherever a deterministic journey is needed (tests, demos).
#[derive(Debug, Clone)]
pub struct ScriptedTargets {
    queue: VecDeque<Target>,
}

impl ScriptedTargets {
    /// Falls back to [`Target::MIN`] when `targets` is empty.
    pub fn new(targets: impl IntoIterator<Item = Target>) -> Self {
        let mut queue: VecDeque<Target> = targets.into_iter().collect();
        if queue.is_empty() {
            queue.push_back(Target::MIN);
        }
        Self { queue }
    }
}

impl TargetSource for ScriptedTargets {
    fn next_target(&mut self) -> Target {
        let next = self.queue.pop_front().unwrap_or(Target::MIN);
        self.queue.push_back(next);
        next
    }
}
