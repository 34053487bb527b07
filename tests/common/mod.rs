//! Shared helpers for the integration suite.

#![allow(dead_code)]

mod screen;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;

use tapjourney_engine::{App, ScriptedTargets, Target, UiOptions};
use tapjourney_tui::{command_for_key, draw};

pub use screen::VirtualScreen;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 32;

/// Options that keep dialogs at their resting size on the first frame.
pub fn still_options() -> UiOptions {
    UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    }
}

pub fn scripted_app(targets: &[u32], options: UiOptions) -> App {
    let targets: Vec<Target> = targets
        .iter()
        .map(|&n| Target::new(n).expect("target in range"))
        .collect();
    App::with_targets(ScriptedTargets::new(targets), options)
}

/// Render one frame and return what the screen shows.
pub fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(VirtualScreen::new(WIDTH, HEIGHT)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal.backend().contents()
}

/// Feed one key press through the same mapping the event loop uses.
/// Returns whether the journey changed.
pub fn press(app: &mut App, code: KeyCode) -> bool {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    match command_for_key(app.journey(), key) {
        Some(command) => app.dispatch(command),
        None => false,
    }
}

pub fn press_times(app: &mut App, code: KeyCode, times: u32) {
    for _ in 0..times {
        press(app, code);
    }
}
