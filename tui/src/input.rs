//! Keyboard input for the journey screen.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use tapjourney_engine::{App, Command, Dialog, JourneyState};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads crossterm events on a blocking thread and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Closing first unblocks the reader if it is waiting on capacity.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input into `app`. Returns `true` once the user asked to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        processed += 1;

        if let Event::Key(key) = ev
            && let Some(command) = command_for_key(app.journey(), key)
        {
            let changed = app.dispatch(command);
            debug!(?command, changed, "Key command");
        }
        if app.quit_requested() {
            return Ok(true);
        }
    }
    Ok(app.quit_requested())
}

/// Map a key press to a command for the journey as it currently stands.
///
/// Keys that mean nothing in the current phase map to `None`.
#[must_use]
pub fn command_for_key(journey: &JourneyState, key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }

    match (journey.dialog(), key.code) {
        (_, KeyCode::Char('q')) => Some(Command::Quit),
        (Some(_), KeyCode::Esc) => Some(Command::DismissDialog),
        (Some(Dialog::Restart), KeyCode::Char('s' | 'y') | KeyCode::Enter) => {
            Some(Command::ConfirmRestart)
        }
        (Some(Dialog::Restart), KeyCode::Char('n')) => Some(Command::DeclineRestart),
        (Some(Dialog::Completion), KeyCode::Char('r') | KeyCode::Enter) => {
            Some(Command::ConfirmRestart)
        }
        (Some(_), _) => None,
        (None, KeyCode::Char(' ' | 'c') | KeyCode::Enter) if journey.is_running() => {
            Some(Command::Tap)
        }
        (None, KeyCode::Char('d')) if journey.is_running() => Some(Command::GiveUp),
        (None, _) => None,
    }
}
