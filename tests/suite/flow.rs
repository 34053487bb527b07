//! Whole journeys driven through the key map, the engine and its timer.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tapjourney_engine::{COMPLETION_DELAY, Dialog, Phase, Stage};
use tapjourney_tui::command_for_key;

use crate::common::{press, press_times, render, scripted_app, still_options};

#[tokio::test(start_paused = true)]
async fn completing_and_restarting_starts_over() {
    let mut app = scripted_app(&[3, 5], still_options());
    press_times(&mut app, KeyCode::Char('c'), 3);
    assert_eq!(app.journey().phase(), Phase::CompletionScreen);
    assert_eq!(app.stage(), Stage::Completed);

    // Nothing but quit reaches the journey while it waits.
    for code in [KeyCode::Char(' '), KeyCode::Char('d'), KeyCode::Enter, KeyCode::Esc] {
        assert!(!press(&mut app, code), "{code:?}");
    }

    tokio::time::sleep(COMPLETION_DELAY + Duration::from_millis(1)).await;
    app.tick();
    assert_eq!(app.dialog(), Some(Dialog::Completion));

    assert!(press(&mut app, KeyCode::Char('r')));
    assert_eq!(app.journey().phase(), Phase::Start);
    assert_eq!(app.journey().target().get(), 5);
    assert_eq!(app.journeys_started(), 2);

    let screen = render(&mut app);
    assert!(screen.contains("Clique aqui: 0"), "{screen}");
    assert!(screen.contains("Você está no início"), "{screen}");
}

#[tokio::test(start_paused = true)]
async fn completion_dialog_does_not_arrive_early() {
    let mut app = scripted_app(&[1], still_options());
    press(&mut app, KeyCode::Enter);

    for _ in 0..49 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        app.tick();
        assert!(app.dialog().is_none());
    }
    tokio::time::sleep(Duration::from_millis(101)).await;
    app.tick();
    assert_eq!(app.dialog(), Some(Dialog::Completion));
}

#[test]
fn give_up_then_confirm_draws_a_new_target() {
    let mut app = scripted_app(&[20, 8], still_options());
    press_times(&mut app, KeyCode::Char(' '), 12);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.dialog(), Some(Dialog::Restart));

    assert!(press(&mut app, KeyCode::Char('s')));
    assert!(app.journey().is_running());
    assert_eq!(app.journey().progress(), 0);
    assert_eq!(app.journey().target().get(), 8);
}

#[test]
fn dismissing_the_restart_dialog_halts_the_journey() {
    let mut app = scripted_app(&[20], still_options());
    press_times(&mut app, KeyCode::Char(' '), 4);
    press(&mut app, KeyCode::Char('d'));
    assert!(press(&mut app, KeyCode::Esc));

    assert_eq!(app.journey().phase(), Phase::Halted);
    assert!(!app.journey().gave_up());
    assert_eq!(app.journey().progress(), 4);
    let screen = render(&mut app);
    assert!(!screen.contains("Clique aqui"), "{screen}");
    assert!(!screen.contains("Novo jogo?"), "{screen}");
}

#[test]
fn quit_is_available_from_a_dead_end() {
    let mut app = scripted_app(&[20], still_options());
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.stage(), Stage::GaveUp);

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    let command = command_for_key(app.journey(), ctrl_c).expect("ctrl+c maps to quit");
    app.dispatch(command);
    assert!(app.quit_requested());
}
