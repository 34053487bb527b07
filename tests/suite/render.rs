//! What the journey screen shows in each phase.

use std::time::Duration;

use crossterm::event::KeyCode;
use tapjourney_engine::{MODAL_EFFECT_DURATION, Scene, UiOptions};
use tapjourney_tui::scene_art;

use crate::common::{press, press_times, render, scripted_app, still_options};

#[test]
fn start_screen_shows_night_village_and_buttons() {
    let mut app = scripted_app(&[37], still_options());
    let screen = render(&mut app);

    assert!(screen.contains("Jornada"), "{screen}");
    assert!(screen.contains("Você está no início de sua jornada"), "{screen}");
    assert!(screen.contains("Vila medieval à noite"), "{screen}");
    assert!(screen.contains("Clique aqui: 0"), "{screen}");
    assert!(screen.contains("Desistir"), "{screen}");
}

#[test]
fn target_is_never_displayed() {
    let mut app = scripted_app(&[37], still_options());
    press_times(&mut app, KeyCode::Char(' '), 5);
    let screen = render(&mut app);
    assert!(screen.contains("Clique aqui: 5"), "{screen}");
    assert!(!screen.contains("37"), "{screen}");
}

#[test]
fn stages_follow_progress() {
    let mut app = scripted_app(&[50], still_options());

    press_times(&mut app, KeyCode::Char(' '), 16);
    let screen = render(&mut app);
    assert!(screen.contains("Você está no início"), "{screen}");

    press(&mut app, KeyCode::Char(' '));
    let screen = render(&mut app);
    assert!(screen.contains("Você sente o ambiente ao seu redor aquecer"), "{screen}");
    assert!(screen.contains("Um morador da vila"), "{screen}");

    press_times(&mut app, KeyCode::Char(' '), 16);
    let screen = render(&mut app);
    assert!(screen.contains("Agora você está em um lugar acolhedor"), "{screen}");
    assert!(screen.contains("O viajante"), "{screen}");
}

#[test]
fn restart_dialog_hides_buttons() {
    let mut app = scripted_app(&[20], still_options());
    press_times(&mut app, KeyCode::Char(' '), 3);
    press(&mut app, KeyCode::Char('d'));
    let screen = render(&mut app);

    assert!(screen.contains("Novo jogo?"), "{screen}");
    assert!(screen.contains("Deseja iniciar um novo jogo?"), "{screen}");
    assert!(screen.contains("Sim"), "{screen}");
    assert!(screen.contains("Não"), "{screen}");
    assert!(!screen.contains("Clique aqui"), "{screen}");
}

#[test]
fn gave_up_screen_is_a_dead_end() {
    let mut app = scripted_app(&[20], still_options());
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));
    let screen = render(&mut app);

    assert!(screen.contains("Você decidiu encerrar a jornada"), "{screen}");
    assert!(screen.contains("O viajante"), "{screen}");
    assert!(!screen.contains("Clique aqui"), "{screen}");
    assert!(!screen.contains("Novo jogo?"), "{screen}");
    assert!(screen.contains("q sair"), "{screen}");
}

#[tokio::test(start_paused = true)]
async fn completion_screen_waits_before_dialog() {
    let mut app = scripted_app(&[2], still_options());
    press_times(&mut app, KeyCode::Enter, 2);
    let screen = render(&mut app);

    assert!(screen.contains("Parabéns! Você chegou ao fim da jornada"), "{screen}");
    assert!(screen.contains("Aguarde..."), "{screen}");
    assert!(!screen.contains("Clique aqui"), "{screen}");
    assert!(!screen.contains("Você alcançou a meta!"), "{screen}");

    tokio::time::sleep(Duration::from_millis(5001)).await;
    app.tick();
    let screen = render(&mut app);
    assert!(screen.contains("Você alcançou a meta!"), "{screen}");
    assert!(screen.contains("Reiniciar"), "{screen}");
    assert!(!screen.contains("Aguarde..."), "{screen}");
}

#[test]
fn ascii_only_avoids_box_drawing() {
    let options = UiOptions {
        ascii_only: true,
        ..still_options()
    };
    let mut app = scripted_app(&[10], options);
    let screen = render(&mut app);
    assert!(!screen.contains('╭'), "{screen}");
    assert!(!screen.contains('✦'), "{screen}");
    assert!(screen.contains("Clique aqui: 0"), "{screen}");

    let mut app = scripted_app(&[10], still_options());
    let screen = render(&mut app);
    assert!(screen.contains('╭'), "{screen}");
}

#[test]
fn dialog_entrance_effect_finishes() {
    let mut app = scripted_app(&[10], UiOptions::default());
    press(&mut app, KeyCode::Char('d'));

    app.modal_effect_mut()
        .expect("restart dialog animates in")
        .advance(MODAL_EFFECT_DURATION);
    let screen = render(&mut app);

    assert!(app.modal_effect_mut().is_none());
    assert!(screen.contains("Deseja iniciar um novo jogo?"), "{screen}");
}

/// Column where `scene`'s art starts on `screen`, checked to be the same for
/// every line of the piece.
fn art_left_edge(screen: &str, scene: Scene) -> usize {
    let rows: Vec<&str> = screen.lines().collect();
    let mut edges = Vec::new();
    for line in scene_art(scene) {
        let fragment = line.trim();
        if fragment.len() < 5 {
            continue;
        }
        let (row, byte) = rows
            .iter()
            .find_map(|row| row.find(fragment).map(|byte| (*row, byte)))
            .unwrap_or_else(|| panic!("{fragment:?} not on screen:\n{screen}"));
        let indent = line.len() - line.trim_start().len();
        edges.push(row[..byte].chars().count() - indent);
    }
    assert!(!edges.is_empty());
    assert!(
        edges.iter().all(|&edge| edge == edges[0]),
        "{scene:?} edges {edges:?}\n{screen}"
    );
    edges[0]
}

#[tokio::test(start_paused = true)]
async fn scene_art_keeps_its_shape_in_every_phase() {
    let options = UiOptions {
        ascii_only: true,
        ..still_options()
    };

    let mut app = scripted_app(&[50], options);
    let edge = art_left_edge(&render(&mut app), Scene::VillageNight);
    assert!(edge > 1);

    press_times(&mut app, KeyCode::Char(' '), 17);
    art_left_edge(&render(&mut app), Scene::Npc);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));
    art_left_edge(&render(&mut app), Scene::Traveler);

    let mut app = scripted_app(&[1], options);
    press(&mut app, KeyCode::Char(' '));
    art_left_edge(&render(&mut app), Scene::Congratulations);
}
