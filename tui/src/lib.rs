//! TUI rendering for Tap Journey using ratatui.

mod effects;
mod input;
mod scenes;
mod theme;

pub use effects::apply_modal_effect;
pub use input::{InputPump, command_for_key, handle_events};
pub use scenes::scene_art;
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use tapjourney_engine::{App, Dialog, JourneyState, Phase, Stage};

const NARRATIVE_HEIGHT: u16 = 7;
const CONTROLS_HEIGHT: u16 = 3;
const DIALOG_WIDTH: u16 = 44;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    // Measured every frame so a dialog opened after a long pause starts its
    // animation from zero.
    let elapsed = app.frame_elapsed();

    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(NARRATIVE_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let journey = app.journey();
    draw_narrative(frame, journey, chunks[0], &palette, &glyphs);
    draw_scene(frame, journey, chunks[1], &palette, &glyphs, options.ascii_only);
    if journey.controls_visible() {
        draw_controls(frame, journey, chunks[2], &palette, &glyphs);
    }
    draw_status_bar(frame, journey, chunks[3], &palette, &glyphs);

    if let Some(dialog) = app.dialog() {
        draw_dialog(frame, app, dialog, elapsed, &palette, &glyphs);
    }
}

fn stage_color(stage: Stage, palette: &Palette) -> Color {
    match stage {
        Stage::Beginning => palette.stage_cold,
        Stage::Warming => palette.stage_warming,
        Stage::Welcoming => palette.stage_warm,
        Stage::Completed => palette.stage_triumph,
        Stage::GaveUp => palette.stage_gave_up,
    }
}

fn draw_narrative(
    frame: &mut Frame,
    journey: &JourneyState,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let stage = journey.stage();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(glyphs.border)
        .border_style(Style::default().fg(stage_color(stage, palette)))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(" Jornada ", styles::title(palette))));

    let narrative = Paragraph::new(stage.narrative())
        .style(Style::default().fg(palette.text_primary))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(narrative, area);
}

fn draw_scene(
    frame: &mut Frame,
    journey: &JourneyState,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    ascii_only: bool,
) {
    let stage = journey.stage();
    let scene = stage.scene();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(glyphs.border)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_panel))
        .title(Line::from(Span::styled(
            format!(" {} ", scene.caption()),
            Style::default().fg(palette.text_secondary),
        )));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // One rect for the whole piece so every line shares the same left edge.
    let art = scene_art(scene);
    let art_width = art.iter().map(|line| line.width()).max().unwrap_or(0) as u16;
    let art_height = art.len() as u16;
    let art_area = Rect {
        x: inner.x + inner.width.saturating_sub(art_width) / 2,
        y: inner.y + inner.height.saturating_sub(art_height) / 2,
        width: art_width.min(inner.width),
        height: art_height.min(inner.height),
    };

    let art_style = Style::default().fg(stage_color(stage, palette));
    let lines: Vec<Line> = art
        .iter()
        .map(|line| Line::from(Span::styled(scenes::decorate(line, ascii_only), art_style)))
        .collect();
    frame.render_widget(Paragraph::new(lines), art_area);
}

fn tap_label(journey: &JourneyState) -> String {
    format!("Clique aqui: {}", journey.progress())
}

fn draw_controls(
    frame: &mut Frame,
    journey: &JourneyState,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let buttons = [
        (tap_label(journey), palette.button_tap),
        ("Desistir".to_string(), palette.button_give_up),
    ];
    for ((label, fill), column) in buttons.into_iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(glyphs.border)
            .border_style(Style::default().fg(fill))
            .style(styles::button(fill, palette));
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(button, *column);
    }
}

/// Key hints for the current phase, as (key, action) pairs.
fn key_hints(journey: &JourneyState) -> &'static [(&'static str, &'static str)] {
    match journey.phase() {
        Phase::Start | Phase::InProgress => &[
            ("Espaço", "clicar"),
            ("d", "desistir"),
            ("q", "sair"),
        ],
        Phase::RestartDialog => &[
            ("s", "sim"),
            ("n", "não"),
            ("Esc", "fechar"),
            ("q", "sair"),
        ],
        Phase::CompletionDialog => &[("r", "reiniciar"), ("Esc", "fechar"), ("q", "sair")],
        Phase::CompletionScreen | Phase::GaveUp | Phase::Halted => &[("q", "sair")],
    }
}

fn draw_status_bar(
    frame: &mut Frame,
    journey: &JourneyState,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut spans = vec![Span::raw(" ")];
    if journey.phase() == Phase::CompletionScreen {
        spans.push(Span::styled(
            format!("{} Aguarde...", glyphs.waiting),
            Style::default().fg(palette.gold),
        ));
        spans.push(Span::styled(
            format!(" {} ", glyphs.bullet),
            styles::key_hint(palette),
        ));
    }

    for (i, (key, action)) in key_hints(journey).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.bullet),
                styles::key_hint(palette),
            ));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn button_span(label: &str, fill: Color, palette: &Palette) -> Span<'static> {
    Span::styled(format!(" {label} "), styles::button(fill, palette))
}

fn draw_dialog(
    frame: &mut Frame,
    app: &mut App,
    dialog: Dialog,
    elapsed: std::time::Duration,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let area = frame.area();
    let dialog_width = DIALOG_WIDTH.min(area.width.saturating_sub(4)).max(1);
    let content_width = usize::from(dialog_width.saturating_sub(4)).max(1); // borders + padding

    let mut buttons = vec![button_span(dialog.confirm_label(), palette.primary, palette)];
    if let Some(decline) = dialog.decline_label() {
        buttons.push(Span::raw("   "));
        buttons.push(button_span(decline, palette.button_give_up, palette));
    }

    let body = dialog.body();
    let body_rows = body.width().div_ceil(content_width).max(1);
    let lines = vec![
        Line::from(Span::styled(body, Style::default().fg(palette.text_primary))),
        Line::from(Span::styled(
            glyphs.divider.repeat(content_width),
            Style::default().fg(palette.border),
        )),
        Line::from(buttons).alignment(Alignment::Center),
    ];

    let inner_height = (body_rows + 2) as u16;
    let dialog_height = inner_height.saturating_add(4).min(area.height); // borders + padding
    let base_area = Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    let (dialog_area, effect_done) = if let Some(effect) = app.modal_effect_mut() {
        effect.advance(elapsed);
        (
            apply_modal_effect(effect, base_area, area),
            effect.is_finished(),
        )
    } else {
        (base_area, false)
    };
    if effect_done {
        app.clear_modal_effect();
    }

    frame.render_widget(Clear, dialog_area);

    let accent = match dialog {
        Dialog::Completion => palette.gold,
        Dialog::Restart => palette.primary,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(glyphs.border)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(palette.bg_popup))
        .padding(Padding::uniform(1))
        .title(Line::from(Span::styled(
            format!(" {} ", dialog.title()),
            styles::title(palette),
        )));

    let prompt = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(prompt, dialog_area);
}
