//! Entrance animations for the journey dialogs.

use ratatui::layout::Rect;

use tapjourney_engine::{ModalEffect, ModalEffectKind};

/// Where a dialog should be drawn this frame, given where it finally rests.
#[must_use]
pub fn apply_modal_effect(effect: &ModalEffect, base: Rect, viewport: Rect) -> Rect {
    let t = ease_out_cubic(effect.progress());
    match effect.kind() {
        ModalEffectKind::PopScale => scale_rect(base, 0.6 + 0.4 * t),
        ModalEffectKind::SlideUp => {
            let viewport_bottom = viewport.y.saturating_add(viewport.height);
            let base_bottom = base.y.saturating_add(base.height);
            let room_below = viewport_bottom.saturating_sub(base_bottom);
            let travel = room_below.min(base.height / 2).min(6);
            let y_offset = ((1.0 - t) * f32::from(travel)).round() as u16;
            Rect {
                y: base.y.saturating_add(y_offset),
                ..base
            }
        }
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = ((f32::from(base.width) * scale).round() as u16).clamp(1, base.width.max(1));
    let height = ((f32::from(base.height) * scale).round() as u16).clamp(1, base.height.max(1));
    Rect {
        x: base.x + base.width.saturating_sub(width) / 2,
        y: base.y + base.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
