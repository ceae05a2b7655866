use bevy_egui::egui;

use crate::content::{ring, RingId, RINGS};
use crate::state::AppState;
use crate::ui::backdrop::{paint_backdrop, BackdropField};
use crate::ui::ornament::{build_ornament, paint_ornament};
use crate::ui::widgets::{scaled_font, with_alpha};

/// Board size the ring diameters and label offsets are authored against.
pub const REFERENCE_BOARD: f32 = 600.0;

/// Maps a click, as distance from center normalized to the outer radius,
/// onto the topmost ring covering that point. The inner disc wins inside
/// half the radius, the middle band up to three quarters, the outer band to
/// the rim. Outside the rim nothing is selected.
pub fn hit_ring(normalized_dist: f32) -> Option<RingId> {
    if !(0.0..=1.0).contains(&normalized_dist) {
        None
    } else if normalized_dist <= 0.5 {
        Some(RingId::Inner)
    } else if normalized_dist <= 0.75 {
        Some(RingId::Middle)
    } else {
        Some(RingId::Outer)
    }
}

/// Rotation of a ring at `elapsed` seconds since startup. Runs forever and
/// independently of panel state.
pub fn ring_angle(id: RingId, elapsed: f32) -> f32 {
    let desc = ring(id);
    elapsed / desc.period_secs * std::f32::consts::TAU * desc.spin.sign()
}

pub fn render_rings(
    ui: &mut egui::Ui,
    state: &mut AppState,
    field: &BackdropField,
    elapsed: f32,
) {
    let ui_scale = state.config.ui_scale;
    let available = ui.available_size();
    let (response, painter) = ui.allocate_painter(available, egui::Sense::click());
    let rect = response.rect;
    let center = rect.center();

    painter.rect_filled(rect, 0.0, egui::Color32::BLACK);
    paint_backdrop(&painter, rect, field, elapsed);

    let board = rect.width().min(rect.height()).min(REFERENCE_BOARD);
    let scale = board / REFERENCE_BOARD;

    // Outer first so the inner rings paint on top of its pattern.
    for desc in &RINGS {
        let geometry = build_ornament(desc.diameter * scale);
        let angle = ring_angle(desc.id, elapsed);
        paint_ornament(&painter, center, angle, desc.color, &geometry);
    }

    // Static labels with a short leader line, and the center core disc.
    let font = egui::FontId::monospace(scaled_font(13.0, ui_scale));
    for (id, y_offset) in [(RingId::Outer, 64.0), (RingId::Middle, 128.0)] {
        let desc = ring(id);
        let pos = egui::pos2(center.x, center.y - board / 2.0 + y_offset * scale);
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            desc.label,
            font.clone(),
            desc.color,
        );
        painter.line_segment(
            [
                pos + egui::vec2(0.0, 12.0 * scale),
                pos + egui::vec2(0.0, 44.0 * scale),
            ],
            egui::Stroke::new(1.0, with_alpha(desc.color, 153)),
        );
    }
    let inner = ring(RingId::Inner);
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        inner.label,
        egui::FontId::monospace(scaled_font(11.0, ui_scale)),
        inner.color,
    );
    painter.circle_filled(center, 32.0 * scale, with_alpha(inner.color, 50));
    painter.circle_stroke(
        center,
        32.0 * scale,
        egui::Stroke::new(1.0, with_alpha(inner.color, 200)),
    );

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let dist = (pos - center).length() / (board / 2.0);
            if let Some(id) = hit_ring(dist) {
                state.select_ring(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_bands() {
        assert_eq!(hit_ring(0.0), Some(RingId::Inner));
        assert_eq!(hit_ring(0.3), Some(RingId::Inner));
        assert_eq!(hit_ring(0.5), Some(RingId::Inner));
        assert_eq!(hit_ring(0.6), Some(RingId::Middle));
        assert_eq!(hit_ring(0.75), Some(RingId::Middle));
        assert_eq!(hit_ring(0.9), Some(RingId::Outer));
        assert_eq!(hit_ring(1.0), Some(RingId::Outer));
    }

    #[test]
    fn test_clicks_outside_rim_select_nothing() {
        assert_eq!(hit_ring(1.01), None);
        assert_eq!(hit_ring(5.0), None);
        assert_eq!(hit_ring(-0.1), None);
        assert_eq!(hit_ring(f32::NAN), None);
    }

    #[test]
    fn test_ring_angle_direction_and_period() {
        use std::f32::consts::TAU;
        // One full clockwise turn per period for the outer and inner rings.
        assert!((ring_angle(RingId::Outer, 30.0) - TAU).abs() < 1e-4);
        assert!((ring_angle(RingId::Inner, 10.0) - TAU).abs() < 1e-4);
        // The middle ring turns the other way.
        assert!((ring_angle(RingId::Middle, 20.0) + TAU).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_never_stops() {
        let early = ring_angle(RingId::Outer, 100.0);
        let late = ring_angle(RingId::Outer, 1000.0);
        assert!(late > early);
    }
}
