use bevy_egui::egui;

use crate::content::RingDescriptor;
use crate::state::{AppState, PanelPhase};
use crate::ui::widgets::{scaled_font, with_alpha};

const CARD_WIDTH: f32 = 420.0;

/// A backdrop click only closes the panel when it lands outside the card.
/// Clicks on the card itself are consumed by the card's window layer, but
/// this guard makes the contract explicit even if layers overlap.
pub fn backdrop_click_closes(pos: Option<egui::Pos2>, card_rect: Option<egui::Rect>) -> bool {
    match (pos, card_rect) {
        (Some(pos), Some(rect)) => !rect.contains(pos),
        _ => true,
    }
}

/// Renders one ring's modal behavior panel: a dimmed full-viewport backdrop
/// plus a centered card listing the ring's behaviors.
///
/// Renders nothing at all while the panel is closed (no input interception).
/// A short fade+scale plays on open and close; the closing card is
/// non-interactive and purely cosmetic.
pub fn render_behavior_panel(ctx: &egui::Context, state: &mut AppState, desc: &RingDescriptor) {
    let open = state.is_panel_open(desc.id);
    let closing = state
        .panel_transition
        .filter(|t| t.ring == desc.id && t.phase == PanelPhase::Closing && !t.finished())
        .is_some();
    if !open && !closing {
        return;
    }

    let fade = match state.panel_transition.filter(|t| t.ring == desc.id) {
        Some(t) => match t.phase {
            PanelPhase::Opening => t.progress(),
            PanelPhase::Closing => 1.0 - t.progress(),
        },
        None => 1.0,
    };
    let grow = 0.8 + 0.2 * fade;
    let ui_scale = state.config.ui_scale;
    let accent = desc.color;
    let screen = ctx.screen_rect();

    // Dimmed backdrop behind the card. Only senses clicks while the panel
    // is logically open.
    let backdrop_id = egui::Id::new(("panel_backdrop", desc.id.key()));
    let backdrop = egui::Area::new(backdrop_id)
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let sense = if open {
                egui::Sense::click()
            } else {
                egui::Sense::hover()
            };
            let response = ui.allocate_response(screen.size(), sense);
            ui.painter().rect_filled(
                screen,
                0.0,
                egui::Color32::from_black_alpha((fade * 204.0) as u8),
            );
            response
        });

    let frame = egui::Frame {
        fill: with_alpha(egui::Color32::from_rgb(17, 24, 39), (fade * 242.0) as u8),
        stroke: egui::Stroke::new(2.0, with_alpha(accent, (fade * 255.0) as u8)),
        rounding: egui::Rounding::same(8.0),
        inner_margin: egui::Margin::same(20.0 * grow),
        shadow: egui::epaint::Shadow {
            offset: egui::vec2(0.0, 0.0),
            blur: 20.0,
            spread: 2.0,
            color: with_alpha(accent, (fade * 64.0) as u8),
        },
        ..Default::default()
    };

    let card = egui::Window::new(desc.title)
        .id(egui::Id::new(("behavior_panel", desc.id.key())))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .interactable(open)
        .min_width(CARD_WIDTH * grow * ui_scale)
        .max_width(CARD_WIDTH * grow * ui_scale)
        .frame(frame)
        .show(ctx, |ui| {
            ui.set_opacity(fade);
            ui.label(
                egui::RichText::new(desc.title)
                    .size(scaled_font(22.0, ui_scale) * grow)
                    .strong()
                    .color(accent),
            );
            ui.add_space(10.0 * grow);

            for behavior in desc.behaviors {
                ui.horizontal(|ui| {
                    let (dot_rect, _) = ui.allocate_exact_size(
                        egui::vec2(14.0, 14.0) * grow,
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .circle_filled(dot_rect.center(), 6.0 * grow, with_alpha(accent, 70));
                    ui.painter()
                        .circle_filled(dot_rect.center(), 3.5 * grow, accent);
                    ui.label(
                        egui::RichText::new(*behavior)
                            .size(scaled_font(14.0, ui_scale) * grow)
                            .color(egui::Color32::from_gray(209)),
                    );
                });
                ui.add_space(4.0 * grow);
            }

            ui.add_space(12.0 * grow);
            let close = egui::Button::new(
                egui::RichText::new("Close")
                    .size(scaled_font(14.0, ui_scale) * grow)
                    .color(accent),
            )
            .fill(egui::Color32::TRANSPARENT)
            .stroke(egui::Stroke::new(1.0, accent));
            if ui.add(close).clicked() {
                state.close_panel();
            }
        });

    if open && backdrop.inner.clicked() {
        let card_rect = card.as_ref().map(|c| c.response.rect);
        if backdrop_click_closes(backdrop.inner.interact_pointer_pos(), card_rect) {
            state.close_panel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{RingId, Spin};

    fn card() -> egui::Rect {
        egui::Rect::from_min_max(egui::pos2(100.0, 100.0), egui::pos2(500.0, 400.0))
    }

    #[test]
    fn test_click_outside_card_closes() {
        assert!(backdrop_click_closes(Some(egui::pos2(10.0, 10.0)), Some(card())));
        assert!(backdrop_click_closes(Some(egui::pos2(600.0, 250.0)), Some(card())));
    }

    #[test]
    fn test_click_inside_card_never_closes() {
        assert!(!backdrop_click_closes(Some(egui::pos2(300.0, 250.0)), Some(card())));
        assert!(!backdrop_click_closes(Some(egui::pos2(100.0, 100.0)), Some(card())));
    }

    #[test]
    fn test_click_without_card_rect_closes() {
        assert!(backdrop_click_closes(Some(egui::pos2(300.0, 250.0)), None));
        assert!(backdrop_click_closes(None, Some(card())));
    }

    #[test]
    fn test_open_panel_tolerates_empty_behavior_list() {
        let desc = RingDescriptor {
            id: RingId::Outer,
            title: "Outer Circle Behaviors",
            label: "OUTER CIRCLE",
            color: egui::Color32::from_rgb(0x00, 0xff, 0x88),
            diameter: 600.0,
            period_secs: 30.0,
            spin: Spin::Clockwise,
            behaviors: &[],
        };
        let mut state = AppState::default();
        state.select_ring(RingId::Outer);

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            render_behavior_panel(ctx, &mut state, &desc);
        });

        // A rowless card renders; the panel stays open and nothing panics.
        assert!(state.is_panel_open(RingId::Outer));
    }

    #[test]
    fn test_closed_panel_renders_without_side_effects() {
        let mut state = AppState::default();
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            for desc in &crate::content::RINGS {
                render_behavior_panel(ctx, &mut state, desc);
            }
        });
        assert_eq!(state.active_panel(), None);
    }
}
