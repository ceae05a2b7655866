use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::content::{
    CONTACT_LINES, COPYRIGHT, FOOTER_COLUMNS, LEGAL_LINKS, NAV_LINKS, ORG_BLURB, ORG_NAME,
    RINGS, TAGLINE,
};
use crate::state::AppState;
use crate::ui::backdrop::BackdropField;
use crate::ui::panel::render_behavior_panel;
use crate::ui::rings::render_rings;
use crate::ui::widgets::{scaled_font, scaled_margin};

const BRAND_GREEN: egui::Color32 = egui::Color32::from_rgb(0x2b, 0x5f, 0x2f);

pub fn ui_system(
    mut contexts: EguiContexts,
    mut state: ResMut<AppState>,
    field: Res<BackdropField>,
    time: Res<Time>,
) {
    let ctx = contexts.ctx_mut();

    // Apply UI scale to global text styles
    let ui_scale = state.config.ui_scale;
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(scaled_font(20.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(scaled_font(12.0, ui_scale)),
    );
    style.wrap_mode = Some(egui::TextWrapMode::Extend);
    ctx.set_style(style);

    render_header(ctx, ui_scale);
    render_footer(ctx, ui_scale);

    // Central canvas: backdrop streaks plus the three rotating rings.
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::BLACK))
        .show(ctx, |ui| {
            render_rings(ui, &mut state, &field, time.elapsed_secs());
        });

    // Behavior panels on top; the container feeds at most one an open state.
    for desc in &RINGS {
        render_behavior_panel(ctx, &mut state, desc);
    }
    state.expire_transition();
}

fn render_header(ctx: &egui::Context, ui_scale: f32) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        let margin = scaled_margin(8.0, ui_scale);
        ui.add_space(margin);
        ui.horizontal(|ui| {
            // Brand mark: green disc with the initial.
            let diameter = scaled_margin(28.0, ui_scale);
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), diameter / 2.0, BRAND_GREEN);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "S",
                egui::FontId::proportional(scaled_font(16.0, ui_scale)),
                egui::Color32::WHITE,
            );
            ui.heading(ORG_NAME);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for (name, href) in NAV_LINKS.iter().rev() {
                    ui.hyperlink_to(*name, *href);
                }
            });
        });
        ui.add_space(margin);
    });
}

fn render_footer(ctx: &egui::Context, ui_scale: f32) {
    egui::TopBottomPanel::bottom("footer")
        .frame(
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(0x33, 0x33, 0x33))
                .inner_margin(egui::Margin::same(scaled_margin(16.0, ui_scale))),
        )
        .show(ctx, |ui| {
            let heading_color = egui::Color32::WHITE;
            let body_color = egui::Color32::from_gray(209);
            let faint_color = egui::Color32::from_gray(156);

            ui.columns(4, |columns| {
                let org = &mut columns[0];
                org.label(
                    egui::RichText::new(ORG_NAME)
                        .strong()
                        .size(scaled_font(16.0, ui_scale))
                        .color(heading_color),
                );
                org.add_space(4.0);
                org.add(egui::Label::new(
                    egui::RichText::new(ORG_BLURB).color(body_color),
                ).wrap());
                org.add_space(4.0);
                for line in CONTACT_LINES {
                    org.label(egui::RichText::new(line).color(body_color));
                }

                for (column, ui) in FOOTER_COLUMNS.iter().zip(&mut columns[1..]) {
                    ui.label(
                        egui::RichText::new(column.title)
                            .strong()
                            .size(scaled_font(15.0, ui_scale))
                            .color(heading_color),
                    );
                    ui.add_space(4.0);
                    for (name, href) in column.links {
                        ui.hyperlink_to(*name, *href);
                    }
                }
            });

            ui.add_space(scaled_margin(8.0, ui_scale));
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(COPYRIGHT).color(faint_color));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for (name, href) in LEGAL_LINKS.iter().rev() {
                        ui.hyperlink_to(egui::RichText::new(*name).color(faint_color), *href);
                    }
                });
            });
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(TAGLINE)
                        .size(scaled_font(12.0, ui_scale))
                        .color(faint_color),
                );
            });
        });
}
