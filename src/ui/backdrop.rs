use bevy::prelude::*;
use bevy_egui::egui;
use rand::Rng;

/// Fixed number of vertical light streaks in the background wash.
pub const STREAK_COUNT: usize = 50;

/// One vertical light streak. All fields are fractions of the viewport
/// except the pulse timing, which is in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Streak {
    pub x: f32,
    pub top: f32,
    pub len: f32,
    pub delay: f32,
    pub period: f32,
}

/// The randomized streak scattering. Generated once at startup and never
/// re-rolled per frame; a fixed seed reproduces the same field.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct BackdropField {
    pub streaks: Vec<Streak>,
}

impl BackdropField {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let streaks = (0..STREAK_COUNT)
            .map(|_| Streak {
                x: rng.gen_range(0.0..1.0),
                top: rng.gen_range(0.0..1.0),
                len: rng.gen_range(0.2..0.8),
                delay: rng.gen_range(0.0..3.0),
                period: rng.gen_range(2.0..5.0),
            })
            .collect();
        Self { streaks }
    }
}

/// Pulse brightness in 0..=1 for a streak at time `t` seconds.
pub fn pulse(streak: &Streak, t: f32) -> f32 {
    let phase = (t - streak.delay) / streak.period * std::f32::consts::TAU;
    0.5 * (1.0 - phase.cos())
}

pub fn paint_backdrop(painter: &egui::Painter, rect: egui::Rect, field: &BackdropField, t: f32) {
    // Corner wash: green toward the top-left, orange toward the bottom-right.
    painter.rect_filled(
        egui::Rect::from_min_max(rect.min, rect.center() + rect.size() * 0.15),
        0.0,
        egui::Color32::from_rgba_unmultiplied(10, 50, 25, 14),
    );
    painter.rect_filled(
        egui::Rect::from_min_max(rect.center() - rect.size() * 0.15, rect.max),
        0.0,
        egui::Color32::from_rgba_unmultiplied(60, 30, 5, 14),
    );

    for streak in &field.streaks {
        let brightness = pulse(streak, t);
        if brightness <= 0.0 {
            continue;
        }
        let alpha = (brightness * 100.0) as u8;
        let x = rect.min.x + streak.x * rect.width();
        let y0 = rect.min.y + streak.top * rect.height();
        let y1 = (y0 + streak.len * rect.height()).min(rect.max.y);
        if y1 <= y0 {
            continue;
        }
        let color = egui::Color32::from_rgba_unmultiplied(74, 222, 128, alpha);
        // Faint full run with a brighter middle, standing in for the
        // transparent-green-transparent gradient.
        painter.line_segment(
            [egui::pos2(x, y0), egui::pos2(x, y1)],
            egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(74, 222, 128, alpha / 3)),
        );
        let quarter = (y1 - y0) * 0.25;
        painter.line_segment(
            [egui::pos2(x, y0 + quarter), egui::pos2(x, y1 - quarter)],
            egui::Stroke::new(1.0, color),
        );
    }
}
