use bevy_egui::egui;

use crate::ui::widgets::with_alpha;

/// Number of radial tick-and-dot spokes, one every 45 degrees.
pub const SPOKE_COUNT: usize = 8;

/// Tile pitch of the diamond/dot pattern, in layout units.
pub const TILE_STEP: f32 = 40.0;

/// One radial tick mark: a line from `inner` to `outer` with a dot at the
/// inner end. Offsets are from the ornament center, unrotated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spoke {
    pub inner: egui::Vec2,
    pub outer: egui::Vec2,
}

/// Geometry for one ring ornament, built purely from its size.
///
/// Building is deterministic: the same size always yields the same geometry.
/// There are no shared effect definitions between instances; every painted
/// ornament carries its own shapes, so two ornaments can never cross-wire
/// the way id-keyed SVG filters can.
#[derive(Debug, Clone, PartialEq)]
pub struct OrnamentGeometry {
    pub size: f32,
    /// Glowing main ring.
    pub main_radius: f32,
    /// Fainter secondary ring just inside the main one.
    pub inner_radius: f32,
    pub spokes: Vec<Spoke>,
    /// Centers of diamond tiles, masked to the annulus between
    /// `mask_inner` and `mask_outer`.
    pub tiles: Vec<egui::Vec2>,
    pub mask_inner: f32,
    pub mask_outer: f32,
}

/// Radii follow the 600-unit reference artwork's fixed insets and clamp at
/// zero so tiny sizes degrade to empty rings instead of negative geometry.
pub fn build_ornament(size: f32) -> OrnamentGeometry {
    let half = size / 2.0;
    let main_radius = (half - 20.0).max(0.0);
    let inner_radius = (half - 40.0).max(0.0);
    let spoke_inner = (half - 60.0).max(0.0);
    let spoke_outer = (half - 30.0).max(0.0);
    let mask_inner = (half - 80.0).max(0.0);
    let mask_outer = main_radius;

    let spokes = (0..SPOKE_COUNT)
        .map(|i| {
            let angle = (i as f32) * 45f32.to_radians();
            let dir = egui::vec2(angle.cos(), angle.sin());
            Spoke {
                inner: dir * spoke_inner,
                outer: dir * spoke_outer,
            }
        })
        .collect();

    // Square grid of tile centers, kept only where the center falls inside
    // the annulus.
    let mut tiles = Vec::new();
    if mask_outer > 0.0 {
        let mut y = -half + TILE_STEP / 2.0;
        while y <= half {
            let mut x = -half + TILE_STEP / 2.0;
            while x <= half {
                let offset = egui::vec2(x, y);
                let dist = offset.length();
                if dist >= mask_inner && dist <= mask_outer {
                    tiles.push(offset);
                }
                x += TILE_STEP;
            }
            y += TILE_STEP;
        }
    }

    OrnamentGeometry {
        size,
        main_radius,
        inner_radius,
        spokes,
        tiles,
        mask_inner,
        mask_outer,
    }
}

fn rotate(v: egui::Vec2, angle: f32) -> egui::Vec2 {
    let (sin, cos) = angle.sin_cos();
    egui::vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Cheap stand-in for a gaussian glow: widening strokes at falling alpha.
fn glow_circle(painter: &egui::Painter, center: egui::Pos2, radius: f32, color: egui::Color32) {
    painter.circle_stroke(center, radius, egui::Stroke::new(7.0, with_alpha(color, 28)));
    painter.circle_stroke(center, radius, egui::Stroke::new(4.0, with_alpha(color, 70)));
    painter.circle_stroke(center, radius, egui::Stroke::new(2.0, with_alpha(color, 204)));
}

/// Paints an ornament at `center`, rotated by `angle` radians. The two ring
/// circles are rotation-invariant; spokes and tiles carry the rotation.
pub fn paint_ornament(
    painter: &egui::Painter,
    center: egui::Pos2,
    angle: f32,
    color: egui::Color32,
    geometry: &OrnamentGeometry,
) {
    if geometry.main_radius > 0.0 {
        glow_circle(painter, center, geometry.main_radius, color);
    }
    if geometry.inner_radius > 0.0 {
        painter.circle_stroke(
            center,
            geometry.inner_radius,
            egui::Stroke::new(1.0, with_alpha(color, 153)),
        );
    }

    for spoke in &geometry.spokes {
        let a = center + rotate(spoke.inner, angle);
        let b = center + rotate(spoke.outer, angle);
        painter.line_segment([a, b], egui::Stroke::new(3.5, with_alpha(color, 45)));
        painter.line_segment([a, b], egui::Stroke::new(1.5, with_alpha(color, 178)));
        painter.circle_filled(a, 2.0, with_alpha(color, 178));
    }

    // Diamond/dot tiles, pattern opacity 0.3 on top of per-element opacity.
    let diamond_stroke = egui::Stroke::new(1.0, with_alpha(color, 46));
    let dot_color = with_alpha(color, 31);
    let reach = TILE_STEP * 15.0 / 40.0;
    for tile in &geometry.tiles {
        let c = center + rotate(*tile, angle);
        let points = vec![
            c + rotate(egui::vec2(0.0, -reach), angle),
            c + rotate(egui::vec2(reach, 0.0), angle),
            c + rotate(egui::vec2(0.0, reach), angle),
            c + rotate(egui::vec2(-reach, 0.0), angle),
        ];
        painter.add(egui::Shape::closed_line(points, diamond_stroke));
        painter.circle_filled(c, 3.0, dot_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs_identical_geometry() {
        assert_eq!(build_ornament(600.0), build_ornament(600.0));
        assert_eq!(build_ornament(300.0), build_ornament(300.0));
    }

    #[test]
    fn test_reference_radii() {
        let geometry = build_ornament(600.0);
        assert_eq!(geometry.main_radius, 280.0);
        assert_eq!(geometry.inner_radius, 260.0);
        assert_eq!(geometry.mask_inner, 220.0);
        assert_eq!(geometry.mask_outer, 280.0);
    }

    #[test]
    fn test_eight_spokes_at_45_degree_intervals() {
        let geometry = build_ornament(600.0);
        assert_eq!(geometry.spokes.len(), SPOKE_COUNT);
        for (i, spoke) in geometry.spokes.iter().enumerate() {
            let expected = (i as f32) * 45f32.to_radians();
            let actual = spoke.outer.y.atan2(spoke.outer.x);
            let diff = (actual - expected).rem_euclid(std::f32::consts::TAU);
            assert!(diff < 1e-4 || diff > std::f32::consts::TAU - 1e-4);
        }
    }

    #[test]
    fn test_tiles_respect_annulus_mask() {
        let geometry = build_ornament(600.0);
        assert!(!geometry.tiles.is_empty());
        for tile in &geometry.tiles {
            let dist = tile.length();
            assert!(dist >= geometry.mask_inner - 1e-4);
            assert!(dist <= geometry.mask_outer + 1e-4);
        }
    }

    #[test]
    fn test_tiny_size_clamps_to_zero() {
        let geometry = build_ornament(30.0);
        assert_eq!(geometry.main_radius, 0.0);
        assert_eq!(geometry.inner_radius, 0.0);
        assert!(geometry.tiles.is_empty());
        for spoke in &geometry.spokes {
            assert_eq!(spoke.inner.length(), 0.0);
            assert_eq!(spoke.outer.length(), 0.0);
        }
    }

    #[test]
    fn test_different_sizes_differ() {
        assert_ne!(build_ornament(600.0), build_ornament(450.0));
    }
}
