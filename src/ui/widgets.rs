use bevy_egui::egui;

/// Get a scaled font size with minimum of 12
pub fn scaled_font(base_size: f32, scale: f32) -> f32 {
    (base_size.max(12.0) * scale).max(12.0)
}

/// Get a scaled margin/spacing value
pub fn scaled_margin(base_size: f32, scale: f32) -> f32 {
    base_size * scale
}

/// Same color with a different alpha.
pub fn with_alpha(color: egui::Color32, alpha: u8) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_font_floor() {
        assert_eq!(scaled_font(8.0, 0.5), 12.0);
        assert_eq!(scaled_font(14.0, 1.0), 14.0);
        assert_eq!(scaled_font(14.0, 2.0), 28.0);
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let green = egui::Color32::from_rgb(0x00, 0xff, 0x88);
        let faded = with_alpha(green, 40);
        assert_eq!(faded.r(), 0x00);
        assert_eq!(faded.g(), 0xff);
        assert_eq!(faded.b(), 0x88);
        assert_eq!(faded.a(), 40);
    }
}
