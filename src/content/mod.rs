use bevy_egui::egui;

/// Identifies one of the three concentric rings.
///
/// The enum is closed: there is no way to address a fourth panel, so the
/// "at most one panel open" slot in `AppState` can never be fed an unknown
/// ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingId {
    Outer,
    Middle,
    Inner,
}

impl RingId {
    pub const ALL: [RingId; 3] = [RingId::Outer, RingId::Middle, RingId::Inner];

    /// Stable lowercase name, used for egui id salts.
    pub fn key(&self) -> &'static str {
        match self {
            RingId::Outer => "outer",
            RingId::Middle => "middle",
            RingId::Inner => "inner",
        }
    }
}

/// Rotation direction of a ring. Screen coordinates put +y downward, so a
/// positive angle reads as clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    pub fn sign(&self) -> f32 {
        match self {
            Spin::Clockwise => 1.0,
            Spin::CounterClockwise => -1.0,
        }
    }
}

/// Static configuration for one ring: visuals, rotation, and the behavior
/// labels its panel lists. These never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingDescriptor {
    pub id: RingId,
    pub title: &'static str,
    pub label: &'static str,
    pub color: egui::Color32,
    /// Diameter in layout units at the reference 600-unit board size.
    pub diameter: f32,
    /// Seconds per full revolution.
    pub period_secs: f32,
    pub spin: Spin,
    pub behaviors: &'static [&'static str],
}

pub const RINGS: [RingDescriptor; 3] = [
    RingDescriptor {
        id: RingId::Outer,
        title: "Outer Circle Behaviors",
        label: "OUTER CIRCLE",
        color: egui::Color32::from_rgb(0x00, 0xff, 0x88),
        diameter: 600.0,
        period_secs: 30.0,
        spin: Spin::Clockwise,
        behaviors: &[
            "Perimeter Defense Protocols",
            "External Threat Detection",
            "Communication Array Management",
            "Environmental Scanning",
            "Resource Allocation Control",
        ],
    },
    RingDescriptor {
        id: RingId::Middle,
        title: "Middle Circle Behaviors",
        label: "MIDDLE CIRCLE",
        color: egui::Color32::from_rgb(0xff, 0xaa, 0x00),
        diameter: 450.0,
        period_secs: 20.0,
        spin: Spin::CounterClockwise,
        behaviors: &[
            "Data Processing Hub",
            "Neural Network Coordination",
            "Memory Buffer Management",
            "Pattern Recognition Systems",
            "Adaptive Learning Protocols",
        ],
    },
    RingDescriptor {
        id: RingId::Inner,
        title: "Inner Circle Behaviors",
        label: "INNER\nCIRCLE",
        color: egui::Color32::from_rgb(0xff, 0x44, 0x00),
        diameter: 300.0,
        period_secs: 10.0,
        spin: Spin::Clockwise,
        behaviors: &[
            "Core System Management",
            "Critical Decision Making",
            "Emergency Response Protocols",
            "Primary Objective Execution",
            "System Integrity Monitoring",
        ],
    },
];

pub fn ring(id: RingId) -> &'static RingDescriptor {
    match id {
        RingId::Outer => &RINGS[0],
        RingId::Middle => &RINGS[1],
        RingId::Inner => &RINGS[2],
    }
}

/// A titled column of anchor links in the footer.
pub struct LinkColumn {
    pub title: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const ORG_NAME: &str = "SAA Recovery";

pub const ORG_BLURB: &str = "A fellowship of recovery supporting individuals \
on their journey towards sexual sobriety and healthy living.";

pub const CONTACT_LINES: [&str; 3] = [
    "(555) 123-4567",
    "info@saa-recovery.org",
    "National Office",
];

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("About SAA", "#about"),
    ("Find Meetings", "#meetings"),
    ("Literature", "#literature"),
    ("Newcomers", "#newcomers"),
    ("Contact", "#contact"),
];

pub const FOOTER_COLUMNS: [LinkColumn; 3] = [
    LinkColumn {
        title: "Quick Links",
        links: &[
            ("About SAA", "#about"),
            ("Find Meetings", "#meetings"),
            ("Literature", "#literature"),
            ("Newcomers", "#newcomers"),
            ("Sponsorship", "#sponsorship"),
        ],
    },
    LinkColumn {
        title: "Resources",
        links: &[
            ("The Twelve Steps", "#steps"),
            ("The Twelve Traditions", "#traditions"),
            ("Recovery Tools", "#tools"),
            ("Meeting Formats", "#formats"),
            ("Service Opportunities", "#service"),
        ],
    },
    LinkColumn {
        title: "Support",
        links: &[
            ("Contact Us", "#contact"),
            ("FAQ", "#faq"),
            ("Privacy Policy", "#privacy"),
            ("Accessibility", "#accessibility"),
            ("Site Map", "#sitemap"),
        ],
    },
];

pub const COPYRIGHT: &str = "© 2025 Sex Addicts Anonymous. All rights reserved.";

pub const TAGLINE: &str = "SAA is a spiritual program based on the principles \
and traditions of Alcoholics Anonymous. The only requirement for membership \
is a desire to stop addictive sexual behavior.";

pub const LEGAL_LINKS: [(&str, &str); 2] = [
    ("Privacy Policy", "#privacy"),
    ("Terms of Service", "#terms"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_lookup_matches_id() {
        for id in RingId::ALL {
            assert_eq!(ring(id).id, id);
        }
    }

    #[test]
    fn test_rings_have_behaviors() {
        for desc in &RINGS {
            assert!(!desc.behaviors.is_empty());
            assert!(!desc.title.is_empty());
            assert!(desc.period_secs > 0.0);
            assert!(desc.diameter > 0.0);
        }
    }

    #[test]
    fn test_ring_colors_are_distinct() {
        assert_ne!(RINGS[0].color, RINGS[1].color);
        assert_ne!(RINGS[1].color, RINGS[2].color);
        assert_ne!(RINGS[0].color, RINGS[2].color);
    }

    #[test]
    fn test_rotation_configuration() {
        assert_eq!(ring(RingId::Outer).period_secs, 30.0);
        assert_eq!(ring(RingId::Outer).spin, Spin::Clockwise);
        assert_eq!(ring(RingId::Middle).period_secs, 20.0);
        assert_eq!(ring(RingId::Middle).spin, Spin::CounterClockwise);
        assert_eq!(ring(RingId::Inner).period_secs, 10.0);
        assert_eq!(ring(RingId::Inner).spin, Spin::Clockwise);
    }

    #[test]
    fn test_behavior_labels_in_order() {
        assert_eq!(ring(RingId::Outer).behaviors[0], "Perimeter Defense Protocols");
        assert_eq!(ring(RingId::Middle).behaviors[0], "Data Processing Hub");
        assert_eq!(ring(RingId::Inner).behaviors[0], "Core System Management");
        assert_eq!(ring(RingId::Outer).behaviors.len(), 5);
        assert_eq!(ring(RingId::Middle).behaviors.len(), 5);
        assert_eq!(ring(RingId::Inner).behaviors.len(), 5);
    }

    #[test]
    fn test_footer_columns_have_five_links() {
        for column in &FOOTER_COLUMNS {
            assert_eq!(column.links.len(), 5);
            for (name, href) in column.links {
                assert!(!name.is_empty());
                assert!(href.starts_with('#'));
            }
        }
    }
}
