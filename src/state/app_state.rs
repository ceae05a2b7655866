use bevy::prelude::*;

use crate::content::RingId;
use super::config::AppConfig;
use super::types::{PanelPhase, PanelTransition};

/// Single source of truth for which behavior panel is visible.
///
/// `active_panel` is one optional slot, so mutual exclusion across the three
/// panels holds by construction: selecting a ring replaces whatever was
/// there. Only the two reducer methods below ever write it.
#[derive(Resource, Default)]
pub struct AppState {
    pub config: AppConfig,
    active_panel: Option<RingId>,
    /// Running fade, if any. Never consulted for logical open/closed state.
    pub panel_transition: Option<PanelTransition>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: AppConfig::load(),
            active_panel: None,
            panel_transition: None,
        }
    }

    pub fn active_panel(&self) -> Option<RingId> {
        self.active_panel
    }

    pub fn is_panel_open(&self, id: RingId) -> bool {
        self.active_panel == Some(id)
    }

    /// Opens the panel for `id`, closing any other panel implicitly.
    /// Re-selecting the already-active ring keeps its panel open.
    pub fn select_ring(&mut self, id: RingId) {
        self.active_panel = Some(id);
        self.panel_transition = Some(PanelTransition::new(id, PanelPhase::Opening));
    }

    /// Closes whichever panel is open. No-op when none is.
    pub fn close_panel(&mut self) {
        if let Some(ring) = self.active_panel.take() {
            self.panel_transition = Some(PanelTransition::new(ring, PanelPhase::Closing));
        }
    }

    /// Drops a closing fade that has run its course.
    pub fn expire_transition(&mut self) {
        if let Some(transition) = self.panel_transition {
            if transition.phase == PanelPhase::Closing && transition.finished() {
                self.panel_transition = None;
            }
        }
    }
}
