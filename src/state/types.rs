use std::time::Instant;

use crate::content::RingId;

/// Duration of the panel fade+scale effect, in seconds. Cosmetic only:
/// logical open/closed state never waits on it.
pub const PANEL_FADE_SECS: f32 = 0.3;

/// Whether a transition is fading a panel in or out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Opening,
    Closing,
}

/// A one-shot fade running for a panel. A `Closing` transition keeps the
/// card on screen (non-interactive) while it fades; once elapsed it is
/// discarded.
#[derive(Debug, Clone, Copy)]
pub struct PanelTransition {
    pub ring: RingId,
    pub phase: PanelPhase,
    pub started: Instant,
}

impl PanelTransition {
    pub fn new(ring: RingId, phase: PanelPhase) -> Self {
        Self {
            ring,
            phase,
            started: Instant::now(),
        }
    }

    /// Fade progress in 0..=1.
    pub fn progress(&self) -> f32 {
        (self.started.elapsed().as_secs_f32() / PANEL_FADE_SECS).min(1.0)
    }

    pub fn finished(&self) -> bool {
        self.started.elapsed().as_secs_f32() >= PANEL_FADE_SECS
    }
}
