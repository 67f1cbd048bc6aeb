//! Image overlay — click-to-enlarge display with a dimmed backdrop.
//!
//! Phase machine: Closed → Opening → Open → Closing → Closed. The displayed
//! image is dropped only when the close transition finishes, so the fade-out
//! never pops. The Escape dismissal is an explicit arm-on-open /
//! disarm-on-close pair; each open cycle gets exactly one live Escape.

use tracing::debug;

use crate::element::ImageSource;
use crate::timer::TimerHandle;

/// Overlay lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Closed,
    /// Activated; becomes Open on the next render frame.
    Opening,
    Open,
    /// Deactivated; content clears when the transition delay elapses.
    Closing,
}

/// The image overlay and its backdrop, as one unit of state.
#[derive(Debug, Default)]
pub struct ImageOverlay {
    pub phase: OverlayPhase,
    /// The enlarged image currently displayed, if any. Survives into
    /// `Closing` until the clear timer fires.
    pub displayed: Option<ImageSource>,
    /// Whether Escape currently dismisses the overlay.
    pub escape_armed: bool,
    /// Pending content-clear timer from a close in progress.
    pub pending_clear: Option<TimerHandle>,
}

impl ImageOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay (and backdrop) is currently activated.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, OverlayPhase::Opening | OverlayPhase::Open)
    }

    /// Populate the display and activate. Re-opening while a close is in
    /// flight restarts here; the caller cancels the pending clear first.
    pub fn begin_open(&mut self, image: ImageSource) {
        debug!(src = %image.src, "overlay opening");
        self.displayed = Some(image);
        self.phase = OverlayPhase::Opening;
        self.escape_armed = true;
    }

    /// Next-frame transition into the fully open state.
    pub fn finish_open(&mut self) {
        if self.phase == OverlayPhase::Opening {
            self.phase = OverlayPhase::Open;
        }
    }

    /// Deactivate backdrop and container; content stays for the fade-out.
    pub fn begin_close(&mut self) {
        debug!("overlay closing");
        self.phase = OverlayPhase::Closing;
        self.escape_armed = false;
    }

    /// Transition-delay expiry: drop the content and settle Closed.
    pub fn finish_close(&mut self) {
        if self.phase == OverlayPhase::Closing {
            self.displayed = None;
            self.phase = OverlayPhase::Closed;
        }
    }
}
