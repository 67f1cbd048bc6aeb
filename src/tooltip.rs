//! The shared tooltip panel — content, measurement, and placement.
//!
//! Exactly one panel exists per page; it is re-contented and re-positioned
//! for whichever element currently owns it rather than recreated. Hiding
//! only flips visibility (the original zeroed opacity and kept the markup),
//! so content survives until the next show.

use tracing::debug;

use crate::element::{Element, Rect};
use crate::timer::TimerHandle;

const PADDING_H: f32 = 12.0;
const PADDING_V: f32 = 8.0;
const LINE_HEIGHT: f32 = 16.0;
/// Approximate glyph advance used for headless text measurement.
const CHAR_WIDTH: f32 = 7.0;
const MIN_WIDTH: f32 = 40.0;

/// The single, shared tooltip panel.
#[derive(Debug, Default)]
pub struct TooltipPanel {
    /// Current content, retained across hides.
    pub content: String,
    /// Top-left position.
    pub x: f32,
    pub y: f32,
    /// Measured size. Valid whenever `content` is non-empty.
    pub width: f32,
    pub height: f32,
    /// Visibility (the opacity-0/1 analog).
    pub visible: bool,
    /// Element currently owning the panel, if any.
    pub owner: Option<u64>,
    /// Pending hide timer. At most one; cancel-then-set is the only
    /// mutation path.
    pub pending_hide: Option<TimerHandle>,
}

impl TooltipPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure content size: longest line drives width, line count drives
    /// height. Must run before placement, since the non-primary side anchors
    /// the panel's right edge.
    pub fn measure(content: &str) -> (f32, f32) {
        let mut max_chars = 0usize;
        let mut lines = 0usize;
        for line in content.lines() {
            lines += 1;
            max_chars = max_chars.max(line.chars().count());
        }
        let text_width = (max_chars as f32 * CHAR_WIDTH).max(MIN_WIDTH);
        let text_height = lines.max(1) as f32 * LINE_HEIGHT;
        (text_width + PADDING_H * 2.0, text_height + PADDING_V * 2.0)
    }

    /// Re-content and re-position the panel for `element`. Returns `true` if
    /// the panel was hidden and its visibility flip should be deferred to
    /// the next render frame; an already visible panel is updated in place
    /// with no hide/show flash. No-op (returns `false`) when the element
    /// carries no payload.
    pub fn show_for(&mut self, element: &Element, gap: f32) -> bool {
        let Some(ref info) = element.info else {
            return false;
        };

        self.content = info.clone();
        let (width, height) = Self::measure(&self.content);
        self.width = width;
        self.height = height;

        // Primary group anchors the panel's left edge to the element's right
        // edge; everything else anchors the right edge to the element's left.
        if element.primary {
            self.x = element.rect.right() + gap;
        } else {
            self.x = element.rect.x - width - gap;
        }
        self.y = element.rect.y;

        self.owner = Some(element.id);
        debug!(element = element.id, x = self.x, y = self.y, "tooltip shown");
        !self.visible
    }

    /// Hide the panel and clear its owner. Idempotent; content is retained.
    pub fn hide(&mut self) {
        if self.visible {
            debug!("tooltip hidden");
        }
        self.visible = false;
        self.owner = None;
    }

    /// The panel's on-page rect while visible, for pointer hit-testing.
    pub fn rect(&self) -> Option<Rect> {
        self.visible
            .then(|| Rect::new(self.x, self.y, self.width, self.height))
    }
}
