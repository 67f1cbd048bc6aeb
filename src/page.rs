//! The page engine: input dispatch and state advancement.
//!
//! `Page` owns everything the enhancement layer touches — elements, the
//! shared tooltip panel, the image overlay, the toast stack, and the timer
//! and frame queues. Pointer moves are resolved by hit-testing and diffed
//! against the previous hover target (leave fires before enter); clicks
//! route by element role; `run_frame` is the cooperative heartbeat that
//! flushes next-frame tasks and fires due timers.

use std::time::Instant;

use tracing::{debug, error};

use crate::clipboard::ClipboardWriter;
use crate::config::FxConfig;
use crate::element::{Element, ElementMarkup, ElementRegistry, ElementRole, Point};
use crate::notify::{Severity, ToastStack, ToastStage};
use crate::overlay::ImageOverlay;
use crate::timer::{FrameQueue, FrameTask, TimerQueue, TimerTask};
use crate::tooltip::TooltipPanel;
use crate::{Error, Result};

/// Toast message for a successful copy.
pub const COPIED_MESSAGE: &str = "Copied to clipboard";
/// Toast message for a failed copy.
pub const COPY_FAILED_MESSAGE: &str = "Copy failed";

/// What the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    Element(u64),
    /// The tooltip panel itself; entering it keeps the panel alive.
    Tooltip,
}

/// Keys the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
}

/// All mutable page state, owned by [`Page`].
#[derive(Debug, Default)]
pub struct PageState {
    pub elements: ElementRegistry,
    pub tooltip: TooltipPanel,
    pub overlay: ImageOverlay,
    pub toasts: ToastStack,
    pub timers: TimerQueue,
    pub frames: FrameQueue,
    /// Current hover target from the last pointer move.
    pub hovered: Option<HoverTarget>,
    /// Last pointer position.
    pub pointer: Option<Point>,
}

/// The enhancement layer over one page.
pub struct Page {
    config: FxConfig,
    state: PageState,
    clipboard: Box<dyn ClipboardWriter>,
}

impl Page {
    pub fn new(config: FxConfig, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self {
            config,
            state: PageState::default(),
            clipboard,
        }
    }

    /// Consume one markup entry into a live element. The inline info
    /// fragment is captured into the element's payload here; the markup is
    /// gone afterwards.
    pub fn attach(&mut self, markup: ElementMarkup) -> u64 {
        let element = Element::from_markup(markup);
        debug!(id = element.id, name = ?element.name, "element attached");
        self.state.elements.register(element)
    }

    /// Consume a whole page worth of markup.
    pub fn attach_all(&mut self, markups: Vec<ElementMarkup>) {
        for markup in markups {
            self.attach(markup);
        }
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Look up an element ID by its markup name.
    pub fn element_id(&self, name: &str) -> Result<u64> {
        self.state
            .elements
            .get_id_by_name(name)
            .ok_or_else(|| Error::ElementNotFound(name.to_string()))
    }

    /// Resolve the hover target under a point. The active overlay's
    /// backdrop covers the whole page, so nothing beneath it is hoverable;
    /// otherwise the visible tooltip panel sits above the elements it
    /// describes.
    fn hover_target_at(&self, p: Point) -> Option<HoverTarget> {
        if self.state.overlay.is_active() {
            return None;
        }
        if let Some(rect) = self.state.tooltip.rect() {
            if rect.contains(p) {
                return Some(HoverTarget::Tooltip);
            }
        }
        self.state.elements.hit_test(p).map(HoverTarget::Element)
    }

    /// Pointer moved: diff the hover target and fire leave-then-enter on
    /// change.
    pub fn pointer_moved(&mut self, p: Point, now: Instant) {
        self.state.pointer = Some(p);
        self.update_hover(now);
    }

    /// Re-resolve the hover target under the last pointer position and fire
    /// leave-then-enter on change. Also runs when the overlay raises or
    /// lowers its backdrop, which changes what the pointer is over without
    /// the pointer moving.
    fn update_hover(&mut self, now: Instant) {
        let new_target = self
            .state
            .pointer
            .and_then(|p| self.hover_target_at(p));
        if new_target == self.state.hovered {
            return;
        }

        let old_target = self.state.hovered;
        self.state.hovered = new_target;
        if old_target.is_some() {
            self.hover_leave(now);
        }
        match new_target {
            Some(HoverTarget::Element(id)) => self.hover_enter_element(id),
            Some(HoverTarget::Tooltip) => self.cancel_pending_hide(),
            None => {}
        }
    }

    /// Leaving an element or the panel schedules the debounced hide.
    fn hover_leave(&mut self, now: Instant) {
        self.cancel_pending_hide();
        let handle = self
            .state
            .timers
            .schedule(now + self.config.hover_hide_delay(), TimerTask::HideTooltip);
        self.state.tooltip.pending_hide = Some(handle);
    }

    /// Entering an element cancels any pending hide, then re-contents the
    /// panel when the element carries a payload. A payload-less element
    /// leaves a visible panel untouched.
    fn hover_enter_element(&mut self, id: u64) {
        self.cancel_pending_hide();
        let Some(element) = self.state.elements.get(id) else {
            return;
        };
        if self.state.tooltip.show_for(element, self.config.tooltip_gap) {
            // Visibility flips on the next frame so the fade-in registers.
            self.state.frames.push(FrameTask::ShowTooltip);
        }
    }

    fn cancel_pending_hide(&mut self) {
        if let Some(handle) = self.state.tooltip.pending_hide.take() {
            self.state.timers.cancel(handle);
        }
    }

    /// Click at a point. While the overlay is up its backdrop covers the
    /// page, so the click dismisses it and reaches nothing beneath;
    /// otherwise the hit element's role decides what happens.
    pub fn click(&mut self, p: Point, now: Instant) {
        if self.state.overlay.is_active() {
            self.close_overlay(now);
            return;
        }
        if let Some(id) = self.state.elements.hit_test(p) {
            self.activate(id, now);
        }
    }

    /// Click an element directly (bypasses hit-testing).
    pub fn click_element(&mut self, id: u64, now: Instant) {
        self.activate(id, now);
    }

    fn activate(&mut self, id: u64, now: Instant) {
        let Some(element) = self.state.elements.get(id) else {
            return;
        };
        match element.role {
            ElementRole::Image => self.open_overlay(id, now),
            ElementRole::Copy => {
                let text = element
                    .copy_payload
                    .clone()
                    .unwrap_or_else(|| self.config.default_copy_payload.clone());
                self.copy(&text, now);
            }
            ElementRole::Plain => {}
        }
    }

    /// Open the overlay for an element's image. No-op without one.
    /// Re-opening while a prior close transition is pending cancels the
    /// pending clear and restarts the open.
    pub fn open_overlay(&mut self, id: u64, now: Instant) {
        let Some(image) = self.state.elements.get(id).and_then(|e| e.image.clone()) else {
            return;
        };
        if let Some(handle) = self.state.overlay.pending_clear.take() {
            self.state.timers.cancel(handle);
        }
        self.state.overlay.begin_open(image);
        self.state.frames.push(FrameTask::OpenOverlay);
        self.update_hover(now);
    }

    /// Dismiss the overlay; content clears after the transition delay.
    pub fn close_overlay(&mut self, now: Instant) {
        if !self.state.overlay.is_active() {
            return;
        }
        self.state.overlay.begin_close();
        let handle = self.state.timers.schedule(
            now + self.config.overlay_clear_delay(),
            TimerTask::ClearOverlay,
        );
        self.state.overlay.pending_clear = Some(handle);
        self.update_hover(now);
    }

    /// Key press. Escape dismisses the overlay while armed.
    pub fn key_down(&mut self, key: Key, now: Instant) {
        match key {
            Key::Escape => {
                if self.state.overlay.escape_armed {
                    self.close_overlay(now);
                }
            }
        }
    }

    /// Copy text through the clipboard port and report the outcome with a
    /// toast. Terminal either way; nothing is retried.
    pub fn copy(&mut self, text: &str, now: Instant) {
        match self.clipboard.write(text) {
            Ok(()) => {
                debug!(%text, "copied to clipboard");
                self.notify(COPIED_MESSAGE, Severity::Success, now);
            }
            Err(err) => {
                error!(error = %err, "clipboard copy failed");
                self.notify(COPY_FAILED_MESSAGE, Severity::Error, now);
            }
        }
    }

    /// Append a toast and schedule its lifecycle: shown next frame, exiting
    /// after the display duration, removed after the exit transition.
    pub fn notify(&mut self, message: &str, severity: Severity, now: Instant) {
        let id = self.state.toasts.push(message, severity);
        self.state.frames.push(FrameTask::ShowToast(id));
        self.state
            .timers
            .schedule(now + self.config.toast_visible(), TimerTask::BeginToastExit(id));
    }

    /// One cooperative heartbeat: run next-frame tasks, then fire every due
    /// timer.
    pub fn run_frame(&mut self, now: Instant) {
        for task in self.state.frames.drain() {
            match task {
                FrameTask::ShowTooltip => {
                    // A hide that landed between show and this frame leaves
                    // the panel ownerless; don't resurrect it.
                    if self.state.tooltip.owner.is_some() {
                        self.state.tooltip.visible = true;
                    }
                }
                FrameTask::OpenOverlay => self.state.overlay.finish_open(),
                FrameTask::ShowToast(id) => self.state.toasts.set_stage(id, ToastStage::Shown),
            }
        }

        for task in self.state.timers.fire_due(now) {
            match task {
                TimerTask::HideTooltip => {
                    self.state.tooltip.pending_hide = None;
                    self.state.tooltip.hide();
                }
                TimerTask::ClearOverlay => {
                    self.state.overlay.pending_clear = None;
                    self.state.overlay.finish_close();
                }
                TimerTask::BeginToastExit(id) => {
                    self.state.toasts.set_stage(id, ToastStage::Leaving);
                    self.state
                        .timers
                        .schedule(now + self.config.toast_exit(), TimerTask::RemoveToast(id));
                }
                TimerTask::RemoveToast(id) => self.state.toasts.remove(id),
            }
        }
    }
}
