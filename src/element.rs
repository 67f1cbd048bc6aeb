//! Interactive element model.
//!
//! Elements are the pre-rendered buttons the enhancement layer attaches to.
//! They arrive as [`ElementMarkup`] (what the page markup carries) and are
//! consumed into [`Element`]s at init: the inline info fragment is captured
//! into the element's stored payload and the markup is discarded.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique element ID.
pub fn next_element_id() -> u64 {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Source and alt text of an element's image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub src: String,
    pub alt: String,
}

/// What a click on the element does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementRole {
    /// Hover-only element; clicks do nothing.
    #[default]
    Plain,
    /// Click opens the image overlay.
    Image,
    /// Click copies a payload to the clipboard.
    Copy,
}

/// Raw markup for one pre-rendered button. Consumed by `Page` at init.
#[derive(Debug, Clone, Default)]
pub struct ElementMarkup {
    /// Optional global name (used to look elements up by name).
    pub name: Option<String>,
    /// On-page geometry, used for pointer hit-testing.
    pub rect: Rect,
    /// Inline info fragment. Captured into the element's payload and removed.
    pub info: Option<String>,
    /// Membership in the primary group (tooltip anchors to the right edge).
    pub primary: bool,
    /// Associated image, if any.
    pub image: Option<ImageSource>,
    /// Click behavior.
    pub role: ElementRole,
    /// Explicit copy payload for `Copy` elements; falls back to the
    /// configured default when absent.
    pub copy_payload: Option<String>,
}

/// An interactive element, alive for the life of the page.
#[derive(Debug)]
pub struct Element {
    /// Unique element ID.
    pub id: u64,
    /// Global name (optional).
    pub name: Option<String>,
    /// On-page geometry.
    pub rect: Rect,
    /// Info payload captured once from markup. Empty fragments are dropped,
    /// so `Some` always holds non-empty text.
    pub info: Option<String>,
    /// Primary-group membership flag.
    pub primary: bool,
    /// Associated image, if any.
    pub image: Option<ImageSource>,
    /// Click behavior.
    pub role: ElementRole,
    /// Explicit copy payload, if any.
    pub copy_payload: Option<String>,
}

impl Element {
    /// Consume markup into an element, capturing the info fragment.
    pub fn from_markup(markup: ElementMarkup) -> Self {
        Self {
            id: next_element_id(),
            name: markup.name,
            rect: markup.rect,
            info: markup.info.filter(|s| !s.is_empty()),
            primary: markup.primary,
            image: markup.image,
            role: markup.role,
            copy_payload: markup.copy_payload,
        }
    }
}

/// Registry of all elements on the page.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    /// Elements by ID.
    elements: HashMap<u64, Element>,
    /// Element IDs by name.
    names: HashMap<String, u64>,
    /// Registration order, later entries hit-test on top.
    order: Vec<u64>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new element.
    pub fn register(&mut self, element: Element) -> u64 {
        let id = element.id;
        if let Some(ref name) = element.name {
            self.names.insert(name.clone(), id);
        }
        self.order.push(id);
        self.elements.insert(id, element);
        id
    }

    /// Get an element by ID.
    pub fn get(&self, id: u64) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Get an element ID by name.
    pub fn get_id_by_name(&self, name: &str) -> Option<u64> {
        self.names.get(name).copied()
    }

    /// Topmost element containing the point, if any.
    pub fn hit_test(&self, p: Point) -> Option<u64> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|id| self.elements.get(id).is_some_and(|e| e.rect.contains(p)))
    }
}
