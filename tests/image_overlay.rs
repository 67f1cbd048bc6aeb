//! Tests for the image overlay lifecycle: open/close phases, deferred
//! content clearing, Escape arming, and dismissal-path equivalence.

use std::time::{Duration, Instant};

use page_fx::clipboard::MemoryClipboard;
use page_fx::element::{ElementMarkup, ElementRole, ImageSource, Point, Rect};
use page_fx::overlay::OverlayPhase;
use page_fx::page::Key;
use page_fx::{FxConfig, Page};

fn page_with_image_button() -> (Page, u64) {
    let mut page = Page::new(FxConfig::default(), Box::new(MemoryClipboard::new()));
    let id = page.attach(ElementMarkup {
        name: Some("portrait".into()),
        rect: Rect::new(100.0, 100.0, 120.0, 40.0),
        image: Some(ImageSource {
            src: "portrait.png".into(),
            alt: "Portrait".into(),
        }),
        role: ElementRole::Image,
        ..Default::default()
    });
    (page, id)
}

#[test]
fn test_open_without_image_is_noop() {
    let mut page = Page::new(FxConfig::default(), Box::new(MemoryClipboard::new()));
    let id = page.attach(ElementMarkup {
        rect: Rect::new(100.0, 100.0, 120.0, 40.0),
        role: ElementRole::Image,
        ..Default::default()
    });

    let now = Instant::now();
    page.click_element(id, now);
    page.run_frame(now + Duration::from_millis(16));

    let overlay = &page.state().overlay;
    assert_eq!(overlay.phase, OverlayPhase::Closed);
    assert!(overlay.displayed.is_none());
    assert!(!overlay.escape_armed);
}

#[test]
fn test_open_populates_display_and_arms_escape() {
    let (mut page, id) = page_with_image_button();
    let now = Instant::now();

    page.click_element(id, now);
    {
        let overlay = &page.state().overlay;
        assert_eq!(overlay.phase, OverlayPhase::Opening);
        assert!(overlay.escape_armed);
    }

    page.run_frame(now + Duration::from_millis(16));
    let overlay = &page.state().overlay;
    assert_eq!(overlay.phase, OverlayPhase::Open);
    let displayed = overlay.displayed.as_ref().expect("image displayed");
    assert_eq!(displayed.src, "portrait.png");
    assert_eq!(displayed.alt, "Portrait");
}

#[test]
fn test_content_clears_only_after_transition_delay() {
    let (mut page, id) = page_with_image_button();
    let mut now = Instant::now();

    page.click_element(id, now);
    page.run_frame(now + Duration::from_millis(16));

    now += Duration::from_millis(16);
    page.key_down(Key::Escape, now);
    {
        let overlay = &page.state().overlay;
        assert_eq!(overlay.phase, OverlayPhase::Closing);
        assert!(overlay.displayed.is_some(), "content survives the fade-out");
    }

    // Before the 300ms delay: still closing, still populated.
    page.run_frame(now + Duration::from_millis(200));
    assert!(page.state().overlay.displayed.is_some());

    // Past the delay: cleared and settled.
    page.run_frame(now + Duration::from_millis(350));
    let overlay = &page.state().overlay;
    assert_eq!(overlay.phase, OverlayPhase::Closed);
    assert!(overlay.displayed.is_none());
}

#[test]
fn test_backdrop_click_and_escape_are_equivalent() {
    let close = |by_key: bool| {
        let (mut page, id) = page_with_image_button();
        let mut now = Instant::now();
        page.click_element(id, now);
        page.run_frame(now + Duration::from_millis(16));

        now += Duration::from_millis(16);
        if by_key {
            page.key_down(Key::Escape, now);
        } else {
            // Anywhere on the page: the backdrop covers it all.
            page.click(Point::new(400.0, 400.0), now);
        }
        page.run_frame(now + Duration::from_millis(350));

        let overlay = &page.state().overlay;
        (overlay.phase, overlay.displayed.clone(), overlay.escape_armed)
    };

    assert_eq!(close(true), close(false));
    assert_eq!(close(true), (OverlayPhase::Closed, None, false));
}

#[test]
fn test_escape_is_dead_after_close_and_rearmed_per_open() {
    let (mut page, id) = page_with_image_button();
    let mut now = Instant::now();

    // Escape with nothing open: no-op.
    page.key_down(Key::Escape, now);
    assert_eq!(page.state().overlay.phase, OverlayPhase::Closed);

    page.click_element(id, now);
    page.run_frame(now + Duration::from_millis(16));

    now += Duration::from_millis(16);
    page.key_down(Key::Escape, now);
    assert_eq!(page.state().overlay.phase, OverlayPhase::Closing);

    // A second Escape while closing must not disturb the transition.
    page.key_down(Key::Escape, now);
    assert_eq!(page.state().overlay.phase, OverlayPhase::Closing);
    page.run_frame(now + Duration::from_millis(350));

    // Re-opening arms a fresh Escape.
    now += Duration::from_millis(400);
    page.click_element(id, now);
    assert!(page.state().overlay.escape_armed);
    page.run_frame(now + Duration::from_millis(16));
    page.key_down(Key::Escape, now + Duration::from_millis(32));
    assert_eq!(page.state().overlay.phase, OverlayPhase::Closing);
}

#[test]
fn test_reopen_while_closing_cancels_pending_clear() {
    let (mut page, id) = page_with_image_button();
    let mut now = Instant::now();

    page.click_element(id, now);
    page.run_frame(now + Duration::from_millis(16));

    now += Duration::from_millis(16);
    page.key_down(Key::Escape, now);

    // Re-open 100ms into the 300ms close transition.
    now += Duration::from_millis(100);
    page.click_element(id, now);
    page.run_frame(now + Duration::from_millis(16));

    // Run past the original clear deadline; the stale clear was cancelled.
    page.run_frame(now + Duration::from_millis(500));
    let overlay = &page.state().overlay;
    assert_eq!(overlay.phase, OverlayPhase::Open);
    assert!(overlay.displayed.is_some(), "re-opened content must not be wiped");
}

fn page_with_image_and_info_buttons() -> (Page, u64, u64) {
    let (mut page, image_id) = page_with_image_button();
    let info_id = page.attach(ElementMarkup {
        name: Some("contact".into()),
        rect: Rect::new(300.0, 100.0, 80.0, 40.0),
        info: Some("Contact: 555-0100".into()),
        ..Default::default()
    });
    (page, image_id, info_id)
}

#[test]
fn test_backdrop_suppresses_hover_beneath() {
    let (mut page, image_id, _) = page_with_image_and_info_buttons();
    let now = Instant::now();

    page.click_element(image_id, now);
    page.run_frame(now + Duration::from_millis(16));
    assert_eq!(page.state().overlay.phase, OverlayPhase::Open);

    // The pointer drifts over the info button, but the backdrop is in the
    // way: no tooltip may appear.
    page.pointer_moved(Point::new(340.0, 120.0), now + Duration::from_millis(32));
    page.run_frame(now + Duration::from_millis(48));

    assert!(!page.state().tooltip.visible, "backdrop blocks hover beneath");
    assert_eq!(page.state().overlay.phase, OverlayPhase::Open);
}

#[test]
fn test_open_hides_tooltip_under_backdrop() {
    let (mut page, image_id, _) = page_with_image_and_info_buttons();
    let mut now = Instant::now();

    page.pointer_moved(Point::new(340.0, 120.0), now);
    page.run_frame(now + Duration::from_millis(16));
    assert!(page.state().tooltip.visible);

    // Opening the modal ends the hover; the panel fades on the usual delay.
    now += Duration::from_millis(32);
    page.click_element(image_id, now);
    page.run_frame(now + Duration::from_millis(16));
    assert!(page.state().tooltip.visible, "hide is debounced, not instant");

    page.run_frame(now + Duration::from_millis(150));
    assert!(!page.state().tooltip.visible);
    assert_eq!(page.state().overlay.phase, OverlayPhase::Open);
}

#[test]
fn test_hover_resumes_when_backdrop_lifts() {
    let (mut page, image_id, _) = page_with_image_and_info_buttons();
    let mut now = Instant::now();

    page.click_element(image_id, now);
    page.run_frame(now + Duration::from_millis(16));

    // Parked over the info button while the modal is up: nothing happens.
    now += Duration::from_millis(32);
    page.pointer_moved(Point::new(340.0, 120.0), now);
    page.run_frame(now + Duration::from_millis(16));
    assert!(!page.state().tooltip.visible);

    // Dismissing the overlay puts the button back under the pointer.
    now += Duration::from_millis(32);
    page.key_down(Key::Escape, now);
    page.run_frame(now + Duration::from_millis(16));

    let tooltip = &page.state().tooltip;
    assert!(tooltip.visible, "hover resumes once the backdrop lifts");
    assert_eq!(tooltip.content, "Contact: 555-0100");
}

#[test]
fn test_modal_click_does_not_reach_elements_beneath() {
    let (mut page, id) = page_with_image_button();
    let now = Instant::now();

    page.click_element(id, now);
    page.run_frame(now + Duration::from_millis(16));

    // Click right on the image button's own rect: the backdrop swallows it,
    // closing the overlay instead of re-opening.
    page.click(Point::new(110.0, 110.0), now + Duration::from_millis(32));
    assert_eq!(page.state().overlay.phase, OverlayPhase::Closing);
}
