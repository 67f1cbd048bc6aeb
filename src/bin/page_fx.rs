//! page-fx demo driver.
//!
//! Builds a sample page (two info buttons, an image button, a copy button)
//! and replays a scripted interaction session against it, printing each
//! state transition. Uses the real system clipboard when one is available,
//! falling back to the in-memory double on headless systems.
//!
//! Usage:
//!   page-fx                          # run the demo session
//!   page-fx --config-json '{"hover_hide_delay_ms":250}'
//!   page-fx --fail-clipboard         # demonstrate the copy failure path

use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use page_fx::clipboard::{ClipboardWriter, MemoryClipboard, SystemClipboard};
use page_fx::element::{ElementMarkup, ElementRole, ImageSource, Point, Rect};
use page_fx::page::Key;
use page_fx::{FxConfig, Page, Result};

#[derive(Parser)]
#[command(name = "page-fx")]
#[command(about = "Headless page-enhancement demo session")]
struct Cli {
    /// Config overrides as a JSON object (missing fields take defaults)
    #[arg(long)]
    config_json: Option<String>,

    /// Force the in-memory clipboard into failure mode
    #[arg(long)]
    fail_clipboard: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = match cli.config_json {
        Some(ref json) => FxConfig::from_json(json)?,
        None => FxConfig::default(),
    };

    let clipboard: Box<dyn ClipboardWriter> = if cli.fail_clipboard {
        Box::new(MemoryClipboard::failing())
    } else {
        match SystemClipboard::new() {
            Ok(clipboard) => Box::new(clipboard),
            Err(err) => {
                eprintln!("system clipboard unavailable ({err}), using in-memory fallback");
                Box::new(MemoryClipboard::new())
            }
        }
    };

    let mut page = Page::new(config, clipboard);
    page.attach_all(sample_page());

    run_session(&mut page)
}

/// The sample page layout: primary-group service buttons on the left edge,
/// secondary buttons on the right, matching the original services page.
fn sample_page() -> Vec<ElementMarkup> {
    vec![
        ElementMarkup {
            name: Some("contact".into()),
            rect: Rect::new(40.0, 120.0, 160.0, 48.0),
            info: Some("Contact: 555-0100".into()),
            primary: true,
            ..Default::default()
        },
        ElementMarkup {
            name: Some("hours".into()),
            rect: Rect::new(40.0, 180.0, 160.0, 48.0),
            info: Some("Open 9:00-18:00\nClosed Sundays".into()),
            primary: true,
            ..Default::default()
        },
        ElementMarkup {
            name: Some("portrait".into()),
            rect: Rect::new(620.0, 120.0, 160.0, 48.0),
            info: Some("Click to enlarge".into()),
            image: Some(ImageSource {
                src: "portrait.png".into(),
                alt: "Portrait".into(),
            }),
            role: ElementRole::Image,
            ..Default::default()
        },
        ElementMarkup {
            name: Some("copyButton".into()),
            rect: Rect::new(620.0, 180.0, 160.0, 48.0),
            info: Some("Copy the account number".into()),
            role: ElementRole::Copy,
            ..Default::default()
        },
    ]
}

/// Replay a fixed interaction script, advancing a synthetic clock.
fn run_session(page: &mut Page) -> Result<()> {
    let start = Instant::now();
    let mut now = start;

    // Hover the primary contact button; tooltip appears to its right.
    page.pointer_moved(Point::new(100.0, 140.0), now);
    step(page, &mut now, start, 16, "hover contact");

    // Drift onto the hours button; the shared panel re-contents in place.
    page.pointer_moved(Point::new(100.0, 200.0), now);
    step(page, &mut now, start, 16, "hover hours");

    // Leave and wait out the debounce; the tooltip hides.
    page.pointer_moved(Point::new(400.0, 400.0), now);
    step(page, &mut now, start, 150, "leave and debounce");

    // Open the portrait overlay, then dismiss it with Escape.
    let portrait = page.element_id("portrait")?;
    page.click_element(portrait, now);
    step(page, &mut now, start, 16, "open overlay");
    page.key_down(Key::Escape, now);
    step(page, &mut now, start, 350, "escape and clear");

    // Copy with the default payload and let the toast run its life.
    let copy = page.element_id("copyButton")?;
    page.click_element(copy, now);
    step(page, &mut now, start, 16, "copy");
    step(page, &mut now, start, 2100, "toast exiting");
    step(page, &mut now, start, 400, "toast removed");

    Ok(())
}

/// Advance the clock by `ms`, run one frame, and report the state.
fn step(page: &mut Page, now: &mut Instant, start: Instant, ms: u64, label: &str) {
    *now += Duration::from_millis(ms);
    page.run_frame(*now);
    report(page, start, *now, label);
}

fn report(page: &Page, start: Instant, now: Instant, label: &str) {
    let state = page.state();
    let tooltip = if state.tooltip.visible {
        format!(
            "visible at ({:.0},{:.0}): {:?}",
            state.tooltip.x, state.tooltip.y, state.tooltip.content
        )
    } else {
        "hidden".into()
    };
    println!(
        "[{:>5}ms] {label}: tooltip {tooltip}; overlay {:?}; {} toast(s)",
        now.duration_since(start).as_millis(),
        state.overlay.phase,
        state.toasts.len(),
    );
    for toast in state.toasts.iter() {
        println!("          toast #{}: {:?} {:?}", toast.id, toast.severity, toast.message);
    }
}
