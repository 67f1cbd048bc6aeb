//! page-fx
//!
//! A headless engine for page-enhancement behavior: hover tooltips with
//! debounced hide, a click-to-enlarge image overlay, and clipboard-copy
//! toasts. Feed it synthetic pointer/keyboard input and an explicit clock,
//! then inspect the resulting UI state.

pub mod clipboard;
pub mod config;
pub mod element;
pub mod error;
pub mod notify;
pub mod overlay;
pub mod page;
pub mod timer;
pub mod tooltip;

pub use config::FxConfig;
pub use error::{Error, Result};
pub use page::Page;
