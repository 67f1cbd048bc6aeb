//! Clipboard port.
//!
//! The one platform service the engine consumes. `SystemClipboard` talks to
//! the real clipboard through `arboard`; `MemoryClipboard` is the test
//! double, recording writes or failing on demand. The write is terminal
//! either way: reported once, never retried.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Error, Result};

/// Write access to a clipboard.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Shared handle, so a caller can keep observing a clipboard it handed to
/// the engine.
impl<C: ClipboardWriter> ClipboardWriter for Rc<RefCell<C>> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.borrow_mut().write(text)
    }
}

/// The system clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Open the platform clipboard. Fails on headless systems with no
    /// clipboard service.
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text.to_owned())?;
        Ok(())
    }
}

/// In-memory clipboard for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    /// Last successfully written text.
    pub contents: Option<String>,
    /// When set, every write fails.
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write.
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::ClipboardRejected("clipboard unavailable".into()));
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_records_last_write() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.write("first").unwrap();
        clipboard.write("second").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("second"));
    }

    #[test]
    fn test_failing_clipboard_rejects_and_keeps_nothing() {
        let mut clipboard = MemoryClipboard::failing();
        assert!(clipboard.write("text").is_err());
        assert!(clipboard.contents.is_none());
    }
}
