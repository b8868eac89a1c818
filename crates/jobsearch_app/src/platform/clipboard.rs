use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard not available: {0}")]
    Unavailable(#[source] arboard::Error),
    #[error("failed to copy to clipboard: {0}")]
    Write(#[source] arboard::Error),
    #[error("clipboard lock poisoned")]
    Poisoned,
}

pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, opened on first use and kept for the process.
///
/// Some platforms drop the copied text once its owner goes away, so one
/// handle lives as long as the app.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut handle = self.handle.lock().map_err(|_| ClipboardError::Poisoned)?;
        let clipboard = match handle.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(ClipboardError::Unavailable)?,
        };
        handle
            .insert(clipboard)
            .set_text(text)
            .map_err(ClipboardError::Write)
    }
}
