use copypasta_ext::prelude::*;

use crate::errors::ClipboardWriteError;

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardWriteError>;
}

/// Platform clipboard. Uses the binary-backed providers on X11/Wayland so
/// the contents survive after the process exits.
pub struct SystemClipboard {
    context: Box<dyn ClipboardProviderExt>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardWriteError> {
        let context = copypasta_ext::try_context().ok_or(ClipboardWriteError::Unavailable)?;

        Ok(Self { context })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardWriteError> {
        self.context
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardWriteError::Write(e.to_string()))
    }
}

/// Opening the platform clipboard can itself fail; that failure is reported
/// on the first write like any other.
impl Clipboard for Option<SystemClipboard> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardWriteError> {
        match self {
            Some(clipboard) => clipboard.write_text(text),
            None => Err(ClipboardWriteError::Unavailable),
        }
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardWriteError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}
