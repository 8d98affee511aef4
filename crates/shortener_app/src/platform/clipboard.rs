use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(String);

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard. The handle is opened on first use and kept, since some
/// platforms drop the contents together with the owning handle.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let opened =
                arboard::Clipboard::new().map_err(|err| ClipboardError(err.to_string()))?;
            self.inner = Some(opened);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError("clipboard handle missing".to_string()));
        };
        clipboard
            .set_text(text.to_owned())
            .map_err(|err| ClipboardError(err.to_string()))
    }
}
