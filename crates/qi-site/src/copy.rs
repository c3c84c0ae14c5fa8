//! Copy-to-clipboard affordance.
//!
//! [`CopyButton`] models the code block's copy button: a press writes the
//! text to a [`Clipboard`] and, on success, flips the button to "copied"
//! for [`COPIED_WINDOW`]. The window starts at the first successful press;
//! presses inside it still copy but do not push the deadline back. A failed
//! write is logged and leaves the button as it was.

use std::time::Duration;

use tokio::time::Instant;

/// How long the button shows "copied" after a successful press.
pub const COPIED_WINDOW: Duration = Duration::from_secs(2);

/// Clipboard access failure.
#[derive(Debug, thiserror::Error)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(String);

impl ClipboardError {
    /// Create an error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<arboard::Error> for ClipboardError {
    fn from(e: arboard::Error) -> Self {
        Self(e.to_string())
    }
}

/// Write access to a clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the platform clipboard is unavailable
    /// or rejects the write.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, via `arboard`.
///
/// A fresh handle is opened per write so nothing is held between presses.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Visible state of a copy button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyState {
    /// "Copy".
    Idle,
    /// "Copied", until the window closes.
    Copied,
}

/// Copy button bound to a clipboard.
#[derive(Debug)]
pub struct CopyButton<C> {
    clipboard: C,
    copied_until: Option<Instant>,
}

impl<C: Clipboard> CopyButton<C> {
    /// Create an idle button.
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            copied_until: None,
        }
    }

    /// Copy `text` verbatim and return the resulting state.
    pub fn press(&mut self, text: &str) -> CopyState {
        match self.clipboard.set_text(text) {
            Ok(()) => {
                if self.state() == CopyState::Idle {
                    self.copied_until = Some(Instant::now() + COPIED_WINDOW);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to copy text");
            }
        }
        self.state()
    }

    /// Current state.
    pub fn state(&self) -> CopyState {
        match self.copied_until {
            Some(deadline) if Instant::now() < deadline => CopyState::Copied,
            _ => CopyState::Idle,
        }
    }

    /// The underlying clipboard.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        writes: usize,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.contents = Some(text.to_owned());
            self.writes += 1;
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::new("permission denied"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_press_copies_exact_text() {
        let mut button = CopyButton::new(MemoryClipboard::default());
        let text = "\"use client\";\n\nexport default function Wave() {}\n";

        let state = button.press(text);

        assert_eq!(state, CopyState::Copied);
        assert_eq!(button.clipboard().contents.as_deref(), Some(text));
    }

    #[tokio::test(start_paused = true)]
    async fn test_copied_reverts_after_window() {
        let mut button = CopyButton::new(MemoryClipboard::default());
        button.press("npm i motion");

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert_eq!(button.state(), CopyState::Copied);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(button.state(), CopyState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_presses_do_not_extend_window() {
        let mut button = CopyButton::new(MemoryClipboard::default());
        button.press("first");

        tokio::time::advance(Duration::from_millis(1500)).await;
        assert_eq!(button.press("second"), CopyState::Copied);
        assert_eq!(button.clipboard().contents.as_deref(), Some("second"));
        assert_eq!(button.clipboard().writes, 2);

        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(button.state(), CopyState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_press_after_window_starts_new_window() {
        let mut button = CopyButton::new(MemoryClipboard::default());
        button.press("first");
        tokio::time::advance(COPIED_WINDOW).await;
        assert_eq!(button.state(), CopyState::Idle);

        assert_eq!(button.press("again"), CopyState::Copied);
        tokio::time::advance(Duration::from_millis(1999)).await;
        assert_eq!(button.state(), CopyState::Copied);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_press_stays_idle() {
        let mut button = CopyButton::new(DeniedClipboard);
        assert_eq!(button.press("npm i motion"), CopyState::Idle);
        assert_eq!(button.state(), CopyState::Idle);
    }

    #[test]
    fn test_clipboard_error_message() {
        let err = ClipboardError::new("no display");
        assert_eq!(err.to_string(), "Clipboard unavailable: no display");
    }
}
