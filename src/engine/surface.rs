//! Host abstraction for the conversion engine.
//!
//! The engine never touches a document directly; it goes through an
//! [`EditorSurface`]. [`BufferSurface`] is the in-memory implementation used
//! by the CLI and by tests.

use crate::engine::error::ConversionError;

/// Half-open character range `[start, end)` over the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Cursor-only selection at `pos`.
    pub fn cursor(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// The capability surface the engine consumes from its host.
///
/// Positions and ranges are character indices into the current document
/// text. Hosts are expected to keep live selections coherent across
/// `replace` calls, the way a real editor keeps regions attached to the
/// text they denote.
pub trait EditorSurface {
    /// Current selections, in document order.
    fn selections(&self) -> Vec<Selection>;

    /// Word range enclosing `pos` per the host's word-segmentation rules.
    fn word_at(&self, pos: usize) -> Selection;

    /// Character at `pos`, or `None` past the end of the document.
    fn char_at(&self, pos: usize) -> Option<char>;

    /// Text covered by `sel`, or `None` for an out-of-bounds range.
    fn substr(&self, sel: Selection) -> Option<String>;

    /// Atomically replace `sel` with `text`.
    fn replace(&mut self, sel: Selection, text: &str) -> Result<(), ConversionError>;

    /// User-visible status message sink.
    fn notify(&mut self, message: &str);
}

/// In-memory document with live selections and a captured message log.
#[derive(Debug, Clone, Default)]
pub struct BufferSurface {
    chars: Vec<char>,
    selections: Vec<Selection>,
    messages: Vec<String>,
}

impl BufferSurface {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            selections: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn with_selections(text: &str, selections: Vec<Selection>) -> Self {
        let mut surface = Self::new(text);
        surface.selections = selections;
        surface
    }

    /// Add a selection at the end of the selection list.
    pub fn select(&mut self, sel: Selection) {
        self.selections.push(sel);
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Status messages emitted so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl EditorSurface for BufferSurface {
    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn word_at(&self, pos: usize) -> Selection {
        let mut start = pos.min(self.chars.len());
        let mut end = start;
        while start > 0 && Self::is_word_char(self.chars[start - 1]) {
            start -= 1;
        }
        while end < self.chars.len() && Self::is_word_char(self.chars[end]) {
            end += 1;
        }
        Selection::new(start, end)
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    fn substr(&self, sel: Selection) -> Option<String> {
        if sel.start > sel.end || sel.end > self.chars.len() {
            return None;
        }
        Some(self.chars[sel.start..sel.end].iter().collect())
    }

    fn replace(&mut self, sel: Selection, text: &str) -> Result<(), ConversionError> {
        if sel.start > sel.end || sel.end > self.chars.len() {
            return Err(ConversionError::Replace);
        }
        let new_chars: Vec<char> = text.chars().collect();
        let new_len = new_chars.len();
        self.chars.splice(sel.start..sel.end, new_chars);

        // Keep live selections attached to the text they denoted: ranges
        // after the edit shift by the length delta, the edited range itself
        // becomes the inserted text.
        let delta = new_len as isize - sel.len() as isize;
        for s in &mut self.selections {
            if s.start >= sel.end {
                s.start = (s.start as isize + delta) as usize;
                s.end = (s.end as isize + delta) as usize;
            } else if s.end > sel.start {
                *s = Selection::new(sel.start, sel.start + new_len);
            }
        }
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        log::debug!("notify: {message}");
        self.messages.push(message.to_string());
    }
}
