//! Cursor-selection expansion.
//!
//! Empty selections grow to the token under the cursor before matching;
//! selections the user actually made are used verbatim.

use crate::engine::error::ConversionError;
use crate::engine::surface::{EditorSurface, Selection};

/// Characters an exponential literal can contain, scanned outward from the
/// enclosing word.
pub const EXP_CHARSET: &str = "0123456789.eExX-";

/// Narrower set for plain decimal input to DecToExp.
pub const DEC_CHARSET: &str = "0123456789.";

/// Expands an empty selection to the enclosing word. With `quoted` set (the
/// source pattern matches quoted tokens) the range grows one character on
/// each side to take in the quotes; a word at the very start of the buffer
/// cannot grow left and fails the selection.
pub fn to_word(
    surface: &dyn EditorSurface,
    sel: Selection,
    quoted: bool,
) -> Result<Selection, ConversionError> {
    if !sel.is_empty() {
        return Ok(sel);
    }
    let word = surface.word_at(sel.start);
    if !quoted {
        return Ok(word);
    }
    if word.start == 0 {
        return Err(ConversionError::InvalidRange);
    }
    Ok(Selection::new(word.start - 1, word.end + 1))
}

/// Expands an empty selection to the enclosing word, then scans outward
/// character-by-character while the adjacent character belongs to `charset`.
pub fn to_numeric_run(
    surface: &dyn EditorSurface,
    sel: Selection,
    charset: &str,
) -> Result<Selection, ConversionError> {
    if !sel.is_empty() {
        return Ok(sel);
    }
    let mut run = surface.word_at(sel.start);
    while run.start > 0
        && surface
            .char_at(run.start - 1)
            .is_some_and(|c| charset.contains(c))
    {
        run.start -= 1;
    }
    while surface.char_at(run.end).is_some_and(|c| charset.contains(c)) {
        run.end += 1;
    }
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::surface::BufferSurface;

    #[test]
    fn nonempty_selection_is_verbatim() {
        let buf = BufferSurface::new("1010 1111");
        let sel = Selection::new(0, 4);
        assert_eq!(to_word(&buf, sel, false).unwrap(), sel);
        assert_eq!(to_numeric_run(&buf, sel, EXP_CHARSET).unwrap(), sel);
    }

    #[test]
    fn cursor_expands_to_word() {
        let buf = BufferSurface::new("foo 1010 bar");
        let sel = to_word(&buf, Selection::cursor(6), false).unwrap();
        assert_eq!(buf.substr(sel).as_deref(), Some("1010"));
    }

    #[test]
    fn quoted_expansion_takes_surrounding_quotes() {
        let buf = BufferSurface::new("x 'B101110' y");
        let sel = to_word(&buf, Selection::cursor(5), true).unwrap();
        assert_eq!(buf.substr(sel).as_deref(), Some("'B101110'"));
    }

    #[test]
    fn quoted_expansion_fails_at_buffer_start() {
        let buf = BufferSurface::new("B101110'");
        assert!(to_word(&buf, Selection::cursor(2), true).is_err());
    }

    #[test]
    fn numeric_run_crosses_word_boundaries() {
        // The dot splits the word; the scan stitches the literal together.
        let buf = BufferSurface::new("val 1.42e-3 end");
        let sel = to_numeric_run(&buf, Selection::cursor(7), EXP_CHARSET).unwrap();
        assert_eq!(buf.substr(sel).as_deref(), Some("1.42e-3"));
    }

    #[test]
    fn decimal_run_uses_the_narrow_set() {
        let buf = BufferSurface::new("a 3.14x b");
        let sel = to_numeric_run(&buf, Selection::cursor(3), DEC_CHARSET).unwrap();
        assert_eq!(buf.substr(sel).as_deref(), Some("3.14"));
    }
}
