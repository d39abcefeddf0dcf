//! Row layout for the composer: wraps text into display rows and maps byte
//! offsets to (row, column) and back.
//!
//! Rows are byte ranges into the original text and never include the `'\n'`
//! separating logical lines. Inside a logical line consecutive rows touch
//! (`next.start == prev.end`), so a cursor sitting on a soft break belongs to
//! the lower row.

use std::ops::Range;
use textwrap::WordSeparator;
use textwrap::core::break_words;
use textwrap::wrap_algorithms::wrap_first_fit;
use unicode_width::UnicodeWidthChar;

/// Border (2) + gutter (2) consumed horizontally; the right gutter holds the scrollbar
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// Inner text width for a composer `content_width` cells wide. 0 if too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Wrap `text` into rows at most `width` columns wide.
///
/// Words come from textwrap's ASCII-space separator; words wider than the row
/// are broken apart, then rows are filled first-fit. Spaces after a word stay
/// on the row the word ends, so they never start a row of their own.
/// Empty text (and each empty logical line) still produces one empty row.
pub(super) fn wrap_rows(text: &str, width: u16) -> Vec<Range<usize>> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        let words = break_words(WordSeparator::AsciiSpace.find_words(line), width);
        // Fragments are contiguous slices of `line`, so summing their lengths
        // recovers byte offsets. An empty line still yields one empty row.
        let mut row_start = line_start;
        for row in wrap_first_fit(&words, &[width as f64]) {
            let len: usize = row.iter().map(|w| w.word.len() + w.whitespace.len()).sum();
            rows.push(row_start..row_start + len);
            row_start += len;
        }
        line_start += line.len() + 1;
    }
    rows
}

/// Number of display rows `text` needs at `width`. Always at least 1.
pub(super) fn row_count(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    u16::try_from(wrap_rows(text, width).len()).unwrap_or(u16::MAX)
}

/// Row and display column of byte offset `pos`.
pub(super) fn locate(text: &str, rows: &[Range<usize>], pos: usize) -> (usize, u16) {
    let row = rows
        .iter()
        .rposition(|r| r.start <= pos)
        .unwrap_or(0);
    let start = rows.get(row).map_or(0, |r| r.start);
    let col: usize = text[start..pos].chars().map(char_width).sum();
    (row, u16::try_from(col).unwrap_or(u16::MAX))
}

/// Byte offset in `row` closest to display column `col` without passing it.
pub(super) fn offset_at(text: &str, row: &Range<usize>, col: u16) -> usize {
    let mut used = 0;
    for (offset, c) in text[row.clone()].char_indices() {
        let w = char_width(c);
        if used + w > usize::from(col) {
            return row.start + offset;
        }
        used += w;
    }
    row.end
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}
