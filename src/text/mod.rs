//! Content layout: re-flow, truncation and excerpts.
//!
//! Every function here is pure and total. Widths are display columns as
//! reported by `unicode-width`, so wide CJK glyphs count as two and
//! combining marks as zero. Tabs count as [`TAB_WIDTH`] spaces and other
//! control characters are dropped before anything is measured.

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

/// Marker appended to shortened titles and excerpts. One column wide.
pub const ELLIPSIS: &str = "…";

/// Columns a tab expands to.
pub const TAB_WIDTH: usize = 4;

/// Expands tabs and strips control characters other than `\n`.
fn sanitize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.is_control() && c != '\n') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.extend(std::iter::repeat(' ').take(TAB_WIDTH)),
            '\n' => out.push(c),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Visible width of `text` in terminal columns.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(sanitize(text).as_ref())
}

/// Re-flows `text` into lines no wider than `width` columns.
///
/// Breaks happen at ASCII spaces; a word wider than `width` is split hard.
/// Existing line breaks are kept, so blank lines between paragraphs survive.
/// Leading indentation is repeated on every wrapped line as long as it leaves
/// room for text.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let text = sanitize(text);
    text.lines().flat_map(|line| wrap_line(line, width)).collect()
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let body = line.trim_start_matches(' ');
    if body.is_empty() {
        return vec![String::new()];
    }

    let indent = &line[..line.len() - body.len()];
    let indent = if UnicodeWidthStr::width(indent) < width {
        indent
    } else {
        ""
    };

    let options = textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .initial_indent(indent)
        .subsequent_indent(indent);

    textwrap::wrap(body, &options)
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

/// Shortens `text` to at most `max_width` columns, ending in [`ELLIPSIS`]
/// when anything was cut. Text that already fits is returned unchanged.
pub fn truncate(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    // Single line: breaks become spaces.
    let text = sanitize(text).replace('\n', " ");
    if display_width(&text) <= max_width {
        return text;
    }

    let budget = max_width - display_width(ELLIPSIS);
    let mut out = String::new();
    for c in text.chars() {
        out.push(c);
        if display_width(&out) > budget {
            out.pop();
            break;
        }
    }
    out.push_str(ELLIPSIS);
    out
}

/// First `max_words` whitespace-delimited words of `text`, joined by single
/// spaces. An [`ELLIPSIS`] follows only when words were dropped.
pub fn excerpt(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return words.join(" ");
    }

    let mut out = words[..max_words].join(" ");
    out.push_str(ELLIPSIS);
    out
}
