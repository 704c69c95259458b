//! Syntax highlighting stub.
//!
//! Tags whole-word occurrences of a fixed keyword list and leaves
//! everything else [`Highlight::Normal`]. A keyword only counts when it is
//! a complete word run: `int` in `int x` is a keyword, in `print` it is
//! not.
//!
//! [`Highlight`] is also the classification the frame hands to the
//! renderer, so it carries the non-syntax tags (search match, selection)
//! too.

use crate::word::CharClass;

/// Highlight class of a span of text.
///
/// `String`, `Comment` and `Number` are never produced by the keyword
/// stub; renderers still style them so a fuller tokenizer can plug in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    Normal,
    Keyword,
    String,
    Comment,
    Number,
    /// A search match.
    Match,
    /// Inside the active selection.
    Selection,
}

/// A highlighted byte span `[start, end)` of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub kind: Highlight,
    pub start: usize,
    pub end: usize,
}

/// Words tagged as keywords.
pub const KEYWORDS: &[&[u8]] = &[
    b"int", b"char", b"void", b"bool", b"const", b"static", b"struct", b"enum", b"return",
    b"if", b"else", b"for", b"while", b"break", b"continue", b"fn", b"let", b"mut", b"pub",
];

/// Keyword spans of `line`, in order. Non-keyword text gets no span.
#[must_use]
pub fn highlight_line(line: &[u8]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < line.len() {
        if CharClass::of(line[i]) != CharClass::Word {
            i += 1;
            continue;
        }

        let start = i;
        while i < line.len() && CharClass::of(line[i]) == CharClass::Word {
            i += 1;
        }
        if KEYWORDS.contains(&&line[start..i]) {
            spans.push(Span {
                kind: Highlight::Keyword,
                start,
                end: i,
            });
        }
    }

    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
