//! Character styling attached to byte ranges of the editor buffer.
//!
//! `StyleRanges` is a sorted list of non-overlapping spans, each carrying a
//! non-empty `StyleSet`. Positions are byte offsets, the same unit FLTK's
//! `TextBuffer` uses, so edits reported by the buffer's modify callback can
//! be applied directly.

use std::ops::Range;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleTag {
    Bold,
    Italic,
    Underline,
}

impl StyleTag {
    fn bit(self) -> u8 {
        match self {
            Self::Bold => 0b001,
            Self::Italic => 0b010,
            Self::Underline => 0b100,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
        }
    }
}

/// A set of style tags, packed into the low three bits of a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleSet(u8);

impl StyleSet {
    pub const EMPTY: StyleSet = StyleSet(0);

    /// Number of distinct sets; also the size of the editor's style table.
    pub const COUNT: usize = 8;

    #[cfg(test)]
    pub fn from_tags(tags: impl IntoIterator<Item = StyleTag>) -> Self {
        tags.into_iter().fold(Self::EMPTY, StyleSet::with)
    }

    /// Every possible set, ordered by style character.
    pub fn all() -> impl Iterator<Item = StyleSet> {
        (0..Self::COUNT as u8).map(StyleSet)
    }

    pub fn contains(self, tag: StyleTag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn with(self, tag: StyleTag) -> Self {
        Self(self.0 | tag.bit())
    }

    pub fn without(self, tag: StyleTag) -> Self {
        Self(self.0 & !tag.bit())
    }

    pub fn union(self, other: StyleSet) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bold(self) -> bool {
        self.contains(StyleTag::Bold)
    }

    pub fn italic(self) -> bool {
        self.contains(StyleTag::Italic)
    }

    pub fn underline(self) -> bool {
        self.contains(StyleTag::Underline)
    }

    /// Style buffer character for this set: 'A' for plain text through 'H'.
    pub fn style_char(self) -> char {
        (b'A' + self.0) as char
    }

    #[cfg(test)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which way a toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChange {
    Applied,
    Removed,
}

/// How a whole line's style is derived from the ranges it overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyleRule {
    /// The style at the line's first byte.
    #[default]
    FirstChar,
    /// Union of every style overlapping the line.
    AnyChar,
}

impl LineStyleRule {
    pub fn resolve(self, styles: &StyleRanges, line: Range<usize>) -> StyleSet {
        match self {
            Self::FirstChar => styles.style_at(line.start),
            Self::AnyChar if line.is_empty() => styles.style_at(line.start),
            Self::AnyChar => styles.union_over(line),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
    style: StyleSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRanges {
    spans: Vec<Span>,
}

/// Append a span, dropping empty ones and merging with an equal neighbour.
fn push_span(out: &mut Vec<Span>, start: usize, end: usize, style: StyleSet) {
    if start >= end || style.is_empty() {
        return;
    }
    if let Some(last) = out.last_mut() {
        if last.end == start && last.style == style {
            last.end = end;
            return;
        }
    }
    out.push(Span { start, end, style });
}

impl StyleRanges {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Styled spans in position order.
    #[cfg(test)]
    pub fn spans(&self) -> impl Iterator<Item = (Range<usize>, StyleSet)> + '_ {
        self.spans.iter().map(|s| (s.start..s.end, s.style))
    }

    pub fn style_at(&self, pos: usize) -> StyleSet {
        let idx = self.spans.partition_point(|s| s.end <= pos);
        match self.spans.get(idx) {
            Some(span) if span.start <= pos => span.style,
            _ => StyleSet::EMPTY,
        }
    }

    /// Union of all styles overlapping `range`.
    pub fn union_over(&self, range: Range<usize>) -> StyleSet {
        let first = self.spans.partition_point(|s| s.end <= range.start);
        self.spans[first..]
            .iter()
            .take_while(|s| s.start < range.end)
            .fold(StyleSet::EMPTY, |acc, s| acc.union(s.style))
    }

    /// Rewrite the style of every byte in `range` (styled or not) with `f`.
    fn restyle(&mut self, range: Range<usize>, f: impl Fn(StyleSet) -> StyleSet) {
        let (s, e) = (range.start, range.end);
        if s >= e {
            return;
        }

        let mut out = Vec::with_capacity(self.spans.len() + 2);
        let mut cursor = s;
        for span in &self.spans {
            if span.start < s {
                push_span(&mut out, span.start, span.end.min(s), span.style);
            }

            let (os, oe) = (span.start.max(s), span.end.min(e));
            if os < oe {
                if cursor < os {
                    push_span(&mut out, cursor, os, f(StyleSet::EMPTY));
                }
                push_span(&mut out, os, oe, f(span.style));
                cursor = oe;
            }

            if span.end > e {
                if cursor < e {
                    push_span(&mut out, cursor, e, f(StyleSet::EMPTY));
                    cursor = e;
                }
                push_span(&mut out, span.start.max(e), span.end, span.style);
            }
        }
        if cursor < e {
            push_span(&mut out, cursor, e, f(StyleSet::EMPTY));
        }
        self.spans = out;
    }

    pub fn add(&mut self, range: Range<usize>, tag: StyleTag) {
        self.restyle(range, |style| style.with(tag));
    }

    pub fn remove(&mut self, range: Range<usize>, tag: StyleTag) {
        self.restyle(range, |style| style.without(tag));
    }

    /// Remove `tag` from `range` if the range starts inside it, add it otherwise.
    pub fn toggle(&mut self, range: Range<usize>, tag: StyleTag) -> StyleChange {
        if self.style_at(range.start).contains(tag) {
            self.remove(range, tag);
            StyleChange::Removed
        } else {
            self.add(range, tag);
            StyleChange::Applied
        }
    }

    /// `len` bytes were inserted at `pos`. Spans strictly containing `pos`
    /// grow; text inserted on a span boundary stays plain.
    pub fn insert(&mut self, pos: usize, len: usize) {
        if len == 0 {
            return;
        }
        for span in &mut self.spans {
            if span.start >= pos {
                span.start += len;
                span.end += len;
            } else if span.end > pos {
                span.end += len;
            }
        }
    }

    /// `len` bytes were deleted starting at `pos`.
    pub fn delete(&mut self, pos: usize, len: usize) {
        if len == 0 {
            return;
        }
        let end = pos + len;
        let shift = |x: usize| {
            if x <= pos {
                x
            } else if x >= end {
                x - len
            } else {
                pos
            }
        };

        let mut out = Vec::with_capacity(self.spans.len());
        for span in &self.spans {
            push_span(&mut out, shift(span.start), shift(span.end), span.style);
        }
        self.spans = out;
    }

    /// Apply a buffer modification as reported by FLTK. A replacement of
    /// equal length keeps the styling in place.
    pub fn replace(&mut self, pos: usize, deleted: usize, inserted: usize) {
        if deleted == inserted {
            return;
        }
        self.delete(pos, deleted);
        self.insert(pos, inserted);
    }

    /// Style buffer contents for `range`: one style character per byte.
    pub fn style_chars(&self, range: Range<usize>) -> String {
        let mut out = String::with_capacity(range.len());
        let mut pos = range.start;
        let first = self.spans.partition_point(|s| s.end <= range.start);
        for span in self.spans[first..].iter().take_while(|s| s.start < range.end) {
            let start = span.start.max(range.start);
            let end = span.end.min(range.end);
            out.extend(std::iter::repeat_n(StyleSet::EMPTY.style_char(), start - pos));
            out.extend(std::iter::repeat_n(span.style.style_char(), end - start));
            pos = end;
        }
        out.extend(std::iter::repeat_n(StyleSet::EMPTY.style_char(), range.end.saturating_sub(pos)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(ranges: &StyleRanges) -> Vec<(Range<usize>, StyleSet)> {
        ranges.spans().collect()
    }

    fn bold() -> StyleSet {
        StyleSet::from_tags([StyleTag::Bold])
    }

    #[test]
    fn test_style_set_flags() {
        let set = StyleSet::from_tags([StyleTag::Bold, StyleTag::Underline]);
        assert!(set.bold());
        assert!(!set.italic());
        assert!(set.underline());
        assert!(!set.without(StyleTag::Bold).bold());
        assert!(StyleSet::EMPTY.is_empty());
    }

    #[test]
    fn test_style_chars_cover_table() {
        let chars: String = StyleSet::all().map(StyleSet::style_char).collect();
        assert_eq!(chars, "ABCDEFGH");
        assert_eq!(StyleSet::all().count(), StyleSet::COUNT);
    }

    #[test]
    fn test_add_and_lookup() {
        let mut ranges = StyleRanges::new();
        ranges.add(2..5, StyleTag::Bold);
        assert_eq!(ranges.style_at(1), StyleSet::EMPTY);
        assert_eq!(ranges.style_at(2), bold());
        assert_eq!(ranges.style_at(4), bold());
        assert_eq!(ranges.style_at(5), StyleSet::EMPTY);
    }

    #[test]
    fn test_nested_ranges_split() {
        let mut ranges = StyleRanges::new();
        ranges.add(0..10, StyleTag::Bold);
        ranges.add(3..6, StyleTag::Italic);
        let bold_italic = bold().with(StyleTag::Italic);
        assert_eq!(spans(&ranges), vec![(0..3, bold()), (3..6, bold_italic), (6..10, bold())]);
    }

    #[test]
    fn test_add_fills_gaps_and_merges() {
        let mut ranges = StyleRanges::new();
        ranges.add(0..2, StyleTag::Bold);
        ranges.add(4..6, StyleTag::Bold);
        ranges.add(1..5, StyleTag::Bold);
        assert_eq!(spans(&ranges), vec![(0..6, bold())]);
    }

    #[test]
    fn test_remove_splits_span() {
        let mut ranges = StyleRanges::new();
        ranges.add(0..10, StyleTag::Bold);
        ranges.remove(4..6, StyleTag::Bold);
        assert_eq!(spans(&ranges), vec![(0..4, bold()), (6..10, bold())]);
    }

    #[test]
    fn test_toggle_uses_style_at_selection_start() {
        let mut ranges = StyleRanges::new();
        ranges.add(0..4, StyleTag::Bold);

        // Starts inside bold: the whole selection loses bold.
        assert_eq!(ranges.toggle(2..8, StyleTag::Bold), StyleChange::Removed);
        assert_eq!(spans(&ranges), vec![(0..2, bold())]);

        // Starts outside bold: the whole selection gains it.
        assert_eq!(ranges.toggle(2..8, StyleTag::Bold), StyleChange::Applied);
        assert_eq!(spans(&ranges), vec![(0..8, bold())]);
    }

    #[test]
    fn test_insert_inside_span_grows_it() {
        let mut ranges = StyleRanges::new();
        ranges.add(2..6, StyleTag::Bold);
        ranges.insert(4, 3);
        assert_eq!(spans(&ranges), vec![(2..9, bold())]);
    }

    #[test]
    fn test_insert_at_boundary_stays_plain() {
        let mut ranges = StyleRanges::new();
        ranges.add(2..6, StyleTag::Bold);
        ranges.insert(6, 2);
        assert_eq!(spans(&ranges), vec![(2..6, bold())]);
        ranges.insert(2, 2);
        assert_eq!(spans(&ranges), vec![(4..8, bold())]);
    }

    #[test]
    fn test_delete_across_spans() {
        let mut ranges = StyleRanges::new();
        ranges.add(0..4, StyleTag::Bold);
        ranges.add(6..10, StyleTag::Italic);
        ranges.delete(2, 6);
        let italic = StyleSet::from_tags([StyleTag::Italic]);
        assert_eq!(spans(&ranges), vec![(0..2, bold()), (2..4, italic)]);
    }

    #[test]
    fn test_delete_whole_span_and_merge_neighbours() {
        let mut ranges = StyleRanges::new();
        ranges.add(0..2, StyleTag::Bold);
        ranges.add(2..4, StyleTag::Italic);
        ranges.add(4..6, StyleTag::Bold);
        ranges.delete(2, 2);
        assert_eq!(spans(&ranges), vec![(0..4, bold())]);
    }

    #[test]
    fn test_equal_length_replace_keeps_styles() {
        let mut ranges = StyleRanges::new();
        ranges.add(0..5, StyleTag::Underline);
        ranges.replace(0, 5, 5);
        assert_eq!(ranges.style_at(0), StyleSet::from_tags([StyleTag::Underline]));
        assert_eq!(ranges.style_at(4), StyleSet::from_tags([StyleTag::Underline]));
    }

    #[test]
    fn test_unequal_replace_drops_replaced_styles() {
        let mut ranges = StyleRanges::new();
        ranges.add(0..2, StyleTag::Bold);
        ranges.replace(0, 2, 3);
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_style_chars() {
        let mut ranges = StyleRanges::new();
        ranges.add(1..3, StyleTag::Bold);
        ranges.add(2..4, StyleTag::Underline);
        assert_eq!(ranges.style_chars(0..5), "ABFEA");
        assert_eq!(ranges.style_chars(2..3), "F");
        assert_eq!(ranges.style_chars(3..3), "");
    }

    #[test]
    fn test_line_style_rules() {
        let mut ranges = StyleRanges::new();
        ranges.add(3..5, StyleTag::Italic);
        assert_eq!(LineStyleRule::FirstChar.resolve(&ranges, 0..8), StyleSet::EMPTY);
        assert_eq!(
            LineStyleRule::AnyChar.resolve(&ranges, 0..8),
            StyleSet::from_tags([StyleTag::Italic])
        );
        assert_eq!(LineStyleRule::AnyChar.resolve(&ranges, 5..8), StyleSet::EMPTY);
    }
}
