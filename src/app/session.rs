//! Per-window editing state shared by every event handler.

use std::ops::Range;

use log::debug;

use super::domain::font::FontFamily;
use super::domain::settings::AppSettings;
use super::domain::style::{LineStyleRule, StyleChange, StyleRanges, StyleTag};
use super::error::EditError;
use super::services::text_ops::{self, CaseMode};

/// Result of a successful style toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleToggle {
    pub range: Range<usize>,
    pub change: StyleChange,
}

/// Replacement produced by a case toggle; the caller applies it to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

pub struct EditorSession {
    styles: StyleRanges,
    font: FontFamily,
    dark_mode: bool,
    suggestion: String,
    line_style_rule: LineStyleRule,
}

fn require_selection(selection: Option<Range<usize>>) -> Result<Range<usize>, EditError> {
    selection
        .filter(|range| !range.is_empty())
        .ok_or(EditError::NoSelection)
}

impl EditorSession {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            styles: StyleRanges::new(),
            font: settings.font,
            dark_mode: settings.theme_mode.is_dark(),
            suggestion: settings.suggestion.clone(),
            line_style_rule: settings.line_style_rule,
        }
    }

    pub fn styles(&self) -> &StyleRanges {
        &self.styles
    }

    pub fn font(&self) -> FontFamily {
        self.font
    }

    pub fn set_font(&mut self, font: FontFamily) {
        self.font = font;
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flip the theme and return the new dark-mode flag.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn line_style_rule(&self) -> LineStyleRule {
        self.line_style_rule
    }

    pub fn suggestion_label(&self) -> String {
        format!("Suggested word: {}", self.suggestion)
    }

    /// Text inserted when the user accepts the suggestion.
    pub fn suggestion_insert(&self) -> String {
        format!("{} ", self.suggestion)
    }

    pub fn toggle_style(
        &mut self,
        selection: Option<Range<usize>>,
        tag: StyleTag,
    ) -> Result<StyleToggle, EditError> {
        let range = require_selection(selection)?;
        let change = self.styles.toggle(range.clone(), tag);
        debug!("{:?} {} on {:?}", change, tag.name(), range);
        Ok(StyleToggle { range, change })
    }

    pub fn toggle_case(
        &self,
        selection: Option<Range<usize>>,
        text: &str,
        mode: CaseMode,
    ) -> Result<CaseEdit, EditError> {
        let range = require_selection(selection)?;
        let selected = text.get(range.clone()).ok_or(EditError::SplitCharacter {
            start: range.start,
            end: range.end,
        })?;
        Ok(CaseEdit {
            replacement: text_ops::toggle_case(selected, mode),
            range,
        })
    }

    /// Keep the style ranges in step with a buffer modification.
    pub fn buffer_modified(&mut self, pos: usize, inserted: usize, deleted: usize) {
        self.styles.replace(pos, deleted, inserted);
    }
}
