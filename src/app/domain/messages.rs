use super::font::FontFamily;
use super::style::StyleTag;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Toolbar
    ToggleStyle(StyleTag),
    ToggleCase,
    SelectFont(FontFamily),
    ToggleTheme,
    ExportDocx,

    // Editor events
    InsertSuggestion,
    ShowSuggestion,
    KeyReleased,

    WindowClose,
}
