use fltk::enums::Font;
use serde::{Deserialize, Serialize};

use super::style::StyleSet;

/// Font families offered in the toolbar. The display name doubles as the
/// family name written into exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    TimesNewRoman,
    CourierNew,
}

impl FontFamily {
    pub fn all() -> &'static [FontFamily] {
        &[Self::Arial, Self::TimesNewRoman, Self::CourierNew]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Arial => "Arial",
            Self::TimesNewRoman => "Times New Roman",
            Self::CourierNew => "Courier New",
        }
    }

    #[cfg(test)]
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.display_name() == name)
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    /// FLTK face used to draw text with this family and style.
    /// Underline is drawn as a text attribute, not a face.
    pub fn face(&self, style: StyleSet) -> Font {
        match (self, style.bold(), style.italic()) {
            (Self::Arial, false, false) => Font::Helvetica,
            (Self::Arial, true, false) => Font::HelveticaBold,
            (Self::Arial, false, true) => Font::HelveticaItalic,
            (Self::Arial, true, true) => Font::HelveticaBoldItalic,
            (Self::TimesNewRoman, false, false) => Font::Times,
            (Self::TimesNewRoman, true, false) => Font::TimesBold,
            (Self::TimesNewRoman, false, true) => Font::TimesItalic,
            (Self::TimesNewRoman, true, true) => Font::TimesBoldItalic,
            (Self::CourierNew, false, false) => Font::Courier,
            (Self::CourierNew, true, false) => Font::CourierBold,
            (Self::CourierNew, false, true) => Font::CourierItalic,
            (Self::CourierNew, true, true) => Font::CourierBoldItalic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::style::StyleTag;

    #[test]
    fn test_display_name_round_trip() {
        for family in FontFamily::all() {
            assert_eq!(FontFamily::from_display_name(family.display_name()), Some(*family));
        }
        assert_eq!(FontFamily::from_display_name("Comic Sans"), None);
    }

    #[test]
    fn test_index_matches_toolbar_order() {
        assert_eq!(FontFamily::Arial.index(), 0);
        assert_eq!(FontFamily::CourierNew.index(), 2);
    }

    #[test]
    fn test_face_follows_style() {
        let bold_italic = StyleSet::from_tags([StyleTag::Bold, StyleTag::Italic]);
        assert_eq!(FontFamily::Arial.face(StyleSet::EMPTY), Font::Helvetica);
        assert_eq!(FontFamily::TimesNewRoman.face(bold_italic), Font::TimesBoldItalic);

        // Underline alone keeps the regular face.
        let underline = StyleSet::from_tags([StyleTag::Underline]);
        assert_eq!(FontFamily::CourierNew.face(underline), Font::Courier);
    }
}
