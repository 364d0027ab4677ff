use fltk::{
    enums::{Color, FrameType},
    prelude::*,
    text::{StyleTableEntryExt, TextAttr},
};

use crate::app::domain::{FontFamily, StyleSet};
use super::main_window::MainWidgets;

struct Palette {
    background: Color,
    text: Color,
    cursor: Color,
    selection: Color,
    toolbar: Color,
    button: Color,
    suggestion: Color,
}

fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            background: Color::Black,
            text: Color::White,
            cursor: Color::White,
            selection: Color::from_rgb(70, 70, 100),
            toolbar: Color::Black,
            button: Color::from_rgb(35, 35, 35),
            suggestion: Color::from_rgb(100, 149, 237),
        }
    } else {
        Palette {
            background: Color::White,
            text: Color::Black,
            cursor: Color::Black,
            selection: Color::from_rgb(173, 216, 230),
            toolbar: Color::White,
            button: Color::from_rgb(240, 240, 240),
            suggestion: Color::Blue,
        }
    }
}

/// The theme button offers the theme you are not in.
pub fn theme_button_label(is_dark: bool) -> &'static str {
    if is_dark { "Light Mode" } else { "Dark Mode" }
}

/// One entry per `StyleSet`, indexed by its style character.
pub fn style_table(font: FontFamily, size: i32, is_dark: bool) -> Vec<StyleTableEntryExt> {
    let colors = palette(is_dark);
    StyleSet::all()
        .map(|style| StyleTableEntryExt {
            color: colors.text,
            font: font.face(style),
            size,
            attr: if style.underline() { TextAttr::Underline } else { TextAttr::None },
            bgcolor: colors.background,
        })
        .collect()
}

pub fn apply_theme(widgets: &mut MainWidgets, is_dark: bool) {
    let colors = palette(is_dark);

    widgets.wind.set_color(colors.background);
    widgets.wind.set_label_color(colors.text);

    let toolbar = &mut widgets.toolbar;
    toolbar.flex.set_color(colors.toolbar);
    toolbar.flex.set_frame(FrameType::FlatBox);
    for label in toolbar.labels_mut() {
        label.set_label_color(colors.text);
    }
    for btn in toolbar.buttons_mut() {
        btn.set_color(colors.button);
        btn.set_label_color(colors.text);
    }
    toolbar.theme_btn.set_label(theme_button_label(is_dark));
    toolbar.font_choice.set_color(colors.button);
    toolbar.font_choice.set_text_color(colors.text);
    toolbar.font_choice.set_selection_color(colors.selection);
    toolbar.file_name_input.set_color(colors.background);
    toolbar.file_name_input.set_text_color(colors.text);
    toolbar.file_name_input.set_cursor_color(colors.cursor);

    widgets.suggestion_label.set_color(colors.background);
    widgets.suggestion_label.set_label_color(colors.suggestion);

    let editor = &mut widgets.text_editor;
    editor.set_color(colors.background);
    editor.set_text_color(colors.text);
    editor.set_cursor_color(colors.cursor);
    editor.set_selection_color(colors.selection);

    widgets.wind.redraw();
}
