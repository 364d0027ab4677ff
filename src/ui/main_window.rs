use fltk::{
    app::{self, Sender},
    enums::{Event, FrameType, Key},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    text::{TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::{AppSettings, Message};
use super::toolbar::{Toolbar, TOOLBAR_HEIGHT};

pub const WINDOW_TITLE: &str = "Quillpad";
const SUGGESTION_HEIGHT: i32 = 22;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub toolbar: Toolbar,
    pub suggestion_label: Frame,
    pub text_editor: TextEditor,
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1000, 600, WINDOW_TITLE);
    wind.set_xclass("Quillpad");

    let mut flex = Flex::new(0, 0, 1000, 600, None);
    flex.set_type(FlexType::Column);

    let toolbar = Toolbar::new(sender, settings.font, settings.theme_mode.is_dark());
    flex.fixed(&toolbar.flex, TOOLBAR_HEIGHT);

    let mut suggestion_label = Frame::default();
    suggestion_label.set_frame(FrameType::FlatBox);
    suggestion_label.set_label_size(12);
    flex.fixed(&suggestion_label, SUGGESTION_HEIGHT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    text_editor.set_text_size(settings.font_size as i32);
    text_editor.set_scrollbar_size(14);

    let s = *sender;
    text_editor.handle(move |_, ev| match ev {
        Event::KeyDown if app::event_key() == Key::Tab => {
            s.send(Message::InsertSuggestion);
            // Consumed: the suggestion replaces the tab character.
            true
        }
        Event::KeyUp => {
            s.send(Message::KeyReleased);
            false
        }
        Event::Focus => {
            s.send(Message::ShowSuggestion);
            false
        }
        _ => false,
    });

    flex.end();
    wind.resizable(&flex);
    wind.end();

    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        flex,
        toolbar,
        suggestion_label,
        text_editor,
    }
}
