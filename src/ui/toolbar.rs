use fltk::{
    app::Sender,
    button::Button,
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    menu::Choice,
    prelude::*,
};

use crate::app::domain::{FontFamily, Message, StyleTag};
use super::theme::theme_button_label;

pub const TOOLBAR_HEIGHT: i32 = 34;

pub struct Toolbar {
    pub flex: Flex,
    pub font_label: Frame,
    pub font_choice: Choice,
    pub bold_btn: Button,
    pub italic_btn: Button,
    pub underline_btn: Button,
    pub case_btn: Button,
    pub theme_btn: Button,
    pub save_btn: Button,
    pub file_name_input: Input,
    pub file_name_label: Frame,
}

fn toolbar_button(flex: &mut Flex, label: &str, width: i32, sender: Sender<Message>, msg: Message) -> Button {
    let mut btn = Button::default().with_label(label);
    btn.set_callback(move |_| sender.send(msg.clone()));
    flex.fixed(&btn, width);
    btn
}

impl Toolbar {
    pub fn new(sender: &Sender<Message>, font: FontFamily, is_dark: bool) -> Self {
        let s = *sender;
        let mut flex = Flex::new(0, 0, 0, TOOLBAR_HEIGHT, None);
        flex.set_type(FlexType::Row);
        flex.set_margin(5);
        flex.set_spacing(5);

        let font_label = Frame::default().with_label("Font:");
        flex.fixed(&font_label, 40);

        let mut font_choice = Choice::default();
        let items: Vec<&str> = FontFamily::all().iter().map(|f| f.display_name()).collect();
        font_choice.add_choice(&items.join("|"));
        font_choice.set_value(font.index() as i32);
        font_choice.set_callback(move |c| {
            let picked = usize::try_from(c.value())
                .ok()
                .and_then(|i| FontFamily::all().get(i));
            if let Some(font) = picked {
                s.send(Message::SelectFont(*font));
            }
        });
        flex.fixed(&font_choice, 150);

        let bold_btn = toolbar_button(&mut flex, "Bold", 60, s, Message::ToggleStyle(StyleTag::Bold));
        let italic_btn = toolbar_button(&mut flex, "Italic", 60, s, Message::ToggleStyle(StyleTag::Italic));
        let underline_btn =
            toolbar_button(&mut flex, "Underline", 80, s, Message::ToggleStyle(StyleTag::Underline));
        let case_btn = toolbar_button(&mut flex, "Toggle Case", 100, s, Message::ToggleCase);

        // Spacer pushes the export controls to the right edge
        Frame::default();

        let theme_btn = toolbar_button(&mut flex, theme_button_label(is_dark), 100, s, Message::ToggleTheme);
        let save_btn = toolbar_button(&mut flex, "Save as DOCX", 110, s, Message::ExportDocx);

        let file_name_input = Input::default();
        flex.fixed(&file_name_input, 160);

        let file_name_label = Frame::default().with_label("File Name:");
        flex.fixed(&file_name_label, 75);

        flex.end();

        Self {
            flex,
            font_label,
            font_choice,
            bold_btn,
            italic_btn,
            underline_btn,
            case_btn,
            theme_btn,
            save_btn,
            file_name_input,
            file_name_label,
        }
    }

    pub fn buttons_mut(&mut self) -> [&mut Button; 6] {
        [
            &mut self.bold_btn,
            &mut self.italic_btn,
            &mut self.underline_btn,
            &mut self.case_btn,
            &mut self.theme_btn,
            &mut self.save_btn,
        ]
    }

    pub fn labels_mut(&mut self) -> [&mut Frame; 2] {
        [&mut self.font_label, &mut self.file_name_label]
    }
}
