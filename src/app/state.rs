use std::cell::RefCell;
use std::rc::Rc;

use fltk::{prelude::*, text::TextBuffer};
use log::{debug, error, info, log_enabled, warn, Level};

use super::buffer_utils::{buffer_text, selection_range};
use super::domain::{AppSettings, FontFamily, StyleSet, StyleTag, ThemeMode};
use super::error::{EditError, ExportError};
use super::services::export::{self, ExportOutcome, ExportRequest};
use super::services::text_ops::{extract_filename, last_words, CaseMode};
use super::session::EditorSession;
use crate::ui::dialogs::{show_error, show_info, show_warning};
use crate::ui::file_dialogs::native_save_docx_dialog;
use crate::ui::main_window::{MainWidgets, WINDOW_TITLE};
use crate::ui::theme::{apply_theme, style_table};

const LOGGED_WORDS: usize = 5;

pub struct AppState {
    pub widgets: MainWidgets,
    pub buffer: TextBuffer,
    style_buffer: TextBuffer,
    session: Rc<RefCell<EditorSession>>,
    settings: AppSettings,
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: AppSettings) -> Self {
        let session = Rc::new(RefCell::new(EditorSession::new(&settings)));
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();

        // The session must not be borrowed across a buffer mutation: this
        // callback needs it mutably.
        let session_cb = Rc::clone(&session);
        let mut style_buf = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted == 0 && deleted == 0 {
                return;
            }
            let mut session = session_cb.borrow_mut();
            session.buffer_modified(pos as usize, inserted as usize, deleted as usize);
            if deleted > 0 {
                style_buf.remove(pos, pos + deleted);
            }
            if inserted > 0 {
                let start = pos as usize;
                let chars = session.styles().style_chars(start..start + inserted as usize);
                style_buf.insert(pos, &chars);
            }
        });

        let mut state = Self {
            widgets,
            buffer,
            style_buffer,
            session,
            settings,
        };
        state.widgets.text_editor.set_buffer(state.buffer.clone());
        state.apply_appearance();
        state.show_suggestion();
        state
    }

    pub fn show(&mut self) {
        self.widgets.wind.show();
        let _ = self.widgets.text_editor.take_focus();
    }

    /// Re-apply theme colors and the style table for the current font.
    fn apply_appearance(&mut self) {
        let (font, is_dark) = {
            let session = self.session.borrow();
            (session.font(), session.dark_mode())
        };
        apply_theme(&mut self.widgets, is_dark);

        let size = self.settings.font_size as i32;
        let editor = &mut self.widgets.text_editor;
        editor.set_text_font(font.face(StyleSet::EMPTY));
        editor.set_text_size(size);
        editor.set_highlight_data_ext(self.style_buffer.clone(), style_table(font, size, is_dark));
        editor.redraw();
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            warn!("Failed to save settings: {}", e);
        }
    }

    // --- Formatting ---

    pub fn toggle_style(&mut self, tag: StyleTag) {
        let selection = selection_range(&self.buffer);
        let result = self.session.borrow_mut().toggle_style(selection, tag);
        match result {
            Ok(toggle) => {
                let range = toggle.range;
                let chars = self.session.borrow().styles().style_chars(range.clone());
                self.style_buffer.replace(range.start as i32, range.end as i32, &chars);
                self.widgets.text_editor.redraw();
            }
            Err(EditError::NoSelection) => show_warning("No text selected to apply formatting!"),
            Err(e) => error!("Style toggle failed: {}", e),
        }
    }

    pub fn toggle_case(&mut self) {
        let selection = selection_range(&self.buffer);
        let text = buffer_text(&self.buffer);
        let result = self.session.borrow().toggle_case(selection, &text, CaseMode::Upper);
        match result {
            Ok(edit) => {
                let start = edit.range.start as i32;
                self.buffer.replace(start, edit.range.end as i32, &edit.replacement);
                self.buffer.select(start, start + edit.replacement.len() as i32);
            }
            Err(EditError::NoSelection) => show_warning("No text selected to toggle case!"),
            Err(e) => {
                error!("Case toggle failed: {}", e);
                show_error(&format!("Could not change case: {}", e));
            }
        }
    }

    pub fn select_font(&mut self, font: FontFamily) {
        debug!("Font changed to {}", font.display_name());
        self.session.borrow_mut().set_font(font);
        self.settings.font = font;
        self.save_settings();
        self.apply_appearance();
    }

    pub fn toggle_theme(&mut self) {
        let is_dark = self.session.borrow_mut().toggle_dark_mode();
        self.settings.theme_mode = ThemeMode::from_dark(is_dark);
        self.save_settings();
        self.apply_appearance();
    }

    // --- Export ---

    pub fn export_docx(&mut self) {
        let base_name = self.widgets.toolbar.file_name_input.value();
        let text = buffer_text(&self.buffer);
        // Snapshot so no borrow is held while the save dialog runs.
        let (styles, font, rule) = {
            let session = self.session.borrow();
            (session.styles().clone(), session.font(), session.line_style_rule())
        };
        let request = ExportRequest {
            base_name: &base_name,
            text: &text,
            styles: &styles,
            font_name: font.display_name(),
            rule,
        };

        match export::export_docx(&request, native_save_docx_dialog) {
            Ok(ExportOutcome::Saved { path, .. }) => {
                self.widgets
                    .wind
                    .set_label(&format!("{} - {}", extract_filename(&path), WINDOW_TITLE));
                show_info("File saved successfully as DOCX!");
            }
            Ok(ExportOutcome::Cancelled) => {}
            Err(ExportError::MissingName) => show_warning(&ExportError::MissingName.to_string()),
            Err(e) => {
                error!("Export failed: {}", e);
                show_error(&format!("Could not save file: {}", e));
            }
        }
    }

    // --- Suggestions ---

    pub fn show_suggestion(&mut self) {
        let label = self.session.borrow().suggestion_label();
        self.widgets.suggestion_label.set_label(&label);
    }

    pub fn insert_suggestion(&mut self) {
        let insert = self.session.borrow().suggestion_insert();
        let pos = self.widgets.text_editor.insert_position();
        self.buffer.insert(pos, &insert);
        self.widgets.text_editor.set_insert_position(pos + insert.len() as i32);
        self.widgets.text_editor.show_insert_position();
    }

    pub fn log_last_words(&self) {
        if log_enabled!(Level::Debug) {
            let text = buffer_text(&self.buffer);
            debug!("Last {} words: {:?}", LOGGED_WORDS, last_words(&text, LOGGED_WORDS));
        }
    }

    pub fn close(&mut self) {
        info!("Closing {}", WINDOW_TITLE);
        self.save_settings();
        self.widgets.wind.hide();
    }
}
