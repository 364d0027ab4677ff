use fltk::app;
use log::info;

use quillpad::app::state::AppState;
use quillpad::app::{AppSettings, Message};
use quillpad::ui::main_window::build_main_window;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting Quillpad {}", env!("CARGO_PKG_VERSION"));

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let widgets = build_main_window(&settings, &sender);
    let mut state = AppState::new(widgets, settings);
    state.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::ToggleStyle(tag) => state.toggle_style(tag),
                Message::ToggleCase => state.toggle_case(),
                Message::SelectFont(font) => state.select_font(font),
                Message::ToggleTheme => state.toggle_theme(),
                Message::ExportDocx => state.export_docx(),
                Message::InsertSuggestion => state.insert_suggestion(),
                Message::ShowSuggestion => state.show_suggestion(),
                Message::KeyReleased => state.log_last_words(),
                Message::WindowClose => {
                    state.close();
                    app.quit();
                }
            }
        }
    }
}
