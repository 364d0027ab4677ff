//! Blocking notification dialogs.

use fltk::dialog;

pub fn show_info(message: &str) {
    dialog::message_title("Success");
    dialog::message_default(message);
}

pub fn show_warning(message: &str) {
    dialog::message_title("Warning");
    dialog::alert_default(message);
}

pub fn show_error(message: &str) {
    dialog::message_title("Error");
    dialog::alert_default(message);
}
