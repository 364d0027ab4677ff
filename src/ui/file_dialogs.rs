use std::path::PathBuf;

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

/// Ask for a `.docx` destination, pre-filled with `preset_name`.
/// Returns `None` when the dialog is cancelled.
pub fn native_save_docx_dialog(preset_name: &str) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title("Save as DOCX");
    nfc.set_filter("Word Files\t*.docx");
    nfc.set_preset_file(preset_name);
    nfc.set_option(FileDialogOptions::SaveAsConfirm);
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}
