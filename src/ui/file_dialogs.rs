use std::path::PathBuf;

use fltk::dialog::{FileDialogType, NativeFileChooser};

fn run_native_chooser(kind: FileDialogType, title: &str) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() { None } else { Some(filename) }
}

/// Ask for a file to open. `None` when cancelled.
pub fn native_open_dialog() -> Option<PathBuf> {
    run_native_chooser(FileDialogType::BrowseFile, "Open")
}

/// Ask for a file to save to. `None` when cancelled. Existing files are
/// overwritten without asking.
pub fn native_save_dialog() -> Option<PathBuf> {
    run_native_chooser(FileDialogType::BrowseSaveFile, "Save")
}
