use std::path::PathBuf;

use fltk::dialog;

use super::dialogs::font_picker::show_font_dialog;
use super::dialogs::font_size::prompt_font_size;
use super::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::app::state::Prompts;

/// The real FLTK dialogs.
pub struct FltkPrompts;

impl Prompts for FltkPrompts {
    fn open_path(&mut self) -> Option<PathBuf> {
        native_open_dialog()
    }

    fn save_path(&mut self) -> Option<PathBuf> {
        native_save_dialog()
    }

    fn font_family(&mut self, current: &str, families: &[String]) -> Option<String> {
        show_font_dialog(current, families)
    }

    fn font_size(&mut self) -> Option<String> {
        prompt_font_size()
    }

    fn alert(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}
