use std::path::PathBuf;

use super::editor::{Editor, TextSurface};
use super::messages::Message;

/// The modal dialogs the handlers need. Each call blocks until dismissed;
/// `None` means the dialog was cancelled.
pub trait Prompts {
    fn open_path(&mut self) -> Option<PathBuf>;
    fn save_path(&mut self) -> Option<PathBuf>;
    fn font_family(&mut self, current: &str, families: &[String]) -> Option<String>;
    fn font_size(&mut self) -> Option<String>;
    fn alert(&mut self, message: &str);
}

pub struct AppState<S: TextSurface, P: Prompts> {
    pub editor: Editor<S>,
    prompts: P,
    families: Vec<String>,
}

impl<S: TextSurface, P: Prompts> AppState<S, P> {
    pub fn new(editor: Editor<S>, prompts: P, families: Vec<String>) -> Self {
        Self {
            editor,
            prompts,
            families,
        }
    }

    /// Run the handler for one message. Returns false once the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::FileOpen => self.file_open(),
            Message::FileSave => self.file_save(),
            Message::FileQuit | Message::WindowClose => {
                log::info!("Exiting ({:?})", msg);
                return false;
            }
            Message::SelectFont => self.select_font(),
            Message::SelectFontSize => self.select_font_size(),
            Message::ToggleBold => self.editor.toggle_bold(),
            Message::ToggleItalic => self.editor.toggle_italic(),
        }
        true
    }

    pub fn file_open(&mut self) {
        let Some(path) = self.prompts.open_path() else {
            return;
        };
        if let Err(e) = self.editor.open(&path) {
            log::error!("Failed to open {}: {}", path.display(), e);
            self.prompts.alert(&format!("Error opening file: {}", e));
        }
    }

    pub fn file_save(&mut self) {
        let Some(path) = self.prompts.save_path() else {
            return;
        };
        if let Err(e) = self.editor.save(&path) {
            log::error!("Failed to save {}: {}", path.display(), e);
            self.prompts.alert(&format!("Error saving file: {}", e));
        }
    }

    pub fn select_font(&mut self) {
        let picked = self
            .prompts
            .font_family(&self.editor.font().family, &self.families);
        self.editor.select_family(picked.as_deref());
    }

    pub fn select_font_size(&mut self) {
        let input = self.prompts.font_size();
        if let Err(e) = self.editor.set_font_size_input(input.as_deref()) {
            log::warn!("{}", e);
            self.prompts
                .alert("Please enter a positive whole number for the font size");
        }
    }
}
