pub mod buffer_text;
pub mod dialogs;
pub mod editor_surface;
pub mod file_dialogs;
pub mod fonts;
pub mod main_window;
pub mod menu;
pub mod prompts;
