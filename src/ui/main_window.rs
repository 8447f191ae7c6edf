use fltk::{
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::settings::AppSettings;

pub const WINDOW_TITLE: &str = "Advanced Notepad";

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
}

pub fn build_main_window(settings: &AppSettings) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, w, h, WINDOW_TITLE);
    wind.set_xclass("AdvancedNotepad");

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        text_editor,
    }
}
