use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;

/// One menu item and the command it sends.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub path: &'static str,
    pub shortcut: Shortcut,
    pub message: Message,
    /// Draw a separator below this item.
    pub divider_after: bool,
}

fn item(path: &'static str, shortcut: Shortcut, message: Message) -> MenuEntry {
    MenuEntry { path, shortcut, message, divider_after: false }
}

fn item_then_divider(path: &'static str, shortcut: Shortcut, message: Message) -> MenuEntry {
    MenuEntry { path, shortcut, message, divider_after: true }
}

/// The command table behind the menu bar, in display order.
pub fn menu_entries() -> Vec<MenuEntry> {
    vec![
        // File
        item("File/Open...", Shortcut::Ctrl | 'o', Message::FileOpen),
        item_then_divider("File/Save...", Shortcut::Ctrl | 's', Message::FileSave),
        item("File/Exit", Shortcut::Ctrl | 'q', Message::FileQuit),

        // Format
        item("Format/Font...", Shortcut::None, Message::SelectFont),
        item_then_divider("Format/Font Size...", Shortcut::None, Message::SelectFontSize),
        item("Format/Bold", Shortcut::Ctrl | 'b', Message::ToggleBold),
        item("Format/Italic", Shortcut::Ctrl | 'i', Message::ToggleItalic),
    ]
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    for entry in menu_entries() {
        let flag = if entry.divider_after { MenuFlag::MenuDivider } else { MenuFlag::Normal };
        let s = *sender;
        let message = entry.message;
        menu.add(entry.path, entry.shortcut, flag, move |_| s.send(message));
    }
}
