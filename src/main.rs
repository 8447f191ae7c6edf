use fltk::{app, enums::Event, prelude::*};

use advanced_notepad::app::editor::Editor;
use advanced_notepad::app::logging::init_logging;
use advanced_notepad::app::messages::Message;
use advanced_notepad::app::settings::AppSettings;
use advanced_notepad::app::state::AppState;
use advanced_notepad::ui::editor_surface::EditorSurface;
use advanced_notepad::ui::fonts::FontCatalog;
use advanced_notepad::ui::main_window::build_main_window;
use advanced_notepad::ui::menu::build_menu;
use advanced_notepad::ui::prompts::FltkPrompts;

fn main() {
    // Start at the default level so problems loading settings are visible
    let logger = match init_logging("info") {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Failed to start logging: {}", e);
            None
        }
    };

    let settings = AppSettings::load();
    if let Some(handle) = &logger {
        if let Err(e) = handle.parse_new_spec(&settings.log_level) {
            log::warn!("Invalid log level '{}': {}", settings.log_level, e);
        }
    }

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&settings);
    build_menu(&mut widgets.menu, &sender);

    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    let catalog = FontCatalog::load();
    let families = catalog.families().to_vec();
    let surface = EditorSurface::new(widgets.text_editor.clone(), catalog);
    let editor = Editor::new(surface, settings.font.clone());
    let mut state = AppState::new(editor, FltkPrompts, families);

    widgets.wind.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.handle(msg) {
                break;
            }
        }
    }
}
