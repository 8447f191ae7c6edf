use fltk::{
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use super::buffer_text::buffer_text_no_leak;
use super::fonts::FontCatalog;
use crate::app::editor::TextSurface;
use crate::app::font::FontState;

/// The scrollable text view: an FLTK `TextEditor` and the buffer it shows.
pub struct EditorSurface {
    editor: TextEditor,
    buffer: TextBuffer,
    catalog: FontCatalog,
}

impl EditorSurface {
    pub fn new(mut editor: TextEditor, catalog: FontCatalog) -> Self {
        let buffer = match editor.buffer() {
            Some(buffer) => buffer,
            None => {
                let buffer = TextBuffer::default();
                editor.set_buffer(buffer.clone());
                buffer
            }
        };
        Self {
            editor,
            buffer,
            catalog,
        }
    }
}

impl TextSurface for EditorSurface {
    fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    fn apply_font(&mut self, font: &FontState) {
        let face = self.catalog.face(font);
        self.editor.set_text_font(face);
        self.editor.set_text_size(font.size);
        self.editor.redraw();
    }
}
