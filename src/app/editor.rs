use std::path::Path;

use super::document::{line_count, read_document, write_document};
use super::error::Result;
use super::font::{parse_font_size, FontState};

/// The editable view as seen by the editor: whole-text access plus font.
pub trait TextSurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn apply_font(&mut self, font: &FontState);
}

/// Document and font operations behind the menu commands.
///
/// Dialogs are not shown here; callers pass in what the user picked, with
/// `None` standing for a cancelled dialog.
pub struct Editor<S: TextSurface> {
    surface: S,
    font: FontState,
}

impl<S: TextSurface> Editor<S> {
    pub fn new(mut surface: S, font: FontState) -> Self {
        surface.apply_font(&font);
        Self { surface, font }
    }

    pub fn font(&self) -> &FontState {
        &self.font
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Replace the document with the contents of `path`.
    /// Returns the number of lines loaded.
    pub fn open(&mut self, path: &Path) -> Result<usize> {
        let text = read_document(path)?;
        self.surface.set_text(&text);
        let lines = line_count(&text);
        log::info!("Opened {} ({} lines)", path.display(), lines);
        Ok(lines)
    }

    /// Write the document to `path`. Returns the number of bytes written.
    pub fn save(&self, path: &Path) -> Result<usize> {
        let text = self.surface.text();
        write_document(path, &text)?;
        log::info!("Saved {} ({} bytes)", path.display(), text.len());
        Ok(text.len())
    }

    /// Apply the family chosen in the font picker. `None` leaves everything as is.
    pub fn select_family(&mut self, family: Option<&str>) {
        if let Some(family) = family {
            let font = self.font.with_family(family);
            self.set_font(font);
        }
    }

    /// Apply the text typed into the font size prompt.
    ///
    /// `None` (cancelled) and blank input change nothing. Invalid input is
    /// returned as an error and the font is left alone.
    pub fn set_font_size_input(&mut self, input: Option<&str>) -> Result<()> {
        let Some(input) = input else {
            return Ok(());
        };
        if let Some(size) = parse_font_size(input)? {
            let font = self.font.with_size(size);
            self.set_font(font);
        }
        Ok(())
    }

    pub fn toggle_bold(&mut self) {
        let mut font = self.font.clone();
        font.toggle_bold();
        self.set_font(font);
    }

    pub fn toggle_italic(&mut self) {
        let mut font = self.font.clone();
        font.toggle_italic();
        self.set_font(font);
    }

    /// Replace the whole font and re-apply it to the view.
    pub fn set_font(&mut self, font: FontState) {
        log::debug!("Font changed: {:?} -> {:?}", self.font, font);
        self.font = font;
        self.surface.apply_font(&self.font);
    }
}
