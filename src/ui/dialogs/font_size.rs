use fltk::dialog;

/// Blocking prompt for a new font size. Returns the raw text typed, or
/// `None` when the prompt was cancelled.
pub fn prompt_font_size() -> Option<String> {
    dialog::input_default("Enter font size:", "")
}
