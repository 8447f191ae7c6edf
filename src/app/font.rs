use serde::{Deserialize, Serialize};

use super::error::{AppError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl FontStyle {
    pub const PLAIN: FontStyle = FontStyle { bold: false, italic: false };
    pub const BOLD: FontStyle = FontStyle { bold: true, italic: false };
    pub const ITALIC: FontStyle = FontStyle { bold: false, italic: true };
    pub const BOLD_ITALIC: FontStyle = FontStyle { bold: true, italic: true };
}

/// The font applied to the whole text view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontState {
    #[serde(default = "default_family")]
    pub family: String,

    /// Point size, always positive.
    #[serde(default = "default_size")]
    pub size: i32,

    #[serde(default)]
    pub style: FontStyle,
}

fn default_family() -> String {
    "Courier".to_string()
}

fn default_size() -> i32 {
    12
}

impl Default for FontState {
    fn default() -> Self {
        Self {
            family: default_family(),
            size: default_size(),
            style: FontStyle::PLAIN,
        }
    }
}

impl FontState {
    /// Same size and style, different family.
    pub fn with_family(&self, family: &str) -> Self {
        Self {
            family: family.to_string(),
            ..self.clone()
        }
    }

    /// Same family and style, different size.
    pub fn with_size(&self, size: i32) -> Self {
        Self { size, ..self.clone() }
    }

    pub fn toggle_bold(&mut self) {
        self.style.bold = !self.style.bold;
    }

    pub fn toggle_italic(&mut self) {
        self.style.italic = !self.style.italic;
    }
}

/// Largest size the font size prompt accepts.
pub const MAX_FONT_SIZE: i32 = 512;

/// Parse the text typed into the font size prompt.
///
/// Blank input means "no change" and yields `Ok(None)`. Anything that is not
/// an integer in `1..=MAX_FONT_SIZE` is rejected.
pub fn parse_font_size(input: &str) -> Result<Option<i32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<i32>() {
        Ok(size) if (1..=MAX_FONT_SIZE).contains(&size) => Ok(Some(size)),
        _ => Err(AppError::InvalidFontSize(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font() {
        let font = FontState::default();
        assert_eq!(font.family, "Courier");
        assert_eq!(font.size, 12);
        assert_eq!(font.style, FontStyle::PLAIN);
    }

    #[test]
    fn test_toggle_bold_twice_restores() {
        let mut font = FontState::default();
        font.toggle_bold();
        assert_eq!(font.style, FontStyle::BOLD);
        font.toggle_bold();
        assert_eq!(font.style, FontStyle::PLAIN);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut font = FontState::default();
        font.toggle_italic();
        font.toggle_bold();
        assert_eq!(font.style, FontStyle::BOLD_ITALIC);
        font.toggle_bold();
        assert_eq!(font.style, FontStyle::ITALIC);
        font.toggle_italic();
        assert_eq!(font.style, FontStyle::PLAIN);
    }

    #[test]
    fn test_with_family_keeps_size_and_style() {
        let font = FontState {
            family: "Courier".to_string(),
            size: 20,
            style: FontStyle::BOLD,
        };
        let changed = font.with_family("Times");
        assert_eq!(changed.family, "Times");
        assert_eq!(changed.size, 20);
        assert_eq!(changed.style, FontStyle::BOLD);
    }

    #[test]
    fn test_with_size_keeps_family_and_style() {
        let font = FontState::default().with_family("Helvetica");
        let mut styled = font.clone();
        styled.toggle_italic();
        let changed = styled.with_size(18);
        assert_eq!(changed.family, "Helvetica");
        assert_eq!(changed.size, 18);
        assert_eq!(changed.style, FontStyle::ITALIC);
    }

    #[test]
    fn test_parse_font_size_valid() {
        assert_eq!(parse_font_size("18").unwrap(), Some(18));
        assert_eq!(parse_font_size("  9 ").unwrap(), Some(9));
        assert_eq!(parse_font_size("+14").unwrap(), Some(14));
        assert_eq!(parse_font_size("512").unwrap(), Some(MAX_FONT_SIZE));
    }

    #[test]
    fn test_parse_font_size_blank_is_no_change() {
        assert_eq!(parse_font_size("").unwrap(), None);
        assert_eq!(parse_font_size("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_font_size_rejects_garbage() {
        for bad in ["abc", "12pt", "1.5", "0", "-4", "513", "2147483647", "99999999999"] {
            let err = parse_font_size(bad).unwrap_err();
            assert!(matches!(err, AppError::InvalidFontSize(ref s) if s == bad), "{bad}");
        }
    }

    #[test]
    fn test_font_state_partial_json() {
        let font: FontState = serde_json::from_str(r#"{"size": 16}"#).unwrap();
        assert_eq!(font.family, "Courier");
        assert_eq!(font.size, 16);
        assert_eq!(font.style, FontStyle::PLAIN);
    }
}
