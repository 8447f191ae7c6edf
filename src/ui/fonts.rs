use std::collections::HashSet;

use fltk::{app, enums::Font};

use crate::app::font::{FontState, FontStyle};

/// FLTK's font table always starts with its 16 built-in faces; anything
/// loaded from the system comes after them.
pub const BUILTIN_FACE_COUNT: usize = 16;

/// Built-in families usable for text, in the order the picker lists them.
pub const BUILTIN_FAMILIES: [&str; 4] = ["Courier", "Helvetica", "Times", "Screen"];

// FLTK marks system faces with a leading attribute character.
const STYLE_PREFIXES: [(char, FontStyle); 4] = [
    (' ', FontStyle::PLAIN),
    ('B', FontStyle::BOLD),
    ('I', FontStyle::ITALIC),
    ('P', FontStyle::BOLD_ITALIC),
];

const STYLE_SUFFIXES: [(&str, FontStyle); 3] = [
    (" Bold Italic", FontStyle::BOLD_ITALIC),
    (" Bold", FontStyle::BOLD),
    (" Italic", FontStyle::ITALIC),
];

/// Map a built-in family plus style to its FLTK face.
/// Screen has no italic face, so italic is ignored for it.
pub fn builtin_face(family: &str, style: FontStyle) -> Option<Font> {
    let FontStyle { bold, italic } = style;
    let face = match family.to_ascii_lowercase().as_str() {
        "courier" => match (bold, italic) {
            (false, false) => Font::Courier,
            (true, false) => Font::CourierBold,
            (false, true) => Font::CourierItalic,
            (true, true) => Font::CourierBoldItalic,
        },
        "helvetica" => match (bold, italic) {
            (false, false) => Font::Helvetica,
            (true, false) => Font::HelveticaBold,
            (false, true) => Font::HelveticaItalic,
            (true, true) => Font::HelveticaBoldItalic,
        },
        "times" => match (bold, italic) {
            (false, false) => Font::Times,
            (true, false) => Font::TimesBold,
            (false, true) => Font::TimesItalic,
            (true, true) => Font::TimesBoldItalic,
        },
        "screen" => {
            if bold {
                Font::ScreenBold
            } else {
                Font::Screen
            }
        }
        _ => return None,
    };
    Some(face)
}

fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(suffix.len())?;
    if split == 0 || !name.is_char_boundary(split) {
        return None;
    }
    let (base, tail) = name.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(base)
}

/// Family a raw FLTK face name belongs to.
fn family_of(raw: &str, names: &HashSet<&str>) -> String {
    if let Some(rest) = raw.strip_prefix(' ') {
        return rest.trim().to_string();
    }
    if let Some(rest) = raw.strip_prefix(['B', 'I', 'P']) {
        if names.contains(format!(" {rest}").as_str()) {
            return rest.to_string();
        }
    }
    for (suffix, _) in STYLE_SUFFIXES {
        if let Some(base) = strip_suffix_ignore_case(raw, suffix) {
            if names.contains(base) || names.contains(format!(" {base}").as_str()) {
                return base.to_string();
            }
        }
    }
    raw.trim().to_string()
}

/// Face names to try, most specific first, for a system family.
fn face_candidates(family: &str, style: FontStyle) -> Vec<String> {
    let mut out = Vec::new();
    if let Some((prefix, _)) = STYLE_PREFIXES.iter().find(|(_, s)| *s == style) {
        out.push(format!("{prefix}{family}"));
    }
    match STYLE_SUFFIXES.iter().find(|(_, s)| *s == style) {
        Some((suffix, _)) => out.push(format!("{family}{suffix}")),
        None => out.push(family.to_string()),
    }
    out
}

/// Font families available on this host, and how to turn a [`FontState`]
/// into a concrete FLTK face.
#[derive(Debug, Clone, Default)]
pub struct FontCatalog {
    face_names: Vec<String>,
    families: Vec<String>,
}

impl FontCatalog {
    /// Load the system fonts into FLTK's table and index them.
    /// Needs a running `app::App`.
    pub fn load() -> Self {
        let loaded = app::set_fonts("*");
        log::debug!("FLTK font table has {} faces", loaded);
        Self::from_face_names(app::get_font_names())
    }

    /// Build a catalog from FLTK's face table, built-in faces included.
    pub fn from_face_names(face_names: Vec<String>) -> Self {
        let system = face_names.get(BUILTIN_FACE_COUNT..).unwrap_or(&[]);
        let names: HashSet<&str> = system.iter().map(String::as_str).collect();

        let mut seen: HashSet<String> = BUILTIN_FAMILIES
            .iter()
            .map(|f| f.to_ascii_lowercase())
            .collect();
        let mut extra: Vec<String> = Vec::new();
        for raw in system {
            let family = family_of(raw, &names);
            if !family.is_empty() && seen.insert(family.to_ascii_lowercase()) {
                extra.push(family);
            }
        }
        extra.sort_by_key(|f| f.to_ascii_lowercase());

        let mut families: Vec<String> = BUILTIN_FAMILIES.iter().map(|f| f.to_string()).collect();
        families.extend(extra);

        Self {
            face_names,
            families,
        }
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// Index into FLTK's font table of the system face for `font`.
    /// Falls back to the upright face when the styled one is missing.
    pub fn face_index(&self, font: &FontState) -> Option<usize> {
        let lookup = |candidate: &str| {
            self.face_names
                .iter()
                .enumerate()
                .skip(BUILTIN_FACE_COUNT)
                .find(|(_, name)| name.as_str() == candidate)
                .or_else(|| {
                    self.face_names
                        .iter()
                        .enumerate()
                        .skip(BUILTIN_FACE_COUNT)
                        .find(|(_, name)| name.eq_ignore_ascii_case(candidate))
                })
                .map(|(idx, _)| idx)
        };

        face_candidates(&font.family, font.style)
            .iter()
            .chain(face_candidates(&font.family, FontStyle::PLAIN).iter())
            .find_map(|candidate| lookup(candidate.as_str()))
    }

    /// Resolve `font` to an FLTK face. Unknown families fall back to Courier.
    pub fn face(&self, font: &FontState) -> Font {
        if let Some(face) = builtin_face(&font.family, font.style) {
            return face;
        }
        match self.face_index(font) {
            Some(idx) => Font::by_index(idx),
            None => {
                log::warn!("Font family '{}' not found, using Courier", font.family);
                builtin_face("Courier", font.style).unwrap_or(Font::Courier)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(system: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = (0..BUILTIN_FACE_COUNT).map(|i| format!("builtin{i}")).collect();
        names.extend(system.iter().map(|s| s.to_string()));
        names
    }

    fn catalog() -> FontCatalog {
        FontCatalog::from_face_names(table(&[
            " DejaVu Sans",
            "BDejaVu Sans",
            "IDejaVu Sans",
            "PDejaVu Sans",
            "Bitstream Charter",
            "Bitstream Charter Bold",
            " Noto Serif",
            " courier",
        ]))
    }

    fn font(family: &str, style: FontStyle) -> FontState {
        FontState {
            family: family.to_string(),
            size: 12,
            style,
        }
    }

    #[test]
    fn test_builtin_faces() {
        assert_eq!(builtin_face("Courier", FontStyle::PLAIN), Some(Font::Courier));
        assert_eq!(builtin_face("courier", FontStyle::BOLD_ITALIC), Some(Font::CourierBoldItalic));
        assert_eq!(builtin_face("Helvetica", FontStyle::ITALIC), Some(Font::HelveticaItalic));
        assert_eq!(builtin_face("Times", FontStyle::BOLD), Some(Font::TimesBold));
        assert_eq!(builtin_face("Screen", FontStyle::ITALIC), Some(Font::Screen));
        assert_eq!(builtin_face("Screen", FontStyle::BOLD_ITALIC), Some(Font::ScreenBold));
        assert_eq!(builtin_face("Comic Sans", FontStyle::PLAIN), None);
    }

    #[test]
    fn test_families_builtin_first_then_sorted_system() {
        let cat = catalog();
        assert_eq!(
            cat.families(),
            &["Courier", "Helvetica", "Times", "Screen", "Bitstream Charter", "DejaVu Sans", "Noto Serif"]
        );
    }

    #[test]
    fn test_families_without_system_fonts() {
        let cat = FontCatalog::from_face_names(table(&[]));
        assert_eq!(cat.families(), &BUILTIN_FAMILIES);

        let empty = FontCatalog::from_face_names(Vec::new());
        assert_eq!(empty.families().len(), BUILTIN_FAMILIES.len());
    }

    #[test]
    fn test_face_index_prefixed_styles() {
        let cat = catalog();
        assert_eq!(cat.face_index(&font("DejaVu Sans", FontStyle::PLAIN)), Some(16));
        assert_eq!(cat.face_index(&font("DejaVu Sans", FontStyle::BOLD)), Some(17));
        assert_eq!(cat.face_index(&font("DejaVu Sans", FontStyle::ITALIC)), Some(18));
        assert_eq!(cat.face_index(&font("DejaVu Sans", FontStyle::BOLD_ITALIC)), Some(19));
    }

    #[test]
    fn test_face_index_suffixed_and_fallback() {
        let cat = catalog();
        assert_eq!(cat.face_index(&font("Bitstream Charter", FontStyle::BOLD)), Some(21));
        // no italic face: upright one is used
        assert_eq!(cat.face_index(&font("Bitstream Charter", FontStyle::ITALIC)), Some(20));
        assert_eq!(cat.face_index(&font("Noto Serif", FontStyle::BOLD)), Some(22));
        assert_eq!(cat.face_index(&font("Missing", FontStyle::PLAIN)), None);
    }

    #[test]
    fn test_face_prefers_builtin() {
        let cat = catalog();
        assert_eq!(cat.face(&font("Courier", FontStyle::BOLD)), Font::CourierBold);
        assert_eq!(cat.face(&font("Nowhere", FontStyle::ITALIC)), Font::CourierItalic);
    }

    #[test]
    fn test_strip_suffix_ignore_case() {
        assert_eq!(strip_suffix_ignore_case("Foo BOLD", " Bold"), Some("Foo"));
        assert_eq!(strip_suffix_ignore_case(" Bold", " Bold"), None);
        assert_eq!(strip_suffix_ignore_case("Foo", " Bold"), None);
    }
}
