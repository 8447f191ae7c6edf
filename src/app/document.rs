use std::fs;
use std::path::Path;

use super::error::Result;

/// Rebuild `raw` as a sequence of lines, each terminated by a single `\n`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. The last line gets a newline
/// even when the source had none; an empty input has no lines at all.
pub fn normalize_lines(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 1);
    let mut rest = raw;

    while !rest.is_empty() {
        let end = rest.find(['\n', '\r']).unwrap_or(rest.len());
        out.push_str(&rest[..end]);
        out.push('\n');

        rest = &rest[end..];
        if rest.starts_with("\r\n") {
            rest = &rest[2..];
        } else if !rest.is_empty() {
            rest = &rest[1..];
        }
    }

    out
}

/// Number of `\n`-terminated lines in normalized text.
pub fn line_count(text: &str) -> usize {
    text.matches('\n').count()
}

/// Read a file for display.
///
/// The whole file is read before anything is returned, so a failure never
/// yields partial content. Invalid UTF-8 is replaced rather than rejected.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let raw = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            log::warn!(
                "{} is not valid UTF-8, undecodable bytes were replaced",
                path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(normalize_lines(&raw))
}

/// Write the document text verbatim, replacing whatever is at `path`.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}
