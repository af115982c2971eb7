//! Line counting for classified files.
//!
//! A file is read whole and decoded with the configured encoding, then the
//! text is split into lines the way a text-mode line reader does: `\n`,
//! `\r\n` and a lone `\r` each end a line, and a trailing fragment without a
//! terminator is a line of its own.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use encoding_rs::{Encoding, REPLACEMENT, UTF_16BE, UTF_16LE, UTF_8};

use crate::error::SpelunkError;

/// Text encoding used to read files.
///
/// `Ascii` and `Latin1` keep their strict ISO meaning (WHATWG folds both into
/// windows-1252). Any other name resolves through the WHATWG label registry,
/// which covers the UTF-16 variants and the Windows and ISO code pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
    Labeled(&'static Encoding),
}

impl TextEncoding {
    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Ascii => "ascii",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Labeled(encoding) => encoding.name(),
        }
    }

    /// Decode `bytes`, or `None` if they are not valid text in this encoding.
    ///
    /// For the UTF-16 encodings a leading byte order mark picks the byte
    /// order and is dropped.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            TextEncoding::Ascii if bytes.is_ascii() => {
                std::str::from_utf8(bytes).ok().map(Cow::Borrowed)
            }
            TextEncoding::Ascii => None,
            // Every byte is the code point of the same value
            TextEncoding::Latin1 => {
                Some(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()))
            }
            TextEncoding::Labeled(encoding) => {
                let (encoding, bytes) = match Encoding::for_bom(bytes) {
                    Some((bom, len)) if is_utf16(encoding) && is_utf16(bom) => {
                        (bom, &bytes[len..])
                    }
                    _ => (*encoding, bytes),
                };
                encoding.decode_without_bom_handling_and_without_replacement(bytes)
            }
        }
    }

    /// Whether `bytes` is valid text in this encoding.
    pub fn decodes(&self, bytes: &[u8]) -> bool {
        self.decode(bytes).is_some()
    }
}

fn is_utf16(encoding: &Encoding) -> bool {
    encoding == UTF_16LE || encoding == UTF_16BE
}

impl FromStr for TextEncoding {
    type Err = SpelunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" | "utf-8-sig" | "utf8-sig" => return Ok(TextEncoding::Utf8),
            "ascii" | "us-ascii" => return Ok(TextEncoding::Ascii),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => return Ok(TextEncoding::Latin1),
            _ => {}
        }

        match Encoding::for_label(s.trim().as_bytes()) {
            Some(encoding) if encoding == UTF_8 => Ok(TextEncoding::Utf8),
            // Labels of encodings that can never decode anything
            Some(encoding) if encoding == REPLACEMENT => {
                Err(SpelunkError::UnsupportedEncoding(s.to_string()))
            }
            Some(encoding) => Ok(TextEncoding::Labeled(encoding)),
            None => Err(SpelunkError::UnsupportedEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Count the lines of a file read as `encoding`.
///
/// Fails if the file cannot be read, or with [`io::ErrorKind::InvalidData`]
/// if its content is not valid in `encoding`.
///
/// # Example
///
/// ```rust
/// use spelunklib::{count_lines, TextEncoding};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("main.c");
/// fs::write(&path, "int main(void)\n{\n  return 0;\n}").unwrap();
///
/// assert_eq!(count_lines(&path, TextEncoding::Utf8).unwrap(), 4);
/// ```
pub fn count_lines(path: impl AsRef<Path>, encoding: TextEncoding) -> io::Result<u64> {
    let bytes = fs::read(path)?;
    let text = encoding.decode(&bytes).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("content is not valid {encoding}"),
        )
    })?;
    Ok(count_lines_in(&text))
}

/// Count lines in decoded text.
pub fn count_lines_in(text: &str) -> u64 {
    let mut lines = 0;
    let mut iter = text.chars().peekable();
    let mut terminated = true;

    while let Some(c) = iter.next() {
        match c {
            '\n' => {
                lines += 1;
                terminated = true;
            }
            '\r' => {
                lines += 1;
                terminated = true;
                iter.next_if_eq(&'\n');
            }
            _ => terminated = false,
        }
    }

    if !terminated {
        lines += 1;
    }
    lines
}
