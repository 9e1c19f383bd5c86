//! Text encodings at the engine's file boundaries.
//!
//! Hand-authored sheets are read with a configurable legacy encoding
//! (Shift_JIS unless overridden), with BOM sniffing so UTF-8 files written
//! by export stay readable. Generated source files are written as UTF-8
//! with a BOM; exported sheets as plain UTF-8.

use std::{fs, io, path::Path};

use encoding_rs::Encoding;

/// Byte order mark prefixed to generated source files.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read a whole file and decode it with `encoding`. A UTF-8 or UTF-16 BOM
/// overrides the requested encoding; malformed sequences decode to the
/// replacement character rather than failing.
pub fn read_text(path: &Path, encoding: &'static Encoding) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let (text, _, _) = encoding.decode(&bytes);
    Ok(text.into_owned())
}

/// Write UTF-8 text prefixed with a BOM.
pub fn write_with_bom(path: &Path, text: &str) -> io::Result<()> {
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + text.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(text.as_bytes());
    fs::write(path, bytes)
}
