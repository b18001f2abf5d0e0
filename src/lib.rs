//! # svg2symbol
//!
//! Normalizes an SVG icon exported from a design tool into the symbol
//! format used by Material-style icon sets: one merged `<path>`, coordinates
//! on a 960-unit grid, a `0 -960 960 960` viewBox, and fixed root attributes.
//!
//! ## Architecture
//!
//! ```text
//! Source SVG text
//!       ↓
//!   [document]  — viewBox width, every <path d>, evenodd detection
//!       ↓
//!   [path]      — tokenize → transform (scale, Y offset) → compact
//!       ↓
//!   [document]  — wrap in the fixed single-path root
//! ```
//!
//! Path data is merged textually, not geometrically: the `d` strings are
//! concatenated in document order before they are transformed.

pub mod document;
pub mod error;
pub mod options;
pub mod path;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub use error::ConvertError;
pub use options::ConvertOptions;

/// Convert SVG text with the default options.
///
/// This is the primary entry point.
pub fn convert(svg: &str) -> Result<String, ConvertError> {
    convert_with_options(svg, &ConvertOptions::default())
}

/// Convert SVG text with explicit options.
pub fn convert_with_options(svg: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    options.validate()?;
    document::convert(svg, options)
}

/// Read a source document. A path of `-` reads stdin.
pub fn read_source(input: &Path) -> Result<String, ConvertError> {
    if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| ConvertError::io("<stdin>", e))?;
        Ok(buf)
    } else {
        fs::read_to_string(input).map_err(|e| ConvertError::io(input, e))
    }
}

/// Convert `input` and, when given, write the result to `output`.
///
/// Returns the converted document either way. Nothing is written unless the
/// conversion succeeds.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    let svg = read_source(input)?;
    let document = convert_with_options(&svg, options)?;
    if let Some(output) = output {
        fs::write(output, &document).map_err(|e| ConvertError::io(output, e))?;
    }
    Ok(document)
}
