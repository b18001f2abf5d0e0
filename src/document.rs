//! # Document Assembler
//!
//! Pulls the source grid width and every path `d` string out of an exported
//! icon, runs the merged path through [`crate::path`], and wraps the result
//! in a fixed single-path root element.
//!
//! This is not a general SVG reader. Transforms, groups and styles are
//! ignored; `<path>` elements are gathered wherever they appear.

use log::{debug, warn};
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::path::{self, Transform};

/// What the assembler needs from a source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceDocument {
    /// Width from the first usable `viewBox`, if any.
    pub view_box_width: Option<f64>,
    /// Raw `d` values of every `<path>`, in document order.
    pub paths: Vec<String>,
    /// Whether the text mentions `evenodd` anywhere.
    pub even_odd: bool,
}

impl SourceDocument {
    /// Scan SVG text. Never fails: an XML error ends the scan early.
    pub fn parse(content: &str) -> SourceDocument {
        let mut view_box_width = None;
        let mut view_box_seen = false;
        let mut paths = Vec::new();

        let mut reader = Reader::from_str(content);
        // Stray end tags must not hide later paths.
        reader.config_mut().check_end_names = false;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    if !view_box_seen {
                        if let Some(vb) = get_attr(e, "viewBox") {
                            view_box_seen = true;
                            view_box_width = parse_view_box_width(&vb);
                            if view_box_width.is_none() {
                                warn!("ignoring unusable viewBox \"{}\"", vb);
                            }
                        }
                    }
                    if e.name().as_ref() == b"path" {
                        if let Some(d) = get_attr(e, "d") {
                            paths.push(d);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(err) => {
                    warn!(
                        "stopped reading source at byte {}: {}",
                        reader.buffer_position(),
                        err
                    );
                    break;
                }
                _ => {}
            }
            buf.clear();
        }

        SourceDocument {
            view_box_width,
            paths,
            even_odd: content.contains("evenodd"),
        }
    }

    /// All path data joined back to back, with no separator.
    pub fn merged_path(&self) -> String {
        self.paths.concat()
    }

    pub fn source_width(&self, options: &ConvertOptions) -> f64 {
        self.view_box_width.unwrap_or(options.default_source_width)
    }
}

/// Width (third field) of a viewBox value like "0 0 24 24" or "0,0,24,24".
///
/// Zero, negative or non-numeric widths are rejected.
pub fn parse_view_box_width(s: &str) -> Option<f64> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .nth(2)
        .and_then(|p| p.parse::<f64>().ok())
        .filter(|w| w.is_finite() && *w > 0.0)
}

/// Convert a source document into the single-path symbol format.
pub fn convert(content: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let source = SourceDocument::parse(content);
    if source.paths.is_empty() {
        return Err(ConvertError::NoPathFound);
    }

    let width = source.source_width(options);
    let transform = Transform::new(options.grid_size / width, options.y_offset);
    debug!(
        "source width {} -> scale {}, merging {} path(s)",
        width,
        transform.scale,
        source.paths.len()
    );

    let data = path::transform_path(&source.merged_path(), &transform);
    Ok(render(&data, source.even_odd, options))
}

/// Build the output document around already transformed path data.
pub fn render(path_data: &str, even_odd: bool, options: &ConvertOptions) -> String {
    let fill_rule = if even_odd { r#" fill-rule="evenodd""# } else { "" };
    let size = escape(options.size.as_str());
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"{size}\" \
         viewBox=\"0 {min_y} {grid} {grid}\" width=\"{size}\" fill=\"{fill}\">\
         <path{fill_rule} d=\"{path_data}\"/></svg>\n",
        min_y = options.y_offset,
        grid = options.grid_size,
        fill = escape(options.fill.as_str()),
    )
}

/// Helper to get an attribute value from a quick-xml BytesStart.
fn get_attr(e: &BytesStart, name: &str) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == name.as_bytes() {
            return String::from_utf8(attr.value.to_vec()).ok();
        }
    }
    None
}
