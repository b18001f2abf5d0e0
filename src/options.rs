//! # Conversion Options
//!
//! Everything that shapes the output document. The defaults produce the
//! 24px, 960-unit, negative-origin symbol format; an options file only needs
//! the fields it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Side of the target grid. Source coordinates are scaled by
    /// `grid_size / source width`.
    pub grid_size: f64,

    /// Added to every absolute Y coordinate after scaling. Also the
    /// min-y of the emitted viewBox.
    pub y_offset: f64,

    /// Source width assumed when the document has no usable viewBox.
    pub default_source_width: f64,

    /// Rendered `width` and `height` of the output root element.
    pub size: String,

    /// Root `fill` color.
    pub fill: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            grid_size: 960.0,
            y_offset: -960.0,
            default_source_width: 24.0,
            size: "24px".to_string(),
            fill: "#1f1f1f".to_string(),
        }
    }
}

impl ConvertOptions {
    /// Parse and validate an options document.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        let options: ConvertOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let json = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConvertError> {
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            return Err(ConvertError::InvalidOptions(format!(
                "gridSize must be a positive number, got {}",
                self.grid_size
            )));
        }
        if !(self.default_source_width.is_finite() && self.default_source_width > 0.0) {
            return Err(ConvertError::InvalidOptions(format!(
                "defaultSourceWidth must be a positive number, got {}",
                self.default_source_width
            )));
        }
        if !self.y_offset.is_finite() {
            return Err(ConvertError::InvalidOptions(format!(
                "yOffset must be finite, got {}",
                self.y_offset
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert_eq!(options.grid_size, 960.0);
        assert_eq!(options.y_offset, -960.0);
        assert_eq!(options.default_source_width, 24.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = ConvertOptions::from_json(r##"{ "fill": "#000000", "gridSize": 480 }"##).unwrap();
        assert_eq!(options.fill, "#000000");
        assert_eq!(options.grid_size, 480.0);
        assert_eq!(options.y_offset, -960.0);
        assert_eq!(options.size, "24px");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ConvertOptions::from_json(r#"{ "scale": 2 }"#).unwrap_err();
        assert!(matches!(err, ConvertError::Options { .. }));
    }

    #[test]
    fn test_zero_grid_rejected() {
        let err = ConvertOptions::from_json(r#"{ "gridSize": 0 }"#).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidOptions(_)));
    }

    #[test]
    fn test_negative_default_width_rejected() {
        let err = ConvertOptions::from_json(r#"{ "defaultSourceWidth": -24 }"#).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidOptions(_)));
    }
}
