//! # Path Data
//!
//! Rescales SVG path data onto another grid without changing its meaning.
//!
//! ```text
//! "M12 6l2 2"
//!       ↓
//!   [tokenize]   — letters and numbers, separators dropped
//!       ↓
//!   [transform]  — per-parameter scale/offset, driven by [command]
//!       ↓
//!   [compact]    — shortest unambiguous string
//!       ↓
//! "M480-720l80 80"
//! ```
//!
//! Relative commands are scaled but never offset, arc rotation and flags are
//! left alone, and every coordinate comes out as a whole number.

pub mod command;
pub mod compact;
pub mod tokenize;
pub mod transform;

pub use compact::compact;
pub use tokenize::{tokenize, Token};
pub use transform::{Scaled, Transform};

/// Tokenize, remap and re-serialize one path `d` string.
pub fn transform_path(d: &str, transform: &Transform) -> String {
    compact(&transform.apply(tokenize(d)))
}
